use iced::{Element, Task};

use crate::{api::clients::OllamaClient, config::Config};

pub mod chat;

pub fn init() -> (OllamaChat, Task<Message>) {
    OllamaChat::new(Config::default())
}

#[derive(Debug)]
pub struct OllamaChat {
    config: Config,
    chat: chat::State,
}

impl OllamaChat {
    pub fn new(config: Config) -> (Self, Task<Message>) {
        let client = OllamaClient::new(config.ollama.clone());
        let (chat_state, chat_task) = chat::State::new(client);
        let state = Self {
            config,
            chat: chat_state,
        };
        let task = chat_task.map(Message::Chat);
        (state, task)
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Chat(chat::ChatAction),
}

pub fn title(state: &OllamaChat) -> String {
    state.config.window.title.clone()
}

pub fn update(state: &mut OllamaChat, action: Message) -> Task<Message> {
    match action {
        Message::Chat(chat_action) => {
            let task = state.chat.update(chat_action);
            task.map(Message::Chat)
        }
    }
}

pub fn view(state: &OllamaChat) -> Element<'_, Message> {
    state.chat.view().map(Message::Chat)
}
