use iced::{
    widget::{button, column, container, pick_list, row, scrollable, text, text_input},
    Alignment, Element, Length, Task,
};

use crate::{
    api::clients::{CompletionError, OllamaClient},
    conversation::Conversation,
    ui::chat::{complete_message, load_models, ChatAction, DisplayLine},
};

pub const NO_MODELS_NOTICE: &str = "No models found. Ensure Ollama is running.";

#[derive(Debug, Default, Clone)]
pub struct State {
    client: OllamaClient,
    conversation: Conversation,
    lines: Vec<DisplayLine>,
    input_value: String,
    selected_model: Option<String>,
    available_models: Vec<String>,
}

impl State {
    pub fn new(client: OllamaClient) -> (Self, Task<ChatAction>) {
        let state = State {
            client: client.clone(),
            ..Default::default()
        };
        let task = Task::perform(load_models(client), ChatAction::ModelsLoaded);
        (state, task)
    }

    pub fn update(&mut self, action: ChatAction) -> Task<ChatAction> {
        match action {
            ChatAction::InputChanged(value) => self.on_input_changed(value),
            ChatAction::SendMessage => self.on_send_message(),
            ChatAction::ResponseReceived(outcome) => self.on_response_received(outcome),
            ChatAction::ModelSelected(model_name) => self.on_model_selected(model_name),
            ChatAction::ModelsLoaded(models) => self.on_models_loaded(models),
        }
    }

    #[cfg(test)]
    pub fn lines(&self) -> &[DisplayLine] {
        &self.lines
    }

    fn display(&mut self, line: DisplayLine) {
        self.lines.push(line);
    }

    fn on_input_changed(&mut self, value: String) -> Task<ChatAction> {
        self.input_value = value;
        Task::none()
    }

    fn on_send_message(&mut self) -> Task<ChatAction> {
        let request = match self
            .conversation
            .begin_turn(self.selected_model.as_deref(), &self.input_value)
        {
            Ok(request) => request,
            Err(rejected) => {
                if let Some(notice) = rejected.notice() {
                    self.display(notice);
                }
                return Task::none();
            }
        };

        if let Some(pending) = self.conversation.pending() {
            let echo = DisplayLine::user(format!("You: {}", pending.content()));
            self.display(echo);
        }
        self.input_value.clear();
        Task::perform(
            complete_message(self.client.clone(), request),
            ChatAction::ResponseReceived,
        )
    }

    fn on_response_received(&mut self, outcome: Result<String, CompletionError>) -> Task<ChatAction> {
        let line = self.conversation.finish_turn(outcome);
        self.display(line);
        Task::none()
    }

    fn on_model_selected(&mut self, model_name: String) -> Task<ChatAction> {
        log::info!("Model selected: {}", model_name);
        self.selected_model = Some(model_name);
        Task::none()
    }

    fn on_models_loaded(&mut self, models: Result<Vec<String>, String>) -> Task<ChatAction> {
        match models {
            Ok(models) if models.is_empty() => {
                self.display(DisplayLine::info(NO_MODELS_NOTICE));
            }
            Ok(models) => {
                self.available_models = models;
                if self.selected_model.is_none() {
                    self.selected_model = self.available_models.first().cloned();
                }
            }
            Err(err) => {
                log::error!("Failed to load models: {}", err);
                self.display(DisplayLine::info(format!("Error fetching models: {}", err)));
            }
        }
        Task::none()
    }

    pub fn view(&self) -> Element<'_, ChatAction> {
        let chat_window = column![
            self.build_model_picker(),
            self.build_message_list(),
            self.build_input_area(),
        ]
        .spacing(10)
        .padding(10);

        container(chat_window)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn build_model_picker(&self) -> Element<'_, ChatAction> {
        row![
            text("Select Model:"),
            pick_list(
                self.available_models.clone(),
                self.selected_model.as_ref(),
                ChatAction::ModelSelected
            )
            .width(Length::Fill),
        ]
        .spacing(10)
        .align_y(Alignment::Center)
        .into()
    }

    fn build_message_list(&self) -> Element<'_, ChatAction> {
        let rows: Vec<Element<ChatAction>> = self.lines.iter().map(Self::build_line).collect();

        scrollable(
            container(column(rows).spacing(5).padding(10))
                .width(Length::Fill)
                .padding(10),
        )
        .anchor_bottom()
        .height(Length::Fill)
        .into()
    }

    fn build_line(line: &DisplayLine) -> Element<'_, ChatAction> {
        let content = text(line.text.as_str());
        match line.tag.color() {
            Some(color) => content.color(color).into(),
            None => content.into(),
        }
    }

    fn build_input_area(&self) -> Element<'_, ChatAction> {
        let awaiting_response = self.conversation.is_awaiting_reply();
        row![
            text_input("Type a message...", &self.input_value)
                .on_input_maybe(if awaiting_response {
                    None
                } else {
                    Some(ChatAction::InputChanged)
                })
                .on_submit(ChatAction::SendMessage)
                .width(Length::FillPortion(8)),
            button("Send")
                .on_press_maybe(if awaiting_response {
                    None
                } else {
                    Some(ChatAction::SendMessage)
                })
                .width(Length::FillPortion(1)),
        ]
        .spacing(10)
        .align_y(Alignment::Center)
        .into()
    }
}
