//! Conversation state for a single chat session.
//!
//! History only grows on a successful round-trip, two messages at a time.
//! The user message of an in-flight turn is held in `pending` until the
//! outcome arrives, so a failed request never leaks into the context that is
//! replayed on the next send.

use crate::{
    api::clients::CompletionError,
    models::{ChatRequest, Message},
    ui::chat::DisplayLine,
};

pub const NO_MODEL_NOTICE: &str = "Please select a model first.";

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SendRejected {
    EmptyInput,
    NoModelSelected,
    /// A previous turn has not come back yet.
    Busy,
}

impl SendRejected {
    /// The line to show the user, if the rejection is worth showing.
    pub fn notice(&self) -> Option<DisplayLine> {
        match self {
            SendRejected::NoModelSelected => Some(DisplayLine::info(NO_MODEL_NOTICE)),
            SendRejected::EmptyInput | SendRejected::Busy => None,
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct Conversation {
    history: Vec<Message>,
    pending: Option<Message>,
}

impl Conversation {
    #[cfg(test)]
    pub fn history(&self) -> &[Message] {
        &self.history
    }

    pub fn pending(&self) -> Option<&Message> {
        self.pending.as_ref()
    }

    pub fn is_awaiting_reply(&self) -> bool {
        self.pending.is_some()
    }

    /// Validates a send and builds the request for it.
    ///
    /// On success the trimmed user message becomes the pending turn and the
    /// returned request carries the full history followed by that message.
    pub fn begin_turn(
        &mut self,
        model: Option<&str>,
        text: &str,
    ) -> Result<ChatRequest, SendRejected> {
        let text = text.trim();
        if text.is_empty() {
            return Err(SendRejected::EmptyInput);
        }
        let model = match model {
            Some(model) if !model.is_empty() => model,
            _ => return Err(SendRejected::NoModelSelected),
        };
        if self.pending.is_some() {
            log::warn!("Conversation: send rejected, a reply is still pending");
            return Err(SendRejected::Busy);
        }

        let user_message = Message::user(text);
        let mut messages = self.history.clone();
        messages.push(user_message.clone());
        self.pending = Some(user_message);
        Ok(ChatRequest::new(model, messages))
    }

    /// Settles the pending turn and returns the line to display for it.
    pub fn finish_turn(&mut self, outcome: Result<String, CompletionError>) -> DisplayLine {
        let pending = self.pending.take();
        match outcome {
            Ok(reply) => {
                let line = DisplayLine::ai(format!("AI: {}", reply));
                match pending {
                    Some(user_message) => {
                        self.history.push(user_message);
                        self.history.push(Message::assistant(reply));
                    }
                    None => log::warn!("Conversation: reply arrived with no pending turn"),
                }
                line
            }
            Err(CompletionError::Status(body)) => {
                log::error!("Conversation: chat request failed: {}", body);
                DisplayLine::error(format!("Error: {}", body))
            }
            Err(CompletionError::Transport(err)) => {
                log::error!("Conversation: generation error: {}", err);
                DisplayLine::error(format!("Generation error: {}", err))
            }
        }
    }
}
