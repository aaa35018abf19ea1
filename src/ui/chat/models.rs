use iced::Color;

use crate::api::clients::CompletionError;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Tag {
    User,
    Ai,
    Error,
    None,
}

impl Tag {
    pub fn color(&self) -> Option<Color> {
        match self {
            Tag::User => Some(Color::from_rgb(0.0, 0.0, 1.0)),
            Tag::Ai => Some(Color::from_rgb(0.0, 0.5, 0.0)),
            Tag::Error => Some(Color::from_rgb(1.0, 0.0, 0.0)),
            Tag::None => None,
        }
    }
}

/// One rendered line of the chat log.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct DisplayLine {
    pub text: String,
    pub tag: Tag,
}

impl DisplayLine {
    pub fn new(text: impl ToString, tag: Tag) -> Self {
        Self {
            text: text.to_string(),
            tag,
        }
    }

    pub fn user(text: impl ToString) -> Self {
        Self::new(text, Tag::User)
    }

    pub fn ai(text: impl ToString) -> Self {
        Self::new(text, Tag::Ai)
    }

    pub fn error(text: impl ToString) -> Self {
        Self::new(text, Tag::Error)
    }

    pub fn info(text: impl ToString) -> Self {
        Self::new(text, Tag::None)
    }
}

#[derive(Debug, Clone)]
pub enum ChatAction {
    InputChanged(String),
    SendMessage,
    ResponseReceived(Result<String, CompletionError>),
    ModelSelected(String),
    ModelsLoaded(Result<Vec<String>, String>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_colors() {
        assert_eq!(Tag::User.color(), Some(Color::from_rgb(0.0, 0.0, 1.0)));
        assert_eq!(Tag::Error.color(), Some(Color::from_rgb(1.0, 0.0, 0.0)));
        assert!(Tag::Ai.color().is_some());
        assert!(Tag::None.color().is_none());
    }

    #[test]
    fn test_display_line_constructors() {
        assert_eq!(DisplayLine::user("You: hi").tag, Tag::User);
        assert_eq!(DisplayLine::ai("AI: hello").tag, Tag::Ai);
        assert_eq!(DisplayLine::error("Error: x").tag, Tag::Error);
        assert_eq!(DisplayLine::info("note").tag, Tag::None);
        assert_eq!(DisplayLine::info("note").text, "note");
    }
}
