use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One turn of the conversation, as sent to `/api/chat`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    role: Role,
    content: String,
}

impl Message {
    pub fn user(content: impl ToString) -> Self {
        Self {
            role: Role::User,
            content: content.to_string(),
        }
    }

    pub fn assistant(content: impl ToString) -> Self {
        Self {
            role: Role::Assistant,
            content: content.to_string(),
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub stream: bool,
}

impl ChatRequest {
    /// Non-streaming request: the server answers with one complete body.
    pub fn new(model: impl ToString, messages: Vec<Message>) -> Self {
        Self {
            model: model.to_string(),
            messages,
            stream: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    pub message: ResponseMessage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResponseMessage {
    pub content: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TagsResponse {
    #[serde(default)]
    pub models: Vec<ModelTag>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModelTag {
    pub name: String,
}

impl TagsResponse {
    pub fn into_names(self) -> Vec<String> {
        self.models.into_iter().map(|model| model.name).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_serialization() {
        let json = serde_json::to_value(Message::user("Hello!")).unwrap();

        assert_eq!(json["role"], "user");
        assert_eq!(json["content"], "Hello!");
    }

    #[test]
    fn test_role_display() {
        assert_eq!(Role::User.to_string(), "user");
        assert_eq!(Role::Assistant.as_ref(), "assistant");
    }

    #[test]
    fn test_chat_request_serialization() {
        let request = ChatRequest::new(
            "llama3.2:latest",
            vec![Message::user("hi"), Message::assistant("hello")],
        );

        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["model"], "llama3.2:latest");
        assert_eq!(json["stream"], false);
        assert_eq!(json["messages"].as_array().unwrap().len(), 2);
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][1]["role"], "assistant");
        assert_eq!(json["messages"][1]["content"], "hello");
    }

    #[test]
    fn test_chat_response_ignores_extra_fields() {
        let json = r#"{
            "model": "llama3.2",
            "created_at": "2024-01-01T00:00:00Z",
            "message": {"role": "assistant", "content": "hello"},
            "done": true
        }"#;
        let response: ChatResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.message.content, "hello");
    }

    #[test]
    fn test_tags_response_keeps_server_order() {
        let json = r#"{"models":[{"name":"b","size":1},{"name":"a"}]}"#;
        let response: TagsResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.into_names(), vec!["b", "a"]);
    }

    #[test]
    fn test_tags_response_without_models() {
        let response: TagsResponse = serde_json::from_str("{}").unwrap();

        assert!(response.into_names().is_empty());
    }
}
