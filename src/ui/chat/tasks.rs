use crate::{
    api::clients::{ChatClient, CompletionError},
    models::{ChatRequest, Message},
};

pub async fn complete_message<C: ChatClient>(
    client: C,
    request: ChatRequest,
) -> Result<String, CompletionError> {
    log::info!(
        "message roles: {:?}",
        request
            .messages
            .iter()
            .map(|m| m.role().to_string())
            .collect::<Vec<String>>()
    );
    log::debug!(
        "message contents: {:?}",
        request
            .messages
            .iter()
            .map(Message::content)
            .collect::<Vec<&str>>()
    );
    client.complete_message(request).await
}

pub async fn load_models<C: ChatClient>(client: C) -> Result<Vec<String>, String> {
    client.list_models().await.map_err(|err| err.to_string())
}
