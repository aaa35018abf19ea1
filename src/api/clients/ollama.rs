//! The Ollama API client.

use crate::{
    config::{Config, OllamaConfig},
    models::{ChatRequest, ChatResponse, TagsResponse},
};

use super::{ChatClient, CompletionError};

#[derive(Debug, Clone)]
pub struct OllamaClient {
    http: reqwest::Client,
    config: OllamaConfig,
}

impl OllamaClient {
    pub fn new(config: OllamaConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    async fn request(&self, request: ChatRequest) -> Result<ChatResponse, CompletionError> {
        let url = self.config.url("api/chat");
        log::info!("OllamaClient: Sending request to {}", url);
        let response = self.http.post(url).json(&request).send().await?;

        if !response.status().is_success() {
            let error_text = response.text().await?;
            log::error!("OllamaClient: Request failed with error: {}", error_text);
            return Err(CompletionError::Status(error_text));
        }
        let text_data = response.text().await?;
        let chat_response: ChatResponse = serde_json::from_str(&text_data)?;
        Ok(chat_response)
    }
}

impl ChatClient for OllamaClient {
    async fn list_models(&self) -> anyhow::Result<Vec<String>> {
        log::info!("OllamaClient: Fetching available models");
        let url = self.config.url("api/tags");

        let response = self.http.get(url).send().await;

        match response {
            Ok(resp) => {
                if resp.status().is_success() {
                    let tags: TagsResponse = resp.json().await.map_err(anyhow::Error::from)?;
                    let models = tags.into_names();
                    log::info!("OllamaClient: Available models: {:?}", models);
                    Ok(models)
                } else {
                    log::error!(
                        "OllamaClient: List models failed with status: {}",
                        resp.status()
                    );
                    Err(anyhow::anyhow!("Error: {}", resp.status()))
                }
            }
            Err(e) => {
                log::error!("OllamaClient: List models request failed: {}", e);
                Err(anyhow::anyhow!("Request failed: {}", e))
            }
        }
    }

    async fn complete_message(&self, request: ChatRequest) -> Result<String, CompletionError> {
        log::info!(
            "OllamaClient: Completing message with {} messages using model {}",
            request.messages.len(),
            request.model
        );
        let response = self.request(request).await?;
        Ok(response.message.content)
    }
}

impl Default for OllamaClient {
    fn default() -> Self {
        OllamaClient::new(Config::default().ollama)
    }
}
