pub const DEFAULT_ENDPOINT: &str = "http://localhost:11434";
const WINDOW_TITLE: &str = "Ollama Local Chatbot";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OllamaConfig {
    pub endpoint: String,
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

impl OllamaConfig {
    /// Joins `path` onto the endpoint, tolerating a trailing slash on either side.
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.endpoint.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WindowConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: WINDOW_TITLE.to_string(),
            width: 600.0,
            height: 700.0,
        }
    }
}

/// Compiled-in settings. Nothing here is read from disk or the environment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub ollama: OllamaConfig,
    pub window: WindowConfig,
}
