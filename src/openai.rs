use std::fmt;
use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::Config;

/// Custom error types for chat-completions API interactions
#[derive(Error, Debug)]
pub enum OpenAiError {
    #[error("OpenAI servers are currently busy. Please try again in a few moments.")]
    ServerBusy,

    #[error("Network connection failed: {message}")]
    NetworkError { message: String },

    #[error("Request timed out after {seconds} seconds")]
    Timeout { seconds: u64 },

    #[error("API error ({status}): {message}")]
    ApiError { status: u16, message: String },

    #[error("Failed to parse response: {message}")]
    ParseError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },
}

impl OpenAiError {
    /// Get user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            OpenAiError::ServerBusy => {
                "🚫 OpenAI servers are currently busy. Please try again in a few moments."
                    .to_string()
            }
            OpenAiError::NetworkError { .. } => {
                "🌐 Network connection failed. Please check your internet connection and try again."
                    .to_string()
            }
            OpenAiError::Timeout { seconds } => {
                format!(
                    "⏰ Request timed out after {} seconds. The server might be overloaded.",
                    seconds
                )
            }
            OpenAiError::ApiError { status, .. } => match *status {
                401 => "🔑 Authentication failed. Check your OPENAI_API_KEY.".to_string(),
                429 => {
                    "🚫 Rate limit exceeded. Please wait a moment before trying again.".to_string()
                }
                _ => format!("❌ API error ({}). Please try again later.", status),
            },
            OpenAiError::ParseError { .. } => {
                "⚠️ Failed to parse server response. Please try again.".to_string()
            }
            OpenAiError::ConfigError { message } => {
                format!("⚙️ Configuration error: {}", message)
            }
        }
    }
}

/// API request/response structures
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: "assistant".to_string(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChatMessage,
}

/// Chat-completions API client
#[derive(Clone)]
pub struct OpenAiClient {
    client: Client,
    config: Config,
}

impl fmt::Debug for OpenAiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never format the config; it carries credentials
        f.debug_struct("OpenAiClient")
            .field("base_url", &self.config.openai_base_url)
            .field("model", &self.config.model)
            .finish()
    }
}

impl OpenAiClient {
    /// Create a new client with the given configuration
    pub fn new(config: Config) -> Result<Self, OpenAiError> {
        config.validate().map_err(|e| OpenAiError::ConfigError {
            message: e.to_string(),
        })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .user_agent("career_agents/0.1.0")
            .build()
            .map_err(|e| OpenAiError::ConfigError {
                message: format!("Failed to create HTTP client: {}", e),
            })?;

        Ok(Self { client, config })
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Send chat messages and return the assistant content of the first
    /// choice. Each call issues exactly one request; there is no retry.
    pub async fn send_messages(&self, messages: Vec<ChatMessage>) -> Result<String, OpenAiError> {
        let request = ChatRequest {
            model: self.config.model.clone(),
            messages,
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.config.openai_base_url))
            .header("Authorization", format!("Bearer {}", self.config.openai_api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| self.map_reqwest_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(self.handle_error_response(status, response).await);
        }

        let api_response: ApiResponse =
            response.json().await.map_err(|e| OpenAiError::ParseError {
                message: format!("Failed to parse API response: {}", e),
            })?;

        match api_response.choices.first() {
            Some(choice) => Ok(choice.message.content.clone()),
            None => Err(OpenAiError::ParseError {
                message: "No choices in API response".to_string(),
            }),
        }
    }

    /// Map reqwest errors to our custom error types
    fn map_reqwest_error(&self, error: reqwest::Error) -> OpenAiError {
        if error.is_timeout() {
            return OpenAiError::Timeout {
                seconds: self.config.timeout,
            };
        }

        if error.is_connect() {
            return OpenAiError::NetworkError {
                message: "Failed to connect to server".to_string(),
            };
        }

        if error.is_request() {
            return OpenAiError::NetworkError {
                message: "Request failed".to_string(),
            };
        }

        OpenAiError::NetworkError {
            message: format!("Request error: {}", error),
        }
    }

    /// Handle error responses from the server
    async fn handle_error_response(
        &self,
        status: StatusCode,
        response: reqwest::Response,
    ) -> OpenAiError {
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());

        match status {
            StatusCode::TOO_MANY_REQUESTS => OpenAiError::ServerBusy,
            StatusCode::SERVICE_UNAVAILABLE => OpenAiError::ServerBusy,
            StatusCode::BAD_GATEWAY | StatusCode::GATEWAY_TIMEOUT => OpenAiError::ServerBusy,
            _ => OpenAiError::ApiError {
                status: status.as_u16(),
                message: error_text,
            },
        }
    }
}
