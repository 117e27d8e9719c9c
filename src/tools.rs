use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;
use tracing::debug;

use crate::config::Config;
use crate::console::Console;

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("search request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("search API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("failed to read user input: {0}")]
    Input(#[from] std::io::Error),
}

/// A capability exposed to the agent runtime: a named callable taking a
/// free-text input and returning text.
#[async_trait]
pub trait Tool: Send + Sync {
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    async fn call(&self, input: &str) -> Result<String, ToolError>;
}

pub type ToolHandle = Arc<dyn Tool>;

/// The closed set of capabilities this program knows how to provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    WebSearch,
    HumanInput,
}

/// Capabilities resolved once at startup into typed handles.
pub struct ToolRegistry {
    handles: HashMap<Capability, ToolHandle>,
}

impl ToolRegistry {
    pub fn resolve(capabilities: &[Capability], config: &Config) -> Self {
        let mut handles: HashMap<Capability, ToolHandle> = HashMap::new();
        for capability in capabilities {
            let handle: ToolHandle = match capability {
                Capability::WebSearch => Arc::new(SerperSearchTool::new(config)),
                Capability::HumanInput => Arc::new(HumanInputTool),
            };
            handles.insert(*capability, handle);
        }
        Self { handles }
    }

    pub fn get(&self, capability: Capability) -> Option<ToolHandle> {
        self.handles.get(&capability).cloned()
    }
}

/// Web-search capability backed by the Serper API.
pub struct SerperSearchTool {
    client: Client,
    api_key: String,
    base_url: String,
}

impl SerperSearchTool {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            api_key: config.serper_api_key.clone(),
            base_url: config.serper_base_url.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    organic: Vec<OrganicResult>,
}

#[derive(Debug, Deserialize)]
struct OrganicResult {
    #[serde(default)]
    title: String,
    #[serde(default)]
    link: String,
    #[serde(default)]
    snippet: String,
}

#[async_trait]
impl Tool for SerperSearchTool {
    fn name(&self) -> &str {
        "Scrape Google Searches"
    }

    fn description(&self) -> &str {
        "Useful for when you need to ask the agent to search the internet"
    }

    async fn call(&self, input: &str) -> Result<String, ToolError> {
        debug!("SerperSearchTool: querying for {:?}", input);
        let response = self
            .client
            .post(format!("{}/search", self.base_url))
            .header("X-API-KEY", &self.api_key)
            .json(&json!({ "q": input }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ToolError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let results: SearchResponse = response.json().await?;
        let rendered: Vec<String> = results
            .organic
            .iter()
            .map(|r| format!("{}\n{}\n{}", r.title, r.snippet, r.link))
            .collect();
        Ok(rendered.join("\n\n"))
    }
}

/// Human-in-the-loop capability: asks the operator on the console and
/// returns one line of input.
pub struct HumanInputTool;

#[async_trait]
impl Tool for HumanInputTool {
    fn name(&self) -> &str {
        "human"
    }

    fn description(&self) -> &str {
        "Ask a human operator for input when the agents need a judgement call"
    }

    async fn call(&self, input: &str) -> Result<String, ToolError> {
        let answer = Console::prompt_user(input).await?;
        Ok(answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config(serper_base_url: &str) -> Config {
        crate::test_support::test_config("http://127.0.0.1:1", serper_base_url)
    }

    #[tokio::test]
    async fn search_flattens_organic_results() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/search"))
            .and(header("X-API-KEY", "serper-test"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "organic": [
                    {"title": "Rust jobs", "link": "https://example.com/a", "snippet": "Senior roles"},
                    {"title": "More jobs", "link": "https://example.com/b", "snippet": "Junior roles"}
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let tool = SerperSearchTool::new(&test_config(&server.uri()));
        let text = tool.call("rust jobs").await.unwrap();
        assert_eq!(
            text,
            "Rust jobs\nSenior roles\nhttps://example.com/a\n\nMore jobs\nJunior roles\nhttps://example.com/b"
        );
    }

    #[tokio::test]
    async fn search_error_status_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(403).set_body_string("bad key"))
            .mount(&server)
            .await;

        let tool = SerperSearchTool::new(&test_config(&server.uri()));
        let err = tool.call("rust jobs").await.unwrap_err();
        assert!(matches!(err, ToolError::Api { status: 403, .. }));
    }

    #[test]
    fn registry_resolves_requested_capabilities() {
        let config = test_config("http://127.0.0.1:1");
        let registry =
            ToolRegistry::resolve(&[Capability::WebSearch, Capability::HumanInput], &config);

        let search = registry.get(Capability::WebSearch).unwrap();
        assert_eq!(search.name(), "Scrape Google Searches");

        let human = registry.get(Capability::HumanInput).unwrap();
        assert_eq!(human.name(), "human");
    }

    #[test]
    fn registry_only_holds_what_was_requested() {
        let config = test_config("http://127.0.0.1:1");
        let registry = ToolRegistry::resolve(&[Capability::WebSearch], &config);
        assert!(registry.get(Capability::HumanInput).is_none());
    }
}
