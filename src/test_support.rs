//! Shared fixtures for in-crate tests.

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::Config;
use crate::tools::{Tool, ToolError, ToolHandle};

pub struct StubSearchTool;

#[async_trait]
impl Tool for StubSearchTool {
    fn name(&self) -> &str {
        "Scrape Google Searches"
    }

    fn description(&self) -> &str {
        "stub search"
    }

    async fn call(&self, _input: &str) -> Result<String, ToolError> {
        Ok(String::new())
    }
}

pub fn stub_search_tool() -> ToolHandle {
    Arc::new(StubSearchTool)
}

/// A config pointed at the given base URLs; credentials are dummies.
pub fn test_config(openai_base_url: &str, serper_base_url: &str) -> Config {
    Config {
        serper_api_key: "serper-test".to_string(),
        openai_api_key: "sk-test".to_string(),
        openai_base_url: openai_base_url.to_string(),
        serper_base_url: serper_base_url.to_string(),
        model: "gpt-4o-mini".to_string(),
        timeout: 5,
        max_tokens: 256,
        temperature: 0.7,
    }
}
