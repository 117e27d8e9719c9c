use reqwest::Client;
use scraper::Html;
use tracing::info;

use super::IngestError;

/// Fetch a job posting and reduce the page to its visible text. Exactly one
/// request per call; no caching, no retry.
pub async fn fetch(client: &Client, url: &str) -> Result<String, IngestError> {
    info!("Fetching job description from {}", url);
    let response = client.get(url).send().await.map_err(|e| IngestError::Http {
        url: url.to_string(),
        source: e,
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(IngestError::Status {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }

    let body = response.text().await.map_err(|e| IngestError::Http {
        url: url.to_string(),
        source: e,
    })?;

    Ok(extract_visible_text(&body))
}

/// Every text node outside script/style/noscript subtrees, trimmed per node,
/// empty nodes dropped, joined with newlines.
fn extract_visible_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut parts: Vec<&str> = Vec::new();
    for node in document.root_element().descendants() {
        let Some(text) = node.value().as_text() else {
            continue;
        };
        let hidden = node.ancestors().any(|ancestor| {
            ancestor
                .value()
                .as_element()
                .is_some_and(|element| matches!(element.name(), "script" | "style" | "noscript"))
        });
        if hidden {
            continue;
        }
        let trimmed = text.trim();
        if !trimmed.is_empty() {
            parts.push(trimmed);
        }
    }
    parts.join("\n")
}
