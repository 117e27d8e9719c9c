use std::path::PathBuf;

use thiserror::Error;

/// Structured failure from either loader. The orchestrator logs these and
/// degrades the input to empty instead of propagating.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub mod job_posting;
pub mod resume;
