use async_trait::async_trait;

use crate::types::Crew;

#[derive(Debug, thiserror::Error)]
pub enum CrewError {
    #[error(transparent)]
    Llm(#[from] crate::openai::OpenAiError),
    #[error("Unexpected: {0}")]
    Unexpected(String),
}

/// The narrow seam to the agent runtime: run the crew's tasks in its order
/// directive and return the final task's output.
#[async_trait]
pub trait CrewExecutor: Send + Sync {
    async fn execute(&self, crew: &Crew) -> Result<String, CrewError>;
}

pub mod assemble;
pub mod sequential;

pub use sequential::SequentialExecutor;
