use std::path::Path;

use anyhow::Result;
use thiserror::Error;
use tracing::{info, warn};

use crate::config::Config;
use crate::crew::{CrewError, CrewExecutor, SequentialExecutor, assemble};
use crate::ingest;
use crate::openai::OpenAiClient;
use crate::tools::{Capability, ToolHandle, ToolRegistry};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("missing input data: {}", missing_label(.resume, .job_description))]
    DataUnavailable { resume: bool, job_description: bool },

    #[error(transparent)]
    Execution(#[from] CrewError),
}

fn missing_label(resume: &bool, job_description: &bool) -> &'static str {
    match (resume, job_description) {
        (true, true) => "resume and job description",
        (true, false) => "resume",
        _ => "job description",
    }
}

/// Wires ingestion, the aggregation gate, crew assembly, and the executor
/// hand-off.
pub struct Orchestrator {
    scrape_client: reqwest::Client,
    tools: ToolRegistry,
    executor: SequentialExecutor,
}

impl Orchestrator {
    pub fn new(config: Config) -> Result<Self> {
        let tools = ToolRegistry::resolve(
            &[Capability::WebSearch, Capability::HumanInput],
            &config,
        );
        let llm = OpenAiClient::new(config)?;
        Ok(Self {
            // Library defaults for the scrape client: no timeout, no headers
            scrape_client: reqwest::Client::new(),
            tools,
            executor: SequentialExecutor::new(llm),
        })
    }

    /// Load both inputs and run the crew. Both loaders are always attempted,
    /// even when the first one fails, so that both causes get logged.
    pub async fn run(&self, resume_path: &Path, job_url: &str) -> Result<String> {
        let resume = match ingest::resume::load(resume_path).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Error reading resume: {}", e);
                String::new()
            }
        };

        let job_description = match ingest::job_posting::fetch(&self.scrape_client, job_url).await
        {
            Ok(text) => text,
            Err(e) => {
                warn!("Error scraping job description: {}", e);
                String::new()
            }
        };

        let search_tool = self
            .tools
            .get(Capability::WebSearch)
            .ok_or_else(|| anyhow::anyhow!("web search capability was not resolved"))?;

        let result = run_pipeline(&resume, &job_description, search_tool, &self.executor).await?;
        Ok(result)
    }
}

/// Validation gate and executor hand-off, generic over the runtime so a
/// substitute can stand in for it under test. No agent or task object exists
/// until both texts have passed the gate.
pub async fn run_pipeline<E: CrewExecutor>(
    resume: &str,
    job_description: &str,
    search_tool: ToolHandle,
    executor: &E,
) -> Result<String, PipelineError> {
    let resume_missing = resume.trim().is_empty();
    let job_description_missing = job_description.trim().is_empty();
    if resume_missing || job_description_missing {
        return Err(PipelineError::DataUnavailable {
            resume: resume_missing,
            job_description: job_description_missing,
        });
    }

    let crew = assemble::build_crew(resume, job_description, search_tool);
    info!(
        "Submitting {} tasks to the executor in {:?} order",
        crew.tasks.len(),
        crew.order
    );
    Ok(executor.execute(&crew).await?)
}
