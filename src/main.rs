mod config;
mod console;
mod crew;
mod ingest;
mod openai;
mod orchestrator;
#[cfg(test)]
mod test_support;
mod tools;
mod types;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::Config;
use crate::console::Console;
use crate::orchestrator::Orchestrator;

/// Analyze a resume against a job posting and draft a cover letter.
#[derive(Debug, Parser)]
struct Args {
    /// Path to the plain-text resume file
    #[arg(long)]
    resume: PathBuf,

    /// URL of the job posting to scrape
    #[arg(long)]
    job_url: String,
}

#[tokio::main(flavor = "multi_thread")]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let args = Args::parse();

    // logging
    let filter_layer = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter_layer).init();

    tracing::info!("Starting career agents application");

    // Credential gate: fails before any network or file I/O
    let config = Config::load()?;

    let orchestrator = Orchestrator::new(config)?;
    Console::display_welcome();

    match orchestrator.run(&args.resume, &args.job_url).await {
        Ok(result) => {
            Console::display_result(&result);
            Ok(())
        }
        Err(error) => {
            Console::display_error(&error);
            Err(error)
        }
    }
}
