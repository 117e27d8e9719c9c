use anyhow::Error;
use colored::*;

use crate::crew::CrewError;
use crate::openai::OpenAiError;
use crate::orchestrator::PipelineError;

/// Fixed prefix of the result block.
const RESULT_BANNER: &str = "######################";

pub fn display_welcome() {
    println!("{}", "🤖 Career Agents".bright_blue().bold());
    println!(
        "{}",
        "Two agents team up on your application: a resume analyst critiques your resume against the posting, then a cover letter writer drafts the letter."
            .blue()
    );
    println!(
        "{}",
        "Make sure SERPER_API_KEY and OPENAI_API_KEY are set.\n".blue()
    );
}

pub fn format_result(result: &str) -> String {
    format!("{}\n{}", RESULT_BANNER, result)
}

pub fn display_result(result: &str) {
    println!("{}", format_result(result).white());
}

pub fn display_error(error: &Error) {
    if let Some(PipelineError::Execution(CrewError::Llm(llm_error))) =
        error.downcast_ref::<PipelineError>()
    {
        display_openai_error(llm_error);
        return;
    }

    println!(
        "{} {}",
        "❌ Error:".bright_red().bold(),
        error.to_string().red()
    );
    if let Some(PipelineError::DataUnavailable { .. }) = error.downcast_ref::<PipelineError>() {
        println!(
            "{}",
            "💡 Tip: Check that the resume file exists and the job URL serves an HTML page.\n"
                .red()
        );
    } else {
        println!(
            "{}",
            "Please check your configuration and try again.\n".red()
        );
    }
}

pub fn display_openai_error(error: &OpenAiError) {
    let user_message = error.user_message();
    match error {
        OpenAiError::ServerBusy => {
            println!("{}", user_message.bright_yellow().bold());
            println!(
                "{}",
                "💡 Tip: Try again in a few minutes when server load is lower.".yellow()
            );
        }
        OpenAiError::NetworkError { .. } => {
            println!("{}", user_message.bright_red().bold());
            println!(
                "{}",
                "💡 Tip: Check your internet connection and firewall settings.".red()
            );
        }
        OpenAiError::Timeout { .. } => {
            println!("{}", user_message.bright_yellow().bold());
            println!(
                "{}",
                "💡 Tip: The server might be overloaded. Try again later.".yellow()
            );
        }
        OpenAiError::ApiError { status, .. } => {
            println!("{}", user_message.bright_red().bold());
            match *status {
                401 => println!(
                    "{}",
                    "💡 Tip: Check your OPENAI_API_KEY environment variable.".red()
                ),
                403 => println!(
                    "{}",
                    "💡 Tip: Your API key may not have sufficient permissions.".red()
                ),
                _ => println!(
                    "{}",
                    "💡 Tip: Check the API documentation for more details.".red()
                ),
            }
        }
        OpenAiError::ParseError { .. } => {
            println!("{}", user_message.bright_magenta().bold());
            println!(
                "{}",
                "💡 Tip: The server response was unexpected. Try again.".magenta()
            );
        }
        OpenAiError::ConfigError { .. } => {
            println!("{}", user_message.bright_red().bold());
            println!(
                "{}",
                "💡 Tip: Check your environment variables and configuration.".red()
            );
        }
    }
    println!();
}
