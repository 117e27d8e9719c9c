use anyhow::Error;

mod input;
mod render;

/// Console interface for the application
pub struct Console;

impl Console {
    /// Display a welcome banner
    pub fn display_welcome() {
        render::display_welcome();
    }

    /// Display the final pipeline result behind the fixed banner line
    pub fn display_result(result: &str) {
        render::display_result(result);
    }

    /// Display an error message with context-aware messaging
    pub fn display_error(error: &Error) {
        render::display_error(error);
    }

    /// Prompt the user with a custom message and return the entered line (trimmed)
    pub async fn prompt_user(prompt_text: &str) -> std::io::Result<String> {
        input::prompt_user(prompt_text).await
    }
}
