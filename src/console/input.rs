use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader};

/// Print a prompt and read one trimmed line from stdin.
pub async fn prompt_user(prompt_text: &str) -> io::Result<String> {
    let mut stdout = io::stdout();
    stdout.write_all(prompt_text.as_bytes()).await?;
    stdout.flush().await?;

    let mut reader = BufReader::new(io::stdin());
    let mut line = String::new();
    reader.read_line(&mut line).await?;
    Ok(line.trim().to_string())
}
