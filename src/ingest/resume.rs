use std::path::Path;

use tokio::fs;
use tracing::info;

use super::IngestError;

/// Read the whole resume file as plain text. No PDF or DOCX decoding.
pub async fn load(path: &Path) -> Result<String, IngestError> {
    info!("Reading resume from {}", path.display());
    fs::read_to_string(path).await.map_err(|e| IngestError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn returns_file_content_unmodified() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.txt");
        std::fs::write(&path, "Jane Doe\nSoftware Engineer").unwrap();

        let text = load(&path).await.unwrap();
        assert_eq!(text, "Jane Doe\nSoftware Engineer");
    }

    #[tokio::test]
    async fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.txt");

        let err = load(&path).await.unwrap_err();
        assert!(matches!(err, IngestError::Io { .. }));
    }
}
