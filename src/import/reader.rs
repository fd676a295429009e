//! Asynchronous statement file reading
//!
//! File reading is the single asynchronous boundary of the import
//! pipeline: the caller suspends until the file's bytes are available,
//! then resumes with the text or a read failure. There is no
//! cancellation for an in-flight read. Parsing itself stays pure and
//! synchronous in [`crate::import::parser`].

use crate::types::LedgerError;
use std::path::Path;

/// Read a statement file to text
///
/// Rejects paths without a `.csv` extension before touching the disk,
/// mirroring the original import form's file check.
///
/// # Errors
///
/// * [`LedgerError::UnsupportedFile`] - the path does not end in `.csv`
/// * [`LedgerError::Io`] - the file could not be read
pub async fn read_csv_file(path: &Path) -> Result<String, LedgerError> {
    if path.extension().and_then(|ext| ext.to_str()) != Some("csv") {
        return Err(LedgerError::unsupported_file(&path.display().to_string()));
    }

    let text = tokio::fs::read_to_string(path).await?;
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    #[tokio::test]
    async fn test_reads_csv_file_content() {
        let mut file = Builder::new()
            .suffix(".csv")
            .tempfile()
            .expect("Failed to create temp file");
        file.write_all(b"Date,Business Name,Category,Amount\n")
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");

        let text = read_csv_file(file.path()).await.unwrap();
        assert_eq!(text, "Date,Business Name,Category,Amount\n");
    }

    #[tokio::test]
    async fn test_rejects_non_csv_extension() {
        let file = Builder::new()
            .suffix(".txt")
            .tempfile()
            .expect("Failed to create temp file");

        let result = read_csv_file(file.path()).await;
        assert!(matches!(result, Err(LedgerError::UnsupportedFile { .. })));
    }

    #[tokio::test]
    async fn test_missing_file_is_an_io_error() {
        let result = read_csv_file(Path::new("does-not-exist.csv")).await;
        assert!(matches!(result, Err(LedgerError::Io { .. })));
    }
}
