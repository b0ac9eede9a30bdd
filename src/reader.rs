use anyhow::Result;
use std::path::Path;
use tracing::{debug, info, warn};

/// Configuration for document reading behavior
#[derive(Debug, Clone, Default)]
pub struct ReaderConfig {
    /// Whether to fail fast on first error or continue processing
    pub fail_fast: bool,
}

/// Statistics for one document read
#[derive(Debug, Clone)]
pub struct ReadStats {
    pub file_path: String,
    pub bytes_read: u64,
    pub duration_ms: u64,
    pub read_error: Option<String>,
}

/// Reads whole documents into memory; the pipeline consumes each document
/// in full, so there is no line streaming here.
pub struct DocumentReader {
    config: ReaderConfig,
}

impl DocumentReader {
    pub fn new(config: ReaderConfig) -> Self {
        Self { config }
    }

    /// Read a document to a string with UTF-8 validation. On failure the
    /// error is either returned (fail-fast) or recorded in the stats.
    pub async fn read_document<P: AsRef<Path>>(
        &self,
        file_path: P,
    ) -> Result<(String, ReadStats)> {
        let path = file_path.as_ref();
        let start_time = std::time::Instant::now();

        debug!("Reading document: {}", path.display());

        match tokio::fs::read_to_string(path).await {
            Ok(content) => {
                let stats = ReadStats {
                    file_path: path.display().to_string(),
                    bytes_read: content.len() as u64,
                    duration_ms: start_time.elapsed().as_millis() as u64,
                    read_error: None,
                };
                info!(
                    "Read {}: {} bytes in {}ms",
                    path.display(),
                    stats.bytes_read,
                    stats.duration_ms
                );
                Ok((content, stats))
            }
            Err(e) => {
                let error_msg = format!("Failed to read document {}: {}", path.display(), e);
                warn!("{}", error_msg);

                if self.config.fail_fast {
                    return Err(anyhow::anyhow!(error_msg));
                }

                let stats = ReadStats {
                    file_path: path.display().to_string(),
                    bytes_read: 0,
                    duration_ms: start_time.elapsed().as_millis() as u64,
                    read_error: Some(error_msg),
                };
                Ok((String::new(), stats))
            }
        }
    }
}

/// Convenience function for reading a single document with default
/// configuration; simplifies integration tests and external callers.
pub async fn read_document_async<P: AsRef<Path>>(file_path: P) -> Result<String> {
    let reader = DocumentReader::new(ReaderConfig { fail_fast: true });
    let (content, _stats) = reader.read_document(file_path).await?;
    Ok(content)
}
