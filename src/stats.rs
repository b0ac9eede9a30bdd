use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use crate::pipeline::DocumentStats;

/// Per-file processing record for the run-stats output.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FileStats {
    /// Source document path
    pub path: String,
    /// Whitespace word count of the raw body before filtering
    pub original_words: usize,
    pub sentence_count: usize,
    pub token_count: usize,
    pub processing_time_ms: u64,
    /// Processing status (success, skipped, failed)
    pub status: String,
    /// Error message if processing failed
    pub error: Option<String>,
}

impl FileStats {
    pub fn success(path: &Path, stats: &DocumentStats, elapsed_ms: u64) -> Self {
        Self {
            path: path.display().to_string(),
            original_words: stats.original_words,
            sentence_count: stats.sentence_count,
            token_count: stats.token_count,
            processing_time_ms: elapsed_ms,
            status: "success".to_string(),
            error: None,
        }
    }

    pub fn failed(path: &Path, error: String) -> Self {
        Self {
            path: path.display().to_string(),
            original_words: 0,
            sentence_count: 0,
            token_count: 0,
            processing_time_ms: 0,
            status: "failed".to_string(),
            error: Some(error),
        }
    }
}

/// Aggregate statistics for a whole batch run.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct RunStats {
    pub total_files: usize,
    pub successful: usize,
    pub failed: usize,
    pub total_sentences: usize,
    pub total_tokens: usize,
    pub files: Vec<FileStats>,
}

impl RunStats {
    pub fn record(&mut self, file: FileStats) {
        self.total_files += 1;
        match file.status.as_str() {
            "success" => {
                self.successful += 1;
                self.total_sentences += file.sentence_count;
                self.total_tokens += file.token_count;
            }
            _ => self.failed += 1,
        }
        self.files.push(file);
    }

    /// Persist the run stats as pretty JSON.
    pub async fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        tokio::fs::write(path, content)
            .await
            .with_context(|| format!("Failed to write run stats to {}", path.display()))?;
        info!("Wrote run stats to {}", path.display());
        Ok(())
    }
}
