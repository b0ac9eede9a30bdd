pub mod artifacts;
pub mod discovery;
pub mod filter;
pub mod indexer;
pub mod metadata;
pub mod pipeline;
pub mod reader;
pub mod segmenter;
pub mod stats;

// Re-export the four core pipeline operations and their types
pub use filter::{FilterRules, ScriptFilter};
pub use indexer::{index_tokens, TokenRecord};
pub use metadata::split_metadata;
pub use pipeline::{process_document, DocumentStats, Pipeline, ProcessedDocument};
pub use segmenter::segment_sentences;

// Re-export orchestration utilities for the CLI and integration tests
pub use artifacts::{artifact_paths, write_artifacts, ArtifactPaths};
pub use stats::{FileStats, RunStats};
