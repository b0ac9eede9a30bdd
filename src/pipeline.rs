use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::filter::{FilterRules, ScriptFilter};
use crate::indexer::{index_tokens, TokenRecord};
use crate::metadata::split_metadata;
use crate::segmenter::segment_sentences;

/// Counts reported for a processed document, matching the original corpus
/// tooling: word count is taken on the body before filtering, token count
/// over the run stream minus any pure double-break residue.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DocumentStats {
    pub original_words: usize,
    pub sentence_count: usize,
    pub token_count: usize,
}

/// Result of one full pipeline invocation over a raw document.
#[derive(Debug, Clone)]
pub struct ProcessedDocument {
    pub metadata: String,
    pub runs: Vec<String>,
    pub sentences: Vec<String>,
    pub tokens: Vec<Vec<TokenRecord>>,
    pub stats: DocumentStats,
}

/// The four-stage preparation pipeline: metadata split, script filtering,
/// sentence segmentation, token indexing. Holds the compiled script filter
/// so it is built once and reused across documents.
pub struct Pipeline {
    filter: ScriptFilter,
}

impl Pipeline {
    pub fn new(rules: FilterRules) -> Result<Self> {
        let filter = ScriptFilter::new(rules)?;
        Ok(Self { filter })
    }

    /// Create a pipeline with the default Arabic script rules.
    pub fn with_default_rules() -> Result<Self> {
        Self::new(FilterRules::default())
    }

    /// Run all four stages over one raw document. Pure and total: every
    /// stage degrades gracefully on empty or marker-free input.
    pub fn process(&self, raw: &str) -> ProcessedDocument {
        let (metadata, body) = split_metadata(raw);
        let runs = self.filter.filter_script(&body);
        let sentences = segment_sentences(&runs);
        let tokens = index_tokens(&sentences);

        let stats = DocumentStats {
            original_words: body.split_whitespace().count(),
            sentence_count: sentences.len(),
            token_count: runs.iter().filter(|r| r.as_str() != "\n\n").count(),
        };

        debug!(
            "Pipeline complete: {} runs, {} sentences, {} tokens",
            runs.len(),
            stats.sentence_count,
            stats.token_count
        );

        ProcessedDocument { metadata, runs, sentences, tokens, stats }
    }
}

/// One-shot convenience for callers that process a single document.
pub fn process_document(raw: &str) -> Result<ProcessedDocument> {
    let pipeline = Pipeline::with_default_rules()?;
    let doc = pipeline.process(raw);
    info!(
        "Processed document: {} sentences, {} tokens",
        doc.stats.sentence_count, doc.stats.token_count
    );
    Ok(doc)
}
