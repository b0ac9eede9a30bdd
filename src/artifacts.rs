use anyhow::{Context, Result};
use regex_automata::meta::Regex;
use std::path::{Path, PathBuf};
use tokio::io::{AsyncWriteExt, BufWriter};
use tracing::debug;

use crate::pipeline::ProcessedDocument;

/// The three output files produced for every processed document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub tokens: PathBuf,
    pub sentences: PathBuf,
    pub doc_table: PathBuf,
}

/// Build artifact paths under `dst_dir`. Batch runs pass the source file
/// name as `prefix` so outputs from different documents do not collide;
/// single-file runs pass `None` and get the bare names.
pub fn artifact_paths(dst_dir: &Path, prefix: Option<&str>) -> ArtifactPaths {
    let name = |base: &str| match prefix {
        Some(p) => dst_dir.join(format!("{p}_{base}")),
        None => dst_dir.join(base),
    };
    ArtifactPaths {
        tokens: name("tokens.txt"),
        sentences: name("sentences.txt"),
        doc_table: name("doc.tsv"),
    }
}

/// Render the tokens artifact: one run per line, boundary markers turned
/// into line breaks (marker characters removed from run content), then any
/// run of three-or-more newlines collapsed to exactly two.
pub fn render_tokens(runs: &[String]) -> Result<String> {
    let joined = runs.join("\n").replace('#', "");
    collapse_breaks(&joined)
}

/// Collapse `\n{3,}` to `\n\n`.
fn collapse_breaks(text: &str) -> Result<String> {
    let re = Regex::new(r"\n{3,}")?;
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for m in re.find_iter(text) {
        out.push_str(&text[last..m.start()]);
        out.push_str("\n\n");
        last = m.end();
    }
    out.push_str(&text[last..]);
    Ok(out)
}

/// Render the sentences artifact: one sentence per line.
pub fn render_sentences(sentences: &[String]) -> String {
    sentences.join("\n")
}

/// Render the token table: a leading global row index, then position,
/// token, and character span, one row per token across all sentences.
pub fn render_doc_table(doc: &ProcessedDocument) -> String {
    let mut out = String::from("\tposition\ttoken\tstart_offset\tend_offset\n");
    let mut row = 0usize;
    for records in &doc.tokens {
        for rec in records {
            out.push_str(&format!(
                "{row}\t{}\t{}\t{}\t{}\n",
                rec.position, rec.text, rec.start_offset, rec.end_offset
            ));
            row += 1;
        }
    }
    out
}

/// Write the three artifacts for one processed document. I/O errors carry
/// the offending path.
pub async fn write_artifacts(
    doc: &ProcessedDocument,
    dst_dir: &Path,
    prefix: Option<&str>,
) -> Result<ArtifactPaths> {
    let paths = artifact_paths(dst_dir, prefix);

    let tokens = render_tokens(&doc.runs)?;
    tokio::fs::write(&paths.tokens, tokens)
        .await
        .with_context(|| format!("Failed to write {}", paths.tokens.display()))?;

    tokio::fs::write(&paths.sentences, render_sentences(&doc.sentences))
        .await
        .with_context(|| format!("Failed to write {}", paths.sentences.display()))?;

    // Buffered writer keeps the row-per-token table from issuing tiny writes.
    let file = tokio::fs::File::create(&paths.doc_table)
        .await
        .with_context(|| format!("Failed to create {}", paths.doc_table.display()))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(render_doc_table(doc).as_bytes())
        .await
        .with_context(|| format!("Failed to write {}", paths.doc_table.display()))?;
    writer.flush().await?;

    debug!("Wrote artifacts for prefix {:?} under {}", prefix, dst_dir.display());
    Ok(paths)
}
