use anyhow::Result;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use taqti::discovery::{self, DiscoveryConfig};
use taqti::pipeline::Pipeline;
use taqti::reader::{DocumentReader, ReaderConfig};
use taqti::stats::{FileStats, RunStats};
use taqti::{artifacts, metadata};

#[derive(Parser, Debug)]
#[command(name = "taqti")]
#[command(about = "Prepares OpenITI Classical Arabic texts for NLP")]
#[command(version)]
struct Args {
    /// Source document, or a directory tree of documents
    input: PathBuf,

    /// Destination directory for the three output artifacts per document
    out_dir: PathBuf,

    /// Abort on first error
    #[arg(long)]
    fail_fast: bool,

    /// Suppress console progress output
    #[arg(long)]
    no_progress: bool,

    /// Stats output file path
    #[arg(long, default_value = "run_stats.json")]
    stats_out: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Structured JSON logging, same surface in batch and single-file runs
    tracing_subscriber::fmt()
        .with_target(false)
        .json()
        .init();

    let args = Args::parse();

    info!("Starting taqti");
    info!(?args, "Parsed CLI arguments");

    if !args.input.exists() {
        anyhow::bail!("Input path does not exist: {}", args.input.display());
    }

    tokio::fs::create_dir_all(&args.out_dir).await?;

    let pipeline = Pipeline::with_default_rules()?;
    let reader = DocumentReader::new(ReaderConfig { fail_fast: args.fail_fast });

    if args.input.is_file() {
        let file_stats = process_file(&args, &pipeline, &reader, &args.input, None).await?;
        // Single-file runs have no stats artifact to record a failure in,
        // so an unreadable input is a hard error regardless of --fail-fast.
        if let Some(error) = &file_stats.error {
            anyhow::bail!("{error}");
        }
        if !args.no_progress {
            println!("{}", format_counts(&file_stats));
        }
        return Ok(());
    }

    // Batch mode: every non-hidden file under the input tree
    let discovery_config = DiscoveryConfig { fail_fast: args.fail_fast };
    info!("Starting file discovery in: {}", args.input.display());
    let discovered = discovery::collect_discovered_files(&args.input, discovery_config).await?;

    let valid_files: Vec<_> = discovered.iter().filter(|f| f.error.is_none()).collect();
    let invalid_files: Vec<_> = discovered.iter().filter(|f| f.error.is_some()).collect();

    info!("File discovery completed: {} total files found", discovered.len());
    for file in &invalid_files {
        if let Some(ref error) = file.error {
            warn!("Issue with {}: {}", file.path.display(), error);
        }
    }

    println!("taqti v{} - discovered {} documents", env!("CARGO_PKG_VERSION"), discovered.len());
    if !invalid_files.is_empty() {
        println!("Files with issues: {}", invalid_files.len());
    }

    let progress = if args.no_progress {
        ProgressBar::hidden()
    } else {
        let bar = ProgressBar::new(valid_files.len() as u64);
        bar.set_style(
            ProgressStyle::with_template("{bar:40} {pos}/{len} {msg}")
                .expect("static template is valid"),
        );
        bar
    };

    let mut run_stats = RunStats::default();
    for file in &valid_files {
        let file_name = file
            .path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown")
            .to_string();
        progress.set_message(file_name.clone());

        match process_file(&args, &pipeline, &reader, &file.path, Some(&file_name)).await {
            Ok(stats) => {
                // progress.println keeps per-file output from garbling the bar
                if !args.no_progress && stats.error.is_none() {
                    progress.println(format_counts(&stats));
                }
                run_stats.record(stats);
            }
            Err(e) => {
                if args.fail_fast {
                    return Err(e);
                }
                warn!("Failed to process {}: {}", file.path.display(), e);
                run_stats.record(FileStats::failed(&file.path, e.to_string()));
            }
        }
        progress.inc(1);
    }
    progress.finish_and_clear();

    run_stats.save(&args.stats_out).await?;

    println!("Processed {} documents: {} succeeded, {} failed", run_stats.total_files, run_stats.successful, run_stats.failed);
    println!("Total sentences: {}", run_stats.total_sentences);
    println!("Total tokens: {}", run_stats.total_tokens);

    info!(
        "Batch run complete: {} files, {} sentences, {} tokens",
        run_stats.total_files, run_stats.total_sentences, run_stats.total_tokens
    );

    Ok(())
}

/// Per-file counts in the original corpus tooling's verbose layout.
fn format_counts(stats: &FileStats) -> String {
    format!(
        "{}\nlength original: {}\nnumber of sentences: {}\nnumber of tokens: {}",
        stats.path, stats.original_words, stats.sentence_count, stats.token_count
    )
}

/// Read, process, and persist one document; returns its per-file stats.
async fn process_file(
    args: &Args,
    pipeline: &Pipeline,
    reader: &DocumentReader,
    path: &Path,
    prefix: Option<&str>,
) -> Result<FileStats> {
    let start = std::time::Instant::now();

    let (raw, read_stats) = reader.read_document(path).await?;
    if let Some(error) = read_stats.read_error {
        return Ok(FileStats::failed(path, error));
    }

    let doc = pipeline.process(&raw);
    artifacts::write_artifacts(&doc, &args.out_dir, prefix).await?;

    if doc.metadata.is_empty() {
        // Tolerated by design: documents without the header marker are
        // processed whole (see metadata::METADATA_DELIMITER).
        info!("No {} delimiter in {}", metadata::METADATA_DELIMITER.trim_end(), path.display());
    }

    let elapsed_ms = start.elapsed().as_millis() as u64;
    Ok(FileStats::success(path, &doc.stats, elapsed_ms))
}
