use std::path::Path;
use taqti::artifacts;
use taqti::discovery;
use taqti::pipeline::Pipeline;
use taqti::reader::{DocumentReader, ReaderConfig};
use taqti::stats::{FileStats, RunStats};
use tempfile::TempDir;

async fn write_source(dir: &Path, name: &str, content: &str) {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await.unwrap();
    }
    tokio::fs::write(&path, content).await.unwrap();
}

/// Directory mode: every discovered document yields three artifacts named
/// with the source file name as prefix.
#[tokio::test]
async fn test_batch_prefixed_artifacts() {
    let tmp = TempDir::new().unwrap();
    let src_dir = tmp.path().join("corpus");
    let out_dir = tmp.path().join("out");
    tokio::fs::create_dir_all(&out_dir).await.unwrap();

    write_source(&src_dir, "first.txt", "ذكر من#حدث").await;
    write_source(&src_dir, "nested/second.txt", "قال سمعت").await;

    let files = discovery::find_input_files(&src_dir).await.unwrap();
    assert_eq!(files.len(), 2);

    let pipeline = Pipeline::with_default_rules().unwrap();
    let reader = DocumentReader::new(ReaderConfig::default());

    for path in &files {
        let (raw, _) = reader.read_document(path).await.unwrap();
        let doc = pipeline.process(&raw);
        let name = path.file_name().unwrap().to_str().unwrap();
        artifacts::write_artifacts(&doc, &out_dir, Some(name)).await.unwrap();
    }

    assert!(out_dir.join("first.txt_tokens.txt").exists());
    assert!(out_dir.join("first.txt_sentences.txt").exists());
    assert!(out_dir.join("first.txt_doc.tsv").exists());
    assert!(out_dir.join("second.txt_tokens.txt").exists());

    let sentences = tokio::fs::read_to_string(out_dir.join("second.txt_sentences.txt"))
        .await
        .unwrap();
    assert_eq!(sentences, "قال سمعت");
}

#[tokio::test]
async fn test_batch_skips_hidden_files() {
    let tmp = TempDir::new().unwrap();
    let src_dir = tmp.path().join("corpus");

    write_source(&src_dir, "visible.txt", "ذكر").await;
    write_source(&src_dir, ".DS_Store", "junk").await;

    let files = discovery::find_input_files(&src_dir).await.unwrap();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].file_name().unwrap(), "visible.txt");
}

/// A tolerant batch run records failures in the run stats and keeps going.
#[tokio::test]
async fn test_batch_tolerant_run_stats() {
    let tmp = TempDir::new().unwrap();
    let src_dir = tmp.path().join("corpus");
    write_source(&src_dir, "good.txt", "ذكر من # حدث").await;
    let bad_path = src_dir.join("bad.txt");
    std::fs::write(&bad_path, [0xFF, 0xFE, 0xFD]).unwrap();

    let pipeline = Pipeline::with_default_rules().unwrap();
    let reader = DocumentReader::new(ReaderConfig { fail_fast: false });
    let mut run_stats = RunStats::default();

    let mut files = discovery::find_input_files(&src_dir).await.unwrap();
    files.sort();

    for path in &files {
        let (raw, read_stats) = reader.read_document(path).await.unwrap();
        match read_stats.read_error {
            Some(error) => run_stats.record(FileStats::failed(path, error)),
            None => {
                let doc = pipeline.process(&raw);
                run_stats.record(FileStats::success(path, &doc.stats, 0));
            }
        }
    }

    assert_eq!(run_stats.total_files, 2);
    assert_eq!(run_stats.successful, 1);
    assert_eq!(run_stats.failed, 1);
    assert_eq!(run_stats.total_sentences, 2);

    // The stats file itself round-trips through JSON.
    let stats_path = tmp.path().join("run_stats.json");
    run_stats.save(&stats_path).await.unwrap();
    let loaded: taqti::RunStats =
        serde_json::from_str(&tokio::fs::read_to_string(&stats_path).await.unwrap()).unwrap();
    assert_eq!(loaded.failed, 1);
}

/// Fail-fast reading surfaces the unreadable document as an error that
/// names the offending path.
#[tokio::test]
async fn test_batch_fail_fast_names_path() {
    let tmp = TempDir::new().unwrap();
    let missing = tmp.path().join("gone.txt");

    let reader = DocumentReader::new(ReaderConfig { fail_fast: true });
    let err = reader.read_document(&missing).await.unwrap_err();
    assert!(err.to_string().contains("gone.txt"));
}
