use taqti::artifacts;
use taqti::pipeline::Pipeline;
use taqti::reader;
use tempfile::TempDir;

const OPENITI_SAMPLE: &str = "######OpenITI#\n\
#META# 010.AuthorName\n\
#META#Header#End#\n\n\
ذكر من حدث ونسي # قال حدثنا يحيى ## عن أبيه";

/// End-to-end: read a document with an OpenITI header, run the pipeline,
/// and check every stage against known-good output.
#[tokio::test]
async fn test_pipeline_single_document() {
    let tmp = TempDir::new().unwrap();
    let src = tmp.path().join("book.txt");
    tokio::fs::write(&src, OPENITI_SAMPLE).await.unwrap();

    let raw = reader::read_document_async(&src).await.expect("read should succeed");
    let pipeline = Pipeline::with_default_rules().expect("default rules compile");
    let doc = pipeline.process(&raw);

    assert!(doc.metadata.starts_with("######OpenITI#"));
    assert_eq!(
        doc.sentences,
        vec!["ذكر من حدث ونسي", "قال حدثنا يحيى", "عن أبيه"]
    );

    // Spans are sentence-relative and contiguous.
    let first = &doc.tokens[0];
    assert_eq!(first.len(), 4);
    assert_eq!(first[0].start_offset, 0);
    assert_eq!(first[0].end_offset, 3);
    assert_eq!(first[1].start_offset, 4);
    assert_eq!(doc.tokens[2][0].start_offset, 0);
}

#[tokio::test]
async fn test_artifacts_golden_content() {
    let tmp = TempDir::new().unwrap();
    let out_dir = tmp.path().join("out");
    tokio::fs::create_dir_all(&out_dir).await.unwrap();

    let pipeline = Pipeline::with_default_rules().unwrap();
    let doc = pipeline.process("ذكر من#حدث");

    let paths = artifacts::write_artifacts(&doc, &out_dir, None).await.unwrap();

    let tokens = tokio::fs::read_to_string(&paths.tokens).await.unwrap();
    assert_eq!(tokens, "ذكر\nمن\n\nحدث");

    let sentences = tokio::fs::read_to_string(&paths.sentences).await.unwrap();
    assert_eq!(sentences, "ذكر من\nحدث");

    let table = tokio::fs::read_to_string(&paths.doc_table).await.unwrap();
    let expected = "\tposition\ttoken\tstart_offset\tend_offset\n\
                    0\t0\tذكر\t0\t3\n\
                    1\t1\tمن\t4\t6\n\
                    2\t0\tحدث\t0\t3\n";
    assert_eq!(table, expected);
}

#[tokio::test]
async fn test_document_without_header_is_tolerated() {
    // One-shot convenience entry point, no pipeline construction needed.
    let doc = taqti::process_document("قال حدثنا # سفيان").unwrap();

    assert!(doc.metadata.is_empty());
    assert_eq!(doc.sentences, vec!["قال حدثنا", "سفيان"]);
}

#[tokio::test]
async fn test_marker_heavy_document_produces_no_empty_sentences() {
    let pipeline = Pipeline::with_default_rules().unwrap();
    let doc = pipeline.process("### ذكر #### من ###");

    assert_eq!(doc.sentences, vec!["ذكر", "من"]);
    for sentence in &doc.sentences {
        assert!(!sentence.trim().is_empty());
    }
}
