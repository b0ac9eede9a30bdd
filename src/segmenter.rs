use tracing::debug;

/// Sentence-boundary marker consumed during segmentation.
pub const BOUNDARY_MARKER: char = '#';

/// Reassemble the filtered run stream into sentences.
///
/// Runs are joined with a single space into one canonical string, which is
/// then split on the boundary marker. Markers never appear in any sentence;
/// segments that are empty after trimming are dropped, so consecutive
/// markers and markers at the stream edges produce no spurious sentences.
pub fn segment_sentences(runs: &[String]) -> Vec<String> {
    let joined = runs.join(" ");

    let sentences: Vec<String> = joined
        .split(BOUNDARY_MARKER)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    debug!("Segmented {} runs into {} sentences", runs.len(), sentences.len());
    sentences
}
