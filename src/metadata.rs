/// OpenITI header-termination marker, followed by exactly two newlines.
/// Everything before it is metadata; everything after is the Arabic body.
pub const METADATA_DELIMITER: &str = "#META#Header#End#\n\n";

/// Split a raw OpenITI document into its metadata header and text body.
///
/// Partition-style semantics: if the delimiter is absent the whole input is
/// returned as the body and the metadata is empty. Never fails.
pub fn split_metadata(raw: &str) -> (String, String) {
    match raw.find(METADATA_DELIMITER) {
        Some(pos) => {
            let body_start = pos + METADATA_DELIMITER.len();
            (raw[..pos].to_string(), raw[body_start..].to_string())
        }
        None => (String::new(), raw.to_string()),
    }
}
