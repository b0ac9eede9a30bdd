use serde::{Deserialize, Serialize};
use tracing::debug;

/// One whitespace-split token with its position and character span inside
/// the single-space-joined reconstruction of its sentence.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TokenRecord {
    /// 0-based ordinal of the token within its sentence
    pub position: usize,
    pub text: String,
    /// Character offset of the first character, relative to the sentence
    pub start_offset: usize,
    /// Character offset one past the last character
    pub end_offset: usize,
}

/// Index every sentence into position-and-offset token records.
///
/// Tokens come from conventional whitespace splitting (runs of whitespace
/// collapse, no empty tokens at the edges). Offsets count Unicode scalar
/// values in the sentence reconstructed as tokens joined by single spaces,
/// so consecutive tokens satisfy `start[i+1] == end[i] + 1`. The cursor
/// resets to 0 at the start of every sentence; offsets never carry across
/// sentence boundaries.
pub fn index_tokens(sentences: &[String]) -> Vec<Vec<TokenRecord>> {
    let mut document = Vec::with_capacity(sentences.len());

    for sentence in sentences {
        let mut cursor = 0usize;
        let mut records = Vec::new();

        for (position, token) in sentence.split_whitespace().enumerate() {
            let token_len = token.chars().count();
            records.push(TokenRecord {
                position,
                text: token.to_string(),
                start_offset: cursor,
                end_offset: cursor + token_len,
            });
            cursor += token_len + 1;
        }

        document.push(records);
    }

    debug!("Indexed {} sentences", document.len());
    document
}
