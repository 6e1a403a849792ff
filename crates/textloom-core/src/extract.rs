//! Block extraction from streamed text.
//!
//! The extractor scans raw text for fenced component regions, promotes
//! well-formed payloads to [`Block`]s, substitutes positional placeholder
//! tokens, and cuts off a trailing fence that is still streaming in so
//! partial payload syntax is never shown as text.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::Block;

/// Opening marker that introduces a component block payload.
pub const OPEN_FENCE: &str = "```block";

/// Complete fenced region: opening marker, newline, non-greedy payload,
/// closing marker. Multiple non-overlapping occurrences are supported.
static FENCED_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)```block[ \t]*\n(.*?)```").expect("fence pattern is valid")
});

/// Result of scanning raw text for component blocks.
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    /// Accepted blocks in document order.
    pub blocks: Vec<Block>,
    /// Input text with each accepted block replaced by its placeholder
    /// token and any trailing unterminated region removed.
    pub text: String,
}

/// Positional placeholder substituted for the block at `index`.
pub fn placeholder_token(index: usize) -> String {
    format!("BLOCK_{index}")
}

/// Fast predicate: does the text contain any opening marker at all,
/// complete or still streaming? Callers use this to skip the pipeline
/// entirely for plain text.
pub fn contains_block_marker(text: &str) -> bool {
    text.contains(OPEN_FENCE)
}

/// Scan `text` for fenced component regions.
///
/// A payload is accepted only when it parses as JSON with both a `uid`
/// string and a `data` mapping; malformed regions are left untouched as
/// literal text. Content from an unterminated trailing opening marker to the
/// end of the document is discarded, with preceding whitespace trimmed.
pub fn extract_blocks(text: &str) -> Extraction {
    let mut blocks = Vec::new();
    let mut output = String::with_capacity(text.len());
    let mut cursor = 0;

    for captures in FENCED_BLOCK.captures_iter(text) {
        let region = captures.get(0).expect("capture 0 is the whole match");
        let payload = captures.get(1).map_or("", |m| m.as_str());

        output.push_str(&text[cursor..region.start()]);
        match serde_json::from_str::<Block>(payload.trim()) {
            Ok(block) => {
                output.push_str(&placeholder_token(blocks.len()));
                blocks.push(block);
            }
            // Malformed payloads are not promoted; the raw region stays
            // visible as literal text.
            Err(_) => output.push_str(region.as_str()),
        }
        cursor = region.end();
    }

    // Streaming-in-progress case: an opening marker in the remaining tail
    // has no closing marker, so everything from the marker onward is cut.
    let tail = &text[cursor..];
    match tail.find(OPEN_FENCE) {
        Some(open) => {
            output.push_str(&tail[..open]);
            output.truncate(output.trim_end().len());
        }
        None => output.push_str(tail),
    }

    Extraction { blocks, text: output }
}
