//! Fenced Mermaid block extraction
//!
//! Scans Markdown text for fenced blocks tagged `mermaid` (any case) and
//! yields them in document order. Blocks are opaque payloads here; nothing
//! in this module understands the Mermaid language itself.

use std::sync::OnceLock;

use regex::Regex;
use tracing::trace;

use crate::core::DiagramBlock;

/// A complete fenced block: an opening line of three backticks tagged
/// `mermaid`, the definition text, and a closing line of three backticks.
/// Fences must start at the beginning of a line; CRLF documents match.
fn fence_pattern() -> &'static Regex {
    static FENCE_RE: OnceLock<Regex> = OnceLock::new();
    FENCE_RE.get_or_init(|| {
        Regex::new(r"(?ims)^```mermaid[ \t]*\r?\n(.*?)\r?\n```[ \t]*\r?$").expect("valid regex")
    })
}

/// An opening fence line on its own, used to spot fences that never close.
fn open_fence_pattern() -> &'static Regex {
    static OPEN_RE: OnceLock<Regex> = OnceLock::new();
    OPEN_RE.get_or_init(|| Regex::new(r"(?im)^```mermaid[ \t]*\r?$").expect("valid regex"))
}

/// Extract every Mermaid block from a Markdown document
///
/// Returns a lazy iterator over [`DiagramBlock`]s in document order, with
/// indices starting at 0. Content between the fences is captured verbatim
/// and trimmed of leading and trailing whitespace. Zero matches is a
/// normal outcome; malformed or unterminated fences simply fail to match.
pub fn extract_blocks(document: &str) -> impl Iterator<Item = DiagramBlock> + '_ {
    fence_pattern()
        .captures_iter(document)
        .enumerate()
        .map(|(index, caps)| {
            let raw = caps.get(1).map(|m| m.as_str()).unwrap_or("");
            trace!(index, len = raw.len(), "Matched mermaid fence");
            DiagramBlock::new(index, raw)
        })
}

/// 1-based line numbers of opening `mermaid` fences that never close
///
/// An opening fence inside a well-formed block's content does not count;
/// only fences left dangling at extraction time are reported. Callers use
/// this for warn-level diagnostics; the fences themselves stay excluded
/// from extraction results.
pub fn unterminated_fences(document: &str) -> Vec<usize> {
    let matched: Vec<(usize, usize)> = fence_pattern()
        .find_iter(document)
        .map(|m| (m.start(), m.end()))
        .collect();

    open_fence_pattern()
        .find_iter(document)
        .filter(|open| {
            !matched
                .iter()
                .any(|&(start, end)| open.start() >= start && open.start() < end)
        })
        .map(|open| line_number_at(document, open.start()))
        .collect()
}

fn line_number_at(document: &str, offset: usize) -> usize {
    document[..offset].bytes().filter(|&b| b == b'\n').count() + 1
}
