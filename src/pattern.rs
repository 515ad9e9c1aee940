//! Line classification using pest
//!
//! The folder does not parse JavaScript; it only recognizes the handful of
//! line shapes that drive the fold pass. The shapes live in `grammar.pest`
//! and are matched as prefixes of the trimmed line, which mirrors the
//! anchored-at-start matching the tool has always used.

use pest::Parser;
use pest_derive::Parser;

#[derive(Parser)]
#[grammar = "grammar.pest"]
pub struct LineParser;

/// The shape of a single trimmed line inside the database region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Nothing but whitespace.
    Blank,
    /// Starts with the `//` comment token.
    Comment,
    /// A quoted key, a colon, and an opening brace: a record entry begins.
    RecordStart,
    /// Anything else: continuation content of an open record.
    Content,
}

/// Classify a trimmed line by shape.
///
/// Grammar rules match prefixes, so `"Alice": { hp: 10 },` classifies as
/// `RecordStart` even though the rule only consumes up to the opening brace.
#[must_use]
pub fn classify(trimmed: &str) -> LineKind {
    if trimmed.is_empty() {
        LineKind::Blank
    } else if LineParser::parse(Rule::line_comment, trimmed).is_ok() {
        LineKind::Comment
    } else if LineParser::parse(Rule::record_start, trimmed).is_ok() {
        LineKind::RecordStart
    } else {
        LineKind::Content
    }
}
