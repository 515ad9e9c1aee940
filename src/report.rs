//! Run summary for programmatic consumption.

use crate::folder::FoldOutcome;
use serde::{Deserialize, Serialize};

/// Summary of one fold pass over a file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoldReport {
    /// File that was processed.
    pub file: String,

    /// Physical lines read.
    pub lines_in: usize,

    /// Physical lines written.
    pub lines_out: usize,

    /// Record buffers emitted (including records already on one line).
    pub records: usize,

    /// Records that merged more than one physical line.
    pub records_folded: usize,

    /// Whether the output differs from the input.
    pub changed: bool,

    /// Human-readable summary.
    pub summary: String,
}

impl FoldReport {
    /// Build a report from a completed fold pass.
    #[must_use]
    pub fn from_outcome(file: &str, outcome: &FoldOutcome, changed: bool) -> Self {
        let summary = if changed {
            format!(
                "{file}: folded {} record(s), {} -> {} lines",
                outcome.records_folded, outcome.lines_in, outcome.lines_out
            )
        } else {
            format!("{file}: already folded")
        };

        Self {
            file: file.to_string(),
            lines_in: outcome.lines_in,
            lines_out: outcome.lines_out,
            records: outcome.records,
            records_folded: outcome.records_folded,
            changed,
            summary,
        }
    }

    /// Format as JSON for programmatic consumption.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}
