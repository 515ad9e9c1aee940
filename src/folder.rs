//! The fold pass.
//!
//! A single forward walk over the input lines. Between the start marker and
//! the end marker, each record entry — a quoted key whose object value may
//! span several physical lines — is collapsed onto one line; comment and
//! blank lines inside the region, and everything outside it, pass through
//! verbatim.
//!
//! Record completion is detected textually: a buffer ending in `},` or `}`
//! is treated as closed. There is no brace counter, so a record whose value
//! contains a nested object literal can be closed early (see DESIGN.md).

use crate::pattern::{self, LineKind};
use crate::source::{self, SourceLine};

/// Default text that opens the database region (matched as a substring).
pub const DEFAULT_START_MARKER: &str = "const PLAYER_DATABASE = {";

/// Default trimmed-line text that closes the database region.
pub const DEFAULT_END_MARKER: &str = "};";

/// Region delimiters for a fold pass.
#[derive(Debug, Clone)]
pub struct FoldOptions {
    /// Opens the region when found anywhere in a line.
    pub start_marker: String,
    /// Closes the region when it equals the trimmed line.
    pub end_marker: String,
}

impl Default for FoldOptions {
    fn default() -> Self {
        Self {
            start_marker: DEFAULT_START_MARKER.to_string(),
            end_marker: DEFAULT_END_MARKER.to_string(),
        }
    }
}

/// Result of one fold pass.
#[derive(Debug, Clone)]
pub struct FoldOutcome {
    /// The rewritten text.
    pub text: String,
    /// Physical lines consumed.
    pub lines_in: usize,
    /// Physical lines emitted.
    pub lines_out: usize,
    /// Record buffers flushed to the output.
    pub records: usize,
    /// Records that merged more than one physical line.
    pub records_folded: usize,
}

/// Where the pass currently is relative to the database region.
///
/// The reference behavior kept an `in_db` boolean next to a string buffer;
/// reifying the pair as one enum makes the transitions auditable.
#[derive(Debug)]
enum State {
    /// Before the start marker or after the end marker.
    Outside,
    /// Inside the region with no record open.
    Idle,
    /// Inside the region with an open record buffer.
    Accumulating {
        /// Folded text so far, starting from the right-stripped record line.
        buffer: String,
        /// Physical lines merged into the buffer.
        merged: usize,
    },
}

struct Folder<'a> {
    options: &'a FoldOptions,
    state: State,
    out: String,
    lines_in: usize,
    lines_out: usize,
    records: usize,
    records_folded: usize,
    /// Terminator of the most recently consumed line, used to decide whether
    /// an end-of-input flush gets a trailing newline.
    last_terminator: &'a str,
}

impl<'a> Folder<'a> {
    fn new(options: &'a FoldOptions) -> Self {
        Self {
            options,
            state: State::Outside,
            out: String::new(),
            lines_in: 0,
            lines_out: 0,
            records: 0,
            records_folded: 0,
            last_terminator: "",
        }
    }

    fn push_line(&mut self, line: SourceLine<'a>) {
        self.lines_in += 1;
        self.last_terminator = line.terminator;

        // Region transitions take precedence over line classification.
        if matches!(self.state, State::Outside) {
            if line.content.contains(&self.options.start_marker) {
                self.state = State::Idle;
            }
            self.emit_verbatim(line);
            return;
        }

        if line.content.trim() == self.options.end_marker {
            self.flush();
            self.state = State::Outside;
            self.emit_verbatim(line);
            return;
        }

        let trimmed = line.content.trim();
        match pattern::classify(trimmed) {
            LineKind::Blank | LineKind::Comment => {
                self.flush();
                self.emit_verbatim(line);
            }
            LineKind::RecordStart => {
                self.flush();
                // Keep the key's indentation; everything after folds flat.
                self.state = State::Accumulating {
                    buffer: line.content.trim_end().to_string(),
                    merged: 1,
                };
                self.close_if_complete();
            }
            LineKind::Content => {
                if let State::Accumulating { buffer, merged } = &mut self.state {
                    buffer.push(' ');
                    buffer.push_str(trimmed);
                    *merged += 1;
                } else {
                    // Continuation with no open record: malformed input,
                    // keep the raw line rather than failing.
                    self.emit_verbatim(line);
                    return;
                }
                self.close_if_complete();
            }
        }
    }

    fn emit_verbatim(&mut self, line: SourceLine<'a>) {
        self.out.push_str(line.content);
        self.out.push_str(line.terminator);
        self.lines_out += 1;
    }

    /// Flush the open record buffer, if any, as one line ending in `\n`.
    fn flush(&mut self) {
        if let State::Accumulating { buffer, merged } =
            std::mem::replace(&mut self.state, State::Idle)
        {
            self.out.push_str(&buffer);
            self.out.push('\n');
            self.lines_out += 1;
            self.records += 1;
            if merged > 1 {
                self.records_folded += 1;
            }
        }
    }

    /// A buffer ending in `},` or `}` is a finished record.
    fn close_if_complete(&mut self) {
        if let State::Accumulating { buffer, .. } = &self.state
            && (buffer.ends_with("},") || buffer.ends_with('}'))
        {
            self.flush();
        }
    }

    fn finish(mut self) -> FoldOutcome {
        // An unterminated record at end of input (missing end marker) is
        // still emitted; it only gets a newline if the last input line
        // carried one.
        if let State::Accumulating { buffer, merged } =
            std::mem::replace(&mut self.state, State::Idle)
        {
            self.out.push_str(&buffer);
            if !self.last_terminator.is_empty() {
                self.out.push('\n');
            }
            self.lines_out += 1;
            self.records += 1;
            if merged > 1 {
                self.records_folded += 1;
            }
        }

        FoldOutcome {
            text: self.out,
            lines_in: self.lines_in,
            lines_out: self.lines_out,
            records: self.records,
            records_folded: self.records_folded,
        }
    }
}

/// Run the fold pass over a full text.
#[must_use]
pub fn fold_text(input: &str, options: &FoldOptions) -> FoldOutcome {
    let mut folder = Folder::new(options);
    for line in source::split_lines(input) {
        folder.push_line(line);
    }
    folder.finish()
}
