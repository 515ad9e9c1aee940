//! Source text plumbing: terminator-preserving line splitting and file I/O.
//!
//! The fold pass must be byte-for-byte lossless on everything it does not
//! rewrite, so lines are carried around together with their original
//! terminators instead of being normalized up front.

use std::fs;
use std::path::Path;

/// One physical line: its content and the terminator that followed it.
///
/// The terminator is `"\n"`, `"\r\n"`, or empty for a final line with no
/// trailing newline. Concatenating `content` then `terminator` for every
/// line reproduces the input exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLine<'a> {
    pub content: &'a str,
    pub terminator: &'a str,
}

/// Split text into physical lines, keeping each line's terminator.
#[must_use]
pub fn split_lines(input: &str) -> Vec<SourceLine<'_>> {
    let mut lines = Vec::new();
    let mut rest = input;

    while !rest.is_empty() {
        match rest.find('\n') {
            Some(pos) => {
                let (content, terminator) = if pos > 0 && rest.as_bytes()[pos - 1] == b'\r' {
                    (&rest[..pos - 1], &rest[pos - 1..=pos])
                } else {
                    (&rest[..pos], &rest[pos..=pos])
                };
                lines.push(SourceLine {
                    content,
                    terminator,
                });
                rest = &rest[pos + 1..];
            }
            None => {
                lines.push(SourceLine {
                    content: rest,
                    terminator: "",
                });
                rest = "";
            }
        }
    }

    lines
}

/// Read a source file, or exit with a message on failure.
pub fn read_or_exit(path: &Path) -> String {
    match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => crate::fatal_error(&format!(
            "Error reading file '{}': {e}",
            path.display()
        )),
    }
}

/// Write the folded text back over the source file, or exit on failure.
pub fn rewrite_or_exit(path: &Path, text: &str) {
    if let Err(e) = fs::write(path, text) {
        crate::fatal_error(&format!(
            "Error writing file '{}': {e}",
            path.display()
        ));
    }
}
