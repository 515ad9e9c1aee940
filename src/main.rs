//! # dbfold
//!
//! Collapse the multi-line player entries of a `PLAYER_DATABASE` object
//! literal onto single lines, leaving everything else in the file untouched.
//!
//! ## Usage
//!
//! - Rewrite a file in place: `dbfold script.js`
//! - Preview without writing: `dbfold script.js --stdout`
//! - CI check: `dbfold script.js --check`
//!
//! See README.md for more details and examples.

/// Entry point for the CLI tool.
fn main() {
    dbfold::cli::run_cli();
}
