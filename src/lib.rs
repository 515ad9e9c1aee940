//! # dbfold
//!
//! A one-shot formatter that collapses the multi-line record entries of a
//! JavaScript object-literal database onto single lines.

pub mod cli;
pub mod folder;
pub mod pattern;
pub mod report;
pub mod source;

/// Print an error message and exit with code 1.
pub fn fatal_error(message: &str) -> ! {
    eprintln!("{message}");
    std::process::exit(1);
}
