//! Common test helpers shared across integration tests

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(dead_code)] // Not all helpers are used by every test file

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Helper to get the compiled binary path
pub fn get_binary_path() -> PathBuf {
    // Get the directory where cargo places test binaries
    let mut path = env::current_exe().unwrap();
    path.pop(); // Remove test executable name

    // Check if we're in a 'deps' directory (integration tests)
    if path.ends_with("deps") {
        path.pop(); // Go up to debug or release
    }

    path.push("dbfold");

    // If the binary doesn't exist in debug, try building it first
    if !path.exists() {
        let build_output = Command::new("cargo")
            .args(["build", "--bin", "dbfold"])
            .output()
            .expect("Failed to build binary");

        assert!(
            build_output.status.success(),
            "Failed to build dbfold binary: {}",
            String::from_utf8_lossy(&build_output.stderr)
        );
    }

    path
}

/// Helper to create a temporary directory for tests
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Helper to create a source file in a directory, returning its path
pub fn create_source_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

/// Helper to read a source file back
pub fn read_source_file(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

/// Package version for testing --version flag
pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

/// A small database file with one multi-line and one single-line record
pub const SAMPLE: &str = "\
let x = 1;
const PLAYER_DATABASE = {
  \"Alice\": {
    hp: 10,
    mp: 5
  },
  // comment
  \"Bob\": { hp: 20 },
};
console.log(x);
";

/// `SAMPLE` after folding
pub const SAMPLE_FOLDED: &str = "\
let x = 1;
const PLAYER_DATABASE = {
  \"Alice\": { hp: 10, mp: 5 },
  // comment
  \"Bob\": { hp: 20 },
};
console.log(x);
";
