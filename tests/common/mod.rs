#![allow(dead_code)]

use std::io::Write;
use std::path::PathBuf;

use tempfile::NamedTempFile;

/// Write `contents` to a temp file ending in `suffix` (e.g. ".toml").
///
/// The file is removed when the returned handle is dropped.
pub fn task_file(contents: &str, suffix: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .prefix("tasks-")
        .suffix(suffix)
        .tempfile()
        .unwrap();
    write!(file, "{contents}").unwrap();
    file.flush().unwrap();
    file
}

/// Path of a file under `demos/`.
pub fn demo(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos").join(name)
}
