//! Shared utilities used across multiple modules.
//!
//! Provides binary file detection (shared by the walker and the tokenizer)
//! and an atomic file-rewrite helper used by the annotator.

use std::fs::{self, File};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::Path;

/// Check whether a reader points to a binary file by looking for null bytes
/// in the first 512 bytes. Resets the reader position to the start afterward.
pub fn is_binary_reader<R: Read + Seek>(reader: &mut R) -> io::Result<bool> {
    let mut header = [0u8; 512];
    let n = reader.read(&mut header)?;
    reader.seek(SeekFrom::Start(0))?;
    Ok(header[..n].contains(&0))
}

/// Check whether a file on disk looks binary, without reading it fully.
pub fn is_binary_file(path: &Path) -> io::Result<bool> {
    let mut file = File::open(path)?;
    is_binary_reader(&mut file)
}

/// Overwrite `path` with `contents` atomically: write to a sibling temporary
/// file in the same directory, then rename it over the original. A failure
/// at any point before the rename leaves the original file untouched.
pub fn atomic_write(path: &Path, contents: &str) -> io::Result<()> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .ok_or_else(|| io::Error::other("path has no file name"))?;

    let mut tmp_name = std::ffi::OsString::from(".");
    tmp_name.push(file_name);
    tmp_name.push(".tmp");
    let tmp_path = dir.join(tmp_name);

    let mut tmp_file = File::create(&tmp_path)?;
    tmp_file.write_all(contents.as_bytes())?;
    tmp_file.sync_all()?;
    drop(tmp_file);

    fs::rename(&tmp_path, path).inspect_err(|_| {
        let _ = fs::remove_file(&tmp_path);
    })
}

#[cfg(test)]
#[path = "util_test.rs"]
mod tests;
