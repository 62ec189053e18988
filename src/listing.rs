// src/listing.rs
//! Single-level directory enumeration for the lister binaries.
//!
//! Enumeration order is whatever `read_dir` yields; the consuming editor
//! relies on it being passed through unsorted.

use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{AppError, Result};
use crate::sexp;

/// One visible, readable child of the listed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub path: PathBuf,
    pub kind: EntryKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A plain file (symlinks resolved).
    File,
    /// Everything else: directories, special files, symlinks whose target
    /// is not a plain file. Two buckets only, matching what the caller
    /// expects to `read`.
    Directory,
}

fn is_hidden(name: &OsStr) -> bool {
    name.as_encoded_bytes().first() == Some(&b'.')
}

/// Readable means the entry can actually be opened, not just that a
/// permission bit is set.
fn is_readable(path: &Path, kind: EntryKind) -> bool {
    match kind {
        EntryKind::File => File::open(path).is_ok(),
        EntryKind::Directory => fs::read_dir(path).is_ok(),
    }
}

/// Enumerates the visible, readable children of `dir`, in `read_dir` order.
/// Paths are absolute: `dir` is resolved lexically (symlinks preserved)
/// before joining.
///
/// # Errors
/// Fails if `dir` does not exist, is not a directory, or a directory entry
/// cannot be read.
pub fn read_entries(dir: &Path) -> Result<Vec<Entry>> {
    let dir = std::path::absolute(dir)?;
    let read_err = |source| AppError::ReadDir { path: dir.clone(), source };
    let mut entries = Vec::new();
    for item in fs::read_dir(&dir).map_err(read_err)? {
        let item = item.map_err(read_err)?;
        if is_hidden(&item.file_name()) {
            continue;
        }
        let path = item.path();
        let kind = if path.is_file() { EntryKind::File } else { EntryKind::Directory };
        if !is_readable(&path, kind) {
            continue;
        }
        entries.push(Entry { path, kind });
    }
    Ok(entries)
}

fn write_group(out: &mut impl Write, entries: &[Entry], kind: EntryKind) -> Result<()> {
    let paths: Vec<_> = entries
        .iter()
        .filter(|e| e.kind == kind)
        .map(|e| e.path.to_string_lossy().into_owned())
        .collect();
    sexp::write_quoted_seq(out, paths.iter().map(String::as_str))?;
    Ok(())
}

/// Writes `((<file> ...)(<dir> ...))` for the split lister.
///
/// # Errors
/// Propagates enumeration failures from [`read_entries`] and write failures
/// on the sink.
pub fn write_split(out: &mut impl Write, dir: &Path) -> Result<()> {
    let entries = read_entries(dir)?;
    out.write_all(b"((")?;
    write_group(out, &entries, EntryKind::File)?;
    out.write_all(b")(")?;
    write_group(out, &entries, EntryKind::Directory)?;
    out.write_all(b"))")?;
    Ok(())
}

/// Writes `(<file> ...)` for the flat lister. Same filtering as the split
/// lister, restricted to the file bucket.
///
/// # Errors
/// Same conditions as [`write_split`].
pub fn write_files(out: &mut impl Write, dir: &Path) -> Result<()> {
    let entries = read_entries(dir)?;
    out.write_all(b"(")?;
    write_group(out, &entries, EntryKind::File)?;
    out.write_all(b")")?;
    Ok(())
}
