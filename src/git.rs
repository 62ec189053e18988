// src/git.rs
//! Porcelain `git status` invocation and reformatting.

use std::io::Write;
use std::process::{Command, Stdio};

use crate::error::{AppError, Result};
use crate::sexp;

/// Scope of the status query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Current working directory only.
    CurrentDir,
    /// Whole repository, every untracked path spelled out individually.
    Recursive,
}

impl Scope {
    /// Callers pass any extra argument (value ignored) to request the
    /// recursive query.
    pub fn from_arg_presence(has_args: bool) -> Self {
        if has_args { Self::Recursive } else { Self::CurrentDir }
    }
}

/// Argument vector for the porcelain query. Kept as data so the mode
/// selection is testable without running git.
pub fn status_args(scope: Scope) -> [&'static str; 4] {
    match scope {
        Scope::CurrentDir => ["status", "--porcelain", "--ignored", "."],
        Scope::Recursive => ["status", "--porcelain", "--ignored", "-uall"],
    }
}

/// One parsed porcelain line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusEntry {
    pub code: String,
    pub path: String,
}

/// Splits a porcelain line at the first space. The path keeps any further
/// whitespace intact.
///
/// # Errors
/// Fails on a line with no space separator.
pub fn parse_line(line: &str) -> Result<StatusEntry> {
    let (code, path) = line
        .split_once(' ')
        .ok_or_else(|| AppError::StatusParse { line: line.to_owned() })?;
    Ok(StatusEntry { code: code.to_owned(), path: path.to_owned() })
}

/// Parses captured porcelain output. Trailing whitespace is trimmed first;
/// a fully empty output is a valid empty result, not an error.
///
/// # Errors
/// Propagates the first [`parse_line`] failure.
pub fn parse_status(raw: &str) -> Result<Vec<StatusEntry>> {
    raw.trim_end().lines().map(parse_line).collect()
}

/// Runs the status query in the inherited working directory and returns its
/// captured stdout. stderr passes through to the caller.
///
/// # Errors
/// Fails if git cannot be spawned, exits non-zero (e.g. outside a
/// repository), or prints non-UTF-8 output.
pub fn run_status(scope: Scope) -> Result<String> {
    let output = Command::new("git")
        .args(status_args(scope))
        .stderr(Stdio::inherit())
        .output()
        .map_err(AppError::GitLaunch)?;
    if !output.status.success() {
        return Err(AppError::GitFailed { status: output.status });
    }
    Ok(String::from_utf8(output.stdout)?)
}

/// Writes `(("<code>" . "<path>") ...)`, pairs back to back.
///
/// # Errors
/// Propagates write failures on the sink.
pub fn write_entries(out: &mut impl Write, entries: &[StatusEntry]) -> Result<()> {
    out.write_all(b"(")?;
    for entry in entries {
        sexp::write_pair(out, &entry.code, &entry.path)?;
    }
    out.write_all(b")")?;
    Ok(())
}

/// Full pipeline for the status binary: run, parse, emit.
///
/// # Errors
/// Any of the [`run_status`], [`parse_status`] or [`write_entries`]
/// conditions.
pub fn write_status(out: &mut impl Write, scope: Scope) -> Result<()> {
    let entries = parse_status(&run_status(scope)?)?;
    write_entries(out, &entries)
}
