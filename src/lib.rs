// src/lib.rs
//! Helper library behind the `lsexp` binaries.
//!
//! Each binary does one thing: enumerate a directory or run a `git status`
//! query, then print the result as an s-expression literal for the calling
//! editor process to `read`. All emitters take an explicit output sink so
//! behavior is testable without touching process-global stdout.

pub mod error;
pub mod git;
pub mod listing;
pub mod sexp;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
