// src/error.rs
use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to read directory '{path}': {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to launch git: {0}")]
    GitLaunch(std::io::Error),

    #[error("git exited with {status}")]
    GitFailed { status: ExitStatus },

    #[error("git output was not valid UTF-8: {0}")]
    GitOutput(#[from] std::string::FromUtf8Error),

    #[error("Status line without separator: '{line}'")]
    StatusParse { line: String },
}

pub type Result<T> = std::result::Result<T, AppError>;
