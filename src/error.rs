// ABOUTME: Error types with structured exit codes for CLI
// ABOUTME: One variant per pipeline step so failures name where they happened

use std::path::PathBuf;
use thiserror::Error;

fn status_label(status: &Option<u16>) -> String {
    match status {
        Some(code) => format!("status {}", code),
        None => "no response".into(),
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Could not extract text from {}: {reason}", .path.display())]
    Extraction { path: PathBuf, reason: String },

    #[error("Formatting error ({}): {message}", status_label(.status))]
    Formatting { status: Option<u16>, message: String },

    #[error("Lookup error on {endpoint} ({}): {message}", status_label(.status))]
    Lookup {
        endpoint: String,
        status: Option<u16>,
        message: String,
    },

    #[error("Create error on {endpoint} ({}): {message}", status_label(.status))]
    Create {
        endpoint: String,
        status: Option<u16>,
        message: String,
    },

    #[error("Update error on {endpoint} ({}): {message}", status_label(.status))]
    Update {
        endpoint: String,
        status: Option<u16>,
        message: String,
    },

    #[error("Link error on {endpoint} ({}): {message}", status_label(.status))]
    Link {
        endpoint: String,
        status: Option<u16>,
        message: String,
    },

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Filesystem error: {0}")]
    Filesystem(#[from] std::io::Error),
}

impl Error {
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Auth(_) => 2,
            Error::Network(_) => 3,
            Error::Extraction { .. } => 4,
            Error::Formatting { .. } => 5,
            Error::Lookup { .. } => 6,
            Error::Create { .. } => 7,
            Error::Update { .. } => 8,
            Error::Link { .. } => 9,
            Error::Parse(_) => 10,
            Error::Filesystem(_) => 11,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
