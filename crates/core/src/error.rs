//! Error types for displayer operations.

use std::{io, path::PathBuf, result};

/// Errors that can occur while persisting presets or fetching fonts.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to encode presets: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP {status} for {url}")]
    Status { url: String, status: reqwest::StatusCode },
}

pub type Result<T> = result::Result<T, Error>;
