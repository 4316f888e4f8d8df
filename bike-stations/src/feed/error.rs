//! Feed loading error types.

use std::path::PathBuf;

/// Errors that can occur when reading a station feed.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// Reading the feed file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The feed is not valid station JSON
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The feed is not valid station CSV
    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    /// The file extension is neither `.json` nor `.csv`
    #[error("unsupported feed format: {}", path.display())]
    UnsupportedFormat { path: PathBuf },

    /// A record parsed but cannot describe a station
    #[error("invalid record {index}: {reason}")]
    InvalidRecord { index: usize, reason: &'static str },
}
