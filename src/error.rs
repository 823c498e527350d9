// src/error.rs
// =============================================================================
// Error types shared by the fetch, extract and generate stages.
//
// Each variant is one class of failure:
// - Network: the request could not be sent, or GitHub did not answer 200
// - Malformed body: an issue body is missing a marker, or has them reversed
// - Filesystem: the template or the output directory could not be used
//
// main.rs wraps these in anyhow::Error so the whole chain is printed once.
// =============================================================================

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExamError {
    /// The HTTP request itself failed (DNS, TLS, connection reset, ...)
    #[error("request to GitHub failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The configured API base URL cannot be parsed
    #[error("invalid API URL: {0}")]
    InvalidApiUrl(#[from] url::ParseError),

    /// GitHub answered, but not with 200 OK
    #[error("GitHub search returned HTTP {status}")]
    UnexpectedStatus { status: u16 },

    /// The search response (or a saved issue file) is not the JSON we expect
    #[error("could not parse issue list: {0}")]
    Json(#[from] serde_json::Error),

    /// An issue body does not contain one of the two markers
    #[error("issue #{number} has no {marker} marker")]
    MissingMarker { number: u64, marker: &'static str },

    /// A marker appears more than once in an issue body
    #[error("issue #{number} has more than one {marker} marker")]
    DuplicateMarker { number: u64, marker: &'static str },

    /// The answer marker comes before the question marker
    #[error("issue #{number} has its [Answer] marker before its [Question] marker")]
    MarkerOrder { number: u64 },

    /// The exam label cannot name a single directory below the output root
    #[error("invalid exam label {0:?}: must be a single directory name")]
    InvalidLabel(String),

    /// Reading the template or writing the output failed
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ExamError {
    /// Builds a closure for `map_err` that tags an io::Error with its path
    pub fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> ExamError {
        let path = path.into();
        move |source| ExamError::Io { path, source }
    }
}

pub type Result<T> = std::result::Result<T, ExamError>;
