use thiserror::Error;

/// Unified error type for tryrelease operations
#[derive(Error, Debug)]
pub enum TryReleaseError {
    #[error("create http request: {0}")]
    Request(String),

    #[error("http request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("http request timed out after {0}s")]
    Timeout(u64),

    #[error("no release found at {0}")]
    NotFound(String),

    #[error("unexpected HTTP status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("parsing JSON response: {0}")]
    Parse(String),

    #[error("parsing JSON response: missing field 'tag_name'")]
    MissingTag,

    #[error("{which} version is not a valid semver: {value}")]
    InvalidSemver { which: &'static str, value: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in tryrelease
pub type Result<T> = std::result::Result<T, TryReleaseError>;

impl TryReleaseError {
    /// Create a request construction error
    pub fn request(msg: impl Into<String>) -> Self {
        TryReleaseError::Request(msg.into())
    }

    /// Create a response parsing error
    pub fn parse(msg: impl Into<String>) -> Self {
        TryReleaseError::Parse(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        TryReleaseError::Config(msg.into())
    }

    /// Create an invalid semver error naming which side failed validation
    pub fn invalid_semver(which: &'static str, value: impl Into<String>) -> Self {
        TryReleaseError::InvalidSemver {
            which,
            value: value.into(),
        }
    }

    /// True for the "no release published" case, which is not a transport failure
    pub fn is_not_found(&self) -> bool {
        matches!(self, TryReleaseError::NotFound(_))
    }
}
