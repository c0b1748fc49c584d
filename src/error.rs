use std::fmt;

use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Which upstream read produced a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpstreamSource {
    /// The active task listing.
    ActiveTasks,
    /// The completed task history.
    CompletedTasks,
}

impl fmt::Display for UpstreamSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ActiveTasks => write!(f, "active tasks"),
            Self::CompletedTasks => write!(f, "completed tasks"),
        }
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to fetch {stage}: {reason}")]
    Upstream {
        stage: UpstreamSource,
        reason: String,
    },

    #[error("failed to send message: {reason}")]
    Delivery { reason: String },

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),
}

impl Error {
    /// Whether this error must abort the invocation instead of being reported
    /// as a failed run.
    ///
    /// Read failures only mark the run as failed. Everything else, delivery
    /// failures included, is surfaced to the caller.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::Upstream { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
