//! Error types for the MovieOp CLI

use thiserror::Error;

/// Result type alias for MovieOp operations
pub type Result<T> = std::result::Result<T, Error>;

/// Result type alias for catalog client operations
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Dialoguer(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Command input rejected before any request was sent
    #[error("{0}")]
    Validation(&'static str),

    /// A core API failure surfaced through a command
    #[error("{message}")]
    Command {
        message: &'static str,
        #[source]
        source: ApiError,
    },
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Dialoguer(err.to_string())
    }
}

/// Errors raised by the movie catalog client
#[derive(Debug, Error)]
pub enum ApiError {
    /// The token endpoint rejected the credentials or returned an unreadable token
    #[error("{reason}")]
    Authentication {
        reason: &'static str,
        #[source]
        source: Option<serde_json::Error>,
    },

    /// A catalog call failed or returned an unexpected body
    #[error("{reason}")]
    RemoteCall {
        reason: &'static str,
        #[source]
        source: Option<serde_json::Error>,
    },

    #[error("Network error: {0}")]
    Network(String),
}

impl ApiError {
    pub(crate) fn authentication(reason: &'static str) -> Self {
        ApiError::Authentication {
            reason,
            source: None,
        }
    }

    pub(crate) fn remote_call(reason: &'static str) -> Self {
        ApiError::RemoteCall {
            reason,
            source: None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to API".to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found. Run `movieop init` to set up.")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),

    #[error("Client credentials not configured. Run `movieop init` or set MOVIEOP_CLIENT_ID and MOVIEOP_CLIENT_SECRET.")]
    MissingCredentials,

    #[error("API base URL not configured. Run `movieop init` or set MOVIEOP_BASE_URL.")]
    MissingBaseUrl,

    #[error("Invalid API base URL '{0}'")]
    InvalidBaseUrl(String),
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
