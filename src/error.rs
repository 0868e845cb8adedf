use thiserror::Error;

/// Error type for Clockify API operations.
///
/// - `RequestFailed`: network/transport errors (wraps `reqwest::Error`)
/// - `Http`: any status outside 200/201/202/204/205, with the response body
/// - `InvalidField`: a request value failed validation before being sent
/// - `Decode`: a response body did not match its typed model
/// - `Config`: the client could not be configured
#[derive(Debug, Error)]
pub enum ClockifyError {
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("HTTP error {status}: {body}")]
    Http {
        status: u16,
        /// Parsed JSON body; raw text is kept as a JSON string, an empty body
        /// is `null`.
        body: serde_json::Value,
    },

    #[error("Invalid value for `{field}`: {reason}")]
    InvalidField { field: String, reason: String },

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClockifyError {
    pub(crate) fn invalid_field(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// HTTP status code for `Http` errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            Self::RequestFailed(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// The API's `message` field, if the error body carried one.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Http { body, .. } => body
                .get("message")
                .and_then(|v| v.as_str())
                .or_else(|| body.as_str()),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

pub type Result<T> = std::result::Result<T, ClockifyError>;
