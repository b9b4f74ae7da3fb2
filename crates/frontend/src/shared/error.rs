use contracts::shared::api_error::flatten_error_body;
use serde_json::Value;
use thiserror::Error;

/// Errors of the REST client layer
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    /// No response at all (offline, CORS, DNS...)
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx response; `body` is the parsed JSON payload when there is one
    #[error("HTTP error {status}")]
    Http { status: u16, body: Option<Value> },

    /// 2xx response whose body does not have the expected shape
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// A `next` cursor pointed back to a page already fetched in the same walk
    #[error("Pagination loop at {0}")]
    PaginationLoop(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// One-line message for the UI
    ///
    /// Validation payloads are flattened as `field: msg, msg | field: msg`.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Http {
                body: Some(body), ..
            } => flatten_error_body(body).unwrap_or_else(|| self.to_string()),
            ApiError::Network(_) => "No fue posible conectar con el servidor".to_string(),
            _ => self.to_string(),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}
