//! Error types for the Binance price client

use std::time::Duration;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Pipeline stage an [`Error`] originated from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Loading client configuration
    Config,
    /// Building the request (symbol, query string)
    Request,
    /// Talking to the endpoint (transport, status, timeout)
    Fetch,
    /// Decoding the response body as JSON
    Parse,
    /// Reading a field out of the decoded JSON
    Extract,
}

/// Errors produced while fetching and extracting a ticker price
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid configuration value
    #[error("Error in configuration: {0}")]
    Config(String),

    /// The symbol cannot be sent to the endpoint
    #[error("Error in request: invalid symbol {0:?}")]
    InvalidSymbol(String),

    /// Query string serialization failed
    #[error("Error in request: {0}")]
    Url(#[from] serde_urlencoded::ser::Error),

    /// Connection, TLS or body read failure
    #[error("Error fetching market data: {0}")]
    Transport(String),

    /// Transport failure reported by reqwest
    #[cfg(feature = "reqwest")]
    #[error("Error fetching market data: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// No response within the client timeout
    #[error("Error fetching market data: request timed out after {}s", .0.as_secs_f64())]
    Timeout(Duration),

    /// The endpoint answered with a non-2xx status
    #[error("Error fetching market data: HTTP {status}{}: {message}", code_suffix(.code))]
    Api {
        /// HTTP status code
        status: u16,
        /// Binance error code, when the body carried one
        code: Option<i64>,
        /// Binance error message, or the raw body
        message: String,
        /// Value of the `x-mbx-uuid` response header
        request_id: Option<String>,
    },

    /// The body is not valid JSON
    #[error("Error parsing JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The decoded JSON is not an object
    #[error("Error extracting price: expected a JSON object, found {found}")]
    NotAnObject {
        /// Kind of the top-level value
        found: &'static str,
    },

    /// A required key is absent from the object
    #[error("Error extracting price: response has no `{0}` field")]
    MissingField(String),

    /// A key is present but holds the wrong kind of value
    #[error("Error extracting price: field `{field}` should be a {expected}, found {found}")]
    FieldType {
        /// Key that was looked up
        field: String,
        /// Expected JSON kind
        expected: &'static str,
        /// Actual JSON kind
        found: &'static str,
    },
}

fn code_suffix(code: &Option<i64>) -> String {
    code.map(|c| format!(" (code {c})")).unwrap_or_default()
}

impl Error {
    /// The pipeline stage this error belongs to
    pub fn stage(&self) -> Stage {
        match self {
            Error::Config(_) => Stage::Config,
            Error::InvalidSymbol(_) | Error::Url(_) => Stage::Request,
            Error::Transport(_) | Error::Timeout(_) | Error::Api { .. } => Stage::Fetch,
            #[cfg(feature = "reqwest")]
            Error::Reqwest(_) => Stage::Fetch,
            Error::Json(_) => Stage::Parse,
            Error::NotAnObject { .. } | Error::MissingField(_) | Error::FieldType { .. } => Stage::Extract,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_error_message_prefix() {
        let err: Error = serde_json::from_str::<serde_json::Value>("not json").unwrap_err().into();
        assert_eq!(err.stage(), Stage::Parse);
        assert!(err.to_string().starts_with("Error parsing JSON: "), "{err}");
    }

    #[test]
    fn test_api_error_display() {
        let err = Error::Api {
            status: 400,
            code: Some(-1121),
            message: "Invalid symbol.".to_string(),
            request_id: None,
        };
        assert_eq!(
            err.to_string(),
            "Error fetching market data: HTTP 400 (code -1121): Invalid symbol."
        );

        let err = Error::Api {
            status: 502,
            code: None,
            message: "Bad Gateway".to_string(),
            request_id: None,
        };
        assert_eq!(err.to_string(), "Error fetching market data: HTTP 502: Bad Gateway");
    }

    #[test]
    fn test_stages_are_distinct() {
        assert_eq!(Error::Timeout(Duration::from_secs(10)).stage(), Stage::Fetch);
        assert_eq!(Error::MissingField("price".into()).stage(), Stage::Extract);
        assert_eq!(Error::InvalidSymbol("".into()).stage(), Stage::Request);
        assert_eq!(Error::Config("bad".into()).stage(), Stage::Config);
    }

    #[test]
    fn test_timeout_display() {
        let err = Error::Timeout(Duration::from_millis(2500));
        assert_eq!(err.to_string(), "Error fetching market data: request timed out after 2.5s");
    }
}
