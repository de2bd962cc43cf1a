//! NetworkAPI client errors

use crate::codes::ApiErrorKind;
use thiserror::Error;

/// Errors that can occur when interacting with the NetworkAPI
#[derive(Debug, Error)]
pub enum NetworkApiError {
    /// A parameter failed local validation; no request was sent
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// The server could not be reached (DNS, connect, timeout)
    #[error("Connection error: {0}")]
    Connection(#[source] reqwest::Error),

    /// Any other HTTP request/response failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Error code reported by a legacy resource inside `<erro>`, or a mapped HTTP status
    #[error("{description}")]
    Api {
        /// Error family selected through the dispatch table
        kind: ApiErrorKind,
        /// Raw server code
        code: u32,
        /// Server-provided description, preserved verbatim
        description: String,
    },

    /// Non-success response that could not be classified (v3/v4 `detail`, unmapped statuses)
    #[error("NetworkAPI error {status}: {detail}")]
    Client {
        /// HTTP status code
        status: u16,
        /// Server `detail` field, or the raw body
        detail: String,
    },

    /// The XML body could not be parsed or produced
    #[error("XML error: {0}")]
    Xml(String),

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Missing or malformed client configuration
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl NetworkApiError {
    /// Dispatch a server error code through the code table.
    ///
    /// Unknown codes map to [`ApiErrorKind::Generic`]; the description is kept as the message.
    pub fn from_code(code: u32, description: impl Into<String>) -> Self {
        Self::Api {
            kind: ApiErrorKind::from_code(code).unwrap_or(ApiErrorKind::Generic),
            code,
            description: description.into(),
        }
    }

    /// Shorthand for [`NetworkApiError::InvalidParameter`]
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter(message.into())
    }

    /// The dispatched error family, if this is a server-coded error
    pub fn kind(&self) -> Option<ApiErrorKind> {
        match self {
            Self::Api { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    /// Whether the error was raised before any request was sent
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, Self::InvalidParameter(_))
    }

    /// Whether the server was unreachable
    pub fn is_connection(&self) -> bool {
        matches!(self, Self::Connection(_))
    }
}

/// Result alias used across the crate
pub type Result<T, E = NetworkApiError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_code_keeps_description() {
        let err = NetworkApiError::from_code(116, "Vlan não encontrada");
        assert_eq!(err.kind(), Some(ApiErrorKind::VlanNotFound));
        assert_eq!(err.to_string(), "Vlan não encontrada");
    }

    #[test]
    fn test_unknown_code_falls_back_to_generic() {
        let err = NetworkApiError::from_code(99_999, "Falha desconhecida");
        match err {
            NetworkApiError::Api { kind, code, description } => {
                assert_eq!(kind, ApiErrorKind::Generic);
                assert_eq!(code, 99_999);
                assert_eq!(description, "Falha desconhecida");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }
}
