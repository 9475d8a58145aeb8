//! Error types for the octoql client.
//!
//! [`OctoqlError`] covers transport failures, non-2xx responses, and
//! server-reported GraphQL errors; [`DecodeError`] covers the response
//! decoder's failure modes. Nothing is logged or retried internally — every
//! error is returned to the immediate caller exactly once.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single entry in the `errors` array of a GraphQL response.
///
/// Specification: <https://spec.graphql.org/October2021/#sec-Errors>.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphQLError {
    pub message: String,
    #[serde(default)]
    pub locations: Vec<ErrorLocation>,
}

/// A line/column position within the query string, as reported by the
/// server.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ErrorLocation {
    pub line: u32,
    pub column: u32,
}

/// Errors produced while decoding a GraphQL JSON response.
#[derive(Debug)]
pub enum DecodeError {
    /// The input is not well-formed JSON.
    Syntax {
        message: String,
        line: usize,
        column: usize,
    },
    /// More input followed a complete top-level JSON value.
    TrailingData,
    /// A JSON value's kind is incompatible with the target field's shape.
    SchemaMismatch { path: String, message: String },
}

impl DecodeError {
    pub(crate) fn syntax(err: serde_json::Error) -> Self {
        Self::Syntax {
            line: err.line(),
            column: err.column(),
            message: err.to_string(),
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Syntax { message, .. } => write!(f, "invalid JSON: {}", message),
            Self::TrailingData => write!(f, "unexpected token after top-level value"),
            Self::SchemaMismatch { path, message } => {
                write!(f, "schema mismatch at {}: {}", path, message)
            }
        }
    }
}

impl std::error::Error for DecodeError {}

/// Errors that can occur when executing a GraphQL operation.
#[derive(Debug)]
pub enum OctoqlError {
    /// Network or HTTP transport error.
    Network(reqwest::Error),
    /// Non-2xx HTTP response.
    Http { status: u16, body: String },
    /// A well-formed response carrying a non-empty `errors` array. Always
    /// holds at least one error; `Display` surfaces the first message.
    GraphQL(Vec<GraphQLError>),
    /// The response body could not be decoded into the query struct.
    Decode(DecodeError),
    /// An input object could not be serialized into a variable value.
    Variables(serde_json::Error),
    /// Client construction failed (empty or malformed token).
    Auth(String),
    /// Internal error (e.g. runtime creation failure in the blocking client).
    Internal(String),
}

impl fmt::Display for OctoqlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network(e) => write!(f, "network error: {}", e),
            Self::Http { status, body } => {
                write!(f, "non-2xx status code: {} body: {:?}", status, body)
            }
            Self::GraphQL(errors) => match errors.first() {
                Some(first) => f.write_str(&first.message),
                None => f.write_str("GraphQL error"),
            },
            Self::Decode(e) => write!(f, "decode error: {}", e),
            Self::Variables(e) => write!(f, "cannot serialize input object: {}", e),
            Self::Auth(msg) => write!(f, "auth configuration error: {}", msg),
            Self::Internal(msg) => write!(f, "internal error: {}", msg),
        }
    }
}

impl std::error::Error for OctoqlError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Network(e) => Some(e),
            Self::Decode(e) => Some(e),
            Self::Variables(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for OctoqlError {
    fn from(e: reqwest::Error) -> Self {
        Self::Network(e)
    }
}

impl From<DecodeError> for OctoqlError {
    fn from(e: DecodeError) -> Self {
        Self::Decode(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_http_error() {
        let err = OctoqlError::Http {
            status: 404,
            body: "404 Not Found\n".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "non-2xx status code: 404 body: \"404 Not Found\\n\""
        );
    }

    #[test]
    fn display_graphql_error_is_first_message() {
        let err = OctoqlError::GraphQL(vec![
            GraphQLError {
                message: "Field 'bad' doesn't exist on type 'Query'".to_owned(),
                locations: vec![ErrorLocation { line: 7, column: 3 }],
            },
            GraphQLError {
                message: "second".to_owned(),
                locations: vec![],
            },
        ]);
        assert_eq!(err.to_string(), "Field 'bad' doesn't exist on type 'Query'");
    }

    #[test]
    fn display_schema_mismatch_names_path() {
        let err = DecodeError::SchemaMismatch {
            path: "viewer.createdAt".to_owned(),
            message: "expected an ISO-8601 timestamp, got: 123".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "schema mismatch at viewer.createdAt: expected an ISO-8601 timestamp, got: 123"
        );
    }

    #[test]
    fn display_auth_error() {
        let err = OctoqlError::Auth("token cannot be empty".to_owned());
        assert_eq!(
            err.to_string(),
            "auth configuration error: token cannot be empty"
        );
    }

    #[test]
    fn graphql_error_deserializes_without_locations() {
        let err: GraphQLError = serde_json::from_str(r#"{"message": "boom"}"#).unwrap();
        assert_eq!(err.message, "boom");
        assert!(err.locations.is_empty());
    }

    #[test]
    fn graphql_error_deserializes_with_locations() {
        let err: GraphQLError = serde_json::from_str(
            r#"{"message": "boom", "locations": [{"line": 7, "column": 3}]}"#,
        )
        .unwrap();
        assert_eq!(err.locations[0].line, 7);
        assert_eq!(err.locations[0].column, 3);
    }

    #[test]
    fn octoql_error_is_std_error() {
        let err = OctoqlError::Auth("test".to_owned());
        let _: &dyn std::error::Error = &err;
        assert!(std::error::Error::source(&err).is_none());
    }
}
