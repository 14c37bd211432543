//! Error types for operation dispatch
//!
//! Every variant renders to the message placed in the `error` field of the
//! response envelope, so `Display` output must never carry internal detail.

use std::fmt;

use crate::github::error::UpstreamError;

/// Error types that can occur while dispatching an operation
#[derive(Debug, Clone, PartialEq)]
pub enum ToolError {
    /// A required parameter is absent or empty
    MissingParameter(String),

    /// A parameter was supplied with a value that is not a scalar
    InvalidParameter(String),

    /// The operation name does not match any registered operation
    UnknownOperation(String),

    /// The upstream call failed
    Upstream(UpstreamError),
}

impl fmt::Display for ToolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToolError::MissingParameter(name) => {
                write!(f, "Missing required parameter: {}", name)
            }
            ToolError::InvalidParameter(name) => {
                write!(f, "Invalid parameter '{}': expected a string value", name)
            }
            ToolError::UnknownOperation(_) => write!(f, "Unknown endpoint"),
            ToolError::Upstream(error) => write!(f, "{}", error.public_message()),
        }
    }
}

impl std::error::Error for ToolError {}

impl From<UpstreamError> for ToolError {
    fn from(error: UpstreamError) -> Self {
        ToolError::Upstream(error)
    }
}

/// Convert from ToolError to the plain message carried by the error envelope
impl From<ToolError> for String {
    fn from(error: ToolError) -> Self {
        error.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_operation_message_is_fixed() {
        let error = ToolError::UnknownOperation("delete_everything".to_string());
        assert_eq!(String::from(error), "Unknown endpoint");
    }

    #[test]
    fn test_upstream_detail_is_not_exposed() {
        let error = ToolError::from(UpstreamError::Unreachable(
            "tcp connect error: 10.0.0.3:443".to_string(),
        ));
        let message = error.to_string();
        assert_eq!(message, "GitHub API is unreachable");
        assert!(!message.contains("10.0.0.3"));
    }

    #[test]
    fn test_parameter_messages() {
        assert_eq!(
            ToolError::MissingParameter("query".to_string()).to_string(),
            "Missing required parameter: query"
        );
        assert_eq!(
            ToolError::InvalidParameter("owner".to_string()).to_string(),
            "Invalid parameter 'owner': expected a string value"
        );
    }
}
