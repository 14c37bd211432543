/// Failure of a single call to the GitHub REST API
#[derive(Debug, Clone, PartialEq)]
pub enum UpstreamError {
    /// Transport failure or timeout; the request never produced a response
    Unreachable(String),
    /// The API answered with a non-2xx status code
    HttpStatus(u16),
    /// The response body was not the JSON document we expected
    MalformedBody(String),
}

impl UpstreamError {
    /// Classify a reqwest error raised while sending a request or reading its body
    pub fn from_reqwest_error(error: reqwest::Error) -> Self {
        tracing::debug!("Raw reqwest error: {:?}", error);

        if let Some(status) = error.status() {
            return Self::HttpStatus(status.as_u16());
        }

        let error_msg = if error.is_timeout() {
            format!("request timed out: {}", error)
        } else if error.is_connect() {
            format!("connection failed: {}", error)
        } else {
            format!("transport error: {}", error)
        };
        tracing::warn!("GitHub API unreachable: {}", error_msg);
        Self::Unreachable(error_msg)
    }

    /// Message safe to hand back to callers. Detailed causes stay in the logs.
    pub fn public_message(&self) -> String {
        match self {
            Self::Unreachable(_) => "GitHub API is unreachable".to_string(),
            Self::HttpStatus(code) => format!("GitHub API returned HTTP status {}", code),
            Self::MalformedBody(_) => "GitHub API returned a malformed response".to_string(),
        }
    }
}

impl std::fmt::Display for UpstreamError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unreachable(msg) => write!(f, "GitHub API unreachable: {}", msg),
            Self::HttpStatus(code) => write!(f, "GitHub API returned status {}", code),
            Self::MalformedBody(msg) => write!(f, "Malformed GitHub API response: {}", msg),
        }
    }
}

impl std::error::Error for UpstreamError {}

impl From<serde_json::Error> for UpstreamError {
    fn from(error: serde_json::Error) -> Self {
        Self::MalformedBody(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_message_hides_details() {
        let error = UpstreamError::Unreachable("dns error: no such host api.internal".to_string());
        assert_eq!(error.public_message(), "GitHub API is unreachable");
        assert!(error.to_string().contains("no such host"));

        let error = UpstreamError::MalformedBody("expected value at line 1 column 1".to_string());
        assert_eq!(
            error.public_message(),
            "GitHub API returned a malformed response"
        );
    }

    #[test]
    fn test_status_message_carries_code() {
        assert_eq!(
            UpstreamError::HttpStatus(404).public_message(),
            "GitHub API returned HTTP status 404"
        );
    }

    #[test]
    fn test_json_error_is_malformed_body() {
        let json_error = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        assert!(matches!(
            UpstreamError::from(json_error),
            UpstreamError::MalformedBody(_)
        ));
    }
}
