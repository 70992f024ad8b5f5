//! Errors returned by the API client

use crate::models::error_message;

/// Failure of a single API call
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("Connection failed: {0}")]
    Connect(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Request failed: {0}")]
    Transport(String),

    /// Non-2xx response with a decodable message
    #[error("{status}: {message}")]
    Rejected { status: u16, message: String },

    /// Non-2xx response whose body carries no message
    #[error("{status}: unreadable error body")]
    Malformed { status: u16, body: String },

    /// 2xx response whose body could not be decoded
    #[error("Invalid response body: {0}")]
    Decode(String),

    #[error("Invalid URL: {0}")]
    Url(String),
}

impl ApiError {
    /// Classify a non-2xx response by its body
    pub fn from_response(status: u16, body: String) -> Self {
        match error_message(&body) {
            Some(message) => ApiError::Rejected { status, message },
            None => ApiError::Malformed { status, body },
        }
    }

    /// HTTP status, when the server answered
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Rejected { status, .. } | ApiError::Malformed { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Text for the page's error node.
    ///
    /// Only answered requests produce one; transport failures stay off the page.
    pub fn page_message(&self) -> Option<String> {
        match self {
            ApiError::Rejected { message, .. } => Some(message.clone()),
            ApiError::Malformed { status, .. } => Some(status_line(*status)),
            _ => None,
        }
    }
}

fn status_line(status: u16) -> String {
    match reqwest::StatusCode::from_u16(status)
        .ok()
        .and_then(|s| s.canonical_reason())
    {
        Some(reason) => format!("{} {}", status, reason),
        None => status.to_string(),
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ApiError::Timeout(e.to_string())
        } else if e.is_connect() {
            ApiError::Connect(e.to_string())
        } else {
            ApiError::Transport(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_page_message() {
        let err = ApiError::from_response(400, r#"{"message":"X"}"#.to_string());
        assert_eq!(err, ApiError::Rejected { status: 400, message: "X".into() });
        assert_eq!(err.page_message().as_deref(), Some("X"));
    }

    #[test]
    fn test_malformed_shows_status_line() {
        let err = ApiError::from_response(500, "oops".to_string());
        assert_eq!(err.status(), Some(500));
        assert_eq!(err.page_message().as_deref(), Some("500 Internal Server Error"));
    }

    #[test]
    fn test_transport_stays_off_page() {
        let err = ApiError::Connect("refused".into());
        assert_eq!(err.page_message(), None);
        assert_eq!(err.status(), None);
    }
}
