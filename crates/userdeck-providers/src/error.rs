use std::fmt;

/// Result type for userdeck-providers operations
pub type Result<T> = std::result::Result<T, FetchError>;

/// Reasons a user batch could not be obtained
#[derive(Debug)]
pub enum FetchError {
    /// Server answered with a non-2xx status
    Status { code: u16, body_preview: String },

    /// Connection could not be made or broke mid-request
    Transport(String),

    /// Request exceeded the configured timeout
    Timeout(String),

    /// Body was not a valid `{ "results": [...] }` document
    Decode(serde_json::Error),

    /// Saved response file could not be read
    Io(std::io::Error),

    /// Base URL or request parameters were unusable
    InvalidRequest(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Status { code, body_preview } => {
                if body_preview.is_empty() {
                    write!(f, "HTTP status {}", code)
                } else {
                    write!(f, "HTTP status {}: {}", code, body_preview)
                }
            }
            FetchError::Transport(msg) => write!(f, "Network error: {}", msg),
            FetchError::Timeout(msg) => write!(f, "Request timed out: {}", msg),
            FetchError::Decode(err) => write!(f, "Malformed response body: {}", err),
            FetchError::Io(err) => write!(f, "IO error: {}", err),
            FetchError::InvalidRequest(msg) => write!(f, "Invalid request: {}", msg),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Decode(err) => Some(err),
            FetchError::Io(err) => Some(err),
            FetchError::Status { .. }
            | FetchError::Transport(_)
            | FetchError::Timeout(_)
            | FetchError::InvalidRequest(_) => None,
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err)
    }
}

impl From<std::io::Error> for FetchError {
    fn from(err: std::io::Error) -> Self {
        FetchError::Io(err)
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout(err.to_string())
        } else {
            FetchError::Transport(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message_includes_preview() {
        let err = FetchError::Status {
            code: 503,
            body_preview: "service unavailable".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP status 503: service unavailable");
    }

    #[test]
    fn test_status_message_without_preview() {
        let err = FetchError::Status {
            code: 404,
            body_preview: String::new(),
        };
        assert_eq!(err.to_string(), "HTTP status 404");
    }
}
