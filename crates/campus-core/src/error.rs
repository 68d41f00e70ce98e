use thiserror::Error;

/// Top-level error type for the campus portal.
#[derive(Debug, Error)]
pub enum CampusError {
    /// Network or transport failure talking to the backend.
    #[error("network error: {0}")]
    Network(String),

    /// Backend answered with a non-success status.
    #[error("backend returned {status}: {body}")]
    Status { status: u16, body: String },

    /// Response body could not be decoded.
    #[error("parse error: {0}")]
    Parse(String),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// Form input rejected before submission.
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    /// Unknown language code.
    #[error("unsupported language: {0}")]
    Language(String),

    /// I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CampusError {
    /// Shorthand for a validation failure on `field`.
    pub fn invalid(field: &str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    /// Whether re-issuing the same request could succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network(_) => true,
            Self::Status { status, .. } => *status >= 500 || *status == 429,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_classification() {
        assert!(CampusError::Network("reset".into()).is_retryable());
        assert!(CampusError::Status {
            status: 503,
            body: String::new()
        }
        .is_retryable());
        assert!(!CampusError::Status {
            status: 404,
            body: String::new()
        }
        .is_retryable());
        assert!(!CampusError::Parse("eof".into()).is_retryable());
    }

    #[test]
    fn test_validation_display() {
        let err = CampusError::invalid("email", "missing @");
        assert_eq!(err.to_string(), "invalid email: missing @");
    }
}
