//! Error types for the widget crate

/// Errors that can occur in widget operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetError {
    /// The endpoint answered with a non-success status
    Http {
        /// HTTP status code
        status: u16,
    },

    /// The request itself failed (network, CORS)
    Fetch(String),

    /// A response or stored payload did not decode
    Decode(String),

    /// A canvas operation failed
    Canvas(String),
}

impl std::fmt::Display for WidgetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Http { status } => write!(f, "request failed with status {}", status),
            Self::Fetch(msg) => write!(f, "fetch error: {}", msg),
            Self::Decode(msg) => write!(f, "decode error: {}", msg),
            Self::Canvas(msg) => write!(f, "canvas error: {}", msg),
        }
    }
}

impl std::error::Error for WidgetError {}

/// Result type alias for widget operations
pub type WidgetResult<T> = Result<T, WidgetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = WidgetError::Http { status: 404 };
        assert_eq!(err.to_string(), "request failed with status 404");

        let err = WidgetError::Decode("missing field `total`".to_string());
        assert_eq!(err.to_string(), "decode error: missing field `total`");
    }
}
