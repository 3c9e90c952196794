//! Error types for the overlay window crate

/// Errors that can occur in overlay window operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayError {
    /// A resize handle carried an unknown direction token
    UnknownDirection(String),

    /// A required browser object (window, document, storage) was missing
    /// or a DOM operation failed
    Dom(String),
}

impl std::fmt::Display for OverlayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownDirection(token) => write!(f, "unknown resize direction: {}", token),
            Self::Dom(msg) => write!(f, "dom error: {}", msg),
        }
    }
}

impl std::error::Error for OverlayError {}

/// Result type alias for overlay operations
pub type OverlayResult<T> = Result<T, OverlayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = OverlayError::UnknownDirection("q".to_string());
        assert_eq!(err.to_string(), "unknown resize direction: q");

        let err = OverlayError::Dom("sessionStorage unavailable".to_string());
        assert_eq!(err.to_string(), "dom error: sessionStorage unavailable");
    }
}
