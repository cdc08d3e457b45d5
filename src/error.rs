use thiserror::Error;

/// Main error type for partdex operations
#[derive(Error, Debug)]
pub enum PartdexError {
    #[error("failed to read source: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed source data: {0}")]
    Csv(#[from] csv::Error),

    #[error("part not found: {0}")]
    NotFound(String),

    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type alias for partdex operations
pub type Result<T> = std::result::Result<T, PartdexError>;

impl PartdexError {
    /// Check if this error came from reading or parsing the source file.
    ///
    /// Load failures are fatal at startup but recoverable on reload: the
    /// store keeps serving the previous snapshot.
    pub fn is_load_failure(&self) -> bool {
        matches!(self, PartdexError::Io(_) | PartdexError::Csv(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PartdexError::NotFound("a1".to_string());
        assert_eq!(err.to_string(), "part not found: a1");
    }

    #[test]
    fn test_load_failure_classification() {
        let io = PartdexError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        assert!(io.is_load_failure());
        assert!(!PartdexError::NotFound("x".to_string()).is_load_failure());
        assert!(!PartdexError::Internal("boom".to_string()).is_load_failure());
    }
}
