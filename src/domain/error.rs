//! Error types for allocator domain operations.
//!
//! Loading a dataset or parsing user-supplied identifiers (column keys,
//! sort directions, network names) reports through [`DomainError`].

use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Custom error type for dataset and identifier handling.
#[derive(Debug, Error)]
pub enum DomainError {
    /// The dataset file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The dataset is not valid allocator JSON.
    #[error("Parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A record is missing its primary identity.
    #[error("Record #{index} has an empty addressId")]
    EmptyAddressId {
        /// Position of the offending record in the dataset.
        index: usize,
    },

    /// Two records share the same primary identity.
    #[error("Duplicate addressId '{0}'")]
    DuplicateAddressId(String),

    /// Invalid user input such as an unknown column key.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl DomainError {
    /// Create a new invalid input error.
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_error_display() {
        assert_eq!(
            DomainError::EmptyAddressId { index: 3 }.to_string(),
            "Record #3 has an empty addressId"
        );
        assert_eq!(
            DomainError::DuplicateAddressId("f01".to_string()).to_string(),
            "Duplicate addressId 'f01'"
        );
        assert_eq!(
            DomainError::invalid_input("unknown column 'foo'").to_string(),
            "Invalid input: unknown column 'foo'"
        );
    }

    #[test]
    fn test_json_error_converts() {
        let err: DomainError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, DomainError::Json(_)));
        assert!(err.to_string().starts_with("Parse error:"));
    }
}
