//! Cross-cutting error types for MZ.
//!
//! Domain-specific errors (e.g., `StoreError`, `ChatError`) are defined in their
//! respective crates. The binary converges everything into `anyhow::Error` at
//! the outer boundary.

use thiserror::Error;

/// Errors that can be raised by any MZ crate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A field value is outside its accepted set.
    #[error("Invalid {field}: {value}. Must be one of: {expected}")]
    InvalidValue {
        field: &'static str,
        value: String,
        expected: String,
    },

    /// A date string did not match `YYYY-MM-DD`.
    #[error("Invalid date format: {0}. Must be YYYY-MM-DD")]
    InvalidDate(String),

    /// Task content was empty or whitespace-only.
    #[error("Task content cannot be empty")]
    EmptyContent,
}

/// Rejection of task input, carrying every reason found.
///
/// Produced by task creation before any mutation happens; the store is left
/// untouched whenever this is returned.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Validation failed: {}", .reasons.join("; "))]
pub struct ValidationFailure {
    pub reasons: Vec<String>,
}

impl ValidationFailure {
    /// Build a failure from the collected errors, or `None` if there are none.
    #[must_use]
    pub fn from_errors(errors: Vec<CoreError>) -> Option<Self> {
        if errors.is_empty() {
            return None;
        }
        Some(Self {
            reasons: errors.iter().map(ToString::to_string).collect(),
        })
    }

    /// Whether any reason mentions `needle` (case-insensitive).
    #[must_use]
    pub fn mentions(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.reasons
            .iter()
            .any(|reason| reason.to_lowercase().contains(&needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_error_list_is_not_a_failure() {
        assert!(ValidationFailure::from_errors(Vec::new()).is_none());
    }

    #[test]
    fn failure_keeps_every_reason_in_order() {
        let failure = ValidationFailure::from_errors(vec![
            CoreError::EmptyContent,
            CoreError::InvalidDate("tomorrow".into()),
        ])
        .expect("two errors");

        assert_eq!(
            failure.reasons,
            vec![
                "Task content cannot be empty".to_string(),
                "Invalid date format: tomorrow. Must be YYYY-MM-DD".to_string(),
            ]
        );
        assert!(failure.mentions("CONTENT"));
        assert!(failure.to_string().contains("; "));
    }
}
