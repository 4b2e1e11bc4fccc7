use thiserror::Error;
use validator::ValidationErrors;
use serde_json::Error as JsonError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq)]
pub enum SharedError {
    #[error("Session name is required")]
    EmptyName,

    #[error("End time must be after start time (start {start}, end {end})")]
    InvalidTimeOrder {
        start: String,
        end: String,
    },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conversion error: {0}")]
    Conversion(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl SharedError {
    /// Whether the error comes from user input rather than a collaborator.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            SharedError::EmptyName
                | SharedError::InvalidTimeOrder { .. }
                | SharedError::Validation(_)
        )
    }
}

impl From<ValidationErrors> for SharedError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors.to_string())
    }
}

impl From<JsonError> for SharedError {
    fn from(error: JsonError) -> Self {
        Self::Conversion(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SharedError>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_invalid_time_order_message() {
        let err = SharedError::InvalidTimeOrder {
            start: "10:00".to_string(),
            end: "09:30".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "End time must be after start time (start 10:00, end 09:30)"
        );
    }

    #[test]
    fn test_user_facing_classification() {
        assert!(SharedError::EmptyName.is_user_facing());
        assert!(SharedError::Validation("x".into()).is_user_facing());
        assert!(!SharedError::Api("boom".into()).is_user_facing());
        assert!(!SharedError::NotFound("session 3".into()).is_user_facing());
    }

    #[test]
    fn test_json_error_conversion() {
        let err = serde_json::from_str::<u32>("not a number").unwrap_err();
        let shared: SharedError = err.into();
        assert!(matches!(shared, SharedError::Conversion(_)));
    }
}
