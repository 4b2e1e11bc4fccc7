use crate::error::{Result, SharedError};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;
use validator::{ValidationError, ValidationErrors};

/// List endpoint body; the backend returns either a bare array or a
/// `{ "data": [...] }` envelope depending on the resource
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ListResponse<T> {
    Bare(Vec<T>),
    Wrapped { data: Vec<T> },
}

impl<T> ListResponse<T> {
    pub fn into_items(self) -> Vec<T> {
        match self {
            ListResponse::Bare(items) => items,
            ListResponse::Wrapped { data } => data,
        }
    }
}

/// Single-record body, `{ "data": {...} }`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DataResponse<T> {
    pub data: T,
}

/// Common error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

/// Builds a validation error carrying a user-facing message.
pub fn field_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(message));
    err
}

/// First message reported for each field, keyed by field name.
pub fn first_messages(errors: &ValidationErrors) -> BTreeMap<String, String> {
    errors
        .field_errors()
        .into_iter()
        .filter_map(|(field, errs)| {
            errs.first().map(|err| {
                let message = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| err.code.to_string());
                (field.to_string(), message)
            })
        })
        .collect()
}

/// Forms that report every failed rule at once, for inline field messages.
pub trait FormCheck {
    /// Every failed rule; empty when the form can be submitted.
    fn check(&self) -> ValidationErrors;

    fn field_errors(&self) -> BTreeMap<String, String> {
        first_messages(&self.check())
    }

    fn is_valid(&self) -> bool {
        self.check().errors().is_empty()
    }

    fn ensure_valid(&self) -> Result<()> {
        let errors = self.check();
        if errors.errors().is_empty() {
            Ok(())
        } else {
            Err(SharedError::from(errors))
        }
    }
}
