use crate::dto::common::{field_error, FormCheck};
use crate::error::Result;
use crate::models::category::Category;
use serde::{Deserialize, Serialize};
use validator::ValidationErrors;

pub const CATEGORY_NAME_REQUIRED: &str = "Category name is required";

/// Add/edit category dialog
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CategoryForm {
    pub name: String,
}

/// Body of `POST /categories`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryPayload {
    pub category_name: String,
}

impl CategoryForm {
    pub fn open(editing: Option<&Category>) -> Self {
        Self {
            name: editing.map(|c| c.name.clone()).unwrap_or_default(),
        }
    }

    /// Returns the body to submit, or the reason it cannot be submitted.
    pub fn validate_and_build(&self) -> Result<CategoryPayload> {
        self.ensure_valid()?;
        Ok(CategoryPayload {
            category_name: self.name.trim().to_string(),
        })
    }
}

impl FormCheck for CategoryForm {
    fn check(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        if self.name.trim().is_empty() {
            errors.add("name", field_error("required", CATEGORY_NAME_REQUIRED));
        }
        errors
    }
}
