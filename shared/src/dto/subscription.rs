use crate::dto::common::{field_error, FormCheck};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

lazy_static! {
    static ref PHONE_REGEX: Regex = Regex::new(r"^[\d\s\-+()]+$").unwrap();
}

/// Member-facing plan subscription form
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, PartialEq)]
pub struct SubscriptionForm {
    #[validate(custom(function = "validate_full_name"))]
    pub full_name: String,

    #[validate(custom(function = "validate_phone"))]
    pub phone: String,

    #[validate(length(min = 1, message = "Please select your gender"))]
    pub gender: String,

    /// `YYYY-MM-DD`
    #[validate(length(min = 1, message = "Date of birth is required"))]
    pub date_of_birth: String,

    #[serde(default)]
    pub height: String,

    #[serde(default)]
    pub weight: String,

    #[serde(default)]
    pub blood_type: String,

    #[validate(length(min = 1, message = "Select a payment method"))]
    pub payment_method: String,
}

impl SubscriptionForm {
    /// Form for a signed-in user, with the account name prefilled.
    pub fn for_user(name: Option<&str>) -> Self {
        Self {
            full_name: name.unwrap_or_default().to_string(),
            ..Self::default()
        }
    }
}

impl FormCheck for SubscriptionForm {
    fn check(&self) -> ValidationErrors {
        self.validate().err().unwrap_or_else(ValidationErrors::new)
    }
}

fn validate_full_name(name: &String) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(field_error("required", "Full name is required"));
    }
    Ok(())
}

fn validate_phone(phone: &String) -> Result<(), ValidationError> {
    if phone.trim().is_empty() {
        return Err(field_error("required", "Phone number is required"));
    }
    if !PHONE_REGEX.is_match(phone) {
        return Err(field_error("format", "Enter a valid phone number"));
    }
    Ok(())
}
