use crate::dto::common::{field_error, FormCheck};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

lazy_static! {
    static ref EMAIL_REGEX: Regex = Regex::new(r"\S+@\S+\.\S+").unwrap();
}

pub const LOGIN_PASSWORD_MIN_LEN: usize = 6;
pub const NEW_PASSWORD_MIN_LEN: usize = 8;
pub const NAME_MIN_LEN: usize = 2;

/// Sign-in form
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct LoginForm {
    #[validate(custom(function = "validate_email_address"))]
    pub email: String,

    #[validate(custom(function = "validate_login_password"))]
    pub password: String,
}

impl FormCheck for LoginForm {
    fn check(&self) -> ValidationErrors {
        self.validate().err().unwrap_or_else(ValidationErrors::new)
    }
}

/// Account registration form
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct RegisterForm {
    #[validate(custom(function = "validate_display_name"))]
    pub name: String,

    #[validate(custom(function = "validate_email_address"))]
    pub email: String,

    #[validate(custom(function = "validate_new_password"))]
    pub password: String,

    pub confirm_password: String,
}

impl RegisterForm {
    pub fn password_strength(&self) -> PasswordStrength {
        PasswordStrength::evaluate(&self.password)
    }
}

impl FormCheck for RegisterForm {
    fn check(&self) -> ValidationErrors {
        let mut errors = self.validate().err().unwrap_or_else(ValidationErrors::new);
        if self.confirm_password.is_empty() {
            errors.add(
                "confirm_password",
                field_error("required", "Please confirm your password"),
            );
        } else if self.password != self.confirm_password {
            errors.add(
                "confirm_password",
                field_error("mismatch", "Passwords do not match"),
            );
        }
        errors
    }
}

/// Change-password form on the settings screen
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PasswordChangeForm {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

impl FormCheck for PasswordChangeForm {
    fn check(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        if self.new_password != self.confirm_password {
            errors.add(
                "confirm_password",
                field_error("mismatch", "New passwords do not match."),
            );
        } else if self.new_password.chars().count() < NEW_PASSWORD_MIN_LEN {
            errors.add(
                "new_password",
                field_error("length", "Password must be at least 8 characters."),
            );
        }
        errors
    }
}

/// Profile form on the account page
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProfileForm {
    pub name: String,
    /// Data URL or link of the picked avatar
    pub avatar: Option<String>,
}

/// What the profile page saves
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfileUpdate {
    pub name: String,
    pub avatar: Option<String>,
}

impl ProfileForm {
    pub fn into_update(self) -> crate::error::Result<ProfileUpdate> {
        self.ensure_valid()?;
        Ok(ProfileUpdate {
            name: self.name.trim().to_string(),
            avatar: self.avatar,
        })
    }
}

impl FormCheck for ProfileForm {
    fn check(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        if self.name.trim().is_empty() {
            errors.add("name", field_error("required", "Name is required"));
        }
        errors
    }
}

/// Live checklist shown under the registration password field
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PasswordStrength {
    pub length: bool,
    pub uppercase: bool,
    pub lowercase: bool,
    pub number: bool,
}

impl PasswordStrength {
    pub fn evaluate(password: &str) -> Self {
        Self {
            length: password.chars().count() >= NEW_PASSWORD_MIN_LEN,
            uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
            lowercase: password.chars().any(|c| c.is_ascii_lowercase()),
            number: password.chars().any(|c| c.is_ascii_digit()),
        }
    }

    /// Number of satisfied checks, out of four
    pub fn satisfied(&self) -> usize {
        [self.length, self.uppercase, self.lowercase, self.number]
            .iter()
            .filter(|ok| **ok)
            .count()
    }

    pub fn is_strong(&self) -> bool {
        self.satisfied() == 4
    }
}

fn validate_email_address(email: &String) -> Result<(), ValidationError> {
    if email.is_empty() {
        return Err(field_error("required", "Email is required"));
    }
    if !EMAIL_REGEX.is_match(email) {
        return Err(field_error("email", "Please enter a valid email"));
    }
    Ok(())
}

fn validate_login_password(password: &String) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(field_error("required", "Password is required"));
    }
    if password.chars().count() < LOGIN_PASSWORD_MIN_LEN {
        return Err(field_error("length", "Password must be at least 6 characters"));
    }
    Ok(())
}

fn validate_new_password(password: &String) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(field_error("required", "Password is required"));
    }
    if password.chars().count() < NEW_PASSWORD_MIN_LEN {
        return Err(field_error("length", "Password must be at least 8 characters"));
    }
    Ok(())
}

fn validate_display_name(name: &String) -> Result<(), ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(field_error("required", "Name is required"));
    }
    if trimmed.chars().count() < NAME_MIN_LEN {
        return Err(field_error("length", "Name must be at least 2 characters"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn message(errors: &std::collections::BTreeMap<String, String>, field: &str) -> Option<String> {
        errors.get(field).cloned()
    }

    #[rstest]
    #[case("", Some("Email is required"))]
    #[case("not-an-email", Some("Please enter a valid email"))]
    #[case("a@b", Some("Please enter a valid email"))]
    #[case("coach@gym.io", None)]
    fn test_login_email_rules(#[case] email: &str, #[case] expected: Option<&str>) {
        let form = LoginForm {
            email: email.to_string(),
            password: "secret1".to_string(),
        };
        assert_eq!(message(&form.field_errors(), "email"), expected.map(String::from));
    }

    #[rstest]
    #[case("", Some("Password is required"))]
    #[case("12345", Some("Password must be at least 6 characters"))]
    #[case("123456", None)]
    fn test_login_password_rules(#[case] password: &str, #[case] expected: Option<&str>) {
        let form = LoginForm {
            email: "coach@gym.io".to_string(),
            password: password.to_string(),
        };
        assert_eq!(message(&form.field_errors(), "password"), expected.map(String::from));
    }

    #[test]
    fn test_register_reports_every_field() {
        let form = RegisterForm {
            name: " a ".to_string(),
            email: String::new(),
            password: "short".to_string(),
            confirm_password: "other".to_string(),
        };
        let errors = form.field_errors();
        assert_eq!(message(&errors, "name").as_deref(), Some("Name must be at least 2 characters"));
        assert_eq!(message(&errors, "email").as_deref(), Some("Email is required"));
        assert_eq!(
            message(&errors, "password").as_deref(),
            Some("Password must be at least 8 characters")
        );
        assert_eq!(message(&errors, "confirm_password").as_deref(), Some("Passwords do not match"));
        assert!(!form.is_valid());
    }

    #[test]
    fn test_register_valid() {
        let form = RegisterForm {
            name: "Sarah".to_string(),
            email: "sarah@gym.io".to_string(),
            password: "Str0ngPass".to_string(),
            confirm_password: "Str0ngPass".to_string(),
        };
        assert!(form.is_valid());
        assert!(form.ensure_valid().is_ok());
        assert!(form.password_strength().is_strong());
    }

    #[test]
    fn test_register_missing_confirmation() {
        let form = RegisterForm {
            name: "Sarah".to_string(),
            email: "sarah@gym.io".to_string(),
            password: "Str0ngPass".to_string(),
            confirm_password: String::new(),
        };
        assert_eq!(
            message(&form.field_errors(), "confirm_password").as_deref(),
            Some("Please confirm your password")
        );
    }

    #[test]
    fn test_password_strength_checklist() {
        let weak = PasswordStrength::evaluate("abc");
        assert_eq!(
            weak,
            PasswordStrength {
                length: false,
                uppercase: false,
                lowercase: true,
                number: false,
            }
        );
        assert_eq!(weak.satisfied(), 1);
        assert!(!weak.is_strong());

        assert_eq!(PasswordStrength::evaluate("ABCdef12").satisfied(), 4);
    }

    #[test]
    fn test_password_change_mismatch_checked_first() {
        let form = PasswordChangeForm {
            current_password: "old".to_string(),
            new_password: "short".to_string(),
            confirm_password: "shorter".to_string(),
        };
        let errors = form.field_errors();
        assert_eq!(
            message(&errors, "confirm_password").as_deref(),
            Some("New passwords do not match.")
        );
        assert!(!errors.contains_key("new_password"));
    }

    #[test]
    fn test_profile_name_required_and_trimmed() {
        let blank = ProfileForm {
            name: "   ".to_string(),
            avatar: None,
        };
        assert_eq!(message(&blank.field_errors(), "name").as_deref(), Some("Name is required"));
        assert!(blank.into_update().is_err());

        let update = ProfileForm {
            name: "  Sarah Johnson ".to_string(),
            avatar: Some("data:image/png;base64,AAAA".to_string()),
        }
        .into_update()
        .unwrap();
        assert_eq!(update.name, "Sarah Johnson");
        assert_eq!(update.avatar.as_deref(), Some("data:image/png;base64,AAAA"));
    }

    #[test]
    fn test_password_change_length() {
        let form = PasswordChangeForm {
            current_password: "old".to_string(),
            new_password: "short".to_string(),
            confirm_password: "short".to_string(),
        };
        assert_eq!(
            message(&form.field_errors(), "new_password").as_deref(),
            Some("Password must be at least 8 characters.")
        );

        let ok = PasswordChangeForm {
            new_password: "longenough".to_string(),
            confirm_password: "longenough".to_string(),
            ..form
        };
        assert!(ok.is_valid());
    }
}
