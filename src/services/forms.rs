//! Signup and login form schemas.
//!
//! Fields are validated with `validator` derives; the first violated rule
//! wins and is reported as a single human-readable message. Missing fields
//! deserialize to empty strings so they fail validation inline instead of
//! bouncing at the extractor.

use serde::Deserialize;
use validator::{Validate, ValidationErrors};

/// Field order used when picking the first violation to report.
const FIELD_ORDER: [&str; 3] = ["name", "email", "password"];

#[derive(Debug, Deserialize, Validate)]
pub struct SignupForm {
    #[serde(default)]
    #[validate(length(min = 1, max = 20, message = "Name must be between 1 and 20 characters"))]
    pub name: String,
    #[serde(default)]
    #[validate(email(message = "Email must be a valid email address"))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 1, max = 20, message = "Password must be between 1 and 20 characters"))]
    pub password: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct LoginForm {
    #[serde(default)]
    #[validate(email(message = "Email must be a valid email address"))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 1, max = 20, message = "Password must be between 1 and 20 characters"))]
    pub password: String,
}

/// Flatten a validation error set to the first violated rule's message,
/// in field declaration order.
#[must_use]
pub fn first_violation(errors: &ValidationErrors) -> String {
    let field_errors = errors.field_errors();
    for field in FIELD_ORDER {
        if let Some(violations) = field_errors.get(field) {
            if let Some(violation) = violations.first() {
                return violation
                    .message
                    .as_ref()
                    .map_or_else(|| format!("{field} is invalid"), ToString::to_string);
            }
        }
    }
    "Invalid input".to_owned()
}

/// Canonical form of an already syntax-checked email address.
#[must_use]
pub fn normalize_email(email: &str) -> String {
    email.trim().to_ascii_lowercase()
}

#[cfg(test)]
#[path = "forms_test.rs"]
mod tests;
