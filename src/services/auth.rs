//! Auth flow — orchestrates validation, hashing, the credential store, and
//! session creation for signup and login.
//!
//! TRADE-OFFS
//! ==========
//! Login reports one generic message for both "unknown email" and "wrong
//! password" so the endpoint cannot be used to enumerate registered emails.

use sqlx::PgPool;
use validator::Validate;

use crate::services::credentials::{self, InsertOutcome};
use crate::services::forms::{self, LoginForm, SignupForm};
use crate::services::password;
use crate::services::session;

#[derive(Debug, thiserror::Error)]
pub enum AuthFlowError {
    #[error("{0}")]
    Validation(String),
    #[error("email already exists")]
    DuplicateEmail,
    #[error("invalid email or password")]
    InvalidCredentials,
    #[error("password hashing failed: {0}")]
    Hash(#[from] bcrypt::BcryptError),
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
}

impl AuthFlowError {
    /// Message rendered inline on the signup/login page. Internal failures
    /// collapse to a generic message so no detail leaks to the client.
    #[must_use]
    pub fn inline_message(&self) -> String {
        match self {
            Self::Validation(msg) => msg.clone(),
            Self::DuplicateEmail => "Email already exists".to_owned(),
            Self::InvalidCredentials => "Invalid email or password".to_owned(),
            Self::Hash(_) | Self::Db(_) => "Database error".to_owned(),
        }
    }

    /// Whether this error should be logged rather than shown verbatim.
    #[must_use]
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::Hash(_) | Self::Db(_))
    }
}

/// Register a new user and start an authenticated session.
/// Returns the plaintext session token on success.
pub async fn signup(pool: &PgPool, secret: &str, form: SignupForm) -> Result<String, AuthFlowError> {
    form.validate()
        .map_err(|e| AuthFlowError::Validation(forms::first_violation(&e)))?;

    let email = forms::normalize_email(&form.email);

    // Fast path only: skips the bcrypt work for an email we already know.
    // The UNIQUE constraint below is what actually rules out duplicates.
    if credentials::exists(pool, &email).await? {
        return Err(AuthFlowError::DuplicateEmail);
    }

    let password_hash = password::hash_password(&form.password)?;
    match credentials::insert(pool, &form.name, &email, &password_hash).await? {
        InsertOutcome::DuplicateEmail => Err(AuthFlowError::DuplicateEmail),
        InsertOutcome::Created(_) => {
            Ok(session::create_session(pool, secret, &form.name, &email).await?)
        }
    }
}

/// Authenticate an existing user and start a session.
/// Returns the plaintext session token on success.
pub async fn login(pool: &PgPool, secret: &str, form: LoginForm) -> Result<String, AuthFlowError> {
    form.validate()
        .map_err(|e| AuthFlowError::Validation(forms::first_violation(&e)))?;

    let email = forms::normalize_email(&form.email);

    let Some(user) = credentials::find_by_email(pool, &email).await? else {
        return Err(AuthFlowError::InvalidCredentials);
    };
    if !password::verify_password(&form.password, &user.password_hash)? {
        return Err(AuthFlowError::InvalidCredentials);
    }

    Ok(session::create_session(pool, secret, &user.name, &user.email).await?)
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
