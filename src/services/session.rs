//! Session management.
//!
//! ARCHITECTURE
//! ============
//! Sessions live in the `sessions` table, never in process memory. The client
//! holds an opaque random token in a cookie; the table stores its keyed
//! SHA-256 hash plus a `{name, email}` snapshot and a fixed expiry, so a
//! database leak does not leak usable session ids.
//!
//! Lifecycle per session: created on successful signup or login, read as
//! absent once `expires_at` passes, erased synchronously on logout.

use std::fmt::Write;

use rand::Rng;
use sha2::{Digest, Sha256};
use sqlx::{PgPool, Row};

/// Fixed session lifetime, applied to both the store record and the cookie.
pub const SESSION_TTL: time::Duration = time::Duration::HOUR;

pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}

/// Generate a cryptographically random 32-byte hex token.
#[must_use]
pub fn generate_token() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    bytes_to_hex(&bytes)
}

/// Keyed hash of a session token for at-rest storage.
#[must_use]
pub fn hash_token(secret: &str, token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(secret.as_bytes());
    hasher.update(token.as_bytes());
    bytes_to_hex(&hasher.finalize())
}

/// User snapshot carried by an authenticated session.
#[derive(Debug, Clone)]
pub struct SessionUser {
    pub name: String,
    pub email: String,
}

/// Create a session for the given user, returning the plaintext token.
pub async fn create_session(
    pool: &PgPool,
    secret: &str,
    name: &str,
    email: &str,
) -> Result<String, sqlx::Error> {
    let token = generate_token();
    sqlx::query(
        r"INSERT INTO sessions (token_hash, name, email, expires_at)
          VALUES ($1, $2, $3, now() + make_interval(secs => $4))",
    )
    .bind(hash_token(secret, &token))
    .bind(name)
    .bind(email)
    .bind(SESSION_TTL.whole_seconds() as f64)
    .execute(pool)
    .await?;
    Ok(token)
}

/// Validate a session token and return the associated user.
/// Expired or unknown tokens read as `None`.
pub async fn validate_session(
    pool: &PgPool,
    secret: &str,
    token: &str,
) -> Result<Option<SessionUser>, sqlx::Error> {
    let row = sqlx::query("SELECT name, email FROM sessions WHERE token_hash = $1 AND expires_at > now()")
        .bind(hash_token(secret, token))
        .fetch_optional(pool)
        .await?;

    Ok(row.map(|r| SessionUser { name: r.get("name"), email: r.get("email") }))
}

/// Delete a session by token. Completes before the caller redirects, so a
/// destroyed session id can never be replayed.
pub async fn delete_session(pool: &PgPool, secret: &str, token: &str) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM sessions WHERE token_hash = $1")
        .bind(hash_token(secret, token))
        .execute(pool)
        .await?;
    Ok(())
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
