//! Password hashing — bcrypt with a random per-password salt.
//!
//! Equal plaintexts produce different stored hashes; verification recomputes
//! under the stored salt and compares in constant time, never reversing the
//! hash.

use bcrypt::{BcryptError, DEFAULT_COST};

/// Hash a plaintext password for storage.
///
/// # Errors
///
/// Returns an error if bcrypt fails (e.g. resource exhaustion); the caller
/// treats this as fatal for the request only.
pub fn hash_password(plaintext: &str) -> Result<String, BcryptError> {
    bcrypt::hash(plaintext, DEFAULT_COST)
}

/// Check a plaintext password against a stored hash.
///
/// # Errors
///
/// Returns an error if the stored hash is malformed.
pub fn verify_password(plaintext: &str, hashed: &str) -> Result<bool, BcryptError> {
    bcrypt::verify(plaintext, hashed)
}

#[cfg(test)]
#[path = "password_test.rs"]
mod tests;
