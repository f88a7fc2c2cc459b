//! Credential store — the `users` table.
//!
//! TRADE-OFFS
//! ==========
//! Insert uses `ON CONFLICT (email) DO NOTHING RETURNING id` so the UNIQUE
//! constraint is the arbiter for concurrent duplicate signups; a prior
//! `exists` read is only a fast path for the friendly error, never what
//! correctness depends on.

use sqlx::{PgPool, Row};
use uuid::Uuid;

/// User row as stored in the `users` table.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

/// Outcome of an insert attempt against the unique email key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Created(Uuid),
    DuplicateEmail,
}

/// Look up a user by email.
pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
    let row = sqlx::query("SELECT id, name, email, password_hash FROM users WHERE email = $1")
        .bind(email)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(|r| User {
        id: r.get("id"),
        name: r.get("name"),
        email: r.get("email"),
        password_hash: r.get("password_hash"),
    }))
}

/// Whether a user with this email already exists.
pub async fn exists(pool: &PgPool, email: &str) -> Result<bool, sqlx::Error> {
    Ok(find_by_email(pool, email).await?.is_some())
}

/// Insert a new user, letting the database decide duplicate emails.
pub async fn insert(
    pool: &PgPool,
    name: &str,
    email: &str,
    password_hash: &str,
) -> Result<InsertOutcome, sqlx::Error> {
    let row = sqlx::query(
        r"INSERT INTO users (name, email, password_hash)
          VALUES ($1, $2, $3)
          ON CONFLICT (email) DO NOTHING
          RETURNING id",
    )
    .bind(name)
    .bind(email)
    .bind(password_hash)
    .fetch_optional(pool)
    .await?;

    Ok(match row {
        Some(r) => InsertOutcome::Created(r.get("id")),
        None => InsertOutcome::DuplicateEmail,
    })
}
