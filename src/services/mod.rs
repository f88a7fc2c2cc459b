//! Domain services used by the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own validation, hashing, and persistence concerns so
//! route handlers can stay focused on cookie plumbing and page rendering.

pub mod auth;
pub mod credentials;
pub mod forms;
pub mod password;
pub mod session;
