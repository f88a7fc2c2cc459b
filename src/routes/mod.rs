//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the server-rendered pages and form endpoints under a single Axum
//! router. Static assets (the members-page images) are served from `public/`;
//! anything unmatched falls through to the 404 page.

pub mod auth;
pub mod pages;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Resolve the path to the static asset directory.
fn public_dir() -> PathBuf {
    std::env::var("PUBLIC_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("public"))
}

/// Build the application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::home))
        .route("/signup", get(pages::signup_page))
        .route("/signupSubmit", post(auth::signup_submit))
        .route("/login", get(pages::login_page))
        .route("/loginSubmit", post(auth::login_submit))
        .route("/members", get(pages::members))
        .route("/logout", get(auth::logout))
        .route("/healthz", get(healthz))
        .nest_service("/public", ServeDir::new(public_dir()))
        .fallback(pages::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
