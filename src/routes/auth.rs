//! Auth routes — signup/login form submission, logout, session cookie plumbing.

use axum::Form;
use axum::extract::{FromRef, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use crate::routes::pages;
use crate::services::auth as auth_flow;
use crate::services::forms::{LoginForm, SignupForm};
use crate::services::session::{self, SESSION_TTL, SessionUser};
use crate::state::AppState;

const COOKIE_NAME: &str = "session_token";

pub(crate) fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .and_then(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
}

pub(crate) fn cookie_secure() -> bool {
    env_bool("COOKIE_SECURE").unwrap_or(false)
}

/// Session cookie carrying the opaque token; max-age matches the store TTL.
pub(crate) fn session_cookie(token: String) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(cookie_secure())
        .max_age(SESSION_TTL)
        .build()
}

pub(crate) fn clear_session_cookie() -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(cookie_secure())
        .max_age(time::Duration::ZERO)
        .build()
}

// =============================================================================
// SESSION EXTRACTOR
// =============================================================================

/// Current user resolved from the session cookie, if any.
/// `None` covers a missing cookie, an unknown token, and an expired session
/// alike; handlers that gate on auth redirect rather than reject.
pub struct CurrentUser(pub Option<SessionUser>);

impl<S> axum::extract::FromRequestParts<S> for CurrentUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar.get(COOKIE_NAME).map(Cookie::value).unwrap_or_default();
        if token.is_empty() {
            return Ok(Self(None));
        }

        let app_state = AppState::from_ref(state);
        let user = session::validate_session(&app_state.pool, &app_state.session_secret, token)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "session lookup failed");
                pages::database_error_page()
            })?;

        Ok(Self(user))
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `POST /signupSubmit` — validate, create the user, start a session.
/// Failures re-render the signup form with an inline message.
pub async fn signup_submit(State(state): State<AppState>, Form(form): Form<SignupForm>) -> Response {
    match auth_flow::signup(&state.pool, &state.session_secret, form).await {
        Ok(token) => {
            let jar = CookieJar::new().add(session_cookie(token));
            (jar, Redirect::to("/members")).into_response()
        }
        Err(e) => {
            if e.is_internal() {
                tracing::error!(error = %e, "signup failed");
            }
            Html(pages::render_signup(Some(&e.inline_message()))).into_response()
        }
    }
}

/// `POST /loginSubmit` — validate, check credentials, start a session.
/// Failures re-render the login form with an inline message.
pub async fn login_submit(State(state): State<AppState>, Form(form): Form<LoginForm>) -> Response {
    match auth_flow::login(&state.pool, &state.session_secret, form).await {
        Ok(token) => {
            let jar = CookieJar::new().add(session_cookie(token));
            (jar, Redirect::to("/members")).into_response()
        }
        Err(e) => {
            if e.is_internal() {
                tracing::error!(error = %e, "login failed");
            }
            Html(pages::render_login(Some(&e.inline_message()))).into_response()
        }
    }
}

/// `GET /logout` — erase the session record, clear the cookie, redirect home.
/// The store delete completes before the redirect is sent.
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> Response {
    if let Some(token) = jar.get(COOKIE_NAME).map(Cookie::value) {
        if !token.is_empty() {
            if let Err(e) = session::delete_session(&state.pool, &state.session_secret, token).await {
                tracing::error!(error = %e, "session delete failed");
            }
        }
    }

    let jar = CookieJar::new().add(clear_session_cookie());
    (jar, Redirect::to("/")).into_response()
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
