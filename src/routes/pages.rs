//! Server-rendered pages.
//!
//! Templates are embedded at compile time and filled in with placeholder
//! substitution; user-provided values are HTML-escaped before insertion.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use rand::Rng;

use crate::routes::auth::CurrentUser;
use crate::services::session::SessionUser;

const HOME_TEMPLATE: &str = include_str!("../../templates/home.html");
const SIGNUP_TEMPLATE: &str = include_str!("../../templates/signup.html");
const LOGIN_TEMPLATE: &str = include_str!("../../templates/login.html");
const MEMBERS_TEMPLATE: &str = include_str!("../../templates/members.html");
const NOT_FOUND_TEMPLATE: &str = include_str!("../../templates/not_found.html");
const ERROR_TEMPLATE: &str = include_str!("../../templates/error.html");

/// Fixed asset set for the members page; one is picked per request.
pub(crate) const MEMBER_IMAGES: [&str; 3] = ["image1.svg", "image2.svg", "image3.svg"];

pub(crate) fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn error_fragment(error: Option<&str>) -> String {
    error.map_or_else(String::new, |msg| {
        format!("<p class=\"error\">{}</p>", escape_html(msg))
    })
}

#[must_use]
pub(crate) fn render_home(user: Option<&SessionUser>) -> String {
    let content = match user {
        Some(user) => format!(
            "<h1>Hello, {}!</h1>\n<p><a href=\"/members\">Go to Members Area</a></p>\n<p><a href=\"/logout\">Log out</a></p>",
            escape_html(&user.name)
        ),
        None => "<h1>Welcome</h1>\n<p><a href=\"/signup\">Sign up</a></p>\n<p><a href=\"/login\">Log in</a></p>".to_owned(),
    };
    HOME_TEMPLATE.replace("{{CONTENT}}", &content)
}

#[must_use]
pub(crate) fn render_signup(error: Option<&str>) -> String {
    SIGNUP_TEMPLATE.replace("{{ERROR}}", &error_fragment(error))
}

#[must_use]
pub(crate) fn render_login(error: Option<&str>) -> String {
    LOGIN_TEMPLATE.replace("{{ERROR}}", &error_fragment(error))
}

#[must_use]
pub(crate) fn render_members(name: &str, image: &str) -> String {
    MEMBERS_TEMPLATE
        .replace("{{NAME}}", &escape_html(name))
        .replace("{{IMAGE}}", image)
}

/// Pick one members-page image uniformly at random.
pub(crate) fn pick_member_image() -> &'static str {
    let idx = rand::rng().random_range(0..MEMBER_IMAGES.len());
    MEMBER_IMAGES[idx]
}

/// `GET /` — home page, greeting the session user if present.
pub async fn home(CurrentUser(user): CurrentUser) -> Html<String> {
    Html(render_home(user.as_ref()))
}

/// `GET /signup` — signup form.
pub async fn signup_page() -> Html<String> {
    Html(render_signup(None))
}

/// `GET /login` — login form.
pub async fn login_page() -> Html<String> {
    Html(render_login(None))
}

/// `GET /members` — gated view; redirects home without a valid session.
pub async fn members(CurrentUser(user): CurrentUser) -> Response {
    match user {
        Some(user) => Html(render_members(&user.name, pick_member_image())).into_response(),
        None => Redirect::to("/").into_response(),
    }
}

/// Fallback for unmatched routes.
pub async fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Html(NOT_FOUND_TEMPLATE.to_owned())).into_response()
}

/// Generic page for persistence failures; internal detail stays in the logs.
#[must_use]
pub(crate) fn database_error_page() -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, Html(ERROR_TEMPLATE.to_owned())).into_response()
}

#[cfg(test)]
#[path = "pages_test.rs"]
mod tests;
