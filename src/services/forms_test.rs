use super::*;

fn signup(name: &str, email: &str, password: &str) -> SignupForm {
    SignupForm { name: name.to_owned(), email: email.to_owned(), password: password.to_owned() }
}

fn login(email: &str, password: &str) -> LoginForm {
    LoginForm { email: email.to_owned(), password: password.to_owned() }
}

// =============================================================================
// SignupForm validation
// =============================================================================

#[test]
fn signup_accepts_valid_input() {
    assert!(signup("Alice", "a@x.com", "secret1").validate().is_ok());
}

#[test]
fn signup_accepts_boundary_lengths() {
    let twenty = "a".repeat(20);
    assert!(signup(&twenty, "a@x.com", &twenty).validate().is_ok());
}

#[test]
fn signup_rejects_empty_name() {
    let errors = signup("", "a@x.com", "secret1").validate().unwrap_err();
    assert_eq!(first_violation(&errors), "Name must be between 1 and 20 characters");
}

#[test]
fn signup_rejects_overlong_name() {
    let errors = signup(&"a".repeat(21), "a@x.com", "secret1").validate().unwrap_err();
    assert_eq!(first_violation(&errors), "Name must be between 1 and 20 characters");
}

#[test]
fn signup_rejects_bad_email() {
    let errors = signup("Alice", "not-an-email", "secret1").validate().unwrap_err();
    assert_eq!(first_violation(&errors), "Email must be a valid email address");
}

#[test]
fn signup_rejects_empty_password() {
    let errors = signup("Alice", "a@x.com", "").validate().unwrap_err();
    assert_eq!(first_violation(&errors), "Password must be between 1 and 20 characters");
}

#[test]
fn signup_rejects_overlong_password() {
    let errors = signup("Alice", "a@x.com", &"p".repeat(21)).validate().unwrap_err();
    assert_eq!(first_violation(&errors), "Password must be between 1 and 20 characters");
}

// =============================================================================
// LoginForm validation
// =============================================================================

#[test]
fn login_accepts_valid_input() {
    assert!(login("a@x.com", "secret1").validate().is_ok());
}

#[test]
fn login_rejects_bad_email() {
    let errors = login("", "secret1").validate().unwrap_err();
    assert_eq!(first_violation(&errors), "Email must be a valid email address");
}

#[test]
fn login_rejects_empty_password() {
    let errors = login("a@x.com", "").validate().unwrap_err();
    assert_eq!(first_violation(&errors), "Password must be between 1 and 20 characters");
}

// =============================================================================
// first_violation — field order
// =============================================================================

#[test]
fn first_violation_reports_name_before_email() {
    let errors = signup("", "not-an-email", "secret1").validate().unwrap_err();
    assert_eq!(first_violation(&errors), "Name must be between 1 and 20 characters");
}

#[test]
fn first_violation_reports_email_before_password() {
    let errors = signup("Alice", "not-an-email", "").validate().unwrap_err();
    assert_eq!(first_violation(&errors), "Email must be a valid email address");
}

#[test]
fn first_violation_everything_invalid_reports_name() {
    let errors = signup("", "", "").validate().unwrap_err();
    assert_eq!(first_violation(&errors), "Name must be between 1 and 20 characters");
}

// =============================================================================
// normalize_email
// =============================================================================

#[test]
fn normalize_email_trims_and_lowercases() {
    assert_eq!(normalize_email("  USER@Example.com "), "user@example.com");
}

#[test]
fn normalize_email_keeps_canonical_form() {
    assert_eq!(normalize_email("a@x.com"), "a@x.com");
}
