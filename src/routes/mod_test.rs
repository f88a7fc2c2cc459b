use super::*;

use crate::state::test_helpers::test_app_state;

#[tokio::test]
async fn router_assembles_with_lazy_pool() {
    let _app = app(test_app_state());
}

#[tokio::test]
async fn healthz_returns_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[test]
fn public_dir_defaults_under_manifest() {
    // PUBLIC_DIR is a shared global; only exercise the default branch.
    if std::env::var("PUBLIC_DIR").is_err() {
        assert!(public_dir().ends_with("public"));
    }
}
