//! Integration tests for the protected and role-gated endpoints.

use http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_protected_without_token_is_401() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/protected", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.body.get("error").unwrap().as_str(),
        Some("UNAUTHENTICATED")
    );
}

#[tokio::test]
async fn test_protected_greets_authenticated_user() {
    let app = TestApp::new().await;
    let token = app.login_token("user1", "password1").await;

    let response = app.request("GET", "/api/protected", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body.get("message").unwrap().as_str(),
        Some("Hello, user1!")
    );
}

#[tokio::test]
async fn test_protected_with_garbage_token_is_401() {
    let app = TestApp::new().await;

    let response = app
        .request("GET", "/api/protected", None, Some("not.a.jwt"))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_admin_route_forbidden_for_user_role() {
    let app = TestApp::new().await;
    let token = app.login_token("user2", "password2").await;

    let response = app.request("GET", "/api/admin", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.body.get("error").unwrap().as_str(), Some("FORBIDDEN"));
}

#[tokio::test]
async fn test_admin_route_allows_admin_role() {
    let app = TestApp::new().await;
    let token = app.login_token("user1", "password1").await;

    let response = app.request("GET", "/api/admin", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_health() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body.get("status").unwrap().as_str(), Some("ok"));
}

/// Full lifecycle: login → refresh → logout → the logged-out access token is
/// denied as revoked while the refreshed one keeps working.
#[tokio::test]
async fn test_token_lifecycle_scenario() {
    let app = TestApp::new().await;

    let login = app.login("user1", "password1").await;
    let access = login
        .get("access_token")
        .unwrap()
        .as_str()
        .unwrap()
        .to_string();
    let refresh = login
        .get("refresh_token")
        .unwrap()
        .as_str()
        .unwrap()
        .to_string();

    let refreshed = app
        .request(
            "POST",
            "/api/auth/refresh",
            Some(serde_json::json!({"refresh_token": refresh})),
            None,
        )
        .await;
    assert_eq!(refreshed.status, StatusCode::OK);
    let new_access = refreshed
        .body
        .get("access_token")
        .unwrap()
        .as_str()
        .unwrap()
        .to_string();

    let logout = app
        .request("POST", "/api/auth/logout", None, Some(&access))
        .await;
    assert_eq!(logout.status, StatusCode::OK);

    let denied = app
        .request("GET", "/api/protected", None, Some(&access))
        .await;
    assert_eq!(denied.status, StatusCode::UNAUTHORIZED);
    assert_eq!(denied.body.get("error").unwrap().as_str(), Some("REVOKED"));

    // Only the revoked token is dead; the refreshed one was never revoked.
    let allowed = app
        .request("GET", "/api/protected", None, Some(&new_access))
        .await;
    assert_eq!(allowed.status, StatusCode::OK);
}
