//! Integration tests for the login, refresh, and logout flows.

use http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_login_success_returns_bearer_pair() {
    let app = TestApp::new().await;

    let body = app.login("user1", "password1").await;
    assert!(body.get("access_token").is_some());
    assert!(body.get("refresh_token").is_some());
    assert_eq!(body.get("token_type").unwrap().as_str(), Some("bearer"));
}

#[tokio::test]
async fn test_login_accepts_form_encoded_body() {
    let app = TestApp::new().await;

    let response = app
        .request_form(
            "POST",
            "/api/auth/login",
            "username=user1&password=password1",
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.get("access_token").is_some());
}

#[tokio::test]
async fn test_login_invalid_password() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "username": "user1",
                "password": "wrongpassword",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_unknown_user_matches_wrong_password() {
    let app = TestApp::new().await;

    let unknown = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({"username": "nobody", "password": "password1"})),
            None,
        )
        .await;
    let wrong = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({"username": "user1", "password": "nope"})),
            None,
        )
        .await;

    assert_eq!(unknown.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong.status, StatusCode::UNAUTHORIZED);
    // Identical bodies: the response must not reveal whether the user exists.
    assert_eq!(unknown.body, wrong.body);
}

#[tokio::test]
async fn test_login_missing_fields_is_422() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({"username": "user1"})),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({"username": "", "password": ""})),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_refresh_returns_new_access_token() {
    let app = TestApp::new().await;
    let login = app.login("user2", "password2").await;
    let refresh_token = login.get("refresh_token").unwrap().as_str().unwrap();

    let response = app
        .request(
            "POST",
            "/api/auth/refresh",
            Some(serde_json::json!({"refresh_token": refresh_token})),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body.get("token_type").unwrap().as_str(),
        Some("bearer")
    );

    // The refreshed access token authenticates as the same subject.
    let new_access = response.body.get("access_token").unwrap().as_str().unwrap();
    let protected = app
        .request("GET", "/api/protected", None, Some(new_access))
        .await;
    assert_eq!(protected.status, StatusCode::OK);
    assert_eq!(
        protected.body.get("message").unwrap().as_str(),
        Some("Hello, user2!")
    );
}

#[tokio::test]
async fn test_refresh_missing_field_is_422() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/refresh",
            Some(serde_json::json!({})),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_refresh_with_garbage_is_401() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/refresh",
            Some(serde_json::json!({"refresh_token": "not-a-token"})),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_second_login_supersedes_first_refresh_token() {
    let app = TestApp::new().await;
    let first = app.login("user1", "password1").await;
    let _second = app.login("user1", "password1").await;

    let old_refresh = first.get("refresh_token").unwrap().as_str().unwrap();
    let response = app
        .request(
            "POST",
            "/api/auth/refresh",
            Some(serde_json::json!({"refresh_token": old_refresh})),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_logout_revokes_access_token() {
    let app = TestApp::new().await;
    let token = app.login_token("user1", "password1").await;

    // Works before logout.
    let before = app.request("GET", "/api/protected", None, Some(&token)).await;
    assert_eq!(before.status, StatusCode::OK);

    let logout = app
        .request("POST", "/api/auth/logout", None, Some(&token))
        .await;
    assert_eq!(logout.status, StatusCode::OK);

    // Signature and expiry are still valid; revocation alone denies it.
    let after = app.request("GET", "/api/protected", None, Some(&token)).await;
    assert_eq!(after.status, StatusCode::UNAUTHORIZED);
    assert_eq!(after.body.get("error").unwrap().as_str(), Some("REVOKED"));
}

#[tokio::test]
async fn test_logout_twice_is_safe() {
    let app = TestApp::new().await;
    let token = app.login_token("user1", "password1").await;

    let first = app
        .request("POST", "/api/auth/logout", None, Some(&token))
        .await;
    let second = app
        .request("POST", "/api/auth/logout", None, Some(&token))
        .await;

    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(second.status, StatusCode::OK);
}

#[tokio::test]
async fn test_logout_malformed_token_is_400() {
    let app = TestApp::new().await;

    let response = app
        .request("POST", "/api/auth/logout", None, Some("garbage"))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_logout_without_token_is_401() {
    let app = TestApp::new().await;

    let response = app.request("POST", "/api/auth/logout", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_logout_all_invalidates_refresh_token() {
    let app = TestApp::new().await;
    let login = app.login("user1", "password1").await;
    let access = login.get("access_token").unwrap().as_str().unwrap();
    let refresh = login.get("refresh_token").unwrap().as_str().unwrap();

    let response = app
        .request("POST", "/api/auth/logout-all", None, Some(access))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request(
            "POST",
            "/api/auth/refresh",
            Some(serde_json::json!({"refresh_token": refresh})),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
