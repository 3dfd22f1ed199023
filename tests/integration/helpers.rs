//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use keygate_api::state::AppState;
use keygate_auth::guard::AccessGuard;
use keygate_auth::session::SessionIssuer;
use keygate_auth::token::{JwtDecoder, JwtEncoder};
use keygate_auth::{PasswordHasher, RefreshTokenStore, RevocationList, StaticUserDirectory};
use keygate_core::config::store::MemoryStoreConfig;
use keygate_core::config::{AppConfig, SeedUser};
use keygate_store::StoreManager;
use keygate_store::memory::MemoryTtlStore;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
}

impl TestApp {
    /// Create a test application over an in-memory store, seeded with the
    /// standard fixture users (user1/admin, user2/user).
    pub async fn new() -> Self {
        let mut config = AppConfig::default();
        config.auth.jwt_secret = "integration-test-secret".to_string();
        config.users = vec![
            SeedUser {
                username: "user1".to_string(),
                password: "password1".to_string(),
                role: "admin".to_string(),
            },
            SeedUser {
                username: "user2".to_string(),
                password: "password2".to_string(),
                role: "user".to_string(),
            },
        ];

        let store = Arc::new(StoreManager::from_provider(Arc::new(MemoryTtlStore::new(
            &MemoryStoreConfig { max_capacity: 1000 },
        ))));

        let hasher = Arc::new(PasswordHasher::new());
        let directory =
            Arc::new(StaticUserDirectory::seed(&hasher, &config.users).expect("seed users"));

        let encoder = Arc::new(JwtEncoder::new(&config.auth));
        let decoder = Arc::new(JwtDecoder::new(&config.auth));
        let refresh_tokens = Arc::new(RefreshTokenStore::new(Arc::clone(&store)));
        let revocations = Arc::new(RevocationList::new(Arc::clone(&store)));

        let issuer = Arc::new(SessionIssuer::new(
            directory,
            hasher,
            encoder,
            Arc::clone(&decoder),
            refresh_tokens,
            Arc::clone(&revocations),
        ));
        let guard = Arc::new(AccessGuard::new(decoder, revocations));

        let state = AppState {
            config: Arc::new(config),
            store,
            issuer,
            guard,
        };

        Self {
            router: keygate_api::build_router(state),
        }
    }

    /// Login and return the full token response body
    pub async fn login(&self, username: &str, password: &str) -> Value {
        let response = self
            .request(
                "POST",
                "/api/auth/login",
                Some(serde_json::json!({
                    "username": username,
                    "password": password,
                })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );
        response.body
    }

    /// Login and return just the JWT access token
    pub async fn login_token(&self, username: &str, password: &str) -> String {
        self.login(username, password)
            .await
            .get("access_token")
            .and_then(|v| v.as_str())
            .expect("No access_token in login response")
            .to_string()
    }

    /// Make a JSON HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {token}"));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        self.send(req).await
    }

    /// Make a form-encoded HTTP request to the test app
    pub async fn request_form(&self, method: &str, path: &str, body: &str) -> TestResponse {
        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .expect("Failed to build request");

        self.send(req).await
    }

    async fn send(&self, req: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body (Null when the body was not JSON)
    pub body: Value,
}
