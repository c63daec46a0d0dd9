//! Test helpers for chirpy-service integration tests.
//!
//! Drives the full router in-process against an in-memory store.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use chirpy_service::{
    build_router,
    config::{
        ChirpyConfig, DatabaseConfig, FileServerConfig, JwtConfig, Platform, PolkaConfig,
        SecurityConfig,
    },
    services::InMemoryStore,
    AppState,
};
use serde_json::Value;
use std::sync::Arc;
use tempfile::TempDir;
use tower::util::ServiceExt;

pub const TEST_SECRET: &str = "test-secret";
pub const TEST_POLKA_KEY: &str = "f271c81ff7084ee5b99a5091b42d486e";
pub const INDEX_HTML: &str = "<html><body><h1>Welcome to Chirpy</h1></body></html>";

pub fn test_config(platform: Platform, fileserver_root: &str) -> ChirpyConfig {
    ChirpyConfig {
        common: service_core::config::Config::default(),
        platform,
        service_name: "chirpy-service-test".to_string(),
        service_version: "test".to_string(),
        log_level: "error".to_string(),
        database: DatabaseConfig {
            url: "postgres://localhost/chirpy_test".to_string(),
            max_connections: 5,
            min_connections: 1,
        },
        jwt: JwtConfig {
            secret: TEST_SECRET.to_string(),
            access_token_ttl_seconds: 3600,
            refresh_token_expiry_days: 60,
        },
        polka: PolkaConfig {
            api_key: TEST_POLKA_KEY.to_string(),
        },
        fileserver: FileServerConfig {
            root: fileserver_root.to_string(),
        },
        security: SecurityConfig {
            allowed_origins: vec!["http://localhost:8080".to_string()],
        },
    }
}

/// Router plus handles on its state and store.
pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    pub store: Arc<InMemoryStore>,
    _static_dir: TempDir,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("Response body is not JSON")
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_platform(Platform::Dev)
    }

    pub fn with_platform(platform: Platform) -> Self {
        let static_dir = tempfile::tempdir().expect("Failed to create static dir");
        std::fs::write(static_dir.path().join("index.html"), INDEX_HTML)
            .expect("Failed to write index.html");

        let root = static_dir.path().to_string_lossy().into_owned();
        let store = Arc::new(InMemoryStore::new());
        let state = AppState::new(test_config(platform, &root), store.clone());
        let router = build_router(state.clone());

        Self {
            router,
            state,
            store,
            _static_dir: static_dir,
        }
    }

    pub async fn request(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Router failed");

        let status = response.status();
        let headers = response.headers().clone();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body")
            .to_vec();

        TestResponse {
            status,
            headers,
            body,
        }
    }

    /// Send a request with an optional raw Authorization value and JSON body.
    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        authorization: Option<&str>,
        body: Option<Value>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(value) = authorization {
            builder = builder.header(header::AUTHORIZATION, value);
        }

        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&json).unwrap()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        self.request(request).await
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(Method::GET, uri, None, None).await
    }

    pub async fn create_user(&self, email: &str, password: &str) -> Value {
        let response = self
            .send(
                Method::POST,
                "/api/users",
                None,
                Some(serde_json::json!({ "email": email, "password": password })),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{}", response.text());
        response.json()
    }

    pub async fn login(&self, email: &str, password: &str) -> TestResponse {
        self.send(
            Method::POST,
            "/api/login",
            None,
            Some(serde_json::json!({ "email": email, "password": password })),
        )
        .await
    }

    /// Register and log in, returning the login body.
    pub async fn signup(&self, email: &str, password: &str) -> Value {
        self.create_user(email, password).await;
        let response = self.login(email, password).await;
        assert_eq!(response.status, StatusCode::OK, "{}", response.text());
        response.json()
    }

    pub async fn create_chirp(&self, token: &str, body: &str) -> TestResponse {
        self.send(
            Method::POST,
            "/api/chirps",
            Some(&bearer(token)),
            Some(serde_json::json!({ "body": body })),
        )
        .await
    }
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

pub fn token_of(login: &Value) -> String {
    login["token"].as_str().expect("token missing").to_string()
}

pub fn refresh_token_of(login: &Value) -> String {
    login["refresh_token"]
        .as_str()
        .expect("refresh_token missing")
        .to_string()
}
