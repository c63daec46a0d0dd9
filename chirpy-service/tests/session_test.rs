//! Login, refresh and revoke through the HTTP surface.

mod common;

use axum::http::{Method, StatusCode};
use chirpy_service::{models::RefreshToken, services::JwtService};
use common::{bearer, refresh_token_of, token_of, TestApp, TEST_SECRET};
use uuid::Uuid;

#[tokio::test]
async fn test_full_session_lifecycle() {
    let app = TestApp::new();

    // Unknown user cannot log in
    let response = app.login("walt@breakingbad.com", "04234").await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    app.create_user("walt@breakingbad.com", "04234").await;

    let response = app.login("walt@breakingbad.com", "04234").await;
    assert_eq!(response.status, StatusCode::OK);
    let login = response.json();
    assert_eq!(login["email"], "walt@breakingbad.com");
    assert_eq!(login["is_chirpy_red"], false);
    assert!(login.get("hashed_password").is_none());
    let access_token = token_of(&login);
    let refresh_token = refresh_token_of(&login);
    assert_eq!(refresh_token.len(), 64);

    let user_id = Uuid::parse_str(login["id"].as_str().unwrap()).unwrap();
    assert_eq!(
        JwtService::from_secret(TEST_SECRET)
            .verify(&access_token)
            .unwrap(),
        user_id
    );

    let response = app
        .send(Method::POST, "/api/refresh", Some(&bearer(&refresh_token)), None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let refreshed = response.json()["token"].as_str().unwrap().to_string();
    assert_ne!(refreshed, access_token);

    let response = app
        .send(Method::POST, "/api/revoke", Some(&bearer(&refresh_token)), None)
        .await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);
    assert!(response.body.is_empty());

    for _ in 0..2 {
        let response = app
            .send(Method::POST, "/api/refresh", Some(&bearer(&refresh_token)), None)
            .await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    }

    // Access tokens already issued stay valid until they expire
    let response = app.create_chirp(&access_token, "still here").await;
    assert_eq!(response.status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_login_failures_look_identical() {
    let app = TestApp::new();
    app.create_user("walt@breakingbad.com", "04234").await;

    let unknown = app.login("jesse@breakingbad.com", "04234").await;
    let wrong = app.login("walt@breakingbad.com", "wrong-password").await;

    assert_eq!(unknown.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown.body, wrong.body);
    assert_eq!(unknown.json()["error"], "Incorrect email or password");
}

#[tokio::test]
async fn test_each_login_adds_a_session() {
    let app = TestApp::new();
    let first = app.signup("walt@breakingbad.com", "04234").await;
    let second = app.login("walt@breakingbad.com", "04234").await.json();

    let user_id = Uuid::parse_str(first["id"].as_str().unwrap()).unwrap();
    assert_eq!(app.store.session_count(user_id), 2);

    // Revoking one session leaves the other usable
    app.send(
        Method::POST,
        "/api/revoke",
        Some(&bearer(&refresh_token_of(&first))),
        None,
    )
    .await;
    let response = app
        .send(
            Method::POST,
            "/api/refresh",
            Some(&bearer(&refresh_token_of(&second))),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_refresh_token_is_not_stored_in_plain() {
    let app = TestApp::new();
    let login = app.signup("walt@breakingbad.com", "04234").await;
    let raw = refresh_token_of(&login);

    assert!(app.store.refresh_token(&raw).is_none());
    let stored = app
        .store
        .refresh_token(&RefreshToken::hash_token(&raw))
        .expect("refresh token should be stored hashed");
    assert!(stored.revoked_at.is_none());
}

#[tokio::test]
async fn test_refresh_and_revoke_without_header_are_bad_requests() {
    let app = TestApp::new();

    let response = app.send(Method::POST, "/api/refresh", None, None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app.send(Method::POST, "/api/revoke", None, None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app
        .send(Method::POST, "/api/refresh", Some("Token abc"), None)
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_refresh_with_unknown_token_is_unauthorized() {
    let app = TestApp::new();

    let response = app
        .send(Method::POST, "/api/refresh", Some(&bearer("deadbeef")), None)
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    // Revoking an unknown token is still acknowledged
    let response = app
        .send(Method::POST, "/api/revoke", Some(&bearer("deadbeef")), None)
        .await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_access_token_cannot_be_used_as_refresh_token() {
    let app = TestApp::new();
    let login = app.signup("walt@breakingbad.com", "04234").await;

    let response = app
        .send(
            Method::POST,
            "/api/refresh",
            Some(&bearer(&token_of(&login))),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_error_bodies_never_echo_tokens() {
    let app = TestApp::new();
    let token = "some.secret.token";

    let response = app
        .send(Method::POST, "/api/chirps", Some(&bearer(token)), None)
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert!(!response.text().contains(token));
}
