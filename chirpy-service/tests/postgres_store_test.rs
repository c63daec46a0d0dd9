//! PostgreSQL store tests. Set `DB_URL` to a scratch database and run with
//! `--ignored`.

use chirpy_service::{
    config::DatabaseConfig,
    db,
    models::{Chirp, RefreshToken, User},
    services::{ChirpStore, Database, SessionStore, UserStore},
};
use service_core::error::AppError;
use uuid::Uuid;

async fn database() -> Database {
    let config = DatabaseConfig {
        url: std::env::var("DB_URL").expect("DB_URL must be set"),
        max_connections: 2,
        min_connections: 1,
    };
    Database::new(db::connect(&config).await.expect("Failed to connect"))
}

fn unique_email() -> String {
    format!("{}@example.com", Uuid::new_v4())
}

#[tokio::test]
#[ignore] // Requires running PostgreSQL
async fn test_session_lifecycle_in_postgres() {
    let db = database().await;
    let user = db
        .create_user(&User::new(unique_email(), "hash".to_string()))
        .await
        .unwrap();

    let token = RefreshToken::new(user.id, "raw-refresh-token", 60);
    db.insert_refresh_token(&token).await.unwrap();

    let owner = db
        .find_user_by_valid_refresh_token(&token.token_hash)
        .await
        .unwrap()
        .expect("token should be valid");
    assert_eq!(owner.id, user.id);

    assert!(db.revoke_refresh_token(&token.token_hash).await.unwrap());
    assert!(!db.revoke_refresh_token(&token.token_hash).await.unwrap());
    assert!(db
        .find_user_by_valid_refresh_token(&token.token_hash)
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
#[ignore] // Requires running PostgreSQL
async fn test_duplicate_email_is_conflict() {
    let db = database().await;
    let email = unique_email();
    db.create_user(&User::new(email.clone(), "hash".to_string()))
        .await
        .unwrap();

    let result = db.create_user(&User::new(email, "hash".to_string())).await;
    assert!(matches!(result, Err(AppError::Conflict(_))));
}

#[tokio::test]
#[ignore] // Requires running PostgreSQL
async fn test_chirp_crud_in_postgres() {
    let db = database().await;
    let user = db
        .create_user(&User::new(unique_email(), "hash".to_string()))
        .await
        .unwrap();

    let chirp = db
        .create_chirp(&Chirp::new(user.id, "hello".to_string()))
        .await
        .unwrap();
    assert_eq!(db.get_chirp(chirp.id).await.unwrap().unwrap().body, "hello");
    assert_eq!(db.list_chirps(Some(user.id)).await.unwrap().len(), 1);

    assert!(db.upgrade_user(user.id).await.unwrap());
    assert!(db.delete_chirp(chirp.id).await.unwrap());
    assert!(db.get_chirp(chirp.id).await.unwrap().is_none());
}
