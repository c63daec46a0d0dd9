//! Session authority: login, refresh and revoke on top of a `SessionStore`.

use chrono::Duration;
use std::sync::Arc;

use crate::config::JwtConfig;
use crate::models::{RefreshToken, User};
use crate::services::{store::SessionStore, AuthError, JwtService};
use crate::utils::{
    generate_refresh_token, verify_dummy_password, verify_password, Password, PasswordHashString,
};

/// Lifetime of access tokens minted from a refresh token.
pub const REFRESHED_ACCESS_TOKEN_TTL_SECONDS: i64 = 3600;

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub user: User,
    pub token: String,
    pub refresh_token: String,
}

#[derive(Clone)]
pub struct SessionService {
    store: Arc<dyn SessionStore>,
    jwt: JwtService,
    access_token_ttl: Duration,
    refresh_token_expiry_days: i64,
}

impl SessionService {
    pub fn new(store: Arc<dyn SessionStore>, jwt: JwtService, config: &JwtConfig) -> Self {
        Self {
            store,
            jwt,
            access_token_ttl: Duration::seconds(config.access_token_ttl_seconds),
            refresh_token_expiry_days: config.refresh_token_expiry_days,
        }
    }

    /// Check credentials and open a new session.
    ///
    /// Every call that succeeds adds one refresh token; earlier sessions stay valid.
    pub async fn login(&self, email: &str, password: &Password) -> Result<LoginOutcome, AuthError> {
        let Some(user) = self.store.find_user_by_email(email).await? else {
            verify_dummy_password(password);
            tracing::debug!("Login attempt for unknown email");
            return Err(AuthError::AuthenticationFailed);
        };

        let hash = PasswordHashString::new(user.hashed_password.clone());
        if !verify_password(password, &hash) {
            tracing::debug!(user_id = %user.id, "Login attempt with wrong password");
            return Err(AuthError::AuthenticationFailed);
        }

        let token = self.jwt.issue(user.id, self.access_token_ttl)?;
        let refresh_token = generate_refresh_token()?;

        self.store
            .insert_refresh_token(&RefreshToken::new(
                user.id,
                &refresh_token,
                self.refresh_token_expiry_days,
            ))
            .await?;

        tracing::info!(user_id = %user.id, "User logged in");

        Ok(LoginOutcome {
            user,
            token,
            refresh_token,
        })
    }

    /// Mint a new access token from a live refresh token. The refresh token
    /// itself is neither rotated nor extended.
    pub async fn refresh(&self, raw_token: &str) -> Result<String, AuthError> {
        let user = self
            .store
            .find_user_by_valid_refresh_token(&RefreshToken::hash_token(raw_token))
            .await?
            .ok_or(AuthError::InvalidSession)?;

        let token = self
            .jwt
            .issue(user.id, Duration::seconds(REFRESHED_ACCESS_TOKEN_TTL_SECONDS))?;

        tracing::info!(user_id = %user.id, "Access token refreshed");
        Ok(token)
    }

    /// Revoke a refresh token. Unknown and already revoked tokens are accepted.
    pub async fn revoke(&self, raw_token: &str) -> Result<(), AuthError> {
        let revoked = self
            .store
            .revoke_refresh_token(&RefreshToken::hash_token(raw_token))
            .await?;

        if revoked {
            tracing::info!("Refresh token revoked");
        } else {
            tracing::debug!("Revoke requested for unknown or already revoked token");
        }
        Ok(())
    }
}
