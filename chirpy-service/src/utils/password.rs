use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use once_cell::sync::Lazy;

use crate::services::AuthError;

/// Newtype for password to prevent accidental logging
#[derive(Clone)]
pub struct Password(String);

impl Password {
    pub fn new(password: impl Into<String>) -> Self {
        Self(password.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Password([redacted])")
    }
}

/// Newtype for a self-describing (PHC) password hash
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordHashString(String);

impl PasswordHashString {
    pub fn new(hash: String) -> Self {
        Self(hash)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// Hash verified when the account being logged into does not exist, so an
/// unknown email costs as much as a wrong password.
static DUMMY_HASH: Lazy<Option<PasswordHashString>> =
    Lazy::new(|| hash_password(&Password::new("chirpy-timing-equaliser")).ok());

/// Hash a password using Argon2id
///
/// Uses the crate's default (fixed) cost parameters and a fresh salt from the
/// OS random source. The salt and parameters are embedded in the output.
pub fn hash_password(password: &Password) -> Result<PasswordHashString, AuthError> {
    let argon2 = Argon2::default();
    let salt = SaltString::generate(&mut OsRng);

    let password_hash = argon2
        .hash_password(password.as_str().as_bytes(), &salt)
        .map_err(|e| AuthError::HashingError(e.to_string()))?
        .to_string();

    Ok(PasswordHashString::new(password_hash))
}

/// Verify a password against a hash.
///
/// Returns `false` for a wrong password and for a malformed hash alike.
/// The digest comparison inside argon2 is constant-time.
pub fn verify_password(password: &Password, password_hash: &PasswordHashString) -> bool {
    let Ok(parsed_hash) = PasswordHash::new(password_hash.as_str()) else {
        return false;
    };

    Argon2::default()
        .verify_password(password.as_str().as_bytes(), &parsed_hash)
        .is_ok()
}

/// Burn one verification's worth of work against a throwaway hash.
pub fn verify_dummy_password(password: &Password) {
    if let Some(hash) = DUMMY_HASH.as_ref() {
        let _ = verify_password(password, hash);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_password() {
        let password = Password::new("hunter2");
        let hash = hash_password(&password).expect("Failed to hash password");

        assert!(hash.as_str().starts_with("$argon2id$"));
        assert!(!hash.as_str().contains("hunter2"));
    }

    #[test]
    fn test_verify_password_correct() {
        let password = Password::new("hunter2");
        let hash = hash_password(&password).expect("Failed to hash password");

        assert!(verify_password(&password, &hash));
    }

    #[test]
    fn test_verify_password_incorrect() {
        let hash = hash_password(&Password::new("hunter2")).expect("Failed to hash password");

        assert!(!verify_password(&Password::new("hunter3"), &hash));
        assert!(!verify_password(&Password::new(""), &hash));
    }

    #[test]
    fn test_verify_password_malformed_hash_is_false() {
        let password = Password::new("hunter2");

        assert!(!verify_password(&password, &PasswordHashString::new("not-a-hash".into())));
        assert!(!verify_password(&password, &PasswordHashString::new(String::new())));
    }

    #[test]
    fn test_different_hashes_for_same_password() {
        let password = Password::new("hunter2");
        let hash1 = hash_password(&password).expect("Failed to hash password");
        let hash2 = hash_password(&password).expect("Failed to hash password");

        assert_ne!(hash1, hash2);
        assert!(verify_password(&password, &hash1));
        assert!(verify_password(&password, &hash2));
    }

    #[test]
    fn test_password_debug_is_redacted() {
        assert!(!format!("{:?}", Password::new("hunter2")).contains("hunter2"));
    }
}
