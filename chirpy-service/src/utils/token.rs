use rand::{rngs::OsRng, RngCore};

use crate::services::AuthError;

const REFRESH_TOKEN_BYTES: usize = 32;

/// Generate an opaque refresh token: 32 bytes from the OS CSPRNG, lowercase hex.
pub fn generate_refresh_token() -> Result<String, AuthError> {
    let mut bytes = [0u8; REFRESH_TOKEN_BYTES];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|e| AuthError::EntropyError(e.to_string()))?;
    Ok(hex::encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_refresh_token_format() {
        let token = generate_refresh_token().unwrap();

        assert_eq!(token.len(), 64);
        assert!(token
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn test_refresh_tokens_are_distinct() {
        let tokens: HashSet<String> = (0..1000)
            .map(|_| generate_refresh_token().unwrap())
            .collect();

        assert_eq!(tokens.len(), 1000);
    }
}
