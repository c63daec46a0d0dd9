pub mod credentials;
pub mod password;
pub mod token;
pub mod validation;

pub use credentials::{extract_api_key, extract_bearer, extract_scheme};
pub use password::{
    hash_password, verify_dummy_password, verify_password, Password, PasswordHashString,
};
pub use token::generate_refresh_token;
pub use validation::ValidatedJson;
