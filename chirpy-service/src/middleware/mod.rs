pub mod api_key;
pub mod auth;
pub mod hits;

pub use api_key::polka_api_key_middleware;
pub use auth::{auth_middleware, AuthUser};
pub use hits::file_server_hits_middleware;
