//! Services layer for chirpy-service.
//!
//! Business logic for sessions, users and chirps, plus the storage
//! interfaces they run against.

mod chirps;
mod database;
pub mod error;
mod jwt;
pub mod memory;
pub mod moderation;
mod session;
pub mod store;
mod users;

pub use chirps::{validate_body, ChirpService};
pub use database::Database;
pub use error::AuthError;
pub use jwt::{AccessTokenClaims, JwtService, ACCESS_TOKEN_ISSUER};
pub use memory::InMemoryStore;
pub use session::{LoginOutcome, SessionService, REFRESHED_ACCESS_TOKEN_TTL_SECONDS};
pub use store::{ChirpStore, SessionStore, Store, UserStore};
pub use users::UserService;
