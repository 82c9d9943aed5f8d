//! Client-credential authentication.
//!
//! The API issues a bearer token in exchange for a client id and secret.
//! [`TokenManager`] performs that exchange on first use, caches the token
//! and drops it again when a request comes back 401.

mod token;

pub use token::{TokenManager, TOKEN_PATH};
