//! Request extractors.

pub mod auth;
pub mod credentials;

pub use auth::BearerToken;
pub use credentials::Credentials;
