//! Session issuing — login, refresh, and logout flows.

pub mod issuer;

pub use issuer::{IssuedTokens, RefreshedAccess, SessionIssuer, TOKEN_TYPE_BEARER};
