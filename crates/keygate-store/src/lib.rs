//! # keygate-store
//!
//! TTL store provider implementations for Keygate. Two backends:
//!
//! - **memory**: in-process store using [moka](https://crates.io/crates/moka)
//!   with true per-entry TTL
//! - **redis**: Redis-backed store using the
//!   [redis](https://crates.io/crates/redis) crate, relying on native key
//!   expiry
//!
//! The provider is selected at runtime based on configuration. Both keyspaces
//! used by the auth layer (`refresh_token:*`, `blacklist:*`) live in the same
//! store instance but are independent; nothing ever spans them atomically.

pub mod keys;
#[cfg(feature = "memory")]
pub mod memory;
pub mod provider;
#[cfg(feature = "redis-backend")]
pub mod redis;

pub use provider::StoreManager;
