//! Workspace integration tests driving the full router.

mod auth_test;
mod helpers;
mod protected_test;
