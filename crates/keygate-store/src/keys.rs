//! Store key builders.
//!
//! Centralising key construction prevents typos and makes it easy to find
//! every key the application uses. Two independent keyspaces exist:
//! `refresh_token:` (subject → current refresh token) and `blacklist:`
//! (revoked token fingerprint → marker).

/// Key for the single live refresh token of a subject.
pub fn refresh_token(subject: &str) -> String {
    format!("refresh_token:{subject}")
}

/// Key for a revoked access token, addressed by its fingerprint.
pub fn blacklist(token_fingerprint: &str) -> String {
    format!("blacklist:{token_fingerprint}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refresh_token_key() {
        assert_eq!(refresh_token("user1"), "refresh_token:user1");
    }

    #[test]
    fn test_blacklist_key() {
        assert_eq!(blacklist("deadbeef"), "blacklist:deadbeef");
    }
}
