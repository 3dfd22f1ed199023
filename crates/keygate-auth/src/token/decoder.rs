//! JWT token validation.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use keygate_core::config::AuthConfig;
use keygate_core::error::AuthError;

use super::claims::{Claims, TokenType};

/// Validates JWT tokens.
///
/// Signature integrity is always checked before any claim is inspected; a
/// token that fails the signature check never yields claims, not even for
/// error reporting. Which check failed (signature vs expiry) is
/// distinguishable by timing in the underlying library; with a symmetric
/// process-wide secret this is accepted as best-effort.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation for normal decode paths (signature + expiry).
    validation: Validation,
    /// Validation for the logout path (signature only).
    expiry_exempt_validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5; // 5 seconds leeway for clock skew

        let mut expiry_exempt_validation = Validation::new(Algorithm::HS256);
        expiry_exempt_validation.validate_exp = false;

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
            expiry_exempt_validation,
        }
    }

    /// Decodes and validates an access token: signature, expiry, then type.
    pub fn decode_access(&self, token: &str) -> Result<Claims, AuthError> {
        let claims = self.decode_token(token, &self.validation)?;

        if claims.token_type != TokenType::Access {
            return Err(AuthError::invalid_signature(
                "Invalid token type: expected access token",
            ));
        }

        Ok(claims)
    }

    /// Decodes and validates a refresh token: signature, expiry, then type.
    pub fn decode_refresh(&self, token: &str) -> Result<Claims, AuthError> {
        let claims = self.decode_token(token, &self.validation)?;

        if claims.token_type != TokenType::Refresh {
            return Err(AuthError::invalid_signature(
                "Invalid token type: expected refresh token",
            ));
        }

        Ok(claims)
    }

    /// Decodes a token for the logout path: the signature is still enforced,
    /// expiry is not, so an expired-but-genuine token can be logged out as a
    /// no-op instead of erroring.
    pub fn decode_ignoring_expiry(&self, token: &str) -> Result<Claims, AuthError> {
        self.decode_token(token, &self.expiry_exempt_validation)
    }

    /// Internal decode without type checking.
    fn decode_token(&self, token: &str, validation: &Validation) -> Result<Claims, AuthError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AuthError::expired("Token has expired")
                }
                // Bad signature and malformed structure collapse into one
                // kind so callers cannot probe which part was wrong.
                _ => AuthError::invalid_signature("Invalid token"),
            }
        })?;

        Ok(token_data.claims)
    }
}
