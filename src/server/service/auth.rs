//! Password hashing and access token handling.
//!
//! Passwords are stored as Argon2id PHC strings with a random per-password salt.
//! Access tokens are HS256 JWTs carrying the user's email as `sub`, the numeric
//! `user_id`, and an `exp` timestamp. Token validation applies no clock leeway.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::server::error::auth::AuthError;

/// Lifetime of tokens issued when no explicit lifetime is requested.
pub const DEFAULT_TOKEN_TTL: Duration = Duration::minutes(15);

/// Lifetime of tokens issued by a successful login.
pub const LOGIN_TOKEN_TTL: Duration = Duration::minutes(30);

/// Hashes a plain-text password into an Argon2 PHC string.
///
/// # Returns
/// - `Ok(String)` - Encoded hash including algorithm parameters and salt
/// - `Err(AuthError::PasswordHash)` - Hashing failed
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::PasswordHash(e.to_string()))
}

/// Checks a plain-text password against a stored hash.
///
/// # Returns
/// - `Ok(true)` - Password matches
/// - `Ok(false)` - Password does not match
/// - `Err(AuthError::PasswordHash)` - Stored hash could not be parsed
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool, AuthError> {
    let parsed =
        PasswordHash::new(password_hash).map_err(|e| AuthError::PasswordHash(e.to_string()))?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(AuthError::PasswordHash(e.to_string())),
    }
}

/// Claims carried by an access token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// User email.
    pub sub: String,
    pub user_id: i32,
    /// Expiry as seconds since the Unix epoch.
    pub exp: i64,
}

/// Issues and verifies signed access tokens with a shared secret.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a token service keyed by `secret`.
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Issues a token for a user.
    ///
    /// # Arguments
    /// - `user_id` - Id of the authenticated user
    /// - `email` - Email placed in the `sub` claim
    /// - `ttl` - Token lifetime; `None` uses [`DEFAULT_TOKEN_TTL`]
    ///
    /// # Returns
    /// - `Ok(String)` - Encoded JWT
    /// - `Err(AuthError::TokenIssue)` - Signing failed
    pub fn issue(
        &self,
        user_id: i32,
        email: &str,
        ttl: Option<Duration>,
    ) -> Result<String, AuthError> {
        let exp = Utc::now() + ttl.unwrap_or(DEFAULT_TOKEN_TTL);
        let claims = Claims {
            sub: email.to_string(),
            user_id,
            exp: exp.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(AuthError::TokenIssue)
    }

    /// Verifies a token's signature and expiry and returns its claims.
    ///
    /// # Returns
    /// - `Ok(Claims)` - Token is valid
    /// - `Err(AuthError::InvalidToken)` - Malformed, tampered, or expired token
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(AuthError::InvalidToken)
    }
}
