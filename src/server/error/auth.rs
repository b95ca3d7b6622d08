use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::InternalServerError};

#[derive(Error, Debug)]
pub enum AuthError {
    /// Login attempted with an unknown email or a wrong password.
    ///
    /// Both cases produce the same message so the response does not reveal which
    /// emails are registered. Results in 401 Unauthorized with a
    /// `WWW-Authenticate: Bearer` challenge.
    #[error("Incorrect email or password")]
    InvalidCredentials,

    /// Request carried no `Authorization: Bearer` header.
    #[error("Missing bearer token")]
    MissingToken,

    /// Bearer token failed decoding, signature, or expiry validation.
    #[error("Invalid token: {0}")]
    InvalidToken(#[source] jsonwebtoken::errors::Error),

    /// Token was valid but the user it names no longer exists.
    #[error("User {0} from token not found in database")]
    UserNotInDatabase(i32),

    /// Password hashing or stored-hash parsing failed.
    ///
    /// Indicates a server-side problem rather than a bad password.
    #[error("Password hashing failed: {0}")]
    PasswordHash(String),

    /// Signing a new access token failed.
    #[error("Failed to issue access token: {0}")]
    TokenIssue(#[source] jsonwebtoken::errors::Error),
}

/// Converts authentication errors into HTTP responses.
///
/// - `InvalidCredentials` → 401 Unauthorized with `WWW-Authenticate: Bearer`
/// - `MissingToken` / `InvalidToken` → 401 Unauthorized
/// - `UserNotInDatabase` → 404 Not Found with "User not found"
/// - `PasswordHash` / `TokenIssue` → 500 Internal Server Error with generic message
///
/// Token failures are logged at debug level; the client only sees a generic message.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                [(header::WWW_AUTHENTICATE, "Bearer")],
                Json(ErrorDto {
                    error: "Incorrect email or password".to_string(),
                }),
            )
                .into_response(),
            Self::MissingToken => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Not authenticated".to_string(),
                }),
            )
                .into_response(),
            Self::InvalidToken(err) => {
                tracing::debug!("Rejected bearer token: {}", err);
                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorDto {
                        error: "Invalid token".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::UserNotInDatabase(user_id) => {
                tracing::debug!("Token references missing user {}", user_id);
                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorDto {
                        error: "User not found".to_string(),
                    }),
                )
                    .into_response()
            }
            err @ (Self::PasswordHash(_) | Self::TokenIssue(_)) => {
                InternalServerError(err).into_response()
            }
        }
    }
}
