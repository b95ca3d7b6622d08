//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction.

use sea_orm::DatabaseConnection;

use crate::server::service::auth::TokenService;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `TokenService` holds small key buffers and validation settings
#[derive(Clone)]
pub struct AppState {
    /// Primary store: users, projects, project sections, events.
    pub db: DatabaseConnection,

    /// History store: products and order history.
    pub history_db: DatabaseConnection,

    /// Issues and verifies bearer tokens with the configured secret.
    pub tokens: TokenService,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Primary database connection pool
    /// - `history_db` - History database connection pool
    /// - `tokens` - Token service built from the signing secret
    pub fn new(db: DatabaseConnection, history_db: DatabaseConnection, tokens: TokenService) -> Self {
        Self {
            db,
            history_db,
            tokens,
        }
    }
}
