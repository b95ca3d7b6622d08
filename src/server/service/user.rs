//! User service for registration, login, and lookups.
//!
//! This module provides the `UserService`, which owns the account rules: emails are
//! unique, passwords are hashed before storage, and login failures never reveal
//! whether the email or the password was wrong.

use sea_orm::{DatabaseConnection, DbErr, SqlErr};

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{CreateUserParams, LoginParams, RegisterUserParams, User},
    service::auth::{hash_password, verify_password, TokenService, LOGIN_TOKEN_TTL},
};

const EMAIL_TAKEN: &str = "Email already registered";

/// Service providing business logic for user accounts.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the primary database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new user.
    ///
    /// Rejects an email that is already registered, hashes the password, and stores
    /// the user. A unique violation raised by a concurrent registration is reported
    /// the same way as the up-front check.
    ///
    /// # Returns
    /// - `Ok(User)` - Newly created user
    /// - `Err(AppError::Conflict)` - Email already registered
    /// - `Err(AppError::AuthErr)` - Password hashing failed
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn register(&self, params: RegisterUserParams) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        if repo.get_by_email(&params.email).await?.is_some() {
            return Err(AppError::Conflict(EMAIL_TAKEN.to_string()));
        }

        let password = params.password;
        let password_hash = run_blocking(move || hash_password(&password)).await?;

        repo.create(CreateUserParams {
            email: params.email,
            name: params.name,
            password_hash,
        })
        .await
        .map_err(map_unique_violation)
    }

    /// Authenticates a user and issues an access token valid for [`LOGIN_TOKEN_TTL`].
    ///
    /// # Returns
    /// - `Ok((String, User))` - Access token and the authenticated user
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Unknown email or wrong password
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn login(
        &self,
        params: LoginParams,
        tokens: &TokenService,
    ) -> Result<(String, User), AppError> {
        let repo = UserRepository::new(self.db);

        let Some(user) = repo.get_by_email(&params.email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        let password = params.password;
        let password_hash = user.password_hash.clone();
        if !run_blocking(move || verify_password(&password, &password_hash)).await? {
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = tokens.issue(user.id, &user.email, Some(LOGIN_TOKEN_TTL))?;

        tracing::debug!("Issued access token for user {}", user.id);

        Ok((token, user))
    }

    /// Retrieves a user by id.
    pub async fn get(&self, id: i32) -> Result<Option<User>, AppError> {
        Ok(UserRepository::new(self.db).get_by_id(id).await?)
    }

    /// Lists users in id order.
    pub async fn list(&self, skip: u64, limit: u64) -> Result<Vec<User>, AppError> {
        Ok(UserRepository::new(self.db)
            .get_paginated(skip, limit)
            .await?)
    }
}

/// Runs Argon2 work on the blocking thread pool.
async fn run_blocking<T, F>(work: F) -> Result<T, AuthError>
where
    F: FnOnce() -> Result<T, AuthError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|e| AuthError::PasswordHash(e.to_string()))?
}

fn map_unique_violation(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => AppError::Conflict(EMAIL_TAKEN.to_string()),
        _ => AppError::DbErr(err),
    }
}
