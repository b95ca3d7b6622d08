//! User domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::user::{CreateUserDto, LoginDto, UserDto, UserSummaryDto};

/// Registered user including the stored password hash.
///
/// The hash never leaves the server: both DTO conversions drop it.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub name: String,
    /// Argon2 PHC string.
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            name: entity.name,
            password_hash: entity.password_hash,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Converts the user to its full public DTO.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            name: self.name,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Converts the user to the compact form embedded in login and verify responses.
    pub fn into_summary_dto(self) -> UserSummaryDto {
        UserSummaryDto {
            id: self.id,
            email: self.email,
            name: self.name,
        }
    }
}

/// Parameters for registering a user, password still in plain text.
#[derive(Debug, Clone)]
pub struct RegisterUserParams {
    pub email: String,
    pub name: String,
    pub password: String,
}

impl RegisterUserParams {
    pub fn from_dto(dto: CreateUserDto) -> Self {
        Self {
            email: dto.email,
            name: dto.name,
            password: dto.password,
        }
    }
}

/// Parameters for inserting a user row; the password is already hashed.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub email: String,
    pub name: String,
    pub password_hash: String,
}

/// Parameters for a login attempt.
#[derive(Debug, Clone)]
pub struct LoginParams {
    pub email: String,
    pub password: String,
}

impl LoginParams {
    pub fn from_dto(dto: LoginDto) -> Self {
        Self {
            email: dto.email,
            password: dto.password,
        }
    }
}
