//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.
//! Update parameter types carry one `Option` per attribute; `None` means "leave as is".

pub mod event;
pub mod order;
pub mod product;
pub mod project;
pub mod user;
