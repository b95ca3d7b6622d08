//! Transfer DTOs shared by every endpoint.
//!
//! These are the JSON shapes that cross the HTTP boundary. They are deliberately
//! separate from the SeaORM entities and from the server-side domain models.

pub mod api;
pub mod event;
pub mod order;
pub mod product;
pub mod project;
pub mod user;
