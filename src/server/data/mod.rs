//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! Product and order repositories are constructed with the history store connection; all
//! others use the primary store.

pub mod event;
pub mod order_history;
pub mod product;
pub mod project;
pub mod project_section;
pub mod user;

#[cfg(test)]
mod test;
