//! SeaORM entity definitions for both stores.
//!
//! `user`, `project`, `project_section` and `event` live in the primary store;
//! `product` and `order_history` live in the history store.

pub mod prelude;

pub mod event;
pub mod order_history;
pub mod product;
pub mod project;
pub mod project_section;
pub mod user;
