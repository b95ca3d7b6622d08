//! In-memory entity fixtures.
//!
//! Fixtures build entity models without touching the database. Factories use them as
//! their defaults so every test starts from the same values.

pub mod product;
pub mod project;
