//! IIEC Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the IIEC
//! API. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases and customizable table schemas.
//!
//! # Overview
//!
//! The test utilities consist of these main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the primary and history database connections
//! - **TestError**: Error types that can occur during test setup
//! - **fixture** / **factory**: In-memory entity models and database-backed entity factories
//!
//! # Usage
//!
//! Use `TestBuilder` to create a test context with the required database tables:
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::{OrderHistory, Project};
//!
//! #[tokio::test]
//! async fn test_project_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(Project)
//!         .with_history_table(OrderHistory)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.as_ref().unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
