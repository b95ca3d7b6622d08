//! Factory methods for creating test data.
//!
//! This module provides factory methods for inserting test entities with sensible defaults,
//! reducing boilerplate in tests. Factories handle foreign key relationships where an
//! entity has a parent.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let project = factory::project::create_project(&db).await?;
//!     let section = factory::project_section::create_section(&db, project.id).await?;
//!
//!     // Create a project with several sections at once
//!     let (project, sections) = factory::helpers::create_project_with_sections(&db, 3).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let product = factory::product::ProductFactory::new(&db)
//!     .name("Solar Panel")
//!     .price(249.0)
//!     .in_stock(false)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Users (primary store)
//! - `project` / `project_section` - Projects and their sections (primary store)
//! - `event` - Events (primary store)
//! - `product` - Products (history store)
//! - `order_history` - Orders (history store)
//! - `helpers` - Unique id generation and multi-entity helpers

pub mod event;
pub mod helpers;
pub mod order_history;
pub mod product;
pub mod project;
pub mod project_section;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use event::create_event;
pub use order_history::create_order;
pub use product::create_product;
pub use project::create_project;
pub use project_section::create_section;
pub use user::create_user;
