use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. The application keeps two stores, so tables can be added either to the
/// primary database (`with_table`) or to the history database (`with_history_table`).
/// Call `build()` to create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Product, User};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_history_table(Product)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed against the primary database during `build()`.
    ///
    /// Statements are executed in the order they were added.
    tables: Vec<TableCreateStatement>,

    /// CREATE TABLE statements executed against the history database during `build()`.
    history_tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with empty table configuration
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            history_tables: Vec::new(),
        }
    }

    /// Adds an entity table to the primary test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables should be added in dependency order (tables with foreign
    /// keys after their referenced tables).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds an entity table to the history test database schema.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_history_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.history_tables
            .push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds all tables owned by the primary store.
    ///
    /// Adds in dependency order:
    /// - User
    /// - Project
    /// - ProjectSection
    /// - Event
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_primary_tables(self) -> Self {
        self.with_table(User)
            .with_table(Project)
            .with_table(ProjectSection)
            .with_table(Event)
    }

    /// Adds all tables owned by the history store.
    ///
    /// Adds:
    /// - Product
    /// - OrderHistory
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_history_tables(self) -> Self {
        self.with_history_table(Product)
            .with_history_table(OrderHistory)
    }

    /// Adds every table of both stores.
    ///
    /// Use this when building a full application state for HTTP-level tests.
    pub fn with_all_tables(self) -> Self {
        self.with_primary_tables().with_history_tables()
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates the in-memory SQLite database(s) and executes all CREATE TABLE
    /// statements. The history database is only created when at least one history
    /// table was added.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with databases and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        if !self.history_tables.is_empty() {
            setup.with_history_tables(self.history_tables).await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
