use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;

/// Test context containing the primary and history database connections.
///
/// Provides in-memory SQLite databases for isolated unit and integration testing.
/// Both databases are created lazily on first access and persist for the lifetime
/// of the test context.
pub struct TestContext {
    /// Optional connection to the in-memory primary database.
    ///
    /// Initialized lazily when `database()` is first called.
    pub db: Option<DatabaseConnection>,

    /// Optional connection to the in-memory history database.
    ///
    /// Initialized lazily when `history_database()` is first called. This is a
    /// separate in-memory instance, mirroring the separate history store.
    pub history_db: Option<DatabaseConnection>,
}

impl TestContext {
    /// Creates a new empty test context.
    ///
    /// # Returns
    /// - New `TestContext` instance with no database connections
    pub fn new() -> Self {
        Self {
            db: None,
            history_db: None,
        }
    }

    /// Gets or creates the in-memory primary SQLite database connection.
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - Reference to the database connection
    /// - `Err(TestError::Database)` - Failed to connect to in-memory SQLite database
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        match self.db {
            Some(ref db) => Ok(db),
            None => {
                let db = Database::connect("sqlite::memory:").await?;

                let db_ref = self.db.insert(db);

                Ok(&*db_ref) // Re-borrow as immutable
            }
        }
    }

    /// Gets or creates the in-memory history SQLite database connection.
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - Reference to the history database connection
    /// - `Err(TestError::Database)` - Failed to connect to in-memory SQLite database
    pub async fn history_database(&mut self) -> Result<&DatabaseConnection, TestError> {
        match self.history_db {
            Some(ref db) => Ok(db),
            None => {
                let db = Database::connect("sqlite::memory:").await?;

                let db_ref = self.history_db.insert(db);

                Ok(&*db_ref)
            }
        }
    }

    /// Creates primary database tables from the provided CREATE TABLE statements.
    ///
    /// Typically called internally by `TestBuilder::build()` rather than directly.
    ///
    /// # Arguments
    /// - `stmts` - Vector of CREATE TABLE statements to execute
    ///
    /// # Returns
    /// - `Ok(())` - All tables created successfully
    /// - `Err(TestError::Database)` - Failed to create one or more tables
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Creates history database tables from the provided CREATE TABLE statements.
    ///
    /// # Arguments
    /// - `stmts` - Vector of CREATE TABLE statements to execute
    ///
    /// # Returns
    /// - `Ok(())` - All tables created successfully
    /// - `Err(TestError::Database)` - Failed to create one or more tables
    pub async fn with_history_tables(
        &mut self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        let db = self.history_database().await?;

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Gets or creates both database connections.
    ///
    /// Convenience method for tests that need both stores, such as tests that build
    /// a complete application state. Avoids borrow checker issues when calling
    /// `database()` and `history_database()` separately.
    ///
    /// # Returns
    /// - `Ok((&DatabaseConnection, &DatabaseConnection))` - Primary and history connections
    /// - `Err(TestError::Database)` - Failed to initialize either database
    pub async fn both_databases(
        &mut self,
    ) -> Result<(&DatabaseConnection, &DatabaseConnection), TestError> {
        self.database().await?;
        self.history_database().await?;

        match (self.db.as_ref(), self.history_db.as_ref()) {
            (Some(db), Some(history_db)) => Ok((db, history_db)),
            _ => Err(sea_orm::DbErr::Custom("test databases not initialized".to_string()).into()),
        }
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
