use entity::prelude::*;
use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    EntityTrait, Schema,
};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{BannedGuild, GuildModule};
///
/// let test = TestBuilder::new()
///     .with_table(GuildModule)
///     .with_table(BannedGuild)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements to execute during database setup, in insertion order.
    tables: Vec<TableCreateStatement>,
    /// CREATE INDEX statements executed after every table exists.
    indexes: Vec<IndexCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            indexes: Vec::new(),
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. The table will be created when `build()` is called.
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

    /// Adds the GuildModule table together with its (guild_id, module) unique index.
    ///
    /// Entity-generated tables carry no composite unique index, but the module upsert
    /// targets it as its conflict key, so it is created the same way the migration does.
    pub fn with_guild_module_table(mut self) -> Self {
        self = self.with_table(GuildModule);
        self.indexes.push(
            Index::create()
                .name("idx_guild_module_unique")
                .table(GuildModule)
                .col(entity::guild_module::Column::GuildId)
                .col(entity::guild_module::Column::Module)
                .unique()
                .to_owned(),
        );
        self
    }

    /// Adds all tables that live in the root database.
    ///
    /// This convenience method adds:
    /// - GuildModule (with its unique index)
    /// - BannedGuild
    pub fn with_root_tables(self) -> Self {
        self.with_guild_module_table().with_table(BannedGuild)
    }

    /// Adds all tables that live in the points database.
    pub fn with_points_tables(self) -> Self {
        self.with_table(UserPoints)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection and executes all CREATE TABLE
    /// statements that were added via `with_table()`.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;
        setup.with_indexes(self.indexes).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
