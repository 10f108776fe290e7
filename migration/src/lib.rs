pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_guild_module_table;
mod m20260301_000002_create_banned_guild_table;
mod m20260301_000003_create_user_points_table;

/// Migrations for the root database (module settings and guild bans).
pub struct RootMigrator;

#[async_trait::async_trait]
impl MigratorTrait for RootMigrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_guild_module_table::Migration),
            Box::new(m20260301_000002_create_banned_guild_table::Migration),
        ]
    }
}

/// Migrations for the points database.
pub struct PointsMigrator;

#[async_trait::async_trait]
impl MigratorTrait for PointsMigrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(
            m20260301_000003_create_user_points_table::Migration,
        )]
    }
}
