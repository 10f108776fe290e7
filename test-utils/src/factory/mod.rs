//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests.
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
//!     let setting = factory::create_guild_module(&db, 1234, "Fun", true).await?;
//!     let ban = factory::create_banned_guild(&db, 5678).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `guild_module` - Create module-enablement records
//! - `banned_guild` - Create banned guild records
//! - `user_points` - Create point balances
//! - `helpers` - Shared id generation

pub mod banned_guild;
pub mod guild_module;
pub mod helpers;
pub mod user_points;

pub use banned_guild::create_banned_guild;
pub use guild_module::create_guild_module;
pub use user_points::create_user_points;
