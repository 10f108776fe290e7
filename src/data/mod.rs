//! Database repository layer.
//!
//! Repositories wrap SeaORM queries for one table each. They borrow a database connection,
//! take Discord ids as typed snowflakes and store them as `i64`.

pub mod banned_guild;
pub mod guild_module;
pub mod user_points;

#[cfg(test)]
mod test;
