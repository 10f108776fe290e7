pub mod api;
pub mod guild_ban;
pub mod module;
pub mod points;
pub mod ratelimit;

#[cfg(test)]
mod test;
