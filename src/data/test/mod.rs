mod banned_guild;
mod guild_module;
mod user_points;
