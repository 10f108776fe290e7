use sea_orm::DatabaseConnection;
use serenity::async_trait;
use std::fmt::Write;
use std::sync::Arc;

use crate::{
    command::{context::InvocationContext, Command},
    error::AppError,
    model::module::Module,
    service::points::PointService,
};

pub struct Ping;

#[async_trait]
impl Command for Ping {
    fn name(&self) -> &'static str {
        "ping"
    }

    fn module(&self) -> Module {
        Module::General
    }

    fn summary(&self) -> &'static str {
        "Checks that the bot is responding."
    }

    async fn run(&self, _ctx: &InvocationContext) -> Result<String, AppError> {
        Ok("Pong!".to_string())
    }
}

/// Lists every command grouped by module.
///
/// The listing is rendered once at startup from the registered commands.
pub struct Help {
    text: String,
}

impl Help {
    const NAME: &'static str = "help";
    const SUMMARY: &'static str = "Shows this list of commands.";

    pub fn new(prefix: &str, commands: &[Arc<dyn Command>]) -> Self {
        let mut text = String::new();

        for module in Module::ALL {
            let mut lines: Vec<String> = commands
                .iter()
                .filter(|command| command.module() == module)
                .map(|command| line(prefix, command.name(), command.usage(), command.summary()))
                .collect();

            if module == Module::General {
                lines.insert(0, line(prefix, Self::NAME, "", Self::SUMMARY));
            }
            if lines.is_empty() {
                continue;
            }

            let _ = writeln!(text, "**{}**", module);
            for entry in lines {
                let _ = writeln!(text, "{}", entry);
            }
        }

        Self {
            text: text.trim_end().to_string(),
        }
    }
}

fn line(prefix: &str, name: &str, usage: &str, summary: &str) -> String {
    if usage.is_empty() {
        format!("`{}{}` - {}", prefix, name, summary)
    } else {
        format!("`{}{} {}` - {}", prefix, name, usage, summary)
    }
}

#[async_trait]
impl Command for Help {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["commands"]
    }

    fn module(&self) -> Module {
        Module::General
    }

    fn summary(&self) -> &'static str {
        Self::SUMMARY
    }

    async fn run(&self, _ctx: &InvocationContext) -> Result<String, AppError> {
        Ok(self.text.clone())
    }
}

pub struct Points {
    points_db: DatabaseConnection,
}

impl Points {
    pub fn new(points_db: DatabaseConnection) -> Self {
        Self { points_db }
    }
}

#[async_trait]
impl Command for Points {
    fn name(&self) -> &'static str {
        "points"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["balance"]
    }

    fn module(&self) -> Module {
        Module::General
    }

    fn summary(&self) -> &'static str {
        "Shows how many points you have earned in this server."
    }

    async fn run(&self, ctx: &InvocationContext) -> Result<String, AppError> {
        let guild_id = ctx.guild()?;
        let points = PointService::new(&self.points_db)
            .get_points(guild_id, ctx.author_id)
            .await?;

        if points == 0 {
            return Ok("You haven't earned any points here yet.".to_string());
        }

        Ok(format!("You have **{}** points.", points))
    }
}
