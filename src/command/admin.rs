use sea_orm::DatabaseConnection;
use serenity::async_trait;

use crate::{
    command::{context::InvocationContext, Command},
    error::{command::CommandError, AppError},
    model::module::Module,
    service::module::ModuleService,
};

/// Shows the state of every module in the guild.
pub struct Modules {
    db: DatabaseConnection,
}

impl Modules {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl Command for Modules {
    fn name(&self) -> &'static str {
        "modules"
    }

    fn module(&self) -> Module {
        Module::Admin
    }

    fn summary(&self) -> &'static str {
        "Lists modules and whether they are enabled in this server."
    }

    async fn run(&self, ctx: &InvocationContext) -> Result<String, AppError> {
        let statuses = ModuleService::new(&self.db).list(ctx.guild()?).await?;

        let lines: Vec<String> = statuses
            .into_iter()
            .map(|status| {
                let state = if status.disabled { "disabled" } else { "enabled" };
                if status.module.toggleable() {
                    format!("**{}**: {}", status.module, state)
                } else {
                    format!("**{}**: {} (always on)", status.module, state)
                }
            })
            .collect();

        Ok(lines.join("\n"))
    }
}

/// Enables or disables a module, depending on `disable`.
pub struct ToggleModule {
    db: DatabaseConnection,
    disable: bool,
}

impl ToggleModule {
    pub fn enable(db: DatabaseConnection) -> Self {
        Self { db, disable: false }
    }

    pub fn disable(db: DatabaseConnection) -> Self {
        Self { db, disable: true }
    }
}

#[async_trait]
impl Command for ToggleModule {
    fn name(&self) -> &'static str {
        if self.disable {
            "disable"
        } else {
            "enable"
        }
    }

    fn module(&self) -> Module {
        Module::Admin
    }

    fn summary(&self) -> &'static str {
        if self.disable {
            "Disables a module in this server."
        } else {
            "Enables a module in this server."
        }
    }

    fn usage(&self) -> &'static str {
        "<module>"
    }

    async fn run(&self, ctx: &InvocationContext) -> Result<String, AppError> {
        let guild_id = ctx.guild()?;
        let name = ctx.arg(0).ok_or(CommandError::MissingArgument("module"))?;

        let module = ModuleService::new(&self.db)
            .set_disabled(guild_id, name, self.disable)
            .await?;

        let verb = if self.disable { "Disabled" } else { "Enabled" };
        Ok(format!("{} the `{}` module.", verb, module))
    }
}
