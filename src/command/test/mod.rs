use serenity::all::{ChannelId, GuildId, UserId};
use serenity::async_trait;
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::{
    command::{
        context::{IncomingMessage, InvocationContext},
        precondition::{ModuleRegistry, Precondition, PreconditionResult},
        Command,
    },
    error::AppError,
    model::module::Module,
};


/// In-memory module registry that counts lookups and can be made to fail.
#[derive(Default)]
pub struct StubRegistry {
    disabled: Mutex<HashSet<(GuildId, String)>>,
    fail: bool,
    pub lookups: AtomicUsize,
}

impl StubRegistry {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn set_disabled(&self, guild_id: GuildId, module: Module, disabled: bool) {
        let mut set = self.disabled.lock().unwrap();
        let key = (guild_id, module.name().to_string());
        if disabled {
            set.insert(key);
        } else {
            set.remove(&key);
        }
    }
}

#[async_trait]
impl ModuleRegistry for StubRegistry {
    async fn is_module_disabled(&self, guild_id: GuildId, module: &str) -> Result<bool, AppError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(AppError::InternalError("registry unavailable".to_string()));
        }
        Ok(self
            .disabled
            .lock()
            .unwrap()
            .contains(&(guild_id, module.to_string())))
    }
}

/// Precondition with a fixed result that counts how often it ran.
pub struct CountingPrecondition {
    result: PreconditionResult,
    pub calls: AtomicUsize,
}

impl CountingPrecondition {
    pub fn new(result: PreconditionResult) -> Arc<Self> {
        Arc::new(Self {
            result,
            calls: AtomicUsize::new(0),
        })
    }
}

#[async_trait]
impl Precondition for CountingPrecondition {
    fn name(&self) -> &'static str {
        "counting"
    }

    async fn check(&self, _ctx: &InvocationContext) -> Result<PreconditionResult, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.result.clone())
    }
}

/// Precondition whose check never completes, counting how often it was entered.
#[derive(Default)]
pub struct PendingPrecondition {
    pub calls: AtomicUsize,
}

#[async_trait]
impl Precondition for PendingPrecondition {
    fn name(&self) -> &'static str {
        "pending"
    }

    async fn check(&self, _ctx: &InvocationContext) -> Result<PreconditionResult, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        std::future::pending::<()>().await;
        Ok(PreconditionResult::Allowed)
    }
}

/// Command that counts its runs and replies with a fixed text.
pub struct CountingCommand {
    name: &'static str,
    aliases: &'static [&'static str],
    module: Module,
    reply: Result<&'static str, fn() -> AppError>,
    pub runs: AtomicUsize,
}

impl CountingCommand {
    pub fn new(name: &'static str, module: Module) -> Arc<Self> {
        Arc::new(Self {
            name,
            aliases: &[],
            module,
            reply: Ok("done"),
            runs: AtomicUsize::new(0),
        })
    }

    pub fn with_aliases(
        name: &'static str,
        aliases: &'static [&'static str],
        module: Module,
    ) -> Arc<Self> {
        Arc::new(Self {
            name,
            aliases,
            module,
            reply: Ok("done"),
            runs: AtomicUsize::new(0),
        })
    }

    pub fn failing(name: &'static str, error: fn() -> AppError) -> Arc<Self> {
        Arc::new(Self {
            name,
            aliases: &[],
            module: Module::General,
            reply: Err(error),
            runs: AtomicUsize::new(0),
        })
    }

    pub fn runs(&self) -> usize {
        self.runs.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Command for CountingCommand {
    fn name(&self) -> &'static str {
        self.name
    }

    fn aliases(&self) -> &'static [&'static str] {
        self.aliases
    }

    fn module(&self) -> Module {
        self.module
    }

    fn summary(&self) -> &'static str {
        "Counts its runs."
    }

    async fn run(&self, ctx: &InvocationContext) -> Result<String, AppError> {
        self.runs.fetch_add(1, Ordering::SeqCst);
        match self.reply {
            Ok(text) if ctx.args.is_empty() => Ok(text.to_string()),
            Ok(text) => Ok(format!("{} {}", text, ctx.args.join(","))),
            Err(make_error) => Err(make_error()),
        }
    }
}

pub fn invocation(guild_id: Option<GuildId>, module: Module) -> InvocationContext {
    InvocationContext {
        guild_id,
        channel_id: ChannelId::new(1),
        author_id: UserId::new(2),
        author_is_admin: false,
        module,
        command: "test",
        args: Vec::new(),
    }
}

pub fn guild_message(guild_id: u64, content: &str) -> IncomingMessage {
    IncomingMessage {
        guild_id: Some(GuildId::new(guild_id)),
        channel_id: ChannelId::new(1),
        author_id: UserId::new(2),
        author_is_admin: false,
        content: content.to_string(),
    }
}
