use super::*;
use crate::command::{
    context::InvocationContext,
    precondition::{Precondition, PreconditionResult, RequireEnabled},
};
use serenity::all::{ChannelId, UserId};
use std::sync::Arc;

fn invocation(guild_id: Option<GuildId>, module: Module) -> InvocationContext {
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

/// Tests the gate over the database allows modules with no record.
///
/// Expected: Allowed
#[tokio::test]
async fn gate_allows_module_without_record() -> Result<(), AppError> {
    let test = TestBuilder::new().with_root_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let gate = RequireEnabled::new(Arc::new(GuildModuleRegistry::new(db.clone())));

    let result = gate
        .check(&invocation(Some(GuildId::new(5)), Module::Fun))
        .await?;

    assert_eq!(result, PreconditionResult::Allowed);

    Ok(())
}

/// Tests the gate over the database denies silently once a module is disabled, and allows
/// again after it is re-enabled, with no caching between checks.
///
/// Expected: Allowed, Denied(""), Allowed
#[tokio::test]
async fn gate_follows_toggles_immediately() -> Result<(), AppError> {
    let test = TestBuilder::new().with_root_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let guild_id = GuildId::new(5);
    let gate = RequireEnabled::new(Arc::new(GuildModuleRegistry::new(db.clone())));
    let service = ModuleService::new(db);
    let ctx = invocation(Some(guild_id), Module::Fun);

    assert_eq!(gate.check(&ctx).await?, PreconditionResult::Allowed);

    service.set_disabled(guild_id, "Fun", true).await?;
    assert_eq!(gate.check(&ctx).await?, PreconditionResult::denied_silently());

    service.set_disabled(guild_id, "Fun", false).await?;
    assert_eq!(gate.check(&ctx).await?, PreconditionResult::Allowed);

    Ok(())
}

/// Tests a record in one guild does not affect another guild.
///
/// Expected: Denied in guild 5, Allowed in guild 6
#[tokio::test]
async fn gate_is_scoped_to_guild() -> Result<(), AppError> {
    let test = TestBuilder::new().with_root_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::create_guild_module(db, 5, "General", true).await?;
    let gate = RequireEnabled::new(Arc::new(GuildModuleRegistry::new(db.clone())));

    let denied = gate
        .check(&invocation(Some(GuildId::new(5)), Module::General))
        .await?;
    let allowed = gate
        .check(&invocation(Some(GuildId::new(6)), Module::General))
        .await?;

    assert_eq!(denied, PreconditionResult::denied_silently());
    assert_eq!(allowed, PreconditionResult::Allowed);

    Ok(())
}

/// Tests the registry surfaces database failures instead of treating them as enabled.
///
/// Expected: Err(AppError::DbErr) when the table does not exist
#[tokio::test]
async fn registry_propagates_database_errors() {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let gate = RequireEnabled::new(Arc::new(GuildModuleRegistry::new(db.clone())));

    let result = gate
        .check(&invocation(Some(GuildId::new(5)), Module::Fun))
        .await;

    assert!(matches!(result, Err(AppError::DbErr(_))));
}
