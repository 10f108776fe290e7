use super::*;

/// Tests disabling a module by name in any case.
///
/// Expected: Ok(Module::Fun) and the module reads as disabled
#[tokio::test]
async fn disables_module_by_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_root_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let guild_id = GuildId::new(10);

    let module = ModuleService::new(db).set_disabled(guild_id, "fUn", true).await?;

    assert_eq!(module, Module::Fun);
    let registry = GuildModuleRegistry::new(db.clone());
    assert!(registry.is_module_disabled(guild_id, "Fun").await?);

    Ok(())
}

/// Tests re-enabling a disabled module.
///
/// Expected: Ok and the module reads as enabled again
#[tokio::test]
async fn re_enables_module() -> Result<(), AppError> {
    let test = TestBuilder::new().with_root_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let guild_id = GuildId::new(10);
    let service = ModuleService::new(db);

    service.set_disabled(guild_id, "General", true).await?;
    service.set_disabled(guild_id, "General", false).await?;

    let registry = GuildModuleRegistry::new(db.clone());
    assert!(!registry.is_module_disabled(guild_id, "General").await?);

    Ok(())
}

/// Tests an unknown module name is rejected with a user-facing error.
///
/// Expected: Err(CommandError::UnknownModule)
#[tokio::test]
async fn rejects_unknown_module() {
    let test = TestBuilder::new().with_root_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ModuleService::new(db)
        .set_disabled(GuildId::new(10), " Weather ", true)
        .await;

    assert!(matches!(
        result,
        Err(AppError::CommandErr(CommandError::UnknownModule(ref name))) if name == "Weather"
    ));
}

/// Tests the Admin module cannot be disabled.
///
/// Expected: Err(CommandError::ModuleNotToggleable) and no record is written
#[tokio::test]
async fn rejects_untoggleable_module() -> Result<(), AppError> {
    let test = TestBuilder::new().with_root_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let guild_id = GuildId::new(10);

    let result = ModuleService::new(db).set_disabled(guild_id, "admin", true).await;

    assert!(matches!(
        result,
        Err(AppError::CommandErr(CommandError::ModuleNotToggleable("Admin")))
    ));
    let registry = GuildModuleRegistry::new(db.clone());
    assert!(!registry.is_module_disabled(guild_id, "Admin").await?);

    Ok(())
}
