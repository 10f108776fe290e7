use super::*;

/// Tests every module is listed as enabled in a guild with no records.
///
/// Expected: Ok with all four modules enabled, in display order
#[tokio::test]
async fn lists_all_modules_enabled_by_default() -> Result<(), AppError> {
    let test = TestBuilder::new().with_root_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let statuses = ModuleService::new(db).list(GuildId::new(1)).await?;

    let modules: Vec<Module> = statuses.iter().map(|s| s.module).collect();
    assert_eq!(modules, Module::ALL.to_vec());
    assert!(statuses.iter().all(|s| !s.disabled));

    Ok(())
}

/// Tests disabled records of the guild are reflected and other guilds are ignored.
///
/// Expected: Ok with only Fun disabled
#[tokio::test]
async fn reflects_disabled_modules_of_the_guild() -> Result<(), AppError> {
    let test = TestBuilder::new().with_root_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_guild_module(db, 1, "Fun", true).await?;
    factory::create_guild_module(db, 1, "General", false).await?;
    factory::create_guild_module(db, 2, "General", true).await?;

    let statuses = ModuleService::new(db).list(GuildId::new(1)).await?;

    let disabled: Vec<Module> = statuses
        .iter()
        .filter(|s| s.disabled)
        .map(|s| s.module)
        .collect();
    assert_eq!(disabled, vec![Module::Fun]);

    Ok(())
}
