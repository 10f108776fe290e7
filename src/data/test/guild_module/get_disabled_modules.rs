use super::*;

/// Tests only disabled modules of the requested guild are returned, sorted by name.
///
/// Expected: Ok(["Fun", "General"])
#[tokio::test]
async fn returns_disabled_modules_for_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_guild_module_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_guild_module(db, 111, "General", true).await?;
    factory::create_guild_module(db, 111, "Fun", true).await?;
    factory::create_guild_module(db, 111, "Admin", false).await?;
    factory::create_guild_module(db, 222, "Owner", true).await?;

    let repo = GuildModuleRepository::new(db);
    let disabled = repo.get_disabled_modules(GuildId::new(111)).await?;

    assert_eq!(disabled, vec!["Fun".to_string(), "General".to_string()]);

    Ok(())
}

/// Tests a guild without records has no disabled modules.
///
/// Expected: Ok([])
#[tokio::test]
async fn returns_empty_for_unknown_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_guild_module_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildModuleRepository::new(db);
    let disabled = repo.get_disabled_modules(GuildId::new(999)).await?;

    assert!(disabled.is_empty());

    Ok(())
}
