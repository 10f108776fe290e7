use super::*;

/// Tests a module with no record is not disabled.
///
/// Expected: Ok(false)
#[tokio::test]
async fn missing_record_is_not_disabled() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_guild_module_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildModuleRepository::new(db);
    let result = repo.is_module_disabled(GuildId::new(123456789), "Fun").await;

    assert!(result.is_ok());
    assert!(!result.unwrap());

    Ok(())
}

/// Tests an explicit disabled record is reported.
///
/// Expected: Ok(true)
#[tokio::test]
async fn disabled_record_is_disabled() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_guild_module_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_guild_module(db, 123456789, "Fun", true).await?;

    let repo = GuildModuleRepository::new(db);
    let disabled = repo.is_module_disabled(GuildId::new(123456789), "Fun").await?;

    assert!(disabled);

    Ok(())
}

/// Tests an explicit enabled record is not disabled.
///
/// Expected: Ok(false)
#[tokio::test]
async fn enabled_record_is_not_disabled() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_guild_module_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_guild_module(db, 123456789, "Fun", false).await?;

    let repo = GuildModuleRepository::new(db);
    let disabled = repo.is_module_disabled(GuildId::new(123456789), "Fun").await?;

    assert!(!disabled);

    Ok(())
}

/// Tests records are scoped to their guild and module.
///
/// Verifies that disabling Fun in one guild affects neither another guild
/// nor another module in the same guild.
///
/// Expected: Ok(false) for the unrelated pairs
#[tokio::test]
async fn records_are_scoped_to_guild_and_module() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_guild_module_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_guild_module(db, 111, "Fun", true).await?;

    let repo = GuildModuleRepository::new(db);

    assert!(repo.is_module_disabled(GuildId::new(111), "Fun").await?);
    assert!(!repo.is_module_disabled(GuildId::new(222), "Fun").await?);
    assert!(!repo.is_module_disabled(GuildId::new(111), "General").await?);

    Ok(())
}

/// Tests the lookup fails when the table does not exist.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn fails_without_table() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildModuleRepository::new(db);
    let result = repo.is_module_disabled(GuildId::new(1), "Fun").await;

    assert!(result.is_err());

    Ok(())
}
