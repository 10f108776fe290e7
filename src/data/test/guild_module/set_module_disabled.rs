use super::*;

/// Tests disabling a module creates a record.
///
/// Expected: Ok with a single disabled record
#[tokio::test]
async fn creates_record_when_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_guild_module_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildModuleRepository::new(db);
    let record = repo
        .set_module_disabled(GuildId::new(123456789), "Fun", true)
        .await?;

    assert_eq!(record.guild_id, 123456789);
    assert_eq!(record.module, "Fun");
    assert!(record.disabled);

    let count = entity::prelude::GuildModule::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests re-enabling a module updates the existing record in place.
///
/// Expected: Ok with one record, now enabled
#[tokio::test]
async fn updates_existing_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_guild_module_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_guild_module(db, 123456789, "Fun", true).await?;

    let repo = GuildModuleRepository::new(db);
    let record = repo
        .set_module_disabled(GuildId::new(123456789), "Fun", false)
        .await?;

    assert_eq!(record.id, existing.id);
    assert!(!record.disabled);
    assert!(!repo.is_module_disabled(GuildId::new(123456789), "Fun").await?);

    let count = entity::prelude::GuildModule::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests concurrent toggles of the same module in the same guild.
///
/// Both writers target a guild with no record yet, so each would try to insert.
///
/// Expected: Ok for both writes with exactly one record left behind
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn concurrent_writes_for_same_module_both_succeed() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_guild_module_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildModuleRepository::new(db);
    let guild_id = GuildId::new(123456789);

    for round in 0..25 {
        let disabled = round % 2 == 0;
        let (first, second) = tokio::join!(
            repo.set_module_disabled(guild_id, "Fun", disabled),
            repo.set_module_disabled(guild_id, "Fun", disabled),
        );

        let first = first?;
        let second = second?;
        assert_eq!(first.id, second.id);
        assert_eq!(first.disabled, disabled);
        assert_eq!(repo.is_module_disabled(guild_id, "Fun").await?, disabled);
    }

    let count = entity::prelude::GuildModule::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}
