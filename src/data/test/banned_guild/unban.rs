use super::*;

/// Tests unbanning a banned guild removes the record.
///
/// Expected: Ok(true) and the guild is no longer banned
#[tokio::test]
async fn unbans_banned_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_root_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_banned_guild(db, 111).await?;

    let repo = BannedGuildRepository::new(db);

    assert!(repo.unban(GuildId::new(111)).await?);
    assert!(!repo.is_banned(GuildId::new(111)).await?);

    Ok(())
}

/// Tests unbanning a guild that was never banned.
///
/// Expected: Ok(false)
#[tokio::test]
async fn unban_of_unknown_guild_is_noop() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_root_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BannedGuildRepository::new(db);

    assert!(!repo.unban(GuildId::new(111)).await?);

    Ok(())
}
