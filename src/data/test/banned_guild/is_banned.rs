use super::*;

/// Tests ban lookups for banned and unknown guilds.
///
/// Expected: Ok(true) for the banned guild, Ok(false) otherwise
#[tokio::test]
async fn reports_ban_state() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_root_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_banned_guild(db, 111).await?;

    let repo = BannedGuildRepository::new(db);

    assert!(repo.is_banned(GuildId::new(111)).await?);
    assert!(!repo.is_banned(GuildId::new(222)).await?);

    Ok(())
}
