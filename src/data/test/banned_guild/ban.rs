use super::*;

/// Tests banning a guild stores the reason.
///
/// Expected: Ok with the stored record
#[tokio::test]
async fn bans_guild_with_reason() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_root_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BannedGuildRepository::new(db);
    let record = repo
        .ban(GuildId::new(123456789), Some("spam".to_string()))
        .await?;

    assert_eq!(record.guild_id, 123456789);
    assert_eq!(record.reason.as_deref(), Some("spam"));

    Ok(())
}

/// Tests banning an already banned guild replaces the reason without duplicating.
///
/// Expected: Ok with one record and the new reason
#[tokio::test]
async fn rebanning_updates_reason() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_root_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_banned_guild(db, 123456789).await?;

    let repo = BannedGuildRepository::new(db);
    let record = repo
        .ban(GuildId::new(123456789), Some("raids".to_string()))
        .await?;

    assert_eq!(record.reason.as_deref(), Some("raids"));

    let count = entity::prelude::BannedGuild::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}
