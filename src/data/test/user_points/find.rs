use super::*;

/// Tests finding an existing balance.
///
/// Expected: Ok(Some) with the stored points
#[tokio::test]
async fn finds_existing_balance() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_points_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user_points(db, 111, 222, 40, Utc::now()).await?;

    let repo = UserPointsRepository::new(db);
    let balance = repo.find(GuildId::new(111), UserId::new(222)).await?;

    assert!(balance.is_some());
    let balance = balance.unwrap();
    assert_eq!(balance.guild_id, GuildId::new(111));
    assert_eq!(balance.user_id, UserId::new(222));
    assert_eq!(balance.points, 40);

    Ok(())
}

/// Tests balances are per guild.
///
/// Expected: Ok(None) for the same user in another guild
#[tokio::test]
async fn balance_is_scoped_to_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_points_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user_points(db, 111, 222, 40, Utc::now()).await?;

    let repo = UserPointsRepository::new(db);
    let balance = repo.find(GuildId::new(333), UserId::new(222)).await?;

    assert!(balance.is_none());

    Ok(())
}
