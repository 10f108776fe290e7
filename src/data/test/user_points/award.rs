use super::*;

/// Tests the first award creates a balance.
///
/// Expected: Ok(Some) with points equal to the award
#[tokio::test]
async fn first_award_creates_balance() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_points_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserPointsRepository::new(db);
    let now = Utc::now();
    let balance = repo
        .award(GuildId::new(111), UserId::new(222), 3, now, Duration::seconds(60))
        .await?;

    assert!(balance.is_some());
    let balance = balance.unwrap();
    assert_eq!(balance.points, 3);

    Ok(())
}

/// Tests awards inside the cooldown are ignored.
///
/// Expected: Ok(None) and the balance unchanged
#[tokio::test]
async fn award_within_cooldown_is_ignored() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_points_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let last = Utc::now() - Duration::seconds(30);
    factory::create_user_points(db, 111, 222, 10, last).await?;

    let repo = UserPointsRepository::new(db);
    let result = repo
        .award(GuildId::new(111), UserId::new(222), 2, Utc::now(), Duration::seconds(60))
        .await?;

    assert!(result.is_none());

    let balance = repo.find(GuildId::new(111), UserId::new(222)).await?.unwrap();
    assert_eq!(balance.points, 10);

    Ok(())
}

/// Tests awards after the cooldown are added to the balance.
///
/// Expected: Ok(Some) with the increased balance
#[tokio::test]
async fn award_after_cooldown_adds_points() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_points_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let last = Utc::now() - Duration::minutes(5);
    factory::create_user_points(db, 111, 222, 10, last).await?;

    let repo = UserPointsRepository::new(db);
    let balance = repo
        .award(GuildId::new(111), UserId::new(222), 2, Utc::now(), Duration::seconds(60))
        .await?
        .unwrap();

    assert_eq!(balance.points, 12);

    Ok(())
}
