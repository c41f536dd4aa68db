use super::*;

const PERIOD: &str = "2026-08";

/// Tests the counter crossing the limit boundary: 49 → 50 is allowed, the
/// 51st request is denied and the counter stays at 50.
#[tokio::test]
async fn denies_past_limit_without_incrementing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Guild)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild::GuildFactory::new(db)
        .guild_id("1")
        .message_count(49)
        .period_key(PERIOD)
        .build()
        .await?;

    let repo = GuildRepository::new(db);

    let allowed = repo.increment_and_check_quota(1, PERIOD).await?;
    assert_eq!(
        allowed,
        QuotaOutcome {
            count: 50,
            exceeded: false
        }
    );

    let denied = repo.increment_and_check_quota(1, PERIOD).await?;
    assert_eq!(
        denied,
        QuotaOutcome {
            count: 50,
            exceeded: true
        }
    );

    let guild = repo.find_by_guild_id(1).await?.unwrap();
    assert_eq!(guild.message_count, 50);

    Ok(())
}

/// Tests that pro guilds bypass the limit while still recording increments.
#[tokio::test]
async fn pro_guilds_increment_past_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Guild)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild::GuildFactory::new(db)
        .guild_id("1")
        .message_count(MONTHLY_MESSAGE_LIMIT)
        .period_key(PERIOD)
        .is_pro(true)
        .build()
        .await?;

    let repo = GuildRepository::new(db);
    let outcome = repo.increment_and_check_quota(1, PERIOD).await?;

    assert_eq!(
        outcome,
        QuotaOutcome {
            count: MONTHLY_MESSAGE_LIMIT + 1,
            exceeded: false
        }
    );

    Ok(())
}

/// Tests period rollover: the first increment of a new period resets the
/// counter to 1 (not N+1) in the same statement, and stores the new key.
#[tokio::test]
async fn stale_period_resets_before_increment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Guild)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild::GuildFactory::new(db)
        .guild_id("1")
        .message_count(37)
        .period_key("2026-07")
        .build()
        .await?;

    let repo = GuildRepository::new(db);
    let outcome = repo.increment_and_check_quota(1, PERIOD).await?;

    assert_eq!(
        outcome,
        QuotaOutcome {
            count: 1,
            exceeded: false
        }
    );

    let guild = repo.find_by_guild_id(1).await?.unwrap();
    assert_eq!(guild.period_key, PERIOD);

    Ok(())
}

/// Tests that rollover also unlocks a guild that exhausted the old period.
#[tokio::test]
async fn exhausted_guild_is_unlocked_by_rollover() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Guild)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild::GuildFactory::new(db)
        .guild_id("1")
        .message_count(MONTHLY_MESSAGE_LIMIT)
        .period_key("2026-07")
        .build()
        .await?;

    let repo = GuildRepository::new(db);
    let outcome = repo.increment_and_check_quota(1, PERIOD).await?;

    assert_eq!(
        outcome,
        QuotaOutcome {
            count: 1,
            exceeded: false
        }
    );

    Ok(())
}

/// Tests a missing guild record surfaces as RecordNotFound rather than a
/// silent denial.
#[tokio::test]
async fn missing_guild_is_an_error() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Guild)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildRepository::new(db);
    let result = repo.increment_and_check_quota(999, PERIOD).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));
}

/// Tests that concurrent increments are never lost: N concurrent calls for
/// the same guild produce a final count of exactly N, and the number of
/// allowed outcomes never passes the limit.
#[tokio::test(flavor = "multi_thread")]
async fn concurrent_increments_serialize() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Guild)
        .build()
        .await
        .unwrap();
    let db = test.db.clone().unwrap();

    factory::guild::GuildFactory::new(&db)
        .guild_id("1")
        .message_count(48)
        .period_key(PERIOD)
        .build()
        .await?;

    let mut tasks = tokio::task::JoinSet::new();
    for _ in 0..6 {
        let db = db.clone();
        tasks.spawn(async move {
            GuildRepository::new(&db)
                .increment_and_check_quota(1, PERIOD)
                .await
        });
    }

    let mut allowed = 0;
    while let Some(joined) = tasks.join_next().await {
        let outcome = joined.expect("task panicked")?;
        if !outcome.exceeded {
            allowed += 1;
        }
    }

    // Starting at 48, only two of the six increments fit under the limit.
    assert_eq!(allowed, 2);

    let guild = GuildRepository::new(&db).find_by_guild_id(1).await?.unwrap();
    assert_eq!(guild.message_count, MONTHLY_MESSAGE_LIMIT);

    Ok(())
}

/// Tests no lost updates below the limit: every concurrent increment lands.
#[tokio::test(flavor = "multi_thread")]
async fn concurrent_increments_all_land_below_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Guild)
        .build()
        .await
        .unwrap();
    let db = test.db.clone().unwrap();

    factory::guild::GuildFactory::new(&db)
        .guild_id("1")
        .period_key(PERIOD)
        .build()
        .await?;

    let mut tasks = tokio::task::JoinSet::new();
    for _ in 0..20 {
        let db = db.clone();
        tasks.spawn(async move {
            GuildRepository::new(&db)
                .increment_and_check_quota(1, PERIOD)
                .await
        });
    }

    while let Some(joined) = tasks.join_next().await {
        let outcome = joined.expect("task panicked")?;
        assert!(!outcome.exceeded);
    }

    let guild = GuildRepository::new(&db).find_by_guild_id(1).await?.unwrap();
    assert_eq!(guild.message_count, 20);

    Ok(())
}
