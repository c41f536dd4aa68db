use super::*;

/// Tests lazy creation of a guild record on first access.
///
/// Expected: Ok with a fresh record carrying quota defaults
#[tokio::test]
async fn creates_record_on_first_access() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Guild)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildRepository::new(db);
    let guild = repo.find_or_create(123456789).await?;

    assert_eq!(guild.guild_id, "123456789");
    assert_eq!(guild.message_count, 0);
    assert!(guild.required_role_id.is_none());
    assert!(!guild.use_embed);
    assert!(!guild.is_pro);

    Ok(())
}

/// Tests that an existing record is returned untouched.
///
/// Expected: Ok with the stored configuration, not defaults
#[tokio::test]
async fn returns_existing_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Guild)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild::GuildFactory::new(db)
        .guild_id("123456789")
        .message_count(7)
        .is_pro(true)
        .build()
        .await?;

    let repo = GuildRepository::new(db);
    let guild = repo.find_or_create(123456789).await?;

    assert_eq!(guild.message_count, 7);
    assert!(guild.is_pro);

    Ok(())
}

/// Tests that repeated calls do not create duplicate rows.
#[tokio::test]
async fn is_idempotent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Guild)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildRepository::new(db);
    let first = repo.find_or_create(42).await?;
    let second = repo.find_or_create(42).await?;

    assert_eq!(first.id, second.id);

    Ok(())
}
