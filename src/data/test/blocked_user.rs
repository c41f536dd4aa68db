use crate::data::blocked_user::BlockedUserRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

#[tokio::test]
async fn reports_blocked_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::BlockedUser)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_blocked_user(db, "1", "7").await?;

    let repo = BlockedUserRepository::new(db);
    assert!(repo.is_blocked(1, 7).await?);

    Ok(())
}

#[tokio::test]
async fn block_is_scoped_to_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::BlockedUser)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_blocked_user(db, "1", "7").await?;

    let repo = BlockedUserRepository::new(db);
    assert!(!repo.is_blocked(2, 7).await?);
    assert!(!repo.is_blocked(1, 8).await?);

    Ok(())
}
