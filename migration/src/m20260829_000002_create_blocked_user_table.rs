use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]

pub struct Migration;

#[async_trait::async_trait]

impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BlockedUser::Table)
                    .if_not_exists()
                    .col(pk_auto(BlockedUser::Id))
                    .col(string(BlockedUser::GuildId))
                    .col(string(BlockedUser::UserId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_blocked_user_guild_user")
                    .table(BlockedUser::Table)
                    .col(BlockedUser::GuildId)
                    .col(BlockedUser::UserId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BlockedUser::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]

pub enum BlockedUser {
    Table,
    Id,
    GuildId,
    UserId,
}
