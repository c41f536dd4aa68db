use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter};

pub struct BlockedUserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BlockedUserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks whether a user is on a guild's block list.
    ///
    /// # Arguments
    /// - `guild_id`: Discord's unique identifier for the guild (u64)
    /// - `user_id`: Discord's unique identifier for the user (u64)
    ///
    /// # Returns
    /// - `Ok(bool)`: Whether a block-list entry exists
    /// - `Err(DbErr)`: Database error during query
    pub async fn is_blocked(&self, guild_id: u64, user_id: u64) -> Result<bool, DbErr> {
        let count = entity::prelude::BlockedUser::find()
            .filter(entity::blocked_user::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::blocked_user::Column::UserId.eq(user_id.to_string()))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
