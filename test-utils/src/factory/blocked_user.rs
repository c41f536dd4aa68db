//! Blocked-user factory for creating test block-list entries.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test block-list entries.
pub struct BlockedUserFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    user_id: String,
}

impl<'a> BlockedUserFactory<'a> {
    /// Creates a new BlockedUserFactory with auto-generated ids.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            guild_id: next_id().to_string(),
            user_id: next_id().to_string(),
        }
    }

    /// Sets the Discord guild id the block applies to.
    pub fn guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.guild_id = guild_id.into();
        self
    }

    /// Sets the blocked Discord user id.
    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    /// Builds and inserts the block-list entry into the database.
    pub async fn build(self) -> Result<entity::blocked_user::Model, DbErr> {
        entity::blocked_user::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            user_id: ActiveValue::Set(self.user_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Blocks `user_id` in `guild_id`.
///
/// Shorthand for the factory with both ids set.
pub async fn create_blocked_user(
    db: &DatabaseConnection,
    guild_id: &str,
    user_id: &str,
) -> Result<entity::blocked_user::Model, DbErr> {
    BlockedUserFactory::new(db)
        .guild_id(guild_id)
        .user_id(user_id)
        .build()
        .await
}
