//! Guild factory for creating test guild configurations.
//!
//! Provides factory methods for creating guild entities with sensible
//! defaults, customizable through a builder pattern.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test guilds with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::guild::GuildFactory;
///
/// let guild = GuildFactory::new(&db)
///     .guild_id("987654321")
///     .required_role_id(Some("111".to_string()))
///     .message_count(49)
///     .build()
///     .await?;
/// ```
pub struct GuildFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    required_role_id: Option<String>,
    message_count: i32,
    period_key: String,
    use_embed: bool,
    is_pro: bool,
}

impl<'a> GuildFactory<'a> {
    /// Creates a new GuildFactory with default values.
    ///
    /// Defaults:
    /// - guild_id: auto-incremented unique id
    /// - required_role_id: `None`
    /// - message_count: `0`
    /// - period_key: `"2026-01"`
    /// - use_embed: `false`
    /// - is_pro: `false`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            guild_id: id.to_string(),
            required_role_id: None,
            message_count: 0,
            period_key: "2026-01".to_string(),
            use_embed: false,
            is_pro: false,
        }
    }

    /// Sets the Discord guild id.
    pub fn guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.guild_id = guild_id.into();
        self
    }

    /// Sets the role required to relay messages.
    pub fn required_role_id(mut self, required_role_id: Option<String>) -> Self {
        self.required_role_id = required_role_id;
        self
    }

    /// Sets the current quota counter value.
    pub fn message_count(mut self, message_count: i32) -> Self {
        self.message_count = message_count;
        self
    }

    /// Sets the quota accounting period key.
    pub fn period_key(mut self, period_key: impl Into<String>) -> Self {
        self.period_key = period_key.into();
        self
    }

    /// Sets whether relayed messages render as embeds.
    pub fn use_embed(mut self, use_embed: bool) -> Self {
        self.use_embed = use_embed;
        self
    }

    /// Sets the pro flag (quota bypass).
    pub fn is_pro(mut self, is_pro: bool) -> Self {
        self.is_pro = is_pro;
        self
    }

    /// Builds and inserts the guild entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::guild::Model)` - Created guild entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::guild::Model, DbErr> {
        entity::guild::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            required_role_id: ActiveValue::Set(self.required_role_id),
            message_count: ActiveValue::Set(self.message_count),
            period_key: ActiveValue::Set(self.period_key),
            use_embed: ActiveValue::Set(self.use_embed),
            is_pro: ActiveValue::Set(self.is_pro),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a guild with default values.
///
/// Shorthand for `GuildFactory::new(db).build().await`.
pub async fn create_guild(db: &DatabaseConnection) -> Result<entity::guild::Model, DbErr> {
    GuildFactory::new(db).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_guild_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(Guild).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let guild = create_guild(db).await?;

        assert!(!guild.guild_id.is_empty());
        assert_eq!(guild.message_count, 0);
        assert!(guild.required_role_id.is_none());
        assert!(!guild.is_pro);

        Ok(())
    }

    #[tokio::test]
    async fn creates_guild_with_custom_values() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(Guild).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let guild = GuildFactory::new(db)
            .guild_id("987654321")
            .required_role_id(Some("111".to_string()))
            .message_count(49)
            .period_key("2026-08")
            .use_embed(true)
            .is_pro(true)
            .build()
            .await?;

        assert_eq!(guild.guild_id, "987654321");
        assert_eq!(guild.required_role_id, Some("111".to_string()));
        assert_eq!(guild.message_count, 49);
        assert_eq!(guild.period_key, "2026-08");
        assert!(guild.use_embed);
        assert!(guild.is_pro);

        Ok(())
    }

    #[tokio::test]
    async fn creates_multiple_unique_guilds() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(Guild).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let guild1 = create_guild(db).await?;
        let guild2 = create_guild(db).await?;

        assert_ne!(guild1.guild_id, guild2.guild_id);

        Ok(())
    }
}
