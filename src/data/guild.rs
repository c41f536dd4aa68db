use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, Statement,
};

/// Monthly relay limit for guilds without the pro flag.
pub const MONTHLY_MESSAGE_LIMIT: i32 = 50;

/// Result of one atomic quota increment-and-check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuotaOutcome {
    /// Counter value after the call (unchanged when `exceeded`).
    pub count: i32,
    /// True when the guild has exhausted its limit for the period.
    pub exceeded: bool,
}

/// Quota accounting window for the current calendar month, UTC.
pub fn current_period_key() -> String {
    Utc::now().format("%Y-%m").to_string()
}

pub struct GuildRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a guild record by its Discord guild ID.
    ///
    /// # Arguments
    /// - `guild_id`: Discord's unique identifier for the guild (u64)
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: Guild record found
    /// - `Ok(None)`: No record yet for this guild
    /// - `Err(DbErr)`: Database error during query
    pub async fn find_by_guild_id(
        &self,
        guild_id: u64,
    ) -> Result<Option<entity::guild::Model>, DbErr> {
        entity::prelude::Guild::find()
            .filter(entity::guild::Column::GuildId.eq(guild_id.to_string()))
            .one(self.db)
            .await
    }

    /// Returns the guild record, creating it with defaults on first access.
    ///
    /// Guild records are created lazily the first time a guild interacts with
    /// the bot and are never explicitly destroyed. Creation is race-safe: a
    /// concurrent insert for the same guild is absorbed by the unique
    /// constraint and the surviving row is returned.
    pub async fn find_or_create(&self, guild_id: u64) -> Result<entity::guild::Model, DbErr> {
        if let Some(guild) = self.find_by_guild_id(guild_id).await? {
            return Ok(guild);
        }

        entity::prelude::Guild::insert(entity::guild::ActiveModel {
            guild_id: ActiveValue::Set(guild_id.to_string()),
            required_role_id: ActiveValue::Set(None),
            message_count: ActiveValue::Set(0),
            period_key: ActiveValue::Set(current_period_key()),
            use_embed: ActiveValue::Set(false),
            is_pro: ActiveValue::Set(false),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::guild::Column::GuildId)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        self.find_by_guild_id(guild_id)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("guild {guild_id} after insert")))
    }

    /// Atomically increments the monthly counter and checks it against the
    /// limit.
    ///
    /// The whole read-modify-write runs as one UPDATE so concurrent calls for
    /// the same guild serialize on the row: no lost updates, and the counter
    /// of a non-pro guild never passes [`MONTHLY_MESSAGE_LIMIT`]. A stale
    /// `period_key` resets the counter to 1 as part of the same statement.
    /// Pro guilds always increment (the count is still recorded) and never
    /// report `exceeded`.
    ///
    /// # Arguments
    /// - `guild_id`: Discord's unique identifier for the guild (u64)
    /// - `period_key`: Current accounting period, `YYYY-MM`
    ///
    /// # Returns
    /// - `Ok(QuotaOutcome)`: Counter value and whether the limit was hit
    /// - `Err(DbErr)`: Database error, or no record exists for the guild
    pub async fn increment_and_check_quota(
        &self,
        guild_id: u64,
        period_key: &str,
    ) -> Result<QuotaOutcome, DbErr> {
        let stmt = Statement::from_sql_and_values(
            self.db.get_database_backend(),
            r#"UPDATE "guild"
               SET "message_count" = CASE
                       WHEN "period_key" <> ? THEN 1
                       ELSE "message_count" + 1
                   END,
                   "period_key" = ?
               WHERE "guild_id" = ?
                 AND ("is_pro" OR "period_key" <> ? OR "message_count" < ?)
               RETURNING "message_count""#,
            [
                period_key.into(),
                period_key.into(),
                guild_id.to_string().into(),
                period_key.into(),
                MONTHLY_MESSAGE_LIMIT.into(),
            ],
        );

        match self.db.query_one_raw(stmt).await? {
            Some(row) => {
                let count: i32 = row.try_get("", "message_count")?;
                Ok(QuotaOutcome {
                    count,
                    exceeded: false,
                })
            }
            // No row updated: the guard rejected the increment, meaning the
            // guild exists with an exhausted quota, or no record exists.
            None => {
                let guild = self.find_by_guild_id(guild_id).await?.ok_or_else(|| {
                    DbErr::RecordNotFound(format!("guild {guild_id} for quota increment"))
                })?;

                Ok(QuotaOutcome {
                    count: guild.message_count,
                    exceeded: true,
                })
            }
        }
    }
}
