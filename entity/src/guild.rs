use sea_orm::entity::prelude::*;

/// Per-guild relay configuration and quota state.
///
/// One row per Discord guild, created lazily on the first relay request from
/// that guild. `message_count` and `period_key` together form the monthly
/// quota counter; both are only ever mutated by the atomic
/// increment-and-check statement in the data layer.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "guild")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Discord guild snowflake, stored as text.
    #[sea_orm(unique)]
    pub guild_id: String,
    /// Role a member must hold to relay; `None` means no role gate.
    pub required_role_id: Option<String>,
    /// Messages relayed during the current period.
    pub message_count: i32,
    /// Quota accounting window, `YYYY-MM` in UTC.
    pub period_key: String,
    /// Render relayed messages as an embed instead of plain text.
    pub use_embed: bool,
    /// Pro guilds bypass the monthly limit (increments still recorded).
    pub is_pro: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
