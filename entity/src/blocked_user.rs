use sea_orm::entity::prelude::*;

/// A user banned from relaying into a specific guild.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "blocked_user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Discord guild snowflake, stored as text.
    pub guild_id: String,
    /// Discord user snowflake, stored as text.
    pub user_id: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
