use sea_orm::DatabaseConnection;
use serenity::all::RoleId;

use crate::{
    data::{guild::current_period_key, BlockedUserRepository, GuildRepository},
    error::AppError,
    model::relay::RelayRequest,
};

/// Why a relay request was denied. Each variant carries a fixed one-line
/// message surfaced to the requesting user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Denial {
    RoleRequired,
    UserBlocked,
    QuotaExceeded,
}

impl Denial {
    pub fn message(&self) -> &'static str {
        match self {
            Denial::RoleRequired => {
                "You do not have the role required to send messages to this server."
            }
            Denial::UserBlocked => {
                "It appears that you have been banned from using Voltaire on the targeted server. \
                 If you think this is an error, contact one of your admins."
            }
            Denial::QuotaExceeded => {
                "This server has reached its limit of 50 messages for the month. To lift this \
                 limit, ask an admin or moderator to upgrade your server to Voltaire Pro."
            }
        }
    }
}

/// Ordered authorization checks for one relay request.
///
/// The order is fixed as role → block → quota: the two local, read-only
/// checks run before the stateful quota increment, so a denied request never
/// consumes quota.
pub struct AuthorizationGate<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthorizationGate<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Runs the gate, short-circuiting on the first failing check.
    ///
    /// # Arguments
    /// - `request`: The canonical relay request
    /// - `guild`: The guild's stored configuration
    /// - `member_roles`: Role set of the requesting member
    ///
    /// # Returns
    /// - `Ok(None)`: Allowed; the quota increment has been applied
    /// - `Ok(Some(Denial))`: Denied with a reason; quota untouched unless the
    ///   denial is `QuotaExceeded`
    /// - `Err(AppError)`: Database error during a check
    pub async fn authorize(
        &self,
        request: &RelayRequest,
        guild: &entity::guild::Model,
        member_roles: &[RoleId],
    ) -> Result<Option<Denial>, AppError> {
        if !has_required_role(guild.required_role_id.as_deref(), member_roles) {
            return Ok(Some(Denial::RoleRequired));
        }

        let blocked = BlockedUserRepository::new(self.db)
            .is_blocked(request.guild_id.get(), request.user_id.get())
            .await?;
        if blocked {
            return Ok(Some(Denial::UserBlocked));
        }

        let quota = GuildRepository::new(self.db)
            .increment_and_check_quota(request.guild_id.get(), &current_period_key())
            .await?;
        if quota.exceeded {
            return Ok(Some(Denial::QuotaExceeded));
        }

        Ok(None)
    }
}

/// A guild without a configured role requirement admits every member.
fn has_required_role(required: Option<&str>, member_roles: &[RoleId]) -> bool {
    match required {
        Some(required) => member_roles
            .iter()
            .any(|role| role.get().to_string() == required),
        None => true,
    }
}
