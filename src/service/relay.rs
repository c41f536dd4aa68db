use sea_orm::DatabaseConnection;
use serenity::all::{Http, RoleId};

use crate::{
    data::GuildRepository,
    error::AppError,
    model::relay::{DeliveredMessage, RelayRequest},
    service::{
        authorization::{AuthorizationGate, Denial},
        delivery, prefix,
    },
};

/// Result of one pipeline run for an authorized-or-denied request.
#[derive(Debug)]
pub enum RelayOutcome {
    Delivered(DeliveredMessage),
    Denied(Denial),
}

/// The relay pipeline: guild lookup, authorization gate, prefix resolution,
/// delivery.
///
/// Both input surfaces converge here after normalization, so text commands
/// and slash interactions share identical relay semantics. Each call is an
/// independent unit of work; only the quota increment inside the gate is
/// atomic across concurrent calls for the same guild.
pub struct RelayService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RelayService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Runs one relay request through the pipeline.
    ///
    /// # Arguments
    /// - `http`: Discord HTTP client for delivery
    /// - `request`: The canonical relay request
    /// - `member_roles`: Role set of the requesting member
    ///
    /// # Returns
    /// - `Ok(RelayOutcome::Delivered)`: Message sent with its deletion marker
    /// - `Ok(RelayOutcome::Denied)`: A gate check failed; caller surfaces the
    ///   denial message to the requester
    /// - `Err(AppError)`: Database or delivery failure; caller logs and drops
    pub async fn relay(
        &self,
        http: &Http,
        request: &RelayRequest,
        member_roles: &[RoleId],
    ) -> Result<RelayOutcome, AppError> {
        let guild = GuildRepository::new(self.db)
            .find_or_create(request.guild_id.get())
            .await?;

        if let Some(denial) = AuthorizationGate::new(self.db)
            .authorize(request, &guild, member_roles)
            .await?
        {
            return Ok(RelayOutcome::Denied(denial));
        }

        let prefix = prefix::compute_prefix(request.user_id, &guild);
        let delivered = delivery::deliver(http, request, &prefix, guild.use_embed).await?;

        tracing::debug!(
            "Delivered relay from {:?} surface, delete marker attached: {}",
            request.source,
            delivered.has_delete_marker
        );

        Ok(RelayOutcome::Delivered(delivered))
    }
}
