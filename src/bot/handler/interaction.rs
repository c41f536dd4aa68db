use sea_orm::DatabaseConnection;
use serenity::all::{
    Context, CreateInteractionResponse, CreateInteractionResponseMessage, Interaction, RoleId,
};

use crate::{
    model::relay::{RelayRequest, SourceSurface, RELAY_COMMAND},
    service::{
        delivery,
        relay::{RelayOutcome, RelayService},
    },
};

/// Handle an interaction event: acknowledge the slash command, normalize it
/// into a relay request, and run the pipeline.
pub async fn handle_interaction_create(
    db: &DatabaseConnection,
    ctx: Context,
    interaction: Interaction,
) {
    let Interaction::Command(command) = interaction else {
        return;
    };

    if command.data.name != RELAY_COMMAND {
        tracing::debug!("Ignoring unsupported interaction: {}", command.data.name);
        return;
    }

    // Acknowledge before any further processing. A failed handshake is
    // logged and swallowed; it does not abort the relay.
    let ack = command
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Defer(CreateInteractionResponseMessage::new().ephemeral(true)),
        )
        .await;
    if let Err(e) = ack {
        tracing::warn!("Failed to acknowledge interaction: {:?}", e);
    }

    let Some(guild_id) = command.guild_id else {
        tracing::debug!("Ignoring slash command invoked outside a guild");
        return;
    };

    let Some(text) = command
        .data
        .options
        .iter()
        .find(|option| option.name == "text")
        .and_then(|option| option.value.as_str())
    else {
        tracing::debug!("Ignoring slash command missing the required text option");
        return;
    };

    let replyable = command
        .data
        .options
        .iter()
        .find(|option| option.name == "replyable")
        .and_then(|option| option.value.as_bool())
        .unwrap_or(false);

    let request = RelayRequest {
        source: SourceSurface::Interaction,
        user_id: command.user.id,
        guild_id,
        target_channel_id: command.channel_id,
        text: text.to_string(),
        replyable,
    };

    let member_roles: Vec<RoleId> = command
        .member
        .as_ref()
        .map(|member| member.roles.clone())
        .unwrap_or_default();

    match RelayService::new(db)
        .relay(&ctx.http, &request, &member_roles)
        .await
    {
        Ok(RelayOutcome::Delivered(delivered)) => {
            tracing::debug!(
                "Relayed interaction message {} into channel {}",
                delivered.message_id,
                delivered.channel_id
            );
        }
        // Slash-style denials go to the requester's DM channel, keeping the
        // denial invisible to the target channel.
        Ok(RelayOutcome::Denied(denial)) => match command.user.create_dm_channel(&ctx.http).await {
            Ok(dm) => {
                if let Err(e) =
                    delivery::send_error_with_delete_marker(&ctx.http, dm.id, denial.message()).await
                {
                    tracing::error!("Failed to send denial message: {:?}", e);
                }
            }
            Err(e) => tracing::error!("Failed to open DM channel for denial: {:?}", e),
        },
        Err(e) => tracing::error!("Relay pipeline failed: {:?}", e),
    }
}
