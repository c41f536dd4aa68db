use sea_orm::DatabaseConnection;
use serenity::all::{Context, Message, RoleId};

use crate::{
    model::relay::{normalize_text, RelayRequest, SourceSurface, TextNormalization},
    service::{
        delivery,
        relay::{RelayOutcome, RelayService},
    },
};

/// Handle a raw message event: normalize it into a relay request and run the
/// pipeline, or drop it silently when it is not a command.
pub async fn handle_message(db: &DatabaseConnection, ctx: Context, message: Message) {
    // Bot-authored messages (including our own relays) are never requests.
    if message.author.bot {
        return;
    }

    let bot_id = { ctx.cache.current_user().id };
    let is_direct = message.guild_id.is_none();

    let text = match normalize_text(&message.content, bot_id, is_direct) {
        TextNormalization::NotACommand => return,
        TextNormalization::Direct(_) => {
            // DM target-channel routing is a deployment policy we don't
            // carry; the request is recognized but dropped.
            tracing::debug!(
                "Dropping direct-message relay request from user {}",
                message.author.id
            );
            return;
        }
        TextNormalization::Command(text) => text.to_string(),
    };

    let Some(guild_id) = message.guild_id else {
        return;
    };

    let request = RelayRequest {
        source: SourceSurface::Text,
        user_id: message.author.id,
        guild_id,
        target_channel_id: message.channel_id,
        text,
        replyable: false,
    };

    let member_roles: Vec<RoleId> = message
        .member
        .as_deref()
        .map(|member| member.roles.clone())
        .unwrap_or_default();

    match RelayService::new(db)
        .relay(&ctx.http, &request, &member_roles)
        .await
    {
        Ok(RelayOutcome::Delivered(delivered)) => {
            tracing::debug!(
                "Relayed message {} into channel {}",
                delivered.message_id,
                delivered.channel_id
            );
        }
        Ok(RelayOutcome::Denied(denial)) => {
            if let Err(e) =
                delivery::send_error_with_delete_marker(&ctx.http, message.channel_id, denial.message())
                    .await
            {
                tracing::error!("Failed to send denial message: {:?}", e);
            }
        }
        Err(e) => {
            tracing::error!("Relay pipeline failed: {:?}", e);
            // Best effort; if we cannot post here either, the log entry above
            // is all that remains of this request.
            let _ = message
                .channel_id
                .say(&ctx.http, "Unable to relay your message in this channel.")
                .await;
        }
    }
}
