use serenity::all::{Context, Reaction};

use crate::service::deletion::{self, DeletionOutcome};

/// Handle a reaction-added event: run the deletion watcher when the reaction
/// is the deletion marker.
pub async fn handle_reaction_add(ctx: Context, reaction: Reaction) {
    let bot_id = { ctx.cache.current_user().id };

    // Placing our own marker fires this event too.
    if reaction.user_id == Some(bot_id) {
        return;
    }

    if !deletion::is_delete_marker(&reaction.emoji) {
        return;
    }

    match deletion::delete_if_authorized(&ctx.http, &reaction).await {
        Ok(DeletionOutcome::Deleted) => {
            tracing::debug!("Deleted relayed message {} on request", reaction.message_id);
        }
        Ok(DeletionOutcome::Ignored) => {}
        Err(e) => {
            tracing::warn!("Failed to delete message {}: {:?}", reaction.message_id, e);

            let report = reaction
                .channel_id
                .say(
                    &ctx.http,
                    "Unable to delete that message. I may be missing permission, or it is already gone.",
                )
                .await;
            if let Err(e) = report {
                tracing::error!("Failed to report deletion error: {:?}", e);
            }
        }
    }
}
