use serenity::all::{Http, Reaction, ReactionType};

use crate::{
    error::AppError,
    model::relay::{delete_marker, DELETE_EMOJI},
};

/// What the deletion watcher did with a reaction event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeletionOutcome {
    /// The message was removed.
    Deleted,
    /// Not authorized or not ours; no side effect.
    Ignored,
}

/// Whether an emoji is the deletion marker. Every other emoji is ignored
/// with no side effect.
pub fn is_delete_marker(emoji: &ReactionType) -> bool {
    matches!(emoji, ReactionType::Unicode(unicode) if unicode == DELETE_EMOJI)
}

/// Ownership guard for the deletion affordance.
///
/// The marker must have been placed by the bot itself, and before the
/// triggering reaction landed the marker must have been the only reaction of
/// that emoji on the message. An extra pre-existing reaction means someone
/// else already reacted without authorization, so the trigger is ignored.
pub fn authorizes_deletion(marker_by_bot: bool, prior_count: u64) -> bool {
    marker_by_bot && prior_count == 1
}

/// Handles one marker reaction: fetches the message, verifies the ownership
/// guard, and deletes the message when authorized.
///
/// The caller has already filtered out non-marker emoji and the bot's own
/// reaction placements.
///
/// # Returns
/// - `Ok(DeletionOutcome)`: Whether the message was removed
/// - `Err(AppError)`: Fetch or delete failure (missing permission, message
///   already gone); reported to the channel by the caller, never escalated
pub async fn delete_if_authorized(
    http: &Http,
    reaction: &Reaction,
) -> Result<DeletionOutcome, AppError> {
    let message = http
        .get_message(reaction.channel_id, reaction.message_id)
        .await?;

    let Some(marker) = message
        .reactions
        .iter()
        .find(|entry| is_delete_marker(&entry.reaction_type))
    else {
        // Marker already removed; the affordance has expired.
        return Ok(DeletionOutcome::Ignored);
    };

    // The fetch observes the message after the triggering reaction landed,
    // so subtract it to recover the prior count.
    let prior_count = marker.count.saturating_sub(1);

    if !authorizes_deletion(marker.me, prior_count) {
        return Ok(DeletionOutcome::Ignored);
    }

    message.delete(http).await?;

    Ok(DeletionOutcome::Deleted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_only_the_marker_emoji() {
        assert!(is_delete_marker(&delete_marker()));
        assert!(!is_delete_marker(&ReactionType::Unicode("👍".to_string())));
    }

    #[test]
    fn sole_marker_authorizes_deletion() {
        assert!(authorizes_deletion(true, 1));
    }

    #[test]
    fn extra_prior_reaction_blocks_deletion() {
        assert!(!authorizes_deletion(true, 2));
    }

    #[test]
    fn foreign_marker_never_authorizes() {
        // Marker emoji present but not placed by the bot.
        assert!(!authorizes_deletion(false, 1));
    }

    #[test]
    fn missing_marker_never_authorizes() {
        assert!(!authorizes_deletion(true, 0));
    }
}
