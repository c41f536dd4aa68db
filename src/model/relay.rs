use serenity::all::{ChannelId, GuildId, MessageId, ReactionType, UserId};

/// Literal invocation prefix for legacy text commands, case-sensitive.
pub const TEXT_COMMAND_PREFIX: &str = "!volt ";

/// Name of the slash command registered on startup.
pub const RELAY_COMMAND: &str = "send";

/// Emoji the bot attaches to every delivered message as the deletion
/// affordance, and the only emoji the deletion watcher reacts to.
pub const DELETE_EMOJI: &str = "❌";

/// The reaction the bot attaches to delivered messages.
pub fn delete_marker() -> ReactionType {
    ReactionType::Unicode(DELETE_EMOJI.to_string())
}

/// Which input surface a relay request came in on.
///
/// Both surfaces converge on identical relay semantics; the surface is kept
/// only so handlers can route denial messages back to the right place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceSurface {
    Text,
    Interaction,
}

/// Canonical relay request, built once per inbound event and immutable for
/// the duration of one pipeline run.
#[derive(Debug, Clone)]
pub struct RelayRequest {
    pub source: SourceSurface,
    pub user_id: UserId,
    pub guild_id: GuildId,
    pub target_channel_id: ChannelId,
    pub text: String,
    pub replyable: bool,
}

/// Handle to a message the pipeline delivered.
#[derive(Debug, Clone, Copy)]
pub struct DeliveredMessage {
    pub message_id: MessageId,
    pub channel_id: ChannelId,
    pub has_delete_marker: bool,
}

/// Result of normalizing a raw text message.
#[derive(Debug, PartialEq, Eq)]
pub enum TextNormalization<'a> {
    /// A guild-channel command: the invocation prefix was stripped.
    Command(&'a str),
    /// A direct message: the entire body is the relay text, no prefix
    /// required. Target-channel routing for DMs is the caller's concern.
    Direct(&'a str),
    /// Not a relay request; the message is silently ignored.
    NotACommand,
}

/// Normalizes raw message content into a relay text, or rejects it.
///
/// Direct messages are relay requests as-is (zero offset). Guild messages
/// must start with the literal `"!volt "` prefix or a leading mention of the
/// bot itself; anything else is not a command. A command whose remaining text
/// is empty is treated as not-a-command rather than relaying nothing.
pub fn normalize_text(content: &str, bot_id: UserId, is_direct: bool) -> TextNormalization<'_> {
    if is_direct {
        return TextNormalization::Direct(content);
    }

    let rest = strip_invocation(content, bot_id);

    match rest.map(str::trim) {
        Some(text) if !text.is_empty() => TextNormalization::Command(text),
        _ => TextNormalization::NotACommand,
    }
}

/// Strips the `"!volt "` literal or a leading bot mention (`<@id>` or
/// `<@!id>`) from the content. Returns the remainder, or `None` if neither
/// prefix form matches.
fn strip_invocation(content: &str, bot_id: UserId) -> Option<&str> {
    if let Some(rest) = content.strip_prefix(TEXT_COMMAND_PREFIX) {
        return Some(rest);
    }

    let mention = format!("<@{}>", bot_id.get());
    let nick_mention = format!("<@!{}>", bot_id.get());

    content
        .strip_prefix(&mention)
        .or_else(|| content.strip_prefix(&nick_mention))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOT: UserId = UserId::new(42);

    #[test]
    fn strips_literal_prefix() {
        assert_eq!(
            normalize_text("!volt hello there", BOT, false),
            TextNormalization::Command("hello there")
        );
    }

    #[test]
    fn prefix_is_case_sensitive() {
        assert_eq!(
            normalize_text("!Volt hello", BOT, false),
            TextNormalization::NotACommand
        );
    }

    #[test]
    fn strips_mention_prefix() {
        assert_eq!(
            normalize_text("<@42> hello", BOT, false),
            TextNormalization::Command("hello")
        );
        assert_eq!(
            normalize_text("<@!42> hello", BOT, false),
            TextNormalization::Command("hello")
        );
    }

    #[test]
    fn other_mentions_are_not_commands() {
        assert_eq!(
            normalize_text("<@99> hello", BOT, false),
            TextNormalization::NotACommand
        );
    }

    #[test]
    fn guild_chatter_is_ignored() {
        assert_eq!(
            normalize_text("just talking", BOT, false),
            TextNormalization::NotACommand
        );
    }

    #[test]
    fn empty_command_body_is_ignored() {
        assert_eq!(
            normalize_text("!volt    ", BOT, false),
            TextNormalization::NotACommand
        );
    }

    #[test]
    fn direct_message_uses_entire_body() {
        assert_eq!(
            normalize_text("hello there", BOT, true),
            TextNormalization::Direct("hello there")
        );
        // Zero offset: a DM is not prefix-stripped even if one matches.
        assert_eq!(
            normalize_text("!volt hello", BOT, true),
            TextNormalization::Direct("!volt hello")
        );
    }
}
