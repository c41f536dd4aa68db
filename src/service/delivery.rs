use serenity::all::{
    ChannelId, CreateEmbed, CreateEmbedAuthor, CreateMessage, Http, UserId,
};

use crate::{
    error::AppError,
    model::relay::{delete_marker, DeliveredMessage, RelayRequest},
};

/// Opaque code appended to replyable messages, correlating the delivered
/// message back to the requesting user. Decoding it is the reply flow's
/// concern, not ours.
pub fn reply_code(user_id: UserId) -> String {
    format!("{:x}", user_id.get())
}

/// Composes the plain-text body: bolded prefix, the relay text, and the
/// reply-correlation line when requested.
pub fn compose_plain_body(prefix: &str, text: &str, code: Option<&str>) -> String {
    let mut body = format!("**{prefix}:** {text}");
    append_reply_code(&mut body, code);
    body
}

/// Composes the embed description; the prefix rides in the embed author line
/// instead of the body.
pub fn compose_embed_description(text: &str, code: Option<&str>) -> String {
    let mut description = text.to_string();
    append_reply_code(&mut description, code);
    description
}

fn append_reply_code(body: &mut String, code: Option<&str>) {
    if let Some(code) = code {
        body.push_str(&format!("\n\n*Reply code: `{code}`*"));
    }
}

/// Sends the relayed message to the target channel and attaches the deletion
/// marker.
///
/// Exactly one outbound message creation and one reaction creation per
/// successful relay. Renders as plain text or as an embed per the guild's
/// `use_embed` flag.
///
/// # Arguments
/// - `http`: Discord HTTP client
/// - `request`: The canonical relay request
/// - `prefix`: Resolved display prefix
/// - `use_embed`: Guild's embed toggle
///
/// # Returns
/// - `Ok(DeliveredMessage)`: Handle to the delivered message
/// - `Err(AppError)`: Send or reaction failure (missing permission, channel
///   gone); reported, never retried
pub async fn deliver(
    http: &Http,
    request: &RelayRequest,
    prefix: &str,
    use_embed: bool,
) -> Result<DeliveredMessage, AppError> {
    let code = request.replyable.then(|| reply_code(request.user_id));

    let builder = if use_embed {
        CreateMessage::new().embed(
            CreateEmbed::new()
                .author(CreateEmbedAuthor::new(prefix))
                .description(compose_embed_description(&request.text, code.as_deref())),
        )
    } else {
        CreateMessage::new().content(compose_plain_body(prefix, &request.text, code.as_deref()))
    };

    let message = request.target_channel_id.send_message(http, builder).await?;
    message.react(http, delete_marker()).await?;

    Ok(DeliveredMessage {
        message_id: message.id,
        channel_id: message.channel_id,
        has_delete_marker: true,
    })
}

/// Sends a one-line error message and attaches the deletion marker so the
/// requester can dismiss it.
pub async fn send_error_with_delete_marker(
    http: &Http,
    channel_id: ChannelId,
    text: &str,
) -> Result<(), AppError> {
    let message = channel_id.say(http, text).await?;
    message.react(http, delete_marker()).await?;

    Ok(())
}
