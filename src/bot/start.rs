use sea_orm::DatabaseConnection;
use serenity::all::{Client, GatewayIntents};

use crate::{bot::handler::Handler, config::Config, error::AppError};

/// Starts the Discord bot in a blocking manner.
///
/// Creates the gateway client and runs it until shutdown. Events are
/// dispatched concurrently; each one is handled as an independent unit of
/// work by [`Handler`].
///
/// # Arguments
/// - `config` - Application configuration holding the bot token
/// - `db` - Database connection for the event handlers
///
/// # Returns
/// - `Ok(())` if the bot runs to shutdown
/// - `Err(AppError)` if client construction or the connection fails
pub async fn start_bot(config: &Config, db: DatabaseConnection) -> Result<(), AppError> {
    // MESSAGE_CONTENT is a privileged intent - must be enabled in the Discord
    // Developer Portal for the text-command surface to see message bodies.
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::GUILD_MESSAGE_REACTIONS
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let handler = Handler::new(db);

    let mut client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(handler)
        .await?;

    tracing::info!("Starting Discord bot...");

    client.start_autosharded().await?;

    Ok(())
}
