use serenity::all::{
    ActivityData, Command, CommandOptionType, Context, CreateCommand, CreateCommandOption, Ready,
};

use crate::model::relay::RELAY_COMMAND;

/// Handle the gateway ready event: log the connection, set the activity, and
/// register the global slash command.
pub async fn handle_ready(ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord!", ready.user.name);

    ctx.set_activity(Some(ActivityData::listening("!volt")));

    let command = CreateCommand::new(RELAY_COMMAND)
        .description("Relay an anonymous message to this channel")
        .add_option(
            CreateCommandOption::new(CommandOptionType::String, "text", "The message to relay")
                .required(true),
        )
        .add_option(CreateCommandOption::new(
            CommandOptionType::Boolean,
            "replyable",
            "Attach a reply code so others can respond to you",
        ));

    if let Err(e) = Command::create_global_command(&ctx.http, command).await {
        tracing::error!("Failed to register slash command: {:?}", e);
    }
}
