//! Ready event handler for bot initialization.
//!
//! Fired once per gateway connection after the initial handshake. Logs the connection
//! and sets the bot's activity so members can see how to invoke it.

use serenity::all::{ActivityData, Context, Ready};

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `ctx` - Discord context for setting activity status
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(ctx: Context, ready: Ready) {
    tracing::info!(
        "{} is connected to Discord in {} guild(s)",
        ready.user.name,
        ready.guilds.len()
    );

    ctx.set_activity(Some(ActivityData::custom(format!(
        "@{} help",
        ready.user.name
    ))));
}
