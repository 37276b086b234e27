use crate::{error::command::CommandError, model::command::Reply};

pub fn echo(text: &str) -> Result<Vec<Reply>, CommandError> {
    if text.is_empty() {
        return Err(CommandError::validation("Nothing to echo."));
    }

    Ok(vec![Reply::message(format!("```{}```", text))])
}

pub fn help() -> Vec<Reply> {
    vec![Reply::message(
        "**Server Configuration**\n\
         `configure` Changes the bot's configuration for this server.\n\
         **Lobby**\n\
         `host` Opens a lobby in the queue channel.\n\
         `join` Joins the lobby queue for the next two hours.\n\
         `leave` Leaves the lobby queue.\n\
         `query` Shows how many players are queued.\n\
         `help` Shows this message.",
    )]
}
