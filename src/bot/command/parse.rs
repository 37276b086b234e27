//! Parsing of message content into commands.
//!
//! A command is invoked by mentioning the bot (`<@id>` or the legacy nickname form
//! `<@!id>`) or, when configured, by a text prefix. The first word after that is the
//! command name, case-insensitive.

use serenity::utils::{parse_channel_mention, parse_role_mention};

use crate::model::command::Command;

/// Parses message content into a command.
///
/// # Arguments
/// - `content` - Raw message content
/// - `bot_id` - The bot's user id, for recognizing mentions
/// - `prefix` - Optional text prefix accepted in addition to mentions
///
/// # Returns
/// - `Some(Command)` - The message invokes a known command
/// - `None` - The message is not addressed to the bot or names an unknown command
pub fn parse_command(content: &str, bot_id: u64, prefix: Option<&str>) -> Option<Command> {
    let body = strip_invocation(content.trim_start(), bot_id, prefix)?.trim();

    let (name, rest) = match body.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (body, ""),
    };

    let command = match name.to_ascii_lowercase().as_str() {
        "configure" => {
            let mut args = rest.split_whitespace();
            Command::Configure {
                setting: args.next().map(str::to_ascii_lowercase),
                argument: args.next().map(str::to_string),
            }
        }
        "host" => Command::Host,
        "join" => Command::Join,
        "leave" => Command::Leave,
        "query" => Command::Query,
        "echo" => Command::Echo(rest.to_string()),
        "help" => Command::Help,
        _ => return None,
    };

    Some(command)
}

fn strip_invocation<'c>(content: &'c str, bot_id: u64, prefix: Option<&str>) -> Option<&'c str> {
    for mention in [format!("<@{}>", bot_id), format!("<@!{}>", bot_id)] {
        if let Some(rest) = content.strip_prefix(mention.as_str()) {
            return Some(rest);
        }
    }

    prefix
        .filter(|prefix| !prefix.is_empty())
        .and_then(|prefix| content.strip_prefix(prefix))
}

/// Parses a channel argument given as a mention (`<#id>`) or a bare id.
pub fn parse_channel_argument(argument: &str) -> Option<u64> {
    parse_channel_mention(argument)
        .map(|id| id.get())
        .or_else(|| parse_id(argument))
}

/// Parses a role argument given as a mention (`<@&id>`) or a bare id.
pub fn parse_role_argument(argument: &str) -> Option<u64> {
    parse_role_mention(argument)
        .map(|id| id.get())
        .or_else(|| parse_id(argument))
}

fn parse_id(argument: &str) -> Option<u64> {
    argument.parse::<u64>().ok().filter(|id| *id != 0)
}
