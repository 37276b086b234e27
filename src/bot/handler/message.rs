//! Message event handler.
//!
//! Parses each guild message as a potential command, resolves the author's roles and
//! permissions from the gateway cache, runs the command and delivers the replies.

use std::time::Duration;

use serenity::all::{Cache, ChannelId, Context, GuildId, Message, Permissions, RoleId, UserId};
use serenity::async_trait;

use crate::{
    bot::command::{dispatch::CommandDispatcher, parse::parse_command, GuildAccess, ReplySink},
    model::command::{Invocation, Reply},
    state::BotState,
};

/// How long ephemeral replies stay visible.
const EPHEMERAL_LIFETIME: Duration = Duration::from_secs(10);

/// Handle message creation in a channel
pub async fn handle_message(
    state: &BotState,
    command_prefix: Option<&str>,
    ctx: Context,
    message: Message,
) {
    if message.author.bot {
        return;
    }

    let bot_id = ctx.cache.current_user().id;

    let Some(command) = parse_command(&message.content, bot_id.get(), command_prefix) else {
        return;
    };

    tracing::debug!(
        "Received `{}` from {} in channel {}",
        command.name(),
        message.author.id,
        message.channel_id
    );

    let invocation = resolve_invocation(&ctx.cache, &message);
    let access = CacheGuildAccess {
        cache: &ctx.cache,
        bot_id,
    };

    let sink = MessageReplySink {
        ctx: &ctx,
        message: &message,
    };

    if let Err(e) = CommandDispatcher::new(state)
        .dispatch(&invocation, command, &access, &sink)
        .await
    {
        tracing::error!("Failed to run command from message {}: {}", message.id, e);
    }
}

/// Builds the invocation context from a message and the guild cache.
fn resolve_invocation(cache: &Cache, message: &Message) -> Invocation {
    let author_role_ids = message
        .member
        .as_ref()
        .map(|member| member.roles.iter().map(|role| role.get()).collect())
        .unwrap_or_default();

    let author_can_manage_guild = message
        .guild_id
        .and_then(|guild_id| cache.guild(guild_id))
        .is_some_and(|guild| {
            if guild.owner_id == message.author.id {
                return true;
            }

            let Some(member) = message.member.as_deref() else {
                return false;
            };

            let everyone = guild
                .roles
                .get(&RoleId::new(guild.id.get()))
                .map(|role| role.permissions)
                .unwrap_or_else(Permissions::empty);
            let roles = member
                .roles
                .iter()
                .filter_map(|role_id| guild.roles.get(role_id))
                .map(|role| role.permissions);

            grants_manage_guild(everyone, roles)
        });

    Invocation {
        guild_id: message.guild_id.map(GuildId::get),
        channel_id: message.channel_id.get(),
        author_id: message.author.id.get(),
        author_role_ids,
        author_can_manage_guild,
    }
}

/// Whether guild-level role permissions include Manage Server.
///
/// Channel overwrites are not consulted, so this also holds inside threads.
fn grants_manage_guild(everyone: Permissions, roles: impl Iterator<Item = Permissions>) -> bool {
    let permissions = roles.fold(everyone, |acc, role| acc | role);

    permissions.intersects(Permissions::MANAGE_GUILD | Permissions::ADMINISTRATOR)
}

/// Sends replies to the channel of the invoking message.
struct MessageReplySink<'a> {
    ctx: &'a Context,
    message: &'a Message,
}

#[async_trait]
impl ReplySink for MessageReplySink<'_> {
    async fn send(&self, reply: Reply) {
        send_reply(self.ctx, self.message, reply).await;
    }
}

async fn send_reply(ctx: &Context, message: &Message, reply: Reply) {
    match reply {
        Reply::Message(content) => {
            if let Err(e) = message.channel_id.say(&ctx.http, content).await {
                tracing::error!("Failed to send message to channel {}: {}", message.channel_id, e);
            }
        }
        Reply::Ephemeral(content) => {
            let sent = match message.reply(&ctx.http, content).await {
                Ok(sent) => sent,
                Err(e) => {
                    tracing::error!("Failed to reply to message {}: {}", message.id, e);
                    return;
                }
            };

            let http = ctx.http.clone();
            tokio::spawn(async move {
                tokio::time::sleep(EPHEMERAL_LIFETIME).await;

                if let Err(e) = http.delete_message(sent.channel_id, sent.id, None).await {
                    tracing::warn!("Failed to delete ephemeral reply {}: {}", sent.id, e);
                }
            });
        }
    }
}

/// Guild lookups backed by serenity's gateway cache.
struct CacheGuildAccess<'a> {
    cache: &'a Cache,
    bot_id: UserId,
}

impl GuildAccess for CacheGuildAccess<'_> {
    fn bot_can_use_channel(&self, guild_id: u64, channel_id: u64) -> bool {
        let Some(guild) = self.cache.guild(GuildId::new(guild_id)) else {
            return false;
        };
        let (Some(channel), Some(member)) = (
            guild.channels.get(&ChannelId::new(channel_id)),
            guild.members.get(&self.bot_id),
        ) else {
            return false;
        };

        guild
            .user_permissions_in(channel, member)
            .contains(Permissions::VIEW_CHANNEL | Permissions::SEND_MESSAGES)
    }

    fn role_exists(&self, guild_id: u64, role_id: u64) -> bool {
        self.cache
            .guild(GuildId::new(guild_id))
            .is_some_and(|guild| guild.roles.contains_key(&RoleId::new(role_id)))
    }
}
