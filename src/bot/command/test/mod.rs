//! Scenario tests for the command layer.
//!
//! Commands run through `CommandDispatcher` against an in-memory database, a manual
//! clock and a stub guild, so the full precondition and handler path is exercised
//! without a Discord connection.


use std::sync::{Arc, Mutex};

use chrono::{TimeZone, Utc};
use sea_orm::DatabaseConnection;
use serenity::async_trait;
use test_utils::builder::TestBuilder;

use crate::{
    bot::command::{dispatch::CommandDispatcher, GuildAccess, ReplySink},
    error::AppError,
    model::{
        command::{Command, Invocation, Reply},
        guild_config::GuildConfigUpdate,
    },
    service::guild_config::GuildConfigStore,
    state::{BotState, GuildScope},
    util::clock::ManualClock,
};

const GUILD: u64 = 1000;
const QUEUE_CHANNEL: u64 = 2000;
const OTHER_CHANNEL: u64 = 2001;
const HOST_ROLE: u64 = 3000;

/// Guild where the bot can use the queue channels and the host role exists.
struct StubAccess {
    usable_channels: Vec<u64>,
    roles: Vec<u64>,
}

impl Default for StubAccess {
    fn default() -> Self {
        Self {
            usable_channels: vec![QUEUE_CHANNEL, OTHER_CHANNEL],
            roles: vec![HOST_ROLE],
        }
    }
}

impl GuildAccess for StubAccess {
    fn bot_can_use_channel(&self, guild_id: u64, channel_id: u64) -> bool {
        guild_id == GUILD && self.usable_channels.contains(&channel_id)
    }

    fn role_exists(&self, guild_id: u64, role_id: u64) -> bool {
        guild_id == GUILD && self.roles.contains(&role_id)
    }
}

/// Records delivered replies, optionally taking time to deliver each one.
#[derive(Default)]
struct RecordingSink {
    delay: Option<std::time::Duration>,
    replies: Mutex<Vec<Reply>>,
}

impl RecordingSink {
    fn slow(delay: std::time::Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::default()
        }
    }

    fn replies(&self) -> Vec<Reply> {
        self.replies.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReplySink for RecordingSink {
    async fn send(&self, reply: Reply) {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.replies.lock().unwrap().push(reply);
    }
}

struct Harness {
    db: DatabaseConnection,
    state: BotState,
    clock: Arc<ManualClock>,
    access: StubAccess,
}

impl Harness {
    async fn new() -> Self {
        Self::with_scope(GuildScope::All).await
    }

    async fn with_scope(scope: GuildScope) -> Self {
        let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
        let db = test.db.clone().unwrap();

        let store = GuildConfigStore::load(db.clone()).await.unwrap();
        let clock = Arc::new(ManualClock::new(
            Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap(),
        ));
        let state = BotState::new(store, scope, clock.clone());

        Self {
            db,
            state,
            clock,
            access: StubAccess::default(),
        }
    }

    /// Harness whose guild already has the queue channel configured.
    async fn configured() -> Self {
        let harness = Self::new().await;
        harness
            .state
            .config_store
            .upsert(GUILD, GuildConfigUpdate::QueueChannel(QUEUE_CHANNEL))
            .await
            .unwrap();
        harness
    }

    async fn set(&self, update: GuildConfigUpdate) {
        self.state.config_store.upsert(GUILD, update).await.unwrap();
    }

    async fn run(&self, invocation: &Invocation, command: Command) -> Result<Vec<Reply>, AppError> {
        let sink = RecordingSink::default();
        self.run_into(invocation, command, &sink).await?;
        Ok(sink.replies())
    }

    async fn run_into(
        &self,
        invocation: &Invocation,
        command: Command,
        sink: &RecordingSink,
    ) -> Result<(), AppError> {
        CommandDispatcher::new(&self.state)
            .dispatch(invocation, command, &self.access, sink)
            .await
    }

    /// Runs a command as a plain member in the queue channel.
    async fn run_as(&self, member_id: u64, command: Command) -> Vec<Reply> {
        self.run(&member(member_id), command).await.unwrap()
    }
}

fn member(member_id: u64) -> Invocation {
    Invocation {
        guild_id: Some(GUILD),
        channel_id: QUEUE_CHANNEL,
        author_id: member_id,
        author_role_ids: Vec::new(),
        author_can_manage_guild: false,
    }
}

fn admin(member_id: u64) -> Invocation {
    Invocation {
        author_can_manage_guild: true,
        ..member(member_id)
    }
}

fn configure(setting: &str, argument: Option<&str>) -> Command {
    Command::Configure {
        setting: Some(setting.to_string()),
        argument: argument.map(str::to_string),
    }
}

fn contents(replies: &[Reply]) -> Vec<&str> {
    replies.iter().map(Reply::content).collect()
}
