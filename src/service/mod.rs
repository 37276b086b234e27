//! Stateful services that back the command handlers.
//!
//! - `guild_config` - write-through cache over the `guild_config` table
//! - `lobby` - in-memory lobby registry with lazy expiry
//! - `guild_lock` - per-guild mutual exclusion for command execution

pub mod guild_config;
pub mod guild_lock;
pub mod lobby;
