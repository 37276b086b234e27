//! Domain models shared by the service layer and the command handlers.
//!
//! Guild configuration is converted from entity models at the repository boundary.
//! Lobby state is purely in-memory and never touches the database.

pub mod command;
pub mod guild_config;
pub mod lobby;
