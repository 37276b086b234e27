//! Test fixtures providing reusable test data without database insertion.
//!
//! Fixtures create in-memory entity models for unit tests and serve as the default
//! values for factory builders. Unlike factories, fixtures do NOT insert data into
//! the database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! // Create in-memory entity model (no DB)
//! let config = fixture::guild_config::entity();
//!
//! // Create with custom fields
//! let config = fixture::guild_config::entity_builder()
//!     .default_queue_size(Some(4))
//!     .build();
//! ```

pub mod guild_config;

pub use guild_config::{entity as guild_config_entity, entity_builder as guild_config_entity_builder};
