//! Factory methods for creating test data.
//!
//! Factories insert entities into the test database with sensible defaults, reducing
//! boilerplate in tests. Each entity has its own factory module with both a `Factory`
//! struct for customization and a `create_*` convenience function for quick default
//! creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let config = factory::create_guild_config(&db).await?;
//!
//!     // Customize
//!     let config = factory::guild_config::GuildConfigFactory::new(&db)
//!         .guild_id("987654321")
//!         .default_queue_size(Some(2))
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

pub mod guild_config;
pub mod helpers;

pub use guild_config::create_guild_config;
