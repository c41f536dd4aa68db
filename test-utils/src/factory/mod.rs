//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for
//! customization and a `create_*` convenience function for quick default
//! creation, reducing boilerplate in tests.
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
//!     let guild = factory::guild::create_guild(&db).await?;
//!
//!     // Customize via the builder pattern
//!     let pro_guild = factory::guild::GuildFactory::new(&db)
//!         .guild_id("987654321")
//!         .is_pro(true)
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

pub mod blocked_user;
pub mod guild;
pub mod helpers;

// Re-export commonly used factory functions for concise usage
pub use blocked_user::create_blocked_user;
pub use guild::create_guild;
