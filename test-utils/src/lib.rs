//! Discord Provider Test Utils
//!
//! Provides shared testing utilities for the Discord provider. Instead of talking to Discord,
//! tests run against [`MockDiscordClient`](mock::MockDiscordClient), an in-memory
//! implementation of the `DiscordClient` trait whose guilds, channels, failures, and latency
//! are set up through a builder.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for seeding guilds and channels and injecting faults
//! - **TestContext**: Test environment holding the mock client
//! - **MockDiscordClient**: In-memory Discord backend that records every call
//! - **factory**: Helpers producing Discord models with unique IDs
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_channel_operations() -> Result<(), TestError> {
//!     let guild = test_utils::factory::guild::create_guild();
//!     let test = TestBuilder::new().with_guild(guild.clone()).build().await?;
//!
//!     let client = test.handle();
//!     // Drive handlers with the client...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod mock;
