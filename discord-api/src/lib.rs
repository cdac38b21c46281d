//! Discord API client seam.
//!
//! Provides the narrow set of Discord REST operations the provider needs, expressed as the
//! [`DiscordClient`] trait, together with the domain models those operations return. The
//! production implementation, [`SerenityClient`], delegates every call to serenity's `Http`
//! client, which owns authentication, connection reuse, and ratelimiting.
//!
//! Keeping the trait in its own crate lets the `test-utils` crate provide an in-memory
//! implementation without depending on the provider crate itself.

pub mod client;
pub mod error;
pub mod http;
pub mod model;

pub use client::{DiscordClient, DiscordHandle};
pub use error::ClientError;
pub use http::SerenityClient;
pub use model::{DiscordChannel, DiscordGuild};

pub use serenity::all::{ChannelId, GuildId};
pub use serenity::async_trait;
