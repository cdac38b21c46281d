//! Domain models returned by the Discord client.
//!
//! These are deliberately smaller than serenity's own models: they carry only the fields the
//! provider maps into declared attributes, which keeps the in-memory test client simple.

pub mod channel;
pub mod guild;

pub use channel::DiscordChannel;
pub use guild::DiscordGuild;
