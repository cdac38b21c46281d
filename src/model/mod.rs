//! Declared attribute models.
//!
//! Each model mirrors one schema attribute for attribute and converts to and from host
//! snapshots through serde. Fields missing from a snapshot decode as null.

pub mod channel;
pub mod provider;
pub mod server;

pub use channel::ChannelResourceModel;
pub use provider::DiscordProviderModel;
pub use server::ServerDataSourceModel;
