//! Discord provider for infrastructure-as-code hosts.
//!
//! Exposes Discord channels as a managed resource (`discord_channel`) and guilds as a data
//! source (`discord_server`). The host runtime drives every lifecycle call and owns planning,
//! diffing, and state storage; this crate only maps declared attributes onto Discord REST
//! calls made through serenity and maps the results back.
//!
//! # Layout
//!
//! - **Framework** (`framework`) - Handler traits, snapshots, schemas, and diagnostics the
//!   host talks to
//! - **Provider** (`provider`) - Token resolution and client construction
//! - **Resources** (`resource/`) and **Data Sources** (`data_source/`) - Lifecycle handlers
//! - **Models** (`model/`) - Declared attribute models
//! - **Errors** (`error/`) - Error types and their mapping to diagnostics
//! - **Host** (`host`) - In-process host wiring a provider to its handlers

pub mod config;
pub mod data_source;
pub mod error;
pub mod framework;
pub mod host;
pub mod model;
pub mod provider;
pub mod resource;
pub mod startup;
pub mod util;

pub use host::ProviderHost;
pub use provider::DiscordProvider;
