//! Factories producing Discord models for tests.
//!
//! Every factory draws IDs from a shared counter so models created in the same test never
//! collide.

pub mod channel;
pub mod guild;
pub mod helpers;
