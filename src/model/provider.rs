use serde::{Deserialize, Serialize};

use crate::framework::StringValue;

pub const TOKEN_ATTRIBUTE: &str = "authentication_token";

/// Provider-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscordProviderModel {
    pub authentication_token: StringValue,
}
