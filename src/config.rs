//! Provider configuration resolution.

use std::fmt;

use crate::{error::config::ConfigError, framework::StringValue};

/// Environment variable consulted when no token is declared.
pub const TOKEN_ENV_VAR: &str = "DISCORD_AUTHENTICATION_TOKEN";

/// Resolved provider configuration.
#[derive(Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    pub authentication_token: String,
}

impl ProviderConfig {
    /// Resolves the bot token from declared configuration and the environment.
    ///
    /// A declared token always wins over the environment. An empty token counts as missing.
    ///
    /// # Arguments
    /// - `declared` - The `authentication_token` attribute as declared
    /// - `env_token` - Value of `DISCORD_AUTHENTICATION_TOKEN`, if set
    ///
    /// # Returns
    /// - `Ok(ProviderConfig)` - A non-empty token was found
    /// - `Err(ConfigError::UnknownToken)` - Declared token is not known yet
    /// - `Err(ConfigError::MissingToken)` - Neither source supplies a token
    pub fn resolve(declared: &StringValue, env_token: Option<String>) -> Result<Self, ConfigError> {
        let token = match declared {
            StringValue::Unknown => return Err(ConfigError::UnknownToken),
            StringValue::Known(token) => token.clone(),
            StringValue::Null => env_token.unwrap_or_default(),
        };

        if token.is_empty() {
            return Err(ConfigError::MissingToken);
        }

        Ok(Self {
            authentication_token: token,
        })
    }

    /// Reads the token fallback from the process environment.
    pub fn token_from_env() -> Option<String> {
        std::env::var(TOKEN_ENV_VAR).ok()
    }
}

impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("authentication_token", &"<redacted>")
            .finish()
    }
}
