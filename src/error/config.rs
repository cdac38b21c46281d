use thiserror::Error;

use crate::config::TOKEN_ENV_VAR;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// No authentication token was declared and the environment fallback is unset or empty.
    ///
    /// The provider cannot build a Discord client without a token, so configuration stops
    /// before client construction is attempted.
    #[error("Please add an authentication token or set the env var {}", TOKEN_ENV_VAR)]
    MissingToken,

    /// The declared authentication token is not known yet.
    ///
    /// Happens when the token is derived from another resource that has not been applied.
    #[error("Please provide a valid Discord API token")]
    UnknownToken,
}
