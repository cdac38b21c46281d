//! Error types and diagnostic mapping.
//!
//! Handlers run their logic as `Result<_, ProviderError>` and convert failures into
//! [`Diagnostic`]s only at the host boundary. Each variant maps to an [`ErrorKind`] and,
//! where the failure concerns a declared attribute, to that attribute's path.

pub mod config;
pub mod internal;

use std::num::ParseIntError;

use discord_api::ClientError;
use thiserror::Error;
use tokio::time::error::Elapsed;

use crate::{
    error::{config::ConfigError, internal::InternalError},
    framework::{AttributePath, Diagnostic, ErrorKind},
    model::provider::TOKEN_ATTRIBUTE,
};

/// Top-level provider error type.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Provider configuration error.
    ///
    /// Reported once during provider configuration and blocks client construction.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Host misuse or provider bug.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Discord API call failed.
    ///
    /// The client's message is surfaced verbatim.
    #[error(transparent)]
    ClientErr(#[from] ClientError),

    /// The Discord client could not be built from the resolved token.
    #[error(
        "An unexpected error occurred when creating the Discord API client. \
         If the error is not clear, please contact the provider developers.\n\n\
         Discord Client Error: {0}"
    )]
    ClientConstruction(#[source] ClientError),

    /// A declared identifier is not a valid Discord snowflake.
    ///
    /// Reported before any remote call is made.
    #[error("Invalid {attribute} '{value}', expected a non-zero decimal Discord ID")]
    InvalidId {
        /// Attribute holding the identifier
        attribute: &'static str,
        /// The value that failed to parse
        value: String,
        /// The underlying parse error, absent when the value has non-digit characters
        #[source]
        source: Option<ParseIntError>,
    },

    /// The call context's deadline passed before Discord answered.
    #[error("Deadline exceeded while waiting for the Discord API")]
    DeadlineExceeded(#[from] Elapsed),
}

impl ProviderError {
    /// Category reported to the host.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ConfigErr(_) | Self::ClientConstruction(_) => ErrorKind::Configuration,
            Self::InternalErr(InternalError::UnexpectedProviderData) => ErrorKind::TypeMismatch,
            Self::InternalErr(InternalError::NotConfigured) => ErrorKind::Internal,
            Self::ClientErr(_) => ErrorKind::Remote,
            Self::InvalidId { .. } => ErrorKind::Conversion,
            Self::DeadlineExceeded(_) => ErrorKind::Timeout,
        }
    }

    /// Attribute the error concerns, if any.
    pub fn attribute(&self) -> Option<AttributePath> {
        match self {
            Self::ConfigErr(_) => Some(AttributePath::root(TOKEN_ATTRIBUTE)),
            Self::InvalidId { attribute, .. } => Some(AttributePath::root(*attribute)),
            _ => None,
        }
    }

    /// Converts the error into a diagnostic for the host.
    ///
    /// Configuration and identifier errors carry their own summaries; every other variant
    /// uses the operation's `summary` (e.g. "Error creating channel") with the error message
    /// as detail. Internal errors are logged since they point at a bug rather than at the
    /// practitioner's input.
    ///
    /// # Arguments
    /// - `summary` - Operation-specific summary for remote and internal failures
    ///
    /// # Returns
    /// - `Diagnostic` - Error kind, summary, verbatim detail, and attribute path if any
    pub fn into_diagnostic(self, summary: &str) -> Diagnostic {
        let summary = match &self {
            Self::ConfigErr(ConfigError::MissingToken) => "Missing authentication_token",
            Self::ConfigErr(ConfigError::UnknownToken) => "Unknown authentication token",
            Self::ClientConstruction(_) => "Unable to Create Discord API Client",
            Self::InvalidId { .. } => "Invalid Discord ID",
            Self::InternalErr(_) => {
                tracing::error!("Internal error: {}", self);
                summary
            }
            Self::ClientErr(_) | Self::DeadlineExceeded(_) => summary,
        };

        let diagnostic = Diagnostic::new(self.kind(), summary, self.to_string());

        match self.attribute() {
            Some(path) => diagnostic.with_attribute(path),
            None => diagnostic,
        }
    }
}
