use serenity::all::ChannelId;
use serenity::http::HttpError;
use thiserror::Error;

/// Errors returned by [`DiscordClient`](crate::DiscordClient) implementations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    Discord(Box<serenity::Error>),

    /// The requested entity does not exist.
    ///
    /// Raised when Discord answers with 404 Not Found.
    #[error("Unknown {kind} {id}")]
    NotFound {
        /// Entity kind, e.g. `"channel"` or `"guild"`
        kind: &'static str,
        /// The ID that was looked up
        id: u64,
    },

    /// The channel exists but is not part of a guild (e.g. a direct message channel).
    #[error("Channel {0} is not a guild channel")]
    NotGuildChannel(ChannelId),

    /// The bot token failed local validation before any request was made.
    #[error("Invalid bot token: {0}")]
    InvalidToken(String),
}

impl ClientError {
    /// Returns true if the error means the entity no longer exists remotely.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Converts a serenity error, mapping 404 responses to [`ClientError::NotFound`].
    ///
    /// # Arguments
    /// - `kind` - Entity kind used in the not-found message
    /// - `id` - ID of the entity the failed request targeted
    /// - `err` - The error returned by serenity
    pub fn from_serenity(kind: &'static str, id: u64, err: serenity::Error) -> Self {
        if let serenity::Error::Http(HttpError::UnsuccessfulRequest(response)) = &err {
            if response.status_code.as_u16() == 404 {
                return Self::NotFound { kind, id };
            }
        }

        Self::Discord(Box::new(err))
    }
}

/// Manual conversion from serenity::Error to ClientError.
///
/// Boxes the error to keep `ClientError` small, as serenity::Error is very large.
impl From<serenity::Error> for ClientError {
    fn from(err: serenity::Error) -> Self {
        Self::Discord(Box::new(err))
    }
}
