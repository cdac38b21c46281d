use std::num::NonZeroU64;

use discord_api::{ChannelId, GuildId};

use crate::error::ProviderError;

/// Parses a Discord snowflake from its decimal string form.
///
/// # Arguments
/// - `attribute` - Name of the attribute holding the value, used in the error
/// - `value` - The string to parse
///
/// # Returns
/// - `Ok(NonZeroU64)` - Successfully parsed snowflake
/// - `Err(ProviderError::InvalidId)` - Empty, non-numeric, zero, or out of range
pub fn parse_snowflake(attribute: &'static str, value: &str) -> Result<NonZeroU64, ProviderError> {
    // `str::parse` accepts a leading `+`; only plain decimal digits are valid IDs
    if !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ProviderError::InvalidId {
            attribute,
            value: value.to_string(),
            source: None,
        });
    }

    value
        .parse::<NonZeroU64>()
        .map_err(|e| ProviderError::InvalidId {
            attribute,
            value: value.to_string(),
            source: Some(e),
        })
}

pub fn parse_guild_id(attribute: &'static str, value: &str) -> Result<GuildId, ProviderError> {
    Ok(GuildId::new(parse_snowflake(attribute, value)?.get()))
}

pub fn parse_channel_id(attribute: &'static str, value: &str) -> Result<ChannelId, ProviderError> {
    Ok(ChannelId::new(parse_snowflake(attribute, value)?.get()))
}
