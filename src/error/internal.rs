use thiserror::Error;

/// Internal issues indicating host misuse or a bug in the provider.
#[derive(Error, Debug)]
pub enum InternalError {
    /// The host handed a handler provider data that is not a Discord client handle.
    #[error(
        "Expected a Discord client handle, got provider data of another type. \
         Please report this issue to the provider developers."
    )]
    UnexpectedProviderData,

    /// A remote operation was invoked on a handler that never received a client.
    #[error(
        "The provider has not been configured with a Discord client. \
         Please report this issue to the provider developers."
    )]
    NotConfigured,
}
