use thiserror::Error;

/// Problems with how a command was invoked.
///
/// These are the only errors whose message is sent back to the invoking user.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    /// A required positional argument was not supplied.
    #[error("Missing required argument `{0}`.")]
    MissingArgument(&'static str),

    /// An argument could not be parsed as a number.
    #[error("`{0}` is not a valid number.")]
    InvalidNumber(String),

    /// The named module does not exist.
    #[error("There is no module named `{0}`.")]
    UnknownModule(String),

    /// The named module cannot be enabled or disabled.
    #[error("The `{0}` module cannot be toggled.")]
    ModuleNotToggleable(&'static str),
}
