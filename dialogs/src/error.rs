use thiserror::Error;

/// Errors that can occur when using dialogs.
///
/// User cancellation is not an error; every dialog reports it as `Ok(None)`.
#[derive(Error, Debug)]
pub enum DialogError {
    /// A dialog was invoked before the one-time initialization.
    #[error("dialogs used before init()")]
    NotInitialized,

    /// The request combined mode options that cannot be satisfied.
    #[error("invalid picker mode: {0}")]
    InvalidMode(String),

    /// An error occurred in the underlying platform implementation.
    #[error("platform error: {0}")]
    PlatformError(String),

    /// An IO error occurred (e.g. while staging a saver placeholder).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The requested dialog has no surface on this platform.
    #[error("not supported: {0}")]
    NotSupported(String),
}
