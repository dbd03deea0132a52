use thiserror::Error;

/// Result type returned from functions that can have our `Error`s.
pub type Result<T, E = BrightSyncError> = std::result::Result<T, E>;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum BrightSyncError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Notify(#[from] notify::Error),

    #[error("could not parse brightness value: {0}")]
    ParseBrightness(#[from] std::num::ParseFloatError),

    #[error("display command `{tool}` failed: {status}")]
    DisplayCommand {
        tool: String,
        status: std::process::ExitStatus,
    },

    #[error("brightness file watch ended unexpectedly")]
    WatchEnded,

    #[error("{0}")]
    Other(String),
}
