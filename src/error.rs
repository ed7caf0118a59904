use thiserror::Error;

/// Failure conditions of the stopwatch API.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    /// The watch is not running: never started, or stopped and not restarted.
    #[error("stopwatch must be started")]
    NotStarted,
}

pub type Result<T> = std::result::Result<T, Error>;
