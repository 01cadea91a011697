use std::io;

use thiserror::Error;

/// Failures at the process boundary. Gameplay itself has no error path.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("could not install logger: {0}")]
    Logger(#[from] log::SetLoggerError),

    #[error("could not encode trace: {0}")]
    Trace(#[from] serde_json::Error),

    #[error("invalid script character {0:?}; expected one of u, d, l, r, .")]
    InvalidScript(char),
}
