// error.rs

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArgvError {
    #[error("unknown dialect: {0} (expected one of: cmd, create-process, posix)")]
    UnknownDialect(String),

    #[error("cannot determine the current process path: {0}")]
    ProcessPath(#[source] std::io::Error),

    #[error("readline error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ArgvError>;
