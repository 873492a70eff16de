// lib.rs

pub mod arguments;
pub mod builtins;
pub mod charclass;
pub mod cli;
pub mod codec;
pub mod completion;
pub mod config;
pub mod decoder;
pub mod dialect;
pub mod encoder;
pub mod error;
pub mod logging;
pub mod repl;
pub mod util;

pub use arguments::{ArgumentVector, CurrentProcess, FixedPath, ProcessPathProvider};
pub use codec::ArgvCodec;
pub use decoder::decode;
pub use dialect::{Dialect, DialectKind};
pub use encoder::{encode, encode_argument};
pub use error::{ArgvError, Result};
