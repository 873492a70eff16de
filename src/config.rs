// config.rs

use std::path::PathBuf;

use crate::cli::Cli;
use crate::dialect::DialectKind;

pub const DIALECT_ENV: &str = "ARGV_CODEC_DIALECT";
pub const LOG_ENV: &str = "ARGV_CODEC_LOG";
pub const HISTORY_ENV: &str = "HISTFILE";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub dialect: DialectKind,
    pub history_file: Option<PathBuf>,
    pub verbose: bool,
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Self {
        let history_file = std::env::var_os(HISTORY_ENV)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);
        Self {
            dialect: cli.dialect.unwrap_or_else(DialectKind::native),
            history_file,
            verbose: cli.verbose,
        }
    }
}
