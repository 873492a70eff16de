// cli.rs

use std::io::Write;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};

use crate::arguments::{ArgumentVector, CurrentProcess};
use crate::codec::ArgvCodec;
use crate::config::Config;
use crate::dialect::DialectKind;
use crate::logging;
use crate::repl;
use crate::util::{write_arguments, writeln_ignore_broken_pipe};

#[derive(Parser, Debug)]
#[command(
    name = "argv-codec",
    version,
    about = "Encode and decode command lines for cmd.exe, Win32 and POSIX shells"
)]
pub struct Cli {
    /// Quoting grammar to use [default: cmd on Windows, posix elsewhere]
    #[arg(short, long, global = true, value_enum, env = "ARGV_CODEC_DIALECT")]
    pub dialect: Option<DialectKind>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Print the command line that reproduces ARGS
    Encode {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Split LINE into arguments, one per line
    Decode {
        line: String,
        /// Also print the program path as argument 0
        #[arg(long)]
        show_program_path: bool,
    },
    /// Encode ARGS, decode the result and fail if anything changed
    Roundtrip {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Interactive session (default)
    Repl,
}

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let stdout = std::io::stdout();
    execute(cli, &mut stdout.lock())
}

pub fn execute<W: Write>(cli: Cli, out: &mut W) -> anyhow::Result<()> {
    let config = Config::from_cli(&cli);
    logging::init_tracing(config.verbose);
    let codec = ArgvCodec::new(config.dialect);
    tracing::debug!(dialect = %config.dialect, "starting");

    match cli.command.unwrap_or(Commands::Repl) {
        Commands::Encode { args } => {
            writeln_ignore_broken_pipe(out, codec.encode(&args)).context("writing encoded line")?;
        }
        Commands::Decode { line, show_program_path } => {
            let written = if show_program_path {
                let vector = ArgumentVector::decode(&line, &codec, &CurrentProcess)?;
                write_arguments(out, vector.iter(), 0)
            } else {
                write_arguments(out, codec.decode(&line), 1)
            };
            written.context("writing decoded arguments")?;
        }
        Commands::Roundtrip { args } => {
            let line = codec.encode(&args);
            writeln_ignore_broken_pipe(out, &line).context("writing encoded line")?;
            let decoded = codec.decode(&line);
            if decoded != args {
                bail!(
                    "round trip through {} changed the arguments: {:?} became {:?}",
                    codec.kind(),
                    args,
                    decoded
                );
            }
            writeln_ignore_broken_pipe(out, format!("ok: {} argument(s)", args.len()))
                .context("writing result")?;
        }
        Commands::Repl => repl::start_repl(&config)?,
    }
    Ok(())
}
