// builtins.rs

use std::io::Write;

use crate::codec::ArgvCodec;
use crate::dialect::{Dialect, DialectKind};
use crate::error::Result;
use crate::util::{write_arguments, writeln_ignore_broken_pipe};

pub const BUILTINS: [&str; 5] = [":dialect", ":encode", ":help", ":quit", ":exit"];

const HELP: &str = "\
:dialect [NAME]   show or switch the dialect (cmd, create-process, posix)
:encode WORDS     split WORDS like sh, then encode them in the current dialect
:help             this text
:quit             leave
anything else     decoded in the current dialect, one argument per line";

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Flow {
    Continue,
    Quit,
}

/// State of one interactive session.
#[derive(Debug)]
pub struct Session {
    codec: ArgvCodec,
}

impl Session {
    pub fn new(kind: DialectKind) -> Self {
        Self { codec: ArgvCodec::new(kind) }
    }

    pub fn dialect(&self) -> DialectKind {
        self.codec.kind()
    }

    pub fn prompt(&self) -> String {
        format!("{}> ", self.codec.kind())
    }

    pub fn execute<W: Write>(&mut self, line: &str, out: &mut W) -> Result<Flow> {
        // Trimming only finds the command word; decoding sees the line as typed.
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(Flow::Continue);
        }
        let (command, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim_start()),
            None => (trimmed, ""),
        };

        match command {
            ":quit" | ":exit" => return Ok(Flow::Quit),
            ":help" => writeln_ignore_broken_pipe(out, HELP)?,
            ":dialect" if rest.is_empty() => {
                writeln_ignore_broken_pipe(out, self.codec.kind().name())?;
            }
            ":dialect" => match rest.parse::<DialectKind>() {
                Ok(kind) => {
                    tracing::debug!(from = %self.codec.kind(), to = %kind, "switching dialect");
                    self.codec = ArgvCodec::new(kind);
                }
                Err(e) => writeln_ignore_broken_pipe(out, e.to_string())?,
            },
            ":encode" => {
                let words = crate::decoder::decode(
                    &line.trim_start()[command.len()..],
                    &Dialect::POSIX_SHELL,
                );
                writeln_ignore_broken_pipe(out, self.codec.encode(&words))?;
            }
            c if c.starts_with(':') => {
                writeln_ignore_broken_pipe(out, format!("{c}: unknown command, try :help"))?;
            }
            _ => write_arguments(out, self.codec.decode(line), 1)?,
        }
        Ok(Flow::Continue)
    }
}
