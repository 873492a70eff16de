// arguments.rs

use std::ops::Index;

use crate::codec::ArgvCodec;
use crate::error::{ArgvError, Result};

/// Supplies the value stored in slot 0 of a decoded [`ArgumentVector`].
pub trait ProcessPathProvider {
    fn process_path(&self) -> Result<String>;
}

/// The path of the running executable.
#[derive(Clone, Copy, Debug, Default)]
pub struct CurrentProcess;

impl ProcessPathProvider for CurrentProcess {
    fn process_path(&self) -> Result<String> {
        let path = std::env::current_exe().map_err(ArgvError::ProcessPath)?;
        Ok(path.to_string_lossy().into_owned())
    }
}

#[derive(Clone, Debug)]
pub struct FixedPath(pub String);

impl ProcessPathProvider for FixedPath {
    fn process_path(&self) -> Result<String> {
        Ok(self.0.clone())
    }
}

/// Ordered argument list. Slot 0 holds the program path and is carried
/// through encode and decode untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArgumentVector {
    args: Vec<String>,
}

impl ArgumentVector {
    pub fn new(program_path: impl Into<String>) -> Self {
        Self { args: vec![program_path.into()] }
    }

    /// Builds a vector from a full argv, program path first. An empty
    /// iterator yields an empty program path.
    pub fn from_argv<I, S>(argv: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut args: Vec<String> = argv.into_iter().map(Into::into).collect();
        if args.is_empty() {
            args.push(String::new());
        }
        Self { args }
    }

    /// Decodes `line` and puts the provider's path in slot 0.
    pub fn decode(
        line: &str,
        codec: &ArgvCodec,
        provider: &dyn ProcessPathProvider,
    ) -> Result<Self> {
        let mut vector = Self::new(provider.process_path()?);
        vector.args.extend(codec.decode(line));
        Ok(vector)
    }

    /// Encodes every argument after the program path.
    pub fn encode(&self, codec: &ArgvCodec) -> String {
        codec.encode(self.arguments())
    }

    pub fn program_path(&self) -> &str {
        &self.args[0]
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.args.get(index).map(String::as_str)
    }

    pub fn push(&mut self, arg: impl Into<String>) {
        self.args.push(arg.into());
    }

    /// Count including the program path, like C's `argc`.
    pub fn argc(&self) -> usize {
        self.args.len()
    }

    /// Everything after the program path.
    pub fn arguments(&self) -> &[String] {
        &self.args[1..]
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.args.iter().map(String::as_str)
    }
}

impl Index<usize> for ArgumentVector {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        &self.args[index]
    }
}
