// codec.rs

use crate::decoder;
use crate::dialect::{Dialect, DialectKind};
use crate::encoder;

/// Encoder and decoder bound to one dialect.
#[derive(Clone, Copy, Debug)]
pub struct ArgvCodec {
    dialect: &'static Dialect,
}

impl ArgvCodec {
    pub fn new(kind: DialectKind) -> Self {
        Self { dialect: kind.dialect() }
    }

    pub fn native() -> Self {
        Self::new(DialectKind::native())
    }

    pub fn dialect(&self) -> &'static Dialect {
        self.dialect
    }

    pub fn kind(&self) -> DialectKind {
        self.dialect.kind
    }

    pub fn encode<S: AsRef<str>>(&self, args: &[S]) -> String {
        encoder::encode(args, self.dialect)
    }

    pub fn decode(&self, line: &str) -> Vec<String> {
        decoder::decode(line, self.dialect)
    }
}

impl Default for ArgvCodec {
    fn default() -> Self {
        Self::native()
    }
}

impl From<DialectKind> for ArgvCodec {
    fn from(kind: DialectKind) -> Self {
        Self::new(kind)
    }
}
