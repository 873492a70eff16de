// dialect.rs

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;

use crate::error::ArgvError;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, ValueEnum)]
pub enum DialectKind {
    /// `cmd.exe` in front of the Win32 argument grammar.
    #[value(name = "cmd", alias = "cmd.exe", alias = "windows-cmd")]
    WindowsCmd,
    /// The bare Win32 process-creation argument grammar.
    #[value(name = "create-process", alias = "createprocess", alias = "win32")]
    WindowsCreateProcess,
    /// A POSIX `sh` compatible terminal.
    #[value(name = "posix", alias = "sh", alias = "terminal")]
    PosixShell,
}

impl DialectKind {
    pub const ALL: [DialectKind; 3] = [
        DialectKind::WindowsCmd,
        DialectKind::WindowsCreateProcess,
        DialectKind::PosixShell,
    ];

    /// The dialect a command line typed on this host would use.
    pub fn native() -> Self {
        if cfg!(windows) {
            DialectKind::WindowsCmd
        } else {
            DialectKind::PosixShell
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            DialectKind::WindowsCmd => "cmd",
            DialectKind::WindowsCreateProcess => "create-process",
            DialectKind::PosixShell => "posix",
        }
    }

    pub fn dialect(self) -> &'static Dialect {
        match self {
            DialectKind::WindowsCmd => &Dialect::WINDOWS_CMD,
            DialectKind::WindowsCreateProcess => &Dialect::WINDOWS_CREATE_PROCESS,
            DialectKind::PosixShell => &Dialect::POSIX_SHELL,
        }
    }
}

impl fmt::Display for DialectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DialectKind {
    type Err = ArgvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Same names and aliases as `--dialect`.
        <DialectKind as ValueEnum>::from_str(s.trim(), true)
            .map_err(|_| ArgvError::UnknownDialect(s.to_string()))
    }
}

/// Quoting grammar of one target shell or API.
#[derive(Debug, PartialEq, Eq)]
pub struct Dialect {
    pub kind: DialectKind,
    pub quote_chars: &'static [char],
    pub escape_char: char,
    pub shell_metacharacters: &'static [char],
    pub supports_caret_string: bool,
    pub supports_backslash_doubling_before_quote: bool,
}

impl Dialect {
    pub const WINDOWS_CMD: Dialect = Dialect {
        kind: DialectKind::WindowsCmd,
        quote_chars: &['"'],
        escape_char: '^',
        shell_metacharacters: &['&', '|', '<', '>'],
        supports_caret_string: true,
        supports_backslash_doubling_before_quote: true,
    };

    pub const WINDOWS_CREATE_PROCESS: Dialect = Dialect {
        kind: DialectKind::WindowsCreateProcess,
        quote_chars: &['"'],
        escape_char: '\\',
        shell_metacharacters: &[],
        supports_caret_string: false,
        supports_backslash_doubling_before_quote: true,
    };

    pub const POSIX_SHELL: Dialect = Dialect {
        kind: DialectKind::PosixShell,
        quote_chars: &['"', '\''],
        escape_char: '\\',
        shell_metacharacters: &['&', '|', '<', '>', '(', ')', '*', '$', '`'],
        supports_caret_string: false,
        supports_backslash_doubling_before_quote: false,
    };

    /// Metacharacters counted when deciding whether a POSIX argument is quoted.
    pub const POSIX_BASIC_METACHARACTERS: &'static [char] = &['&', '|', '(', ')', '<', '>', '*'];

    /// Substitution triggers, live outside quotes and inside double quotes.
    pub const POSIX_SUBSTITUTION_CHARACTERS: &'static [char] = &['$', '`'];

    /// Characters that only mean something to a POSIX shell when unquoted.
    pub const POSIX_UNQUOTED_SPECIALS: &'static [char] =
        &[';', '?', '[', ']', '#', '~', '!', '{', '}'];

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn is_quote(&self, c: char) -> bool {
        self.quote_chars.contains(&c)
    }

    pub fn is_shell_metacharacter(&self, c: char) -> bool {
        self.shell_metacharacters.contains(&c)
    }

    /// Whether the Win32 backslash/quote parity rules govern this dialect.
    pub fn is_windows(&self) -> bool {
        self.supports_backslash_doubling_before_quote
    }
}
