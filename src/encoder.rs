// encoder.rs

use itertools::Itertools;

use crate::charclass::{
    contains_any, contains_separator, count_char, count_matching, push_backslashes,
    trailing_backslashes,
};
use crate::dialect::Dialect;

/// Joins `args` into one command line that `dialect` decodes back into
/// exactly `args`.
///
/// Every element is encoded, so callers holding a program path in slot 0
/// must skip it themselves.
pub fn encode<S: AsRef<str>>(args: &[S], dialect: &Dialect) -> String {
    let line = if dialect.is_windows() {
        let line = args
            .iter()
            .map(|arg| quote_win32(arg.as_ref(), dialect))
            .join(" ");
        if dialect.supports_caret_string {
            escape_cmd(&line, dialect)
        } else {
            line
        }
    } else {
        args.iter().map(|arg| quote_posix(arg.as_ref())).join(" ")
    };
    tracing::trace!(dialect = dialect.name(), count = args.len(), "encoded arguments");
    line
}

/// Encodes a single argument as if it stood alone on the line.
pub fn encode_argument(arg: &str, dialect: &Dialect) -> String {
    encode(&[arg], dialect)
}

/// Win32 argument quoting: backslashes only matter in front of a quote.
fn quote_win32(arg: &str, dialect: &Dialect) -> String {
    // Metacharacters next to a quote or backslash are cheaper to wrap than to
    // caret-escape.
    let needs_string_wrap = arg.is_empty()
        || contains_separator(arg)
        || (contains_any(arg, dialect.shell_metacharacters)
            && (arg.contains('"') || arg.contains('\\')));

    let mut out = String::with_capacity(arg.len() + 2);
    if needs_string_wrap {
        out.push('"');
    }
    let mut pending = 0usize;
    for c in arg.chars() {
        match c {
            '\\' => pending += 1,
            '"' => {
                push_backslashes(&mut out, pending * 2 + 1);
                out.push('"');
                pending = 0;
            }
            _ => {
                push_backslashes(&mut out, pending);
                out.push(c);
                pending = 0;
            }
        }
    }
    push_backslashes(&mut out, pending);
    if needs_string_wrap {
        // The closing quote must not read as escaped.
        let run = trailing_backslashes(&out);
        push_backslashes(&mut out, run);
        out.push('"');
    }
    out
}

/// The `cmd.exe` pass over a complete Win32 line. `cmd.exe` tracks its own
/// quote state across the whole line and toggles it on every quote, even one
/// the process-creation grammar treats as escaped. Outside that state
/// metacharacters and the caret itself get a caret.
fn escape_cmd(line: &str, dialect: &Dialect) -> String {
    let mut out = String::with_capacity(line.len());
    let mut quoted = false;
    for c in line.chars() {
        if c == '"' {
            quoted = !quoted;
        } else if !quoted && (c == dialect.escape_char || dialect.is_shell_metacharacter(c)) {
            out.push(dialect.escape_char);
        }
        out.push(c);
    }
    out
}

fn quote_posix(arg: &str) -> String {
    if arg.is_empty() {
        return "\"\"".to_string();
    }

    let needs_quote = contains_separator(arg)
        || count_matching(arg, Dialect::POSIX_BASIC_METACHARACTERS) >= 2;
    if !needs_quote {
        let mut out = String::with_capacity(arg.len() * 2);
        for c in arg.chars() {
            if matches!(c, '\\' | '\'' | '"')
                || Dialect::POSIX_BASIC_METACHARACTERS.contains(&c)
                || Dialect::POSIX_SUBSTITUTION_CHARACTERS.contains(&c)
                || Dialect::POSIX_UNQUOTED_SPECIALS.contains(&c)
            {
                out.push('\\');
            }
            out.push(c);
        }
        return out;
    }

    if count_char(arg, '"') > count_char(arg, '\'') {
        // Nothing escapes inside single quotes; a quote has to step outside.
        format!("'{}'", arg.replace('\'', r"'\''"))
    } else {
        let mut out = String::with_capacity(arg.len() + 2);
        out.push('"');
        for c in arg.chars() {
            if matches!(c, '"' | '\\') || Dialect::POSIX_SUBSTITUTION_CHARACTERS.contains(&c) {
                out.push('\\');
            }
            out.push(c);
        }
        out.push('"');
        out
    }
}
