// decoder.rs
//
// One lexer serves every dialect. Windows dialects run the Win32
// backslash/quote parity rules; `cmd.exe` additionally strips caret escapes
// before those rules see the text. POSIX runs the sh quoting rules.

use std::iter::Peekable;
use std::str::Chars;

use crate::charclass::{is_separator, push_backslashes};
use crate::dialect::Dialect;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Mode {
    Plain,
    // Also entered through `^"`: past the caret pass the Win32 rules cannot
    // tell the two openings apart.
    InDoubleQuoteString,
    InSingleQuoteString,
}

/// The `cmd.exe` pass, yielding characters as the process-creation grammar
/// sees them. `cmd.exe` flips its own quote state on every quote it
/// does not see escaped, backslash or not, and honors `^` only while that
/// state is off.
struct CaretLayer<'a> {
    chars: Chars<'a>,
    escape_char: Option<char>,
    quoted: bool,
}

impl<'a> CaretLayer<'a> {
    fn new(line: &'a str, dialect: &Dialect) -> Self {
        Self {
            chars: line.chars(),
            escape_char: dialect.supports_caret_string.then_some(dialect.escape_char),
            quoted: false,
        }
    }
}

impl Iterator for CaretLayer<'_> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        let ch = self.chars.next()?;
        if !self.quoted && Some(ch) == self.escape_char {
            // A trailing caret escapes nothing and vanishes.
            return self.chars.next();
        }
        if ch == '"' {
            self.quoted = !self.quoted;
        }
        Some(ch)
    }
}

/// Parse state for a single decode call.
#[derive(Debug)]
struct LexState {
    mode: Mode,
    accumulator: String,
    pending_backslash_count: usize,
    // Whether the argument under construction holds a quoted segment. An
    // argument made only of empty quoted segments still counts.
    quoted_segment: bool,
    args: Vec<String>,
}

impl LexState {
    fn new() -> Self {
        Self {
            mode: Mode::Plain,
            accumulator: String::new(),
            pending_backslash_count: 0,
            quoted_segment: false,
            args: Vec::new(),
        }
    }

    fn in_string(&self) -> bool {
        self.mode != Mode::Plain
    }

    fn push(&mut self, c: char) {
        self.accumulator.push(c);
    }

    /// Backslashes not followed by a quote are literal.
    fn flush_backslashes(&mut self) {
        let run = std::mem::take(&mut self.pending_backslash_count);
        push_backslashes(&mut self.accumulator, run);
    }

    fn open_string(&mut self, mode: Mode) {
        self.mode = mode;
        self.quoted_segment = true;
    }

    fn close_string(&mut self) {
        self.mode = Mode::Plain;
    }

    fn finish_argument(&mut self) {
        if !self.accumulator.is_empty() || self.quoted_segment {
            self.args.push(std::mem::take(&mut self.accumulator));
        }
        self.quoted_segment = false;
    }

    fn finish(mut self) -> Vec<String> {
        self.flush_backslashes();
        if self.in_string() {
            tracing::trace!(mode = ?self.mode, "unterminated string at end of input");
        }
        self.finish_argument();
        self.args
    }
}

/// Splits `line` into arguments following `dialect`'s grammar.
///
/// The line must not contain the program path; that slot belongs to the
/// caller. Decoding never fails: unterminated strings and stray escapes
/// degrade the same way the host shell degrades them.
pub fn decode(line: &str, dialect: &Dialect) -> Vec<String> {
    let args = if dialect.is_windows() {
        decode_windows(line, dialect)
    } else {
        decode_posix(line, dialect)
    };
    tracing::trace!(dialect = dialect.name(), count = args.len(), "decoded command line");
    args
}

fn decode_windows(line: &str, dialect: &Dialect) -> Vec<String> {
    let mut state = LexState::new();
    let mut input: Peekable<CaretLayer<'_>> = CaretLayer::new(line, dialect).peekable();

    while let Some(ch) = input.next() {
        match ch {
            '\\' => state.pending_backslash_count += 1,
            '"' => {
                let run = std::mem::take(&mut state.pending_backslash_count);
                push_backslashes(&mut state.accumulator, run / 2);
                if run % 2 == 1 {
                    state.push('"');
                    continue;
                }
                if !state.in_string() {
                    state.open_string(Mode::InDoubleQuoteString);
                } else if input.peek() == Some(&'"') {
                    input.next();
                    state.push('"');
                } else {
                    state.close_string();
                }
            }
            c if !state.in_string() && is_separator(c) => {
                state.flush_backslashes();
                state.finish_argument();
            }
            c => {
                state.flush_backslashes();
                state.push(c);
            }
        }
    }

    state.finish()
}

fn decode_posix(line: &str, dialect: &Dialect) -> Vec<String> {
    let mut state = LexState::new();
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match state.mode {
            Mode::InSingleQuoteString => match ch {
                '\'' => state.close_string(),
                _ => state.push(ch),
            },
            Mode::InDoubleQuoteString => match ch {
                '"' => state.close_string(),
                '\\' => match chars.peek() {
                    Some(&next) if matches!(next, '"' | '\\' | '$' | '`') => {
                        state.push(next);
                        chars.next();
                    }
                    _ => state.push('\\'),
                },
                _ => state.push(ch),
            },
            Mode::Plain => match ch {
                c if c == dialect.escape_char => {
                    // A lone trailing backslash has nothing to escape.
                    let escaped = chars.next().unwrap_or(c);
                    state.push(escaped);
                }
                '\'' if dialect.is_quote('\'') => state.open_string(Mode::InSingleQuoteString),
                '"' => state.open_string(Mode::InDoubleQuoteString),
                c if is_separator(c) => state.finish_argument(),
                _ => state.push(ch),
            },
        }
    }

    state.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn cmd(line: &str) -> Vec<String> {
        decode(line, &Dialect::WINDOWS_CMD)
    }

    fn win32(line: &str) -> Vec<String> {
        decode(line, &Dialect::WINDOWS_CREATE_PROCESS)
    }

    fn posix(line: &str) -> Vec<String> {
        decode(line, &Dialect::POSIX_SHELL)
    }

    #[test]
    fn separators_collapse() {
        assert_eq!(cmd("  a \t b  "), vec!["a", "b"]);
        assert_eq!(posix("a   b"), vec!["a", "b"]);
        assert!(cmd("").is_empty());
        assert!(posix(" \t ").is_empty());
    }

    #[test]
    fn empty_quotes_next_to_separators_make_an_argument() {
        assert_eq!(cmd(r#""""#), vec![""]);
        assert_eq!(cmd(r#"a "" b"#), vec!["a", "", "b"]);
        assert_eq!(posix("'' \"\""), vec!["", ""]);
    }

    #[test]
    fn empty_quotes_inside_text_vanish() {
        assert_eq!(cmd(r#"a""b"#), vec!["ab"]);
        assert_eq!(cmd(r#"""b"#), vec!["b"]);
        assert_eq!(posix("a''b"), vec!["ab"]);
    }

    #[test]
    fn backslash_parity_before_quote() {
        assert_eq!(win32(r#"a\"b"#), vec![r#"a"b"#]);
        assert_eq!(win32(r#""a\\" b"#), vec![r"a\", "b"]);
        assert_eq!(win32(r#"\\\"x"#), vec![r#"\"x"#]);
        assert_eq!(win32(r"a\\b\"), vec![r"a\\b\"]);
    }

    #[test]
    fn doubled_quote_inside_string_is_literal() {
        assert_eq!(win32(r#""a""b""#), vec![r#"a"b"#]);
        assert_eq!(win32(r#""""""#), vec![r#"""#]);
    }

    #[test]
    fn juxtaposed_strings_join() {
        assert_eq!(win32(r#""a b"c"#), vec!["a bc"]);
        assert_eq!(cmd(r#"^"a^"x^"b c^""#), vec!["axb c"]);
        assert_eq!(posix(r#"'a b'"c d"e"#), vec!["a bc de"]);
    }

    #[test]
    fn carets_escape_outside_quotes_only() {
        assert_eq!(cmd("test^&whoami"), vec!["test&whoami"]);
        assert_eq!(cmd("a^^b"), vec!["a^b"]);
        assert_eq!(cmd("a^b^"), vec!["ab"]);
        assert_eq!(cmd(r#""a^b""#), vec!["a^b"]);
    }

    #[test]
    fn caret_string_wraps_separators() {
        assert_eq!(cmd(r#"^"a b^""#), vec!["a b"]);
        assert_eq!(cmd(r#"^"^" x"#), vec!["", "x"]);
    }

    #[test]
    fn caret_opened_string_closes_like_a_plain_one() {
        assert_eq!(cmd(r#"^"a b" c"#), cmd(r#""a b" c"#));
        assert_eq!(cmd(r#"^"a b" c"#), vec!["a b", "c"]);
        assert_eq!(cmd(r#"x^"""y^" z"#), vec![r#"x"y"#, "z"]);
    }

    #[test]
    fn carets_inside_backslash_runs_are_dropped() {
        assert_eq!(cmd(r#"^\^\^\\"a b""#), vec![r"\\a b"]);
        assert_eq!(cmd(r#"\^"x"#), vec![r#""x"#]);
    }

    #[test]
    fn create_process_keeps_carets() {
        assert_eq!(win32("a^b ^&"), vec!["a^b", "^&"]);
    }

    #[test]
    fn unterminated_string_keeps_its_text() {
        assert_eq!(cmd(r#"a "b c"#), vec!["a", "b c"]);
        assert_eq!(win32(r#"a ""#), vec!["a", ""]);
        assert_eq!(posix("'abc"), vec!["abc"]);
    }

    #[test]
    fn posix_backslash_outside_strings() {
        assert_eq!(posix(r"a\ b \\ \'"), vec!["a b", "\\", "'"]);
        assert_eq!(posix(r"a\&b"), vec!["a&b"]);
        assert_eq!(posix(r"trailing\"), vec![r"trailing\"]);
    }

    #[test]
    fn posix_backslash_inside_double_quotes() {
        assert_eq!(posix(r#""a\"b\\c\$d\`e""#), vec![r#"a"b\c$d`e"#]);
        assert_eq!(posix(r#""\n\'""#), vec![r"\n\'"]);
    }

    #[test]
    fn posix_single_quotes_are_literal() {
        assert_eq!(posix(r#"'a\b"c'"#), vec![r#"a\b"c"#]);
        assert_eq!(posix(r"'it'\''s'"), vec!["it's"]);
    }
}
