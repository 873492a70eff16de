// completion.rs

use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::{ValidationContext, ValidationResult, Validator};
use rustyline::{Context, Helper};

use crate::builtins::BUILTINS;
use crate::dialect::DialectKind;

/// Completes `:` builtins and the dialect names after `:dialect`.
#[derive(Default)]
pub struct ReplHelper;

impl ReplHelper {
    pub fn new() -> Self {
        Self
    }

    pub fn candidates(&self, line: &str, pos: usize) -> (usize, Vec<Pair>) {
        let prefix = &line[..pos];
        if let Some(rest) = prefix.strip_prefix(":dialect ") {
            let word = rest.trim_start();
            let pairs = DialectKind::ALL
                .iter()
                .map(|kind| kind.name())
                .filter(|name| name.starts_with(word))
                .map(|name| Pair {
                    display: name.to_string(),
                    replacement: name.to_string(),
                })
                .collect();
            return (pos - word.len(), pairs);
        }
        if prefix.starts_with(':') && !prefix.contains(char::is_whitespace) {
            let mut names: Vec<&str> = BUILTINS
                .iter()
                .copied()
                .filter(|b| b.starts_with(prefix))
                .collect();
            names.sort_unstable();
            let pairs = names
                .into_iter()
                .map(|n| Pair {
                    display: n.to_string(),
                    replacement: format!("{} ", n),
                })
                .collect();
            return (0, pairs);
        }
        (pos, Vec::new())
    }
}

impl Completer for ReplHelper {
    type Candidate = Pair;
    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> Result<(usize, Vec<Pair>), ReadlineError> {
        Ok(self.candidates(line, pos))
    }
}

impl Hinter for ReplHelper {
    type Hint = String;
    fn hint(&self, _line: &str, _pos: usize, _ctx: &Context<'_>) -> Option<String> {
        None
    }
}

impl Highlighter for ReplHelper {}

impl Validator for ReplHelper {
    fn validate(&self, _ctx: &mut ValidationContext) -> Result<ValidationResult, ReadlineError> {
        Ok(ValidationResult::Valid(None))
    }
}

impl Helper for ReplHelper {}
