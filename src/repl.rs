// repl.rs

use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{CompletionType, Editor};

use crate::builtins::{Flow, Session};
use crate::completion::ReplHelper;
use crate::config::Config;
use crate::error::Result;

pub fn start_repl(config: &Config) -> Result<()> {
    let rl_config = rustyline::Config::builder()
        .completion_type(CompletionType::List)
        .auto_add_history(false)
        .build();
    let mut rl: Editor<ReplHelper, DefaultHistory> = Editor::with_config(rl_config)?;
    rl.set_helper(Some(ReplHelper::new()));

    if let Some(path) = &config.history_file {
        if let Err(e) = rl.load_history(path) {
            tracing::debug!(path = %path.display(), error = %e, "no history loaded");
        }
    }

    let mut session = Session::new(config.dialect);
    let stdout = std::io::stdout();
    loop {
        match rl.readline(&session.prompt()) {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(line.as_str());
                if session.execute(&line, &mut stdout.lock())? == Flow::Quit {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        }
    }

    if let Some(path) = &config.history_file {
        if let Err(e) = rl.save_history(path) {
            tracing::warn!(path = %path.display(), error = %e, "cannot write history");
        }
    }
    Ok(())
}
