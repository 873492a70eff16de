// util.rs

use std::io::{self, Write};

pub fn writeln_ignore_broken_pipe<W: Write, S: AsRef<str>>(w: &mut W, s: S) -> io::Result<()> {
    match writeln!(w, "{}", s.as_ref()) {
        Err(ref e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}

/// Prints one argument per line as `[index] text`, numbering from
/// `first_index`. The index keeps empty arguments visible.
pub fn write_arguments<W, I, S>(w: &mut W, args: I, first_index: usize) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for (offset, arg) in args.into_iter().enumerate() {
        writeln_ignore_broken_pipe(w, format!("[{}] {}", first_index + offset, arg.as_ref()))?;
    }
    Ok(())
}
