//! Subcommand drivers, generic over their input/output streams.

use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::Context;

use pantry_wordtally::{mode, tally_file};

use crate::command::SessionCommand;
use crate::render::render;
use crate::session::{Outcome, Session};

/// Print the most frequent word in `path`. An unreadable file is fatal.
pub fn tally<W: Write>(path: &Path, out: &mut W) -> anyhow::Result<()> {
    let counts = tally_file(path).context("word tally aborted")?;

    match mode(&counts) {
        Some((word, count)) => writeln!(out, "{word} {count}")?,
        None => writeln!(out, "no words found in {}", path.display())?,
    }
    Ok(())
}

/// Drive `session` from `input` one line at a time until EOF or `quit`.
///
/// Parse and domain errors are reported inline and the session continues.
pub fn shop<R: BufRead, W: Write>(
    session: &mut Session,
    input: R,
    out: &mut W,
) -> anyhow::Result<()> {
    for line in input.lines() {
        let line = line.context("failed to read session input")?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<SessionCommand>() {
            Ok(command) => command,
            Err(e) => {
                writeln!(out, "error: {e}")?;
                continue;
            }
        };

        match session.execute(command) {
            Ok(Outcome::Quit) => {
                writeln!(out, "{}", render(&Outcome::Quit))?;
                break;
            }
            Ok(outcome) => writeln!(out, "{}", render(&outcome))?,
            Err(e) => {
                tracing::debug!(error = %e, "command rejected");
                writeln!(out, "error: {e}")?;
            }
        }
    }
    out.flush()?;
    Ok(())
}
