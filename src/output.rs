//! Output formatting for lookup results and word lists

use crate::index::types::LookupResult;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Print a lookup hit: a `word (count)` headline, then each context line
pub fn print_lookup(result: &LookupResult) -> io::Result<()> {
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);

    stdout.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)).set_bold(true))?;
    write!(stdout, "{}", result.word)?;
    stdout.reset()?;
    write!(stdout, " (")?;
    stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
    write!(stdout, "{}", result.count)?;
    stdout.reset()?;
    writeln!(stdout, ")")?;

    for line in &result.contexts {
        writeln!(stdout, "{}", line)?;
    }
    writeln!(stdout)?;

    Ok(())
}

/// Report a miss without aborting the session
pub fn print_not_found(word: &str) -> io::Result<()> {
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);

    write!(stdout, "The word ")?;
    stdout.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
    write!(stdout, "{:?}", word)?;
    stdout.reset()?;
    writeln!(stdout, " was not found.")?;
    writeln!(stdout)?;

    Ok(())
}

/// Print a ranked word list in `count word` form
pub fn print_top(ranked: &[(&str, u32)]) -> io::Result<()> {
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);

    for (word, count) in ranked {
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        write!(stdout, "{}", count)?;
        stdout.reset()?;
        writeln!(stdout, " {}", word)?;
    }

    Ok(())
}
