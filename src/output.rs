//! Output formatting for word lookup results

use crate::query::QueryResult;
use std::io::{self, IsTerminal, Write};
use termcolor::{Color, ColorChoice, ColorSpec, WriteColor};

/// Pick the effective color choice for stdout.
///
/// `Auto` degrades to `Never` when stdout is not a terminal, so piped
/// output carries no escape sequences.
pub fn stdout_color(requested: ColorChoice) -> ColorChoice {
    match requested {
        ColorChoice::Auto if !io::stdout().is_terminal() => ColorChoice::Never,
        other => other,
    }
}

/// Write one lookup result.
///
/// Header first: `<word> occurs <count> time(s)`, singular only for a
/// count of exactly one. Then one entry per matching line in ascending
/// order, tab-indented, with the line number reported 1-based:
/// `\t(line <n>) <original text>`. Zero matches still print the header,
/// followed by nothing.
pub fn write_result<W: WriteColor>(out: &mut W, result: &QueryResult) -> io::Result<()> {
    let count = result.count();
    let noun = if count == 1 { "time" } else { "times" };

    out.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)).set_bold(true))?;
    write!(out, "{}", result.word())?;
    out.reset()?;
    writeln!(out, " occurs {} {}", count, noun)?;

    for (n, text) in result.occurrences() {
        write!(out, "\t(line ")?;
        out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        write!(out, "{}", n + 1)?;
        out.reset()?;
        writeln!(out, ") {}", text)?;
    }

    Ok(())
}
