//! Interactive lookup loop.
//!
//! Prompts on stdout, reads one whitespace-delimited token per input
//! line, and reports each lookup through [`crate::output`]. The exact
//! token `q`, end of input, or a failed read ends the session.

use crate::index::Index;
use crate::output;
use crate::query::QueryEngine;
use anyhow::Result;
use std::io::{self, BufRead, Write};
use termcolor::{ColorChoice, StandardStream, WriteColor};

const PROMPT: &str = "enter word to look for, or q to quit: ";
const QUIT: &str = "q";

/// Run the interactive loop on stdin/stdout until quit or end of input.
pub fn run(index: &Index, color: ColorChoice) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = StandardStream::stdout(color);
    run_loop(index, stdin.lock(), &mut stdout)?;
    Ok(())
}

/// Drive one session against an already-built index.
///
/// A line with no token just prompts again; extra tokens after the
/// first are ignored. Read failures count as end of input, not errors.
/// Every report is followed by one blank line.
fn run_loop<R: BufRead, W: WriteColor>(index: &Index, mut input: R, out: &mut W) -> io::Result<()> {
    let engine = QueryEngine::new(index);
    let mut line = String::new();

    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        line.clear();
        match input.read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }

        let Some(word) = line.split_whitespace().next() else {
            continue;
        };
        if word == QUIT {
            break;
        }

        let result = engine.lookup(word);
        output::write_result(out, &result)?;
        writeln!(out)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::build_from_reader;
    use std::io::Cursor;
    use termcolor::NoColor;

    const FIXTURE: &str = "the quick fox\nthe lazy fox\nthe end\n";

    fn session(input: &str) -> String {
        let index = build_from_reader(Cursor::new(FIXTURE));
        let mut out = NoColor::new(Vec::new());
        run_loop(&index, Cursor::new(input), &mut out).unwrap();
        String::from_utf8(out.into_inner()).unwrap()
    }

    #[test]
    fn test_session_transcript() {
        let expected = format!(
            "{}the occurs 3 times\n\
             \t(line 1) the quick fox\n\
             \t(line 2) the lazy fox\n\
             \t(line 3) the end\n\
             \n\
             {}zzz occurs 0 times\n\
             \n\
             {}",
            PROMPT, PROMPT, PROMPT
        );
        assert_eq!(session("the\nzzz\nq\n"), expected);
    }

    #[test]
    fn test_end_of_input_quits() {
        let expected = format!(
            "{}fox occurs 2 times\n\
             \t(line 1) the quick fox\n\
             \t(line 2) the lazy fox\n\
             \n\
             {}",
            PROMPT, PROMPT
        );
        assert_eq!(session("fox\n"), expected);
    }

    #[test]
    fn test_empty_session_prints_one_prompt() {
        assert_eq!(session(""), PROMPT);
    }

    #[test]
    fn test_blank_lines_prompt_again() {
        let out = session("\n   \nq\n");
        assert_eq!(out, PROMPT.repeat(3));
    }

    #[test]
    fn test_quit_token_must_be_exactly_q() {
        let out = session("Q\nquit\nq\n");
        assert!(out.contains("Q occurs 0 times"));
        assert!(out.contains("quit occurs 0 times"));
    }

    #[test]
    fn test_quit_token_may_carry_surrounding_whitespace() {
        assert_eq!(session("  q  \n"), PROMPT);
    }

    #[test]
    fn test_only_first_token_of_a_line_is_queried() {
        let out = session("fox extra tokens\nq\n");
        assert!(out.contains("fox occurs 2 times"));
        assert!(!out.contains("extra occurs"));
    }

    #[test]
    fn test_input_after_quit_is_not_consumed() {
        let out = session("q\nthe\n");
        assert_eq!(out, PROMPT);
    }
}
