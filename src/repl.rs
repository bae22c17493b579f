use std::io::{self, BufRead, Write};

use log::info;

use crate::{error::InterpretResult, evaluate};

/// Prompt printed before each line in interactive mode.
pub const DEFAULT_PROMPT: &str = "calc> ";
/// A line consisting of this word ends the loop.
pub const EXIT_KEYWORD: &str = "exit";

/// What a single input line amounts to.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The line asked to leave the loop.
    Exit,
    /// The line holds nothing but whitespace.
    Empty,
    /// The line was evaluated.
    Evaluated(InterpretResult<i64>),
}

/// Counts kept while running the loop.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Lines that were evaluated, successfully or not.
    pub evaluated: usize,
    /// Lines whose evaluation failed.
    pub failed:    usize,
}

/// Classifies and, where needed, evaluates one line.
///
/// The exit keyword is checked before any lexer is built, so `exit` is never
/// reported as invalid input.
///
/// # Example
/// ```
/// use tally::repl::{Outcome, evaluate_line};
///
/// assert_eq!(evaluate_line("exit\n"), Outcome::Exit);
/// assert_eq!(evaluate_line("   "), Outcome::Empty);
/// assert_eq!(evaluate_line("6 * 7"), Outcome::Evaluated(Ok(42)));
/// ```
#[must_use]
pub fn evaluate_line(line: &str) -> Outcome {
    match line.trim() {
        EXIT_KEYWORD => Outcome::Exit,
        "" => Outcome::Empty,
        _ => Outcome::Evaluated(evaluate(line)),
    }
}

/// Reads lines from `input` and writes one result per line to `output`.
///
/// The prompt is written and flushed before every read; pass an empty prompt
/// for non-interactive input. A failed line is reported as `error: <message>`
/// and the loop carries on with the next one. The loop ends at end of input
/// or at the exit keyword.
///
/// # Errors
/// Only I/O errors on `input` or `output` end the loop early.
pub fn run<R, W>(mut input: R, mut output: W, prompt: &str) -> io::Result<Summary>
    where R: BufRead,
          W: Write
{
    let mut summary = Summary::default();
    let mut line = String::new();

    loop {
        write!(output, "{prompt}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        match evaluate_line(&line) {
            Outcome::Exit => break,
            Outcome::Empty => {},
            Outcome::Evaluated(result) => {
                summary.evaluated += 1;
                match result {
                    Ok(value) => writeln!(output, "{value}")?,
                    Err(e) => {
                        summary.failed += 1;
                        writeln!(output, "error: {e}")?;
                    },
                }
            },
        }
    }

    info!("evaluated {} line(s), {} failed",
          summary.evaluated,
          summary.failed);
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{EvalError, InterpretError};

    fn run_script(script: &str, prompt: &str) -> (String, Summary) {
        let mut output = Vec::new();
        let summary = run(script.as_bytes(), &mut output, prompt).expect("in-memory I/O");
        (String::from_utf8(output).expect("utf-8 output"), summary)
    }

    #[test]
    fn exit_keyword_tolerates_surrounding_whitespace() {
        assert_eq!(evaluate_line("  exit  "), Outcome::Exit);
        assert_eq!(evaluate_line("exit 1"),
                   Outcome::Evaluated(evaluate("exit 1")));
    }

    #[test]
    fn evaluates_each_line_and_continues_after_errors() {
        let (output, summary) = run_script("1 + 1\n5 / 0\n\n2 * (3 + 4)\n", "");
        assert_eq!(output,
                   "2\nerror: Error at position 2: Division by zero.\n14\n");
        assert_eq!(summary,
                   Summary { evaluated: 3,
                             failed:    1, });
    }

    #[test]
    fn stops_at_exit_without_evaluating_the_rest() {
        let (output, summary) = run_script("3\nexit\n4\n", "calc> ");
        assert_eq!(output, "calc> 3\ncalc> ");
        assert_eq!(summary.evaluated, 1);
    }

    #[test]
    fn last_line_without_newline_is_evaluated() {
        let (output, _) = run_script("10 - 2 - 3", "");
        assert_eq!(output, "5\n");
    }

    #[test]
    fn outcome_carries_the_error() {
        assert_eq!(evaluate_line("8 / 0"),
                   Outcome::Evaluated(Err(InterpretError::Eval(EvalError::DivisionByZero { position: 2 }))));
    }
}
