use std::{
    fs::File,
    io::{self, BufRead, BufReader, Write},
    path::PathBuf,
    process::ExitCode,
};

use anyhow::Context;
use clap::Parser;
use tally::{
    evaluate,
    repl::{self, DEFAULT_PROMPT},
};

/// tally evaluates integer arithmetic expressions with `+`, `-`, `*`, `/`
/// and parentheses.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluates every line of this file instead of reading standard input.
    #[arg(short, long, conflicts_with = "expression")]
    file: Option<PathBuf>,

    /// Prompt printed before each line in interactive mode.
    #[arg(short, long, default_value = DEFAULT_PROMPT)]
    prompt: String,

    /// A single expression to evaluate. Without it, tally starts a prompt
    /// that reads one expression per line until `exit` or end of input.
    expression: Option<String>,
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();

    match run(args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{e:#}");
            ExitCode::FAILURE
        },
    }
}

/// Runs the mode selected by `args`; `Ok(false)` means the exit status is 1.
fn run(args: Args) -> anyhow::Result<bool> {
    let stdout = io::stdout().lock();

    if let Some(expression) = args.expression {
        return Ok(evaluate_once(&expression, stdout, io::stderr().lock())?);
    }

    if let Some(path) = args.file {
        let file = File::open(&path).with_context(|| {
                                        format!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                                                path.display())
                                    })?;
        return Ok(evaluate_batch(BufReader::new(file), stdout)?);
    }

    repl::run(io::stdin().lock(), stdout, &args.prompt)?;
    Ok(true)
}

/// Evaluates a single expression, printing the value to `out` or the error
/// to `err`. Returns whether evaluation succeeded.
fn evaluate_once<O, E>(expression: &str, mut out: O, mut err: E) -> io::Result<bool>
    where O: Write,
          E: Write
{
    match evaluate(expression) {
        Ok(value) => {
            writeln!(out, "{value}")?;
            Ok(true)
        },
        Err(e) => {
            writeln!(err, "{e}")?;
            Ok(false)
        },
    }
}

/// Evaluates every line of `input` without a prompt. Returns `false` if any
/// line failed.
fn evaluate_batch<R, W>(input: R, output: W) -> io::Result<bool>
    where R: BufRead,
          W: Write
{
    let summary = repl::run(input, output, "")?;
    Ok(summary.failed == 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_shot_expression_prints_value_and_succeeds() {
        let (mut out, mut err) = (Vec::new(), Vec::new());
        assert!(evaluate_once("6 * 7", &mut out, &mut err).unwrap());
        assert_eq!(out, b"42\n");
        assert!(err.is_empty());
    }

    #[test]
    fn one_shot_failure_reports_on_stderr_and_fails() {
        let (mut out, mut err) = (Vec::new(), Vec::new());
        assert!(!evaluate_once("1 +", &mut out, &mut err).unwrap());
        assert!(out.is_empty());
        assert_eq!(String::from_utf8(err).unwrap(),
                   "Error at position 3: Expected integer or '(', found end of input.\n");
    }

    #[test]
    fn batch_fails_when_any_line_fails() {
        let mut output = Vec::new();
        assert!(!evaluate_batch("1 + 1\n5 / 0\n3\n".as_bytes(), &mut output).unwrap());
        assert_eq!(String::from_utf8(output).unwrap(),
                   "2\nerror: Error at position 2: Division by zero.\n3\n");
    }

    #[test]
    fn batch_succeeds_when_every_line_evaluates() {
        let mut output = Vec::new();
        assert!(evaluate_batch("1 + 1\n\n(2)\n".as_bytes(), &mut output).unwrap());
        assert_eq!(output, b"2\n2\n");
    }

    #[test]
    fn expression_and_file_conflict() {
        assert!(Args::try_parse_from(["tally", "--file", "x.txt", "1+1"]).is_err());
        let args = Args::try_parse_from(["tally", "1+1"]).unwrap();
        assert_eq!(args.expression.as_deref(), Some("1+1"));
        assert_eq!(args.prompt, DEFAULT_PROMPT);
    }
}
