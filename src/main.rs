use anyhow::{Context, Result, bail};
use clap::Parser;
use std::io::{self, BufRead};
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use pegmatch::{BoxedMatcher, Peg, grammars};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Inputs to match (one per line from stdin when omitted)
    #[arg(value_name = "INPUT")]
    inputs: Vec<String>,

    /// Registered grammar to run
    #[arg(short, long, value_name = "NAME", required_unless_present = "list")]
    grammar: Option<String>,

    /// Report the matched prefix instead of requiring a full match
    #[arg(short, long)]
    prefix: bool,

    /// List registered grammars and exit
    #[arg(short, long)]
    list: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Build the log filter from the `-v` count and the `RUST_LOG` value.
///
/// `RUST_LOG` applies as given (WARN when unset). Each `-v` then raises the
/// catch-all level, overriding the one from `RUST_LOG`.
fn log_filter(verbose: u8, rust_log: Option<&str>) -> EnvFilter {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .parse_lossy(rust_log.unwrap_or_default());
    let level = match verbose {
        0 => return filter,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    filter.add_directive(level.into())
}

fn init_logging(verbose: u8) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(verbose, rust_log.as_deref()))
        .with_writer(io::stderr)
        .init();
}

/// Format the result line for one input, returning whether it matched.
fn report(grammar: &Peg<BoxedMatcher>, input: &[u8], prefix: bool) -> (bool, String) {
    let shown = String::from_utf8_lossy(input);
    if prefix {
        match grammar.match_prefix(input) {
            Some(n) => (true, format!("{}: match {}/{}", shown, n, input.len())),
            None => (false, format!("{}: no match", shown)),
        }
    } else if grammar.matches(input) {
        (true, format!("{}: match", shown))
    } else {
        (false, format!("{}: no match", shown))
    }
}

/// Match every input, returning the result lines and whether all of them
/// matched.
fn check_inputs<I, T>(grammar: &Peg<BoxedMatcher>, inputs: I, prefix: bool) -> (Vec<String>, bool)
where
    I: IntoIterator<Item = T>,
    T: AsRef<[u8]>,
{
    let mut lines = Vec::new();
    let mut all_matched = true;
    for input in inputs {
        let input = input.as_ref();
        let (matched, result) = report(grammar, input, prefix);
        debug!(input = %String::from_utf8_lossy(input), matched, "input checked");
        all_matched &= matched;
        lines.push(result);
    }
    (lines, all_matched)
}

/// Match each line of `reader` as raw bytes. A trailing `\r` is dropped.
fn check_lines<R: BufRead>(
    grammar: &Peg<BoxedMatcher>,
    reader: R,
    prefix: bool,
) -> Result<(Vec<String>, bool)> {
    let mut inputs = Vec::new();
    for line in reader.split(b'\n') {
        let mut line = line.context("Failed to read stdin")?;
        if line.last() == Some(&b'\r') {
            line.pop();
        }
        inputs.push(line);
    }
    Ok(check_inputs(grammar, inputs, prefix))
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    init_logging(args.verbose);

    if args.list {
        let names = grammars::names();
        let width = names.iter().map(|n| n.len()).max().unwrap_or(0);
        for name in names {
            let info = grammars::lookup(name)?;
            println!("{:width$}  {}", name, info.description);
        }
        return Ok(ExitCode::SUCCESS);
    }

    let Some(name) = args.grammar.as_deref() else {
        bail!("No grammar given; use --grammar NAME or --list.");
    };
    let grammar = (grammars::lookup(name)?.build)();
    info!(grammar = name, prefix = args.prefix, "grammar loaded");

    let (lines, all_matched) = if args.inputs.is_empty() {
        check_lines(&grammar, io::stdin().lock(), args.prefix)?
    } else {
        check_inputs(&grammar, &args.inputs, args.prefix)
    };
    for line in lines {
        println!("{}", line);
    }

    Ok(if all_matched {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
