#![forbid(unsafe_code)]

//! Library half of the `undograph` binary, kept separate so the pipeline
//! can be driven from tests with in-memory readers and writers.

pub mod cli;
pub mod input;

use std::fmt;
use std::fs::File;
use std::io::{self, Read, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use cli::Opts;
use input::{InputError, read_records};

/// Anything that stops a render.
#[derive(Debug)]
pub enum CliError {
    Input(InputError),
    Engine(undograph::Error),
    Output(io::Error),
}

impl CliError {
    /// Stable code printed in the failure message.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Input(_) => "undograph/cli/input",
            Self::Engine(err) => err.code().as_str(),
            Self::Output(_) => "undograph/cli/output",
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input(err) => write!(f, "{err}"),
            Self::Engine(err) => write!(f, "{err}"),
            Self::Output(err) => write!(f, "write failed: {err}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<InputError> for CliError {
    fn from(err: InputError) -> Self {
        Self::Input(err)
    }
}

impl From<undograph::Error> for CliError {
    fn from(err: undograph::Error) -> Self {
        Self::Engine(err)
    }
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        Self::Output(err)
    }
}

/// Open the configured input, falling back to stdin.
pub fn open_input(opts: &Opts) -> Result<Box<dyn Read>, CliError> {
    match &opts.input {
        Some(path) => {
            let file = File::open(path).map_err(InputError::from)?;
            Ok(Box::new(file))
        }
        None => Ok(Box::new(io::stdin().lock())),
    }
}

/// Decode, render and print one snapshot.
///
/// Graph lines go to `out`; the highlight span, when requested, goes to
/// `diag`.
pub fn run<R, W, D>(opts: &Opts, reader: R, out: &mut W, diag: &mut D, now: i64) -> Result<(), CliError>
where
    R: Read,
    W: Write,
    D: Write,
{
    let records = read_records(reader)?;
    let snapshot = undograph::build(&records, &opts.config)?;
    tracing::info!(
        nodes = snapshot.tree().total(),
        config = %opts.config.summary_short(),
        "rendered"
    );

    for line in snapshot.display_lines(now) {
        writeln!(out, "{line}")?;
    }

    if opts.spans {
        let span = snapshot.output().highlight();
        writeln!(
            diag,
            "current seq={} line={} cells={}..{} bytes={}..{}",
            snapshot.tree().current_seq(),
            span.line,
            span.start,
            span.end,
            span.bytes.start,
            span.bytes.end,
        )?;
    }
    Ok(())
}

/// Wall clock in unix seconds, for relative label ages.
#[must_use]
pub fn unix_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| i64::try_from(elapsed.as_secs()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}
