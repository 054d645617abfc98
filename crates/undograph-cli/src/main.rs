#![forbid(unsafe_code)]

//! `undograph` binary entry point.

use std::io;
use std::process;

use tracing_subscriber::EnvFilter;
use undograph_cli::cli::Opts;
use undograph_cli::{open_input, run, unix_now};

fn init_logging() {
    let filter = EnvFilter::try_from_env("UNDOGRAPH_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    init_logging();
    let opts = Opts::parse();

    let result = open_input(&opts).and_then(|reader| {
        let stdout = io::stdout();
        let stderr = io::stderr();
        run(&opts, reader, &mut stdout.lock(), &mut stderr.lock(), unix_now())
    });

    if let Err(err) = result {
        eprintln!("error[{}]: {err}", err.code());
        process::exit(1);
    }
}
