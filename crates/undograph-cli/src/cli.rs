#![forbid(unsafe_code)]

//! Command-line argument parsing.
//!
//! Render settings start from `UNDOGRAPH_*` environment variables and are
//! overridden by explicit flags.

use std::env;
use std::path::PathBuf;
use std::process;

use undograph::{GlyphMode, GraphStyle, RenderConfig};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const HELP_TEXT: &str = "\
undograph: draw a branching undo history as a text graph

USAGE:
    undograph [OPTIONS] [FILE]

Reads a JSON snapshot from FILE, or stdin when FILE is absent or '-'.
The snapshot is either a flat array of records
    [{\"seq\": 1, \"parent_seq\": 0, \"is_current\": true}, ...]
or a nested history object
    {\"seq_cur\": 3, \"entries\": [{\"seq\": 1}, {\"seq\": 3, \"alt\": [{\"seq\": 2}]}]}

OPTIONS:
    --style=STYLE        Graph style: 'compact' (default) or 'spaced'
    --ascii              Draw with ASCII glyphs
    --labels             Append [seq] labels after the graph
    --spans              Print the current-node highlight span to stderr
    --help, -h           Show this help message
    --version, -V        Show version

ENVIRONMENT VARIABLES:
    UNDOGRAPH_STYLE            Default --style (spaced|compact)
    UNDOGRAPH_GLYPH_MODE       unicode|ascii
    UNDOGRAPH_NODE_MARKER      Single character for node markers
    UNDOGRAPH_CURRENT_MARKER   Single character for the current node
    UNDOGRAPH_LABELS           Default --labels (1/0/true/false)
    UNDOGRAPH_RELATIVE_TIME    Show node ages in labels (1/0/true/false)
    UNDOGRAPH_LOG              Log filter, e.g. 'undograph=debug' (default: warn)";

/// Parsed command-line options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opts {
    /// Snapshot path; `None` reads stdin.
    pub input: Option<PathBuf>,
    pub config: RenderConfig,
    /// Report the highlight span.
    pub spans: bool,
}

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Run(Opts),
    Help,
    Version,
}

impl Opts {
    /// Parse the process arguments on top of the environment.
    ///
    /// Prints help/version or a usage error and exits where appropriate.
    pub fn parse() -> Self {
        let env = RenderConfig::from_env_with_diagnostics();
        for error in &env.errors {
            tracing::warn!(%error, "ignoring invalid environment setting");
        }

        match Self::from_args(env::args().skip(1), env.config) {
            Ok(Invocation::Run(opts)) => opts,
            Ok(Invocation::Help) => {
                println!("{HELP_TEXT}");
                process::exit(0);
            }
            Ok(Invocation::Version) => {
                println!("undograph {VERSION}");
                process::exit(0);
            }
            Err(message) => {
                eprintln!("{message}");
                eprintln!("Run with --help for usage information.");
                process::exit(2);
            }
        }
    }

    /// Parse `args` over a base config.
    pub fn from_args<I>(args: I, config: RenderConfig) -> Result<Invocation, String>
    where
        I: IntoIterator<Item = String>,
    {
        let mut opts = Opts {
            input: None,
            config,
            spans: false,
        };

        for arg in args {
            match arg.as_str() {
                "--help" | "-h" => return Ok(Invocation::Help),
                "--version" | "-V" => return Ok(Invocation::Version),
                "--ascii" => opts.config.glyph_mode = GlyphMode::Ascii,
                "--labels" => opts.config.labels = true,
                "--spans" => opts.spans = true,
                "-" => opts.input = None,
                other => {
                    if let Some(val) = other.strip_prefix("--style=") {
                        opts.config.style = GraphStyle::parse(val)
                            .map_err(|_| format!("Invalid --style value: {val}"))?;
                    } else if other.starts_with('-') {
                        return Err(format!("Unknown argument: {other}"));
                    } else if opts.input.is_some() {
                        return Err(format!("Unexpected extra file: {other}"));
                    } else {
                        opts.input = Some(PathBuf::from(other));
                    }
                }
            }
        }

        Ok(Invocation::Run(opts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Invocation, String> {
        Opts::from_args(
            args.iter().map(|s| (*s).to_string()),
            RenderConfig::default(),
        )
    }

    fn run(args: &[&str]) -> Opts {
        match parse(args) {
            Ok(Invocation::Run(opts)) => opts,
            other => panic!("expected run, got {other:?}"),
        }
    }

    #[test]
    fn defaults_read_stdin() {
        let opts = run(&[]);
        assert_eq!(opts.input, None);
        assert_eq!(opts.config, RenderConfig::default());
        assert!(!opts.spans);
    }

    #[test]
    fn flags_override_base_config() {
        let opts = run(&["--style=spaced", "--ascii", "--labels", "--spans", "h.json"]);
        assert_eq!(opts.config.style, GraphStyle::Spaced);
        assert_eq!(opts.config.glyph_mode, GlyphMode::Ascii);
        assert!(opts.config.labels);
        assert!(opts.spans);
        assert_eq!(opts.input, Some(PathBuf::from("h.json")));
    }

    #[test]
    fn env_base_survives_without_flags() {
        let base = RenderConfig {
            style: GraphStyle::Spaced,
            ..RenderConfig::default()
        };
        let Ok(Invocation::Run(opts)) = Opts::from_args(Vec::new(), base) else {
            panic!("expected run");
        };
        assert_eq!(opts.config.style, GraphStyle::Spaced);
    }

    #[test]
    fn help_and_version_short_circuit() {
        assert_eq!(parse(&["--bogus-later", "-h"]), Err("Unknown argument: --bogus-later".into()));
        assert_eq!(parse(&["-h", "--bogus"]), Ok(Invocation::Help));
        assert_eq!(parse(&["--version"]), Ok(Invocation::Version));
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(parse(&["--style=wavy"]), Err("Invalid --style value: wavy".into()));
        assert_eq!(parse(&["a.json", "b.json"]), Err("Unexpected extra file: b.json".into()));
    }

    #[test]
    fn help_text_mentions_every_flag() {
        for flag in ["--style=", "--ascii", "--labels", "--spans", "UNDOGRAPH_LOG"] {
            assert!(HELP_TEXT.contains(flag), "{flag}");
        }
    }
}
