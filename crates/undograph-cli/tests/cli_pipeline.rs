//! End-to-end runs of the CLI pipeline with in-memory I/O.

use undograph::{GlyphMode, GraphStyle, RenderConfig};
use undograph_cli::cli::Opts;
use undograph_cli::run;

const FORK: &str = r#"[
    {"seq": 1, "parent_seq": 0, "time": 100},
    {"seq": 2, "parent_seq": 1, "time": 160, "save": 1},
    {"seq": 3, "parent_seq": 1, "time": 190, "is_current": true}
]"#;

fn opts(config: RenderConfig, spans: bool) -> Opts {
    Opts {
        input: None,
        config,
        spans,
    }
}

fn run_text(opts: &Opts, json: &str) -> Result<(String, String), undograph_cli::CliError> {
    let mut out = Vec::new();
    let mut diag = Vec::new();
    run(opts, json.as_bytes(), &mut out, &mut diag, 200)?;
    Ok((
        String::from_utf8(out).unwrap(),
        String::from_utf8(diag).unwrap(),
    ))
}

#[test]
fn compact_default() {
    let (out, diag) = run_text(&opts(RenderConfig::default(), false), FORK).unwrap();
    assert_eq!(out, "●\n├─●\n●\n●\n");
    assert!(diag.is_empty());
}

#[test]
fn spaced_ascii_with_spans() {
    let config = RenderConfig {
        style: GraphStyle::Spaced,
        glyph_mode: GlyphMode::Ascii,
        ..RenderConfig::default()
    };
    let (out, diag) = run_text(&opts(config, true), FORK).unwrap();
    assert_eq!(out, "*\n|\n| *\n+-+\n*\n|\n*\n");
    assert_eq!(diag, "current seq=3 line=0 cells=0..1 bytes=0..1\n");
}

#[test]
fn labels_use_supplied_clock() {
    let config = RenderConfig {
        labels: true,
        ..RenderConfig::default()
    };
    let (out, _) = run_text(&opts(config, false), FORK).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(
        lines,
        [
            "●    [3] 10 secs ago",
            "├─●  [2] 40 secs ago (saved)",
            "●    [1] 1 min ago",
            "●    [0] original",
        ]
    );
}

#[test]
fn nested_document() {
    let json = r#"{"seq_cur": 3, "entries": [{"seq": 1}, {"seq": 3, "alt": [{"seq": 2}]}]}"#;
    let (out, _) = run_text(&opts(RenderConfig::default(), false), json).unwrap();
    assert_eq!(out, "●\n├─●\n●\n●\n");
}

#[test]
fn malformed_history_reports_engine_code() {
    let json = r#"[{"seq": 4, "parent_seq": 9}]"#;
    let err = run_text(&opts(RenderConfig::default(), false), json).unwrap_err();
    assert_eq!(err.code(), "undograph/error/malformed");
    assert!(err.to_string().contains("missing parent 9"));
}

#[test]
fn bad_json_reports_input_code() {
    let err = run_text(&opts(RenderConfig::default(), false), "[{").unwrap_err();
    assert_eq!(err.code(), "undograph/cli/input");
}
