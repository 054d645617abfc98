#![forbid(unsafe_code)]

//! Render configuration.
//!
//! Environment overrides:
//! - `UNDOGRAPH_STYLE` = spaced|compact
//! - `UNDOGRAPH_GLYPH_MODE` = unicode|ascii
//! - `UNDOGRAPH_NODE_MARKER` (single character)
//! - `UNDOGRAPH_CURRENT_MARKER` (single character)
//! - `UNDOGRAPH_LABELS` (bool)
//! - `UNDOGRAPH_RELATIVE_TIME` (bool)
//!
//! Unparseable values keep the default and are reported in
//! [`RenderConfigParse::errors`].

use std::env;
use std::fmt;

use unicode_width::UnicodeWidthChar;

use crate::glyphs::{GlyphMode, GlyphSet};
use crate::style::GraphStyle;

const ENV_STYLE: &str = "UNDOGRAPH_STYLE";
const ENV_GLYPH_MODE: &str = "UNDOGRAPH_GLYPH_MODE";
const ENV_NODE_MARKER: &str = "UNDOGRAPH_NODE_MARKER";
const ENV_CURRENT_MARKER: &str = "UNDOGRAPH_CURRENT_MARKER";
const ENV_LABELS: &str = "UNDOGRAPH_LABELS";
const ENV_RELATIVE_TIME: &str = "UNDOGRAPH_RELATIVE_TIME";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    pub style: GraphStyle,
    pub glyph_mode: GlyphMode,
    /// Overrides the glyph set's node marker.
    pub node_marker: Option<char>,
    /// Marker for the current node. Defaults to the node marker; the host
    /// normally relies on the highlight span instead.
    pub current_marker: Option<char>,
    /// Append `[seq]` labels after the graph.
    pub labels: bool,
    /// Include relative age in labels.
    pub relative_time: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            style: GraphStyle::Compact,
            glyph_mode: GlyphMode::Unicode,
            node_marker: None,
            current_marker: None,
            labels: false,
            relative_time: true,
        }
    }
}

/// Configuration parse diagnostics.
#[derive(Debug, Clone)]
pub struct RenderConfigParse {
    pub config: RenderConfig,
    pub errors: Vec<ConfigError>,
}

/// Configuration error with field context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    pub field: &'static str,
    pub value: String,
    pub message: String,
}

impl ConfigError {
    fn new(field: &'static str, value: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={} ({})", self.field, self.value, self.message)
    }
}

impl std::error::Error for ConfigError {}

impl RenderConfig {
    /// Parse config from environment variables.
    #[must_use]
    pub fn from_env() -> RenderConfig {
        Self::from_env_with_diagnostics().config
    }

    /// Parse config from environment variables and return diagnostics.
    #[must_use]
    pub fn from_env_with_diagnostics() -> RenderConfigParse {
        from_env_with(|key| env::var(key).ok())
    }

    /// Validate config constraints and return all violations.
    pub fn validate(&self) -> Result<(), Vec<ConfigError>> {
        let mut errors = Vec::new();
        validate_marker("node_marker", self.node_marker, &mut errors);
        validate_marker("current_marker", self.current_marker, &mut errors);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Glyph set for the configured mode, with the node marker applied.
    #[must_use]
    pub fn glyphs(&self) -> GlyphSet {
        let glyphs = GlyphSet::for_mode(self.glyph_mode);
        match self.node_marker {
            Some(node) => glyphs.with_node(node),
            None => glyphs,
        }
    }

    /// Short human-readable summary.
    #[must_use]
    pub fn summary_short(&self) -> String {
        let labels = if self.labels { "labels" } else { "no labels" };
        format!("undograph: {} · {} · {labels}", self.style, self.glyph_mode)
    }
}

pub(crate) fn from_env_with<F>(mut get: F) -> RenderConfigParse
where
    F: FnMut(&str) -> Option<String>,
{
    let mut config = RenderConfig::default();
    let mut errors = Vec::new();

    if let Some(value) = get(ENV_STYLE) {
        match GraphStyle::parse(&value) {
            Ok(parsed) => config.style = parsed,
            Err(_) => errors.push(ConfigError::new("style", value, "expected spaced|compact")),
        }
    }

    if let Some(value) = get(ENV_GLYPH_MODE) {
        match GlyphMode::parse(&value) {
            Some(parsed) => config.glyph_mode = parsed,
            None => errors.push(ConfigError::new(
                "glyph_mode",
                value,
                "expected unicode|ascii",
            )),
        }
    }

    if let Some(value) = get(ENV_NODE_MARKER) {
        match parse_marker(&value) {
            Some(ch) => config.node_marker = Some(ch),
            None => errors.push(ConfigError::new(
                "node_marker",
                value,
                "expected a single narrow character",
            )),
        }
    }

    if let Some(value) = get(ENV_CURRENT_MARKER) {
        match parse_marker(&value) {
            Some(ch) => config.current_marker = Some(ch),
            None => errors.push(ConfigError::new(
                "current_marker",
                value,
                "expected a single narrow character",
            )),
        }
    }

    if let Some(value) = get(ENV_LABELS) {
        match parse_bool(&value) {
            Some(parsed) => config.labels = parsed,
            None => errors.push(ConfigError::new(
                "labels",
                value,
                "expected bool (1/0/true/false)",
            )),
        }
    }

    if let Some(value) = get(ENV_RELATIVE_TIME) {
        match parse_bool(&value) {
            Some(parsed) => config.relative_time = parsed,
            None => errors.push(ConfigError::new(
                "relative_time",
                value,
                "expected bool (1/0/true/false)",
            )),
        }
    }

    if let Err(mut invalid) = config.validate() {
        errors.append(&mut invalid);
    }

    RenderConfigParse { config, errors }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_marker(value: &str) -> Option<char> {
    let mut chars = value.trim().chars();
    let ch = chars.next()?;
    if chars.next().is_some() || !marker_fits(ch) {
        return None;
    }
    Some(ch)
}

/// Markers must occupy exactly one cell so columns stay aligned.
fn marker_fits(ch: char) -> bool {
    !ch.is_whitespace() && ch.width() == Some(1)
}

fn validate_marker(field: &'static str, marker: Option<char>, errors: &mut Vec<ConfigError>) {
    if let Some(ch) = marker
        && !marker_fits(ch)
    {
        errors.push(ConfigError::new(
            field,
            ch.to_string(),
            "marker must be one visible single-width character",
        ));
    }
}
