#![forbid(unsafe_code)]

//! One-call pipeline: ingest, layout and render a history snapshot.

use undograph_core::{RawRecord, Result, Tree, ingest, layout};
use undograph_render::{LabelOptions, RenderConfig, RenderOutput, annotate, render_with};

/// A laid-out tree together with its rendering.
///
/// Rebuilt from scratch whenever the host's history changes.
#[derive(Debug, Clone)]
pub struct Snapshot {
    tree: Tree,
    output: RenderOutput,
    config: RenderConfig,
}

impl Snapshot {
    #[must_use]
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    #[must_use]
    pub fn output(&self) -> &RenderOutput {
        &self.output
    }

    #[must_use]
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Lines to show the user: graph only, or graph plus labels when the
    /// config asks for them. `now` is unix seconds for relative ages.
    #[must_use]
    pub fn display_lines(&self, now: i64) -> Vec<String> {
        if !self.config.labels {
            return self.output.lines().to_vec();
        }
        let opts = LabelOptions {
            relative_time: self.config.relative_time,
            ..LabelOptions::default()
        };
        annotate(&self.tree, &self.output, &opts, now)
    }
}

/// Ingest, lay out and render `records`.
///
/// # Errors
///
/// Propagates [`Error::MalformedHistory`](undograph_core::Error) from
/// ingest. No partial result is returned.
pub fn build(records: &[RawRecord], config: &RenderConfig) -> Result<Snapshot> {
    let mut tree = ingest(records)?;
    layout(&mut tree);
    let output = render_with(&tree, config)?;

    #[cfg(feature = "tracing")]
    tracing::debug!(
        total = tree.total(),
        lines = output.lines().len(),
        "snapshot built"
    );

    Ok(Snapshot {
        tree,
        output,
        config: config.clone(),
    })
}
