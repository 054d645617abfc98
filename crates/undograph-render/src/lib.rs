#![forbid(unsafe_code)]

//! Text-mode graph renderer for laid-out history trees.
//!
//! ```
//! use undograph_core::{RawRecord, ingest, layout};
//! use undograph_render::{GraphStyle, render};
//!
//! let mut tree = ingest(&[
//!     RawRecord::new(1, 0),
//!     RawRecord::new(2, 1),
//!     RawRecord::new(3, 1).current(),
//! ])?;
//! layout(&mut tree);
//!
//! let out = render(&tree, GraphStyle::Compact)?;
//! assert_eq!(out.lines(), ["●", "├─●", "●", "●"]);
//! # Ok::<(), undograph_core::Error>(())
//! ```

pub mod annotate;
pub mod config;
pub mod glyphs;
mod row;
pub mod render;
pub mod style;

pub use annotate::{LabelOptions, annotate, node_label, relative_time};
pub use config::{ConfigError, RenderConfig, RenderConfigParse};
pub use glyphs::{GlyphMode, GlyphSet, LineBits};
pub use render::{HighlightSpan, RenderOutput, render, render_with};
pub use style::GraphStyle;
