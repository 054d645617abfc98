#![forbid(unsafe_code)]

//! Undograph public facade crate.
//!
//! Re-exports the ingest/layout core and the text renderer, and adds the
//! one-call [`build`] pipeline plus a cursor [`Navigator`] for hosts that
//! display the graph in a side window.
//!
//! ```
//! use undograph::prelude::*;
//!
//! let records = [
//!     RawRecord::new(1, 0),
//!     RawRecord::new(2, 1),
//!     RawRecord::new(3, 1).current(),
//! ];
//! let snapshot = undograph::build(&records, &RenderConfig::default())?;
//! assert_eq!(snapshot.output().lines(), ["●", "├─●", "●", "●"]);
//!
//! let mut nav = Navigator::new(snapshot);
//! assert_eq!(nav.dispatch(Command::Down), Action::MoveCursor { line: 1, seq: 2 });
//! assert_eq!(nav.dispatch(Command::Select), Action::ApplyState { seq: 2 });
//! # Ok::<(), undograph::Error>(())
//! ```

pub mod nav;
mod snapshot;

// --- Core re-exports -------------------------------------------------------

pub use undograph_core::{
    ColumnSpan, Error, ErrorCode, Malformed, NestedEntry, NestedHistory, Node, NodeId, RankTable,
    RawRecord, Result, Tree, ingest, layout, records_from_nested,
};

// --- Render re-exports -----------------------------------------------------

pub use undograph_render::{
    ConfigError, GlyphMode, GlyphSet, GraphStyle, HighlightSpan, LabelOptions, RenderConfig,
    RenderConfigParse, RenderOutput, annotate, render, render_with,
};

// --- Pipeline --------------------------------------------------------------

pub use nav::{Action, Command, Navigator};
pub use snapshot::{Snapshot, build};

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Action, Command, Error, GraphStyle, Navigator, RawRecord, RenderConfig, RenderOutput,
        Result, Snapshot, Tree,
    };

    pub use crate::{core, graph};
}

pub use undograph_core as core;
pub use undograph_render as graph;
