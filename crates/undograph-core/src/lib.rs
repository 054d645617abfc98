#![forbid(unsafe_code)]

//! History graph engine core: ingest and layout.
//!
//! Turns a host's raw edit-history snapshot into an arena [`Tree`]
//! ([`ingest`]) and assigns every node a render rank and column
//! ([`layout`]). Rendering lives in `undograph-render`.
//!
//! ```
//! use undograph_core::{RawRecord, ingest, layout};
//!
//! let mut tree = ingest(&[
//!     RawRecord::new(1, 0),
//!     RawRecord::new(2, 1),
//!     RawRecord::new(3, 1).current(),
//! ])?;
//! layout(&mut tree);
//!
//! let two = tree.node(tree.find(2).unwrap());
//! assert_eq!((two.rank(), two.depth()), (3, 2));
//! # Ok::<(), undograph_core::Error>(())
//! ```

pub mod error;
pub mod ingest;
pub mod layout;
pub mod logging;
pub mod record;
pub mod tree;

pub use error::{Error, ErrorCode, Malformed, Result};
pub use ingest::ingest;
pub use layout::layout;
pub use record::{NestedEntry, NestedHistory, RawRecord, records_from_nested};
pub use tree::{ColumnSpan, Node, NodeId, RankTable, Tree};

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, trace};
