#![forbid(unsafe_code)]

//! Host-supplied history records.
//!
//! The host hands the engine a snapshot of its edit history. Two shapes are
//! accepted: a flat list of [`RawRecord`]s in any order, or the nested
//! "main line plus alternates" form many editors expose, which
//! [`records_from_nested`] flattens into records.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One historical state as reported by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RawRecord {
    /// Sequence number assigned by the host at creation time.
    pub seq: u64,
    /// The state this one was derived from. `None` only for the root.
    #[cfg_attr(feature = "serde", serde(default))]
    pub parent_seq: Option<u64>,
    /// Whether the host buffer currently reflects this state.
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_current: bool,
    /// Creation time in unix seconds, if known.
    #[cfg_attr(feature = "serde", serde(default))]
    pub time: Option<i64>,
    /// Write counter if this state was saved to disk.
    #[cfg_attr(feature = "serde", serde(default))]
    pub save: Option<u32>,
}

impl RawRecord {
    /// Create a record with a parent.
    #[must_use]
    pub fn new(seq: u64, parent_seq: u64) -> Self {
        Self {
            seq,
            parent_seq: Some(parent_seq),
            is_current: false,
            time: None,
            save: None,
        }
    }

    /// Create the root record (seq 0).
    #[must_use]
    pub fn root() -> Self {
        Self {
            seq: 0,
            parent_seq: None,
            is_current: false,
            time: None,
            save: None,
        }
    }

    /// Mark this record as the current state.
    #[must_use]
    pub fn current(mut self) -> Self {
        self.is_current = true;
        self
    }

    /// Attach a creation timestamp.
    #[must_use]
    pub fn with_time(mut self, time: i64) -> Self {
        self.time = Some(time);
        self
    }

    /// Attach a save counter.
    #[must_use]
    pub fn with_save(mut self, save: u32) -> Self {
        self.save = Some(save);
        self
    }
}

/// A history entry in the nested form.
///
/// `alt` holds an alternate branch: its first element was derived from the
/// same parent as this entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NestedEntry {
    pub seq: u64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub time: Option<i64>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub save: Option<u32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub alt: Vec<NestedEntry>,
}

impl NestedEntry {
    #[must_use]
    pub fn new(seq: u64) -> Self {
        Self {
            seq,
            ..Self::default()
        }
    }

    /// Attach an alternate branch.
    #[must_use]
    pub fn with_alt(mut self, alt: Vec<NestedEntry>) -> Self {
        self.alt = alt;
        self
    }
}

/// A whole history snapshot in the nested form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NestedHistory {
    /// Sequence number of the state the buffer currently reflects.
    #[cfg_attr(feature = "serde", serde(default))]
    pub seq_cur: u64,
    /// The main line, oldest first.
    #[cfg_attr(feature = "serde", serde(default))]
    pub entries: Vec<NestedEntry>,
}

/// Flatten a nested history into parent-linked records.
///
/// The root is not emitted; ingest synthesizes it. Alternate branches are
/// walked with an explicit stack so deeply nested alternates cannot
/// exhaust the call stack.
#[must_use]
pub fn records_from_nested(history: &NestedHistory) -> Vec<RawRecord> {
    let mut out = Vec::new();
    let mut stack: Vec<(&[NestedEntry], u64)> = vec![(&history.entries, 0)];

    while let Some((entries, parent)) = stack.pop() {
        let mut prev = parent;
        for entry in entries {
            out.push(RawRecord {
                seq: entry.seq,
                parent_seq: Some(prev),
                is_current: entry.seq == history.seq_cur,
                time: entry.time,
                save: entry.save,
            });
            if !entry.alt.is_empty() {
                stack.push((&entry.alt, prev));
            }
            prev = entry.seq;
        }
    }

    if history.seq_cur == 0 {
        out.push(RawRecord::root().current());
    }
    out
}
