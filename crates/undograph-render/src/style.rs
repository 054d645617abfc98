#![forbid(unsafe_code)]

//! Render styles and the row math shared by renderer, navigator and tests.

use std::fmt;
use std::str::FromStr;

use undograph_core::{Error, Result};

/// Row layout of the rendered graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GraphStyle {
    /// A connector row between every pair of node rows.
    Spaced,
    /// One row per node; joins ride on the node row above the fork.
    #[default]
    Compact,
}

impl GraphStyle {
    /// Parse a style name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidStyle`] for anything but `spaced`/`compact`.
    pub fn parse(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "spaced" | "s" => Ok(Self::Spaced),
            "compact" | "c" => Ok(Self::Compact),
            _ => Err(Error::InvalidStyle(value.to_string())),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Spaced => "spaced",
            Self::Compact => "compact",
        }
    }

    /// Rows emitted for a tree of `total` nodes.
    #[must_use]
    pub const fn line_count(self, total: usize) -> usize {
        match self {
            Self::Spaced => (2 * total).saturating_sub(1),
            Self::Compact => total,
        }
    }

    /// Output line of the node at `rank`. Lines run from the highest rank
    /// down to rank 1.
    #[must_use]
    pub const fn line_of_rank(self, total: usize, rank: usize) -> Option<usize> {
        if rank == 0 || rank > total {
            return None;
        }
        let from_top = total - rank;
        Some(match self {
            Self::Spaced => 2 * from_top,
            Self::Compact => from_top,
        })
    }

    /// Rank of the node drawn on `line`; `None` for connector rows and
    /// lines past the end.
    #[must_use]
    pub const fn rank_of_line(self, total: usize, line: usize) -> Option<usize> {
        if line >= self.line_count(total) {
            return None;
        }
        match self {
            Self::Spaced if line % 2 == 1 => None,
            Self::Spaced => Some(total - line / 2),
            Self::Compact => Some(total - line),
        }
    }

    /// Rank of the nearest node row at or above `line`, clamped to the
    /// last row.
    #[must_use]
    pub fn nearest_rank(self, total: usize, line: usize) -> Option<usize> {
        if total == 0 {
            return None;
        }
        let line = line.min(self.line_count(total) - 1);
        let line = match self {
            Self::Spaced => line - line % 2,
            Self::Compact => line,
        };
        self.rank_of_line(total, line)
    }
}

impl fmt::Display for GraphStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GraphStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
