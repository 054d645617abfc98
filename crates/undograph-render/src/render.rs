#![forbid(unsafe_code)]

//! Graph renderer: laid-out tree to text lines.
//!
//! Rows are emitted from the highest rank down to the root so the newest
//! activity sits at the top. A single top-down sweep keeps, per column,
//! the rank of the node the line in that column is heading to. When the
//! sweep reaches the boundary above that node's row, a line in the node's
//! own column runs straight in; a line in any other column turns left and
//! joins with a horizontal run.
//!
//! In [`GraphStyle::Spaced`] each boundary is its own connector row. In
//! [`GraphStyle::Compact`] the connector is folded into the node row above
//! it, with the node marker replacing whatever that column would show.

use std::ops::Range;

use undograph_core::{Error, RankTable, Result, Tree};
use unicode_width::UnicodeWidthStr;

use crate::config::RenderConfig;
use crate::glyphs::LineBits;
use crate::row::Row;
use crate::style::GraphStyle;

/// Where the host should paint the current-node highlight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightSpan {
    /// Output line index.
    pub line: usize,
    /// First display cell of the marker.
    pub start: usize,
    /// One past the last display cell of the marker.
    pub end: usize,
    /// Byte range of the marker within the line.
    pub bytes: Range<usize>,
}

/// Result of one render call.
#[derive(Debug, Clone)]
pub struct RenderOutput {
    lines: Vec<String>,
    ranks: RankTable,
    highlight: HighlightSpan,
    style: GraphStyle,
}

impl RenderOutput {
    /// Rendered lines, top to bottom.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    #[must_use]
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    #[must_use]
    pub fn style(&self) -> GraphStyle {
        self.style
    }

    /// Number of rendered nodes.
    #[must_use]
    pub fn total(&self) -> usize {
        self.ranks.len()
    }

    /// Rank ↔ seq tables, consistent with line order: the highest rank is
    /// the first line.
    #[must_use]
    pub fn ranks(&self) -> &RankTable {
        &self.ranks
    }

    #[must_use]
    pub fn rank_to_seq(&self, rank: usize) -> Option<u64> {
        self.ranks.seq_for_rank(rank)
    }

    #[must_use]
    pub fn seq_to_rank(&self, seq: u64) -> Option<usize> {
        self.ranks.rank_for_seq(seq)
    }

    /// Output line showing `seq`.
    #[must_use]
    pub fn line_of_seq(&self, seq: u64) -> Option<usize> {
        let rank = self.seq_to_rank(seq)?;
        self.style.line_of_rank(self.total(), rank)
    }

    /// Seq drawn on `line`; `None` for connector rows.
    #[must_use]
    pub fn seq_at_line(&self, line: usize) -> Option<u64> {
        let rank = self.style.rank_of_line(self.total(), line)?;
        self.rank_to_seq(rank)
    }

    #[must_use]
    pub fn highlight(&self) -> &HighlightSpan {
        &self.highlight
    }
}

/// Render with default glyphs and markers.
///
/// # Errors
///
/// Returns [`Error::NotLaidOut`] if `tree` has not been through
/// [`layout`](undograph_core::layout).
pub fn render(tree: &Tree, style: GraphStyle) -> Result<RenderOutput> {
    render_with(
        tree,
        &RenderConfig {
            style,
            ..RenderConfig::default()
        },
    )
}

/// Render using a full configuration.
///
/// # Errors
///
/// Returns [`Error::NotLaidOut`] if `tree` has not been through
/// [`layout`](undograph_core::layout).
pub fn render_with(tree: &Tree, config: &RenderConfig) -> Result<RenderOutput> {
    if !tree.is_laid_out() {
        return Err(Error::NotLaidOut);
    }

    let total = tree.total();
    let style = config.style;

    #[cfg(feature = "tracing")]
    let _span = tracing::debug_span!("undograph.render", total, style = style.as_str());
    #[cfg(feature = "tracing")]
    let _guard = _span.enter();

    let glyphs = config.glyphs();
    let current_marker = config.current_marker.unwrap_or(glyphs.node);
    let width = tree.width();

    let mut lines = Vec::with_capacity(style.line_count(total));
    // Per column: rank of the node the line in that column descends to.
    let mut lanes: Vec<Option<usize>> = vec![None; width];

    for rank in (1..=total).rev() {
        let Some(id) = tree.at_rank(rank) else {
            return Err(Error::NotLaidOut);
        };
        let node = tree.node(id);
        let column = node.depth();
        let marker = if node.is_current() {
            current_marker
        } else {
            glyphs.node
        };

        lanes[column - 1] = None;

        if style == GraphStyle::Spaced || rank == 1 {
            let mut row = pass_through(&lanes, width);
            row.set_marker(column, marker);
            lines.push(row.render(&glyphs));
        }

        lanes[column - 1] = node.parent().map(|p| tree.node(p).rank());

        if rank > 1 {
            let Some(below) = tree.at_rank(rank - 1) else {
                return Err(Error::NotLaidOut);
            };
            let mut row = connector(&mut lanes, rank - 1, tree.node(below).depth(), width);
            if style == GraphStyle::Compact {
                row.set_marker(column, marker);
            }
            lines.push(row.render(&glyphs));
        }
    }

    debug_assert_eq!(lines.len(), style.line_count(total));

    let current = tree.node(tree.current());
    let line = style
        .line_of_rank(total, current.rank())
        .ok_or(Error::NotLaidOut)?;
    let highlight = marker_span(&lines[line], line, current.depth());

    #[cfg(feature = "tracing")]
    tracing::debug!(lines = lines.len(), columns = width, "graph rendered");

    Ok(RenderOutput {
        lines,
        ranks: tree.ranks().clone(),
        highlight,
        style,
    })
}

/// Row with a vertical through every occupied column.
fn pass_through(lanes: &[Option<usize>], width: usize) -> Row {
    let mut row = Row::new(width);
    for (i, lane) in lanes.iter().enumerate() {
        if lane.is_some() {
            row.merge(i + 1, LineBits::VERTICAL);
        }
    }
    row
}

/// Boundary between a node row and the row of `below_rank`. Lines heading
/// to `below_rank` from another column turn into `below_column` here and
/// are retired.
fn connector(
    lanes: &mut [Option<usize>],
    below_rank: usize,
    below_column: usize,
    width: usize,
) -> Row {
    let mut row = Row::new(width);
    for (i, lane) in lanes.iter_mut().enumerate() {
        let Some(target) = *lane else {
            continue;
        };
        let column = i + 1;
        if target == below_rank && column != below_column {
            row.merge(column, LineBits::UP);
            row.hline(below_column, column);
            *lane = None;
        } else {
            row.merge(column, LineBits::VERTICAL);
        }
    }
    row
}

fn marker_span(text: &str, line: usize, column: usize) -> HighlightSpan {
    let Some((byte_start, marker)) = text.char_indices().nth(2 * (column - 1)) else {
        let cell = text.width();
        return HighlightSpan {
            line,
            start: cell,
            end: cell,
            bytes: text.len()..text.len(),
        };
    };
    let byte_end = byte_start + marker.len_utf8();
    let start = text[..byte_start].width();
    let end = start + text[byte_start..byte_end].width().max(1);
    HighlightSpan {
        line,
        start,
        end,
        bytes: byte_start..byte_end,
    }
}
