#![forbid(unsafe_code)]

//! One text row of the graph.
//!
//! Column `c` (1-based) occupies display cell `2 * (c - 1)`. The odd cell
//! between two columns is a gap that holds a horizontal glyph when a run
//! crosses it.

use crate::glyphs::{GlyphSet, LineBits};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Line(LineBits),
    Marker(char),
}

#[derive(Debug, Clone)]
pub(crate) struct Row {
    slots: Vec<Slot>,
    gaps: Vec<bool>,
}

impl Row {
    pub(crate) fn new(width: usize) -> Self {
        Self {
            slots: vec![Slot::Line(LineBits::empty()); width],
            gaps: vec![false; width.saturating_sub(1)],
        }
    }

    /// Add line directions to a column. Markers are left untouched.
    pub(crate) fn merge(&mut self, column: usize, bits: LineBits) {
        if let Slot::Line(existing) = &mut self.slots[column - 1] {
            *existing |= bits;
        }
    }

    pub(crate) fn set_marker(&mut self, column: usize, marker: char) {
        self.slots[column - 1] = Slot::Marker(marker);
    }

    /// Draw a horizontal run between two columns, inclusive.
    pub(crate) fn hline(&mut self, a: usize, b: usize) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        if lo == hi {
            return;
        }
        self.merge(lo, LineBits::RIGHT);
        self.merge(hi, LineBits::LEFT);
        for column in lo + 1..hi {
            self.merge(column, LineBits::HORIZONTAL);
        }
        for gap in &mut self.gaps[lo - 1..hi - 1] {
            *gap = true;
        }
    }

    /// Render to text, right-trimmed.
    pub(crate) fn render(&self, glyphs: &GlyphSet) -> String {
        let mut out = String::with_capacity(self.slots.len() * 2 * 3);
        for (i, slot) in self.slots.iter().enumerate() {
            if i > 0 {
                out.push(if self.gaps[i - 1] {
                    glyphs.horizontal
                } else {
                    ' '
                });
            }
            out.push(match *slot {
                Slot::Line(bits) => glyphs.joint(bits),
                Slot::Marker(ch) => ch,
            });
        }
        let trimmed = out.trim_end_matches(' ').len();
        out.truncate(trimmed);
        out
    }
}
