#![forbid(unsafe_code)]

//! Glyph sets and joint selection.
//!
//! Every connector cell is described by the directions a line leaves it in
//! ([`LineBits`]). [`GlyphSet::joint`] maps that mask to the minimal
//! box-drawing character, so a column that carries a line straight down
//! and also takes a branch from the right becomes `├`, and a column that
//! a horizontal run passes over while a branch descends into it becomes
//! `┴`.

use std::fmt;

use bitflags::bitflags;

bitflags! {
    /// Directions a line leaves a cell in.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct LineBits: u8 {
        const UP = 0b0001;
        const DOWN = 0b0010;
        const LEFT = 0b0100;
        const RIGHT = 0b1000;
        const VERTICAL = Self::UP.bits() | Self::DOWN.bits();
        const HORIZONTAL = Self::LEFT.bits() | Self::RIGHT.bits();
    }
}

/// Overall glyph rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GlyphMode {
    /// Unicode box drawing (default).
    #[default]
    Unicode,
    /// ASCII-only fallbacks.
    Ascii,
}

impl GlyphMode {
    pub(crate) fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "unicode" | "uni" | "u" => Some(Self::Unicode),
            "ascii" | "ansi" | "a" => Some(Self::Ascii),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unicode => "unicode",
            Self::Ascii => "ascii",
        }
    }
}

impl fmt::Display for GlyphMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Characters used to draw the history graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphSet {
    pub node: char,
    pub vertical: char,
    pub horizontal: char,
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub tee_down: char,
    pub tee_up: char,
    pub tee_right: char,
    pub tee_left: char,
    pub cross: char,
}

impl GlyphSet {
    /// Rounded box-drawing set.
    pub const UNICODE: Self = Self {
        node: '●',
        vertical: '│',
        horizontal: '─',
        top_left: '╭',
        top_right: '╮',
        bottom_left: '╰',
        bottom_right: '╯',
        tee_down: '┬',
        tee_up: '┴',
        tee_right: '├',
        tee_left: '┤',
        cross: '┼',
    };

    /// ASCII-only set.
    pub const ASCII: Self = Self {
        node: '*',
        vertical: '|',
        horizontal: '-',
        top_left: '+',
        top_right: '+',
        bottom_left: '+',
        bottom_right: '+',
        tee_down: '+',
        tee_up: '+',
        tee_right: '+',
        tee_left: '+',
        cross: '+',
    };

    #[must_use]
    pub const fn for_mode(mode: GlyphMode) -> Self {
        match mode {
            GlyphMode::Unicode => Self::UNICODE,
            GlyphMode::Ascii => Self::ASCII,
        }
    }

    /// Replace the node marker.
    #[must_use]
    pub const fn with_node(mut self, node: char) -> Self {
        self.node = node;
        self
    }

    /// Glyph for a connector cell. An empty mask is a blank cell.
    #[must_use]
    pub fn joint(&self, bits: LineBits) -> char {
        const UP: u8 = LineBits::UP.bits();
        const DOWN: u8 = LineBits::DOWN.bits();
        const LEFT: u8 = LineBits::LEFT.bits();
        const RIGHT: u8 = LineBits::RIGHT.bits();

        match bits.bits() {
            0 => ' ',
            b if b == LEFT | RIGHT || b == LEFT || b == RIGHT => self.horizontal,
            b if b == UP | DOWN || b == UP || b == DOWN => self.vertical,
            b if b == RIGHT | DOWN => self.top_left,
            b if b == LEFT | DOWN => self.top_right,
            b if b == RIGHT | UP => self.bottom_left,
            b if b == LEFT | UP => self.bottom_right,
            b if b == LEFT | RIGHT | DOWN => self.tee_down,
            b if b == LEFT | RIGHT | UP => self.tee_up,
            b if b == UP | DOWN | RIGHT => self.tee_right,
            b if b == UP | DOWN | LEFT => self.tee_left,
            _ => self.cross,
        }
    }
}

impl Default for GlyphSet {
    fn default() -> Self {
        Self::UNICODE
    }
}
