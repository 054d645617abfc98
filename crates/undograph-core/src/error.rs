#![forbid(unsafe_code)]

//! Error taxonomy shared by ingest, layout and render.

use std::fmt;

/// Stable machine-readable error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Malformed,
    Empty,
    InvalidStyle,
    NotLaidOut,
}

impl ErrorCode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Malformed => "undograph/error/malformed",
            Self::Empty => "undograph/error/empty",
            Self::InvalidStyle => "undograph/error/invalid-style",
            Self::NotLaidOut => "undograph/error/not-laid-out",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a history snapshot could not be turned into a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Malformed {
    /// A record names a parent that is not in the snapshot.
    DanglingParent { seq: u64, parent: u64 },
    /// Two records share the same sequence number.
    DuplicateSeq { seq: u64 },
    /// The record is part of a parent cycle and never reaches the root.
    Cycle { seq: u64 },
    /// A non-root record has no parent.
    MissingParent { seq: u64 },
    /// The root record (seq 0) declares a parent.
    RootHasParent { parent: u64 },
    /// More than one record is flagged as current.
    MultipleCurrent { first: u64, second: u64 },
}

impl fmt::Display for Malformed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::DanglingParent { seq, parent } => {
                write!(f, "seq {seq} refers to missing parent {parent}")
            }
            Self::DuplicateSeq { seq } => write!(f, "seq {seq} appears more than once"),
            Self::Cycle { seq } => write!(f, "seq {seq} is part of a parent cycle"),
            Self::MissingParent { seq } => write!(f, "seq {seq} has no parent"),
            Self::RootHasParent { parent } => write!(f, "root declares parent {parent}"),
            Self::MultipleCurrent { first, second } => {
                write!(f, "both seq {first} and seq {second} are marked current")
            }
        }
    }
}

/// Errors returned by the history graph engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The snapshot does not describe a single rooted tree.
    MalformedHistory(Malformed),
    /// No root could be produced.
    EmptyHistory,
    /// Unrecognized render style name.
    InvalidStyle(String),
    /// Render was called on a tree that has not been laid out.
    NotLaidOut,
}

impl Error {
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::MalformedHistory(_) => ErrorCode::Malformed,
            Self::EmptyHistory => ErrorCode::Empty,
            Self::InvalidStyle(_) => ErrorCode::InvalidStyle,
            Self::NotLaidOut => ErrorCode::NotLaidOut,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedHistory(reason) => write!(f, "malformed history: {reason}"),
            Self::EmptyHistory => f.write_str("empty history: no root state"),
            Self::InvalidStyle(name) => {
                write!(f, "invalid style {name:?} (expected spaced|compact)")
            }
            Self::NotLaidOut => f.write_str("tree has not been laid out"),
        }
    }
}

impl std::error::Error for Error {}

impl From<Malformed> for Error {
    fn from(reason: Malformed) -> Self {
        Self::MalformedHistory(reason)
    }
}

/// Result alias used throughout the engine.
pub type Result<T> = std::result::Result<T, Error>;
