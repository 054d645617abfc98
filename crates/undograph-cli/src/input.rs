#![forbid(unsafe_code)]

//! JSON history snapshots.
//!
//! Two document shapes are accepted: a flat array of records, or a nested
//! history object with `seq_cur` and `entries`.

use std::fmt;
use std::io::{self, Read};

use serde::Deserialize;
use undograph::{NestedHistory, RawRecord, records_from_nested};

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Document {
    Flat(Vec<RawRecord>),
    Nested(NestedHistory),
}

/// Failure to read or decode a snapshot.
#[derive(Debug)]
pub enum InputError {
    Io(io::Error),
    Json(serde_json::Error),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "read failed: {err}"),
            Self::Json(err) => write!(f, "invalid history JSON: {err}"),
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Json(err) => Some(err),
        }
    }
}

impl From<io::Error> for InputError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for InputError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

/// Decode a snapshot from JSON text.
pub fn parse_records(text: &str) -> Result<Vec<RawRecord>, InputError> {
    let records = match serde_json::from_str::<Document>(text)? {
        Document::Flat(records) => records,
        Document::Nested(history) => records_from_nested(&history),
    };
    tracing::debug!(records = records.len(), "snapshot decoded");
    Ok(records)
}

/// Read and decode a whole snapshot.
pub fn read_records<R: Read>(mut reader: R) -> Result<Vec<RawRecord>, InputError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_records(&text)
}
