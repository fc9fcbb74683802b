// SPDX-License-Identifier: Apache-2.0
// Copyright © 2025 ParkSeg Developers. All Rights Reserved.

/// Error type for parking-lot dataset conversion operations.
///
/// Covers the failure modes of a conversion run, from filesystem issues to
/// malformed label records. Unknown categories and degenerate polygons are
/// not errors; they are skipped during assembly.
#[derive(Debug)]
pub enum Error {
    /// An I/O error occurred during file operations.
    IoError(std::io::Error),
    /// JSON serialization or deserialization error.
    JsonError(serde_json::Error),
    /// A flat coordinate sequence was not a valid x,y alternation.
    InvalidPolygon(String),
    /// A label record violated the input format contract.
    MalformedRecord(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::IoError(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::JsonError(err)
    }
}

impl From<walkdir::Error> for Error {
    fn from(err: walkdir::Error) -> Self {
        Error::IoError(err.into())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::IoError(e) => write!(f, "I/O error: {}", e),
            Error::JsonError(e) => write!(f, "JSON error: {}", e),
            Error::InvalidPolygon(s) => write!(f, "Invalid polygon: {}", s),
            Error::MalformedRecord(s) => write!(f, "Malformed label record: {}", s),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::IoError(e) => Some(e),
            Error::JsonError(e) => Some(e),
            _ => None,
        }
    }
}
