//! Error types for the drop zone.
//!
//! Each failure domain gets its own enum:
//!
//! - [`AttachError`] - the drop target could not be found or bound
//! - [`ResolveError`] - a dropped entry could not be materialized or listed
//! - [`ReadError`] - a resolved file could not be read into memory
//!
//! Payloads the handleability heuristic cannot make sense of are not errors;
//! they are simply ignored.

use thiserror::Error;

/// Errors raised synchronously while attaching to a drop target.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttachError {
    /// Browser window not available
    #[error("Browser window not available")]
    NoWindow,
    /// Window has no document
    #[error("Document not available")]
    NoDocument,
    /// Selector was rejected by `querySelector`
    #[error("\"{0}\" is not a valid selector")]
    InvalidSelector(String),
    /// Selector matched no element
    #[error("\"{0}\" does not match any HTML elements")]
    NoMatch(String),
    /// Listener registration failed
    #[error("Failed to register \"{0}\" listener")]
    ListenerFailed(&'static str),
}

/// Errors that abort a tree resolution.
///
/// Only the first failure observed is reported; siblings still in flight are
/// dropped along with their results.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// A file entry could not be turned into a file handle.
    #[error("failed to read file {path}: {reason}")]
    Materialize { path: String, reason: String },
    /// A directory entry could not be listed.
    #[error("failed to list directory {path}: {reason}")]
    Listing { path: String, reason: String },
}

impl ResolveError {
    /// Full path of the entry that failed.
    pub fn path(&self) -> &str {
        match self {
            Self::Materialize { path, .. } | Self::Listing { path, .. } => path,
        }
    }
}

/// Errors while reading resolved files into byte buffers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReadError {
    /// The browser rejected the read.
    #[error("failed to read {name}: {reason}")]
    Read { name: String, reason: String },
    /// The read completed with something other than an `ArrayBuffer`.
    #[error("invalid content read from {name}")]
    InvalidContent { name: String },
}
