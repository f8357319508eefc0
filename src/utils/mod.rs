//! Browser-facing utilities.
//!
//! Provides:
//! - [`BrowserEntry`] - [`Entry`](crate::core::Entry) over `FileSystemEntry`
//! - [`Indicator`] - debounced drag class toggle
//! - [`read_files`], [`drop_as_bytes`] - reading dropped files into memory
//! - [`format_size`] - display helpers

pub mod browser;
mod bytes;
pub mod dom;
pub mod format;
mod indicator;

pub use browser::{BrowserEntry, BrowserReader};
pub use bytes::{DroppedBytes, drop_as_bytes, read_file, read_files};
pub use format::format_size;
pub use indicator::Indicator;
