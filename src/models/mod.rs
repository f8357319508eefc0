//! Data models for drop results and drop zone configuration.
//!
//! Contains:
//! - [`FileRecord`], [`DirectoryRecord`], [`Record`] - resolved entries
//! - [`Resolution`] - flattened, ordered result of one drop
//! - [`Position`] - pointer coordinates at drop time
//! - [`DragDropOptions`], [`EmptyDropPolicy`] - listeners and settings

mod options;
mod record;

pub use options::{
    DragDropOptions, DropCallback, DroppedFile, EmptyDropPolicy, ErrorCallback, EventCallback,
    TextCallback,
};
pub use record::{DirectoryRecord, FileRecord, Position, Record, Resolution};
