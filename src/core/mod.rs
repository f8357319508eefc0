//! Core drag-and-drop logic.
//!
//! This module provides:
//! - [`resolve`] expanding dropped entries into flat record lists
//! - [`classify`] deciding whether a drag payload is handleable
//! - [`DragState`] nested enter/leave bookkeeping
//! - [`DragDrop`] binding all of the above to a DOM element

mod controller;
pub mod entry;
pub mod error;
pub mod handleable;
mod resolver;
pub mod state;

pub use controller::{DragDrop, Target};
pub use entry::{DirectoryReader, Entry, EntryKind, Materialized};
pub use handleable::{Capabilities, Handleable, ItemKind, TransferSummary, classify};
pub use resolver::resolve;
pub use state::DragState;
