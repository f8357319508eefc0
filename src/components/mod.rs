//! UI components built with Leptos.
//!
//! - [`DropZone`] - element wired to [`DragDrop`](crate::core::DragDrop)
//! - [`DropSummary`] - listing of the latest drop

mod drop_zone;
mod summary;

pub use drop_zone::DropZone;
pub use summary::DropSummary;
