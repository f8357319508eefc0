//! Drag-and-drop ingestion of files, directory trees and text for browser
//! elements.
//!
//! ```ignore
//! use dropzone::{DragDrop, DragDropOptions};
//!
//! let zone = DragDrop::attach(
//!     "#target",
//!     DragDropOptions::with_drop(|files, pos, _file_list, _directories| {
//!         for file in &files {
//!             web_sys::console::log_1(&file.full_path.clone().into());
//!         }
//!     }),
//! )?;
//! zone.forget();
//! ```

pub mod app;
mod bindings;
pub mod components;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;

pub use bindings::drag_drop;
pub use crate::core::error::{AttachError, ReadError, ResolveError};
pub use crate::core::{DragDrop, Target, resolve};
pub use models::{
    DirectoryRecord, DragDropOptions, DroppedFile, EmptyDropPolicy, FileRecord, Position, Record,
    Resolution,
};
