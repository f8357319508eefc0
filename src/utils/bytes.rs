//! Reading dropped files into memory.

use std::rc::Rc;

use futures::future::try_join_all;
use js_sys::{ArrayBuffer, Uint8Array};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{JsFuture, spawn_local};

use crate::core::error::{AttachError, ReadError};
use crate::core::{DragDrop, Target};
use crate::models::{DragDropOptions, DroppedFile, Position};
use crate::utils::dom::{self, describe_js_error};

/// A dropped file with its content.
#[derive(Clone, Debug)]
pub struct DroppedBytes {
    pub full_path: String,
    pub name: String,
    pub size: u64,
    pub mime: String,
    /// Milliseconds since the Unix epoch
    pub last_modified: f64,
    pub bytes: Vec<u8>,
}

/// Read one resolved file.
pub async fn read_file(file: &DroppedFile) -> Result<DroppedBytes, ReadError> {
    let buffer = JsFuture::from(file.handle.array_buffer())
        .await
        .map_err(|err| ReadError::Read {
            name: file.name.clone(),
            reason: describe_js_error(&err),
        })?
        .dyn_into::<ArrayBuffer>()
        .map_err(|_| ReadError::InvalidContent {
            name: file.name.clone(),
        })?;

    Ok(DroppedBytes {
        full_path: file.full_path.clone(),
        name: file.name.clone(),
        size: file.size,
        mime: file.mime.clone(),
        last_modified: file.last_modified,
        bytes: Uint8Array::new(&buffer).to_vec(),
    })
}

/// Read every file concurrently. Output keeps input order; any failed read
/// fails the whole batch.
pub async fn read_files(files: &[DroppedFile]) -> Result<Vec<DroppedBytes>, ReadError> {
    try_join_all(files.iter().map(read_file)).await
}

/// Attach a drop zone that hands over file contents instead of handles.
///
/// Read failures are logged; the callback only fires when every file was
/// read.
pub fn drop_as_bytes(
    target: impl Into<Target>,
    callback: impl Fn(Vec<DroppedBytes>, Position) + 'static,
) -> Result<DragDrop, AttachError> {
    let callback = Rc::new(callback);
    let options = DragDropOptions::with_drop(move |files, position, _, _| {
        let callback = Rc::clone(&callback);
        spawn_local(async move {
            match read_files(&files).await {
                Ok(contents) => callback(contents, position),
                Err(err) => dom::error(&err.to_string()),
            }
        });
    });

    DragDrop::attach(target, options)
}
