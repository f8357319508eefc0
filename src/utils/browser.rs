//! Browser implementation of [`Entry`] over the File and Directory Entries API.
//!
//! `FileSystemFileEntry.file()` and `FileSystemDirectoryReader.readEntries()`
//! report through success/error callbacks. Both are wrapped in a
//! [`Promise`] and awaited through [`JsFuture`].

use js_sys::{Array, Promise};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{DataTransfer, File, FileSystemEntry};

use crate::config::FILE_ITEM_KIND;
use crate::core::entry::{DirectoryReader, Entry, EntryKind, Materialized};
use crate::core::handleable::{ItemKind, TransferSummary};
use crate::utils::dom::{call_method, describe_js_error};

/// Call a callback-style method and await whichever callback fires.
///
/// The method receives `(resolve, reject)` as its success and error
/// callbacks. A synchronous throw rejects the promise.
async fn callback_call(target: &JsValue, method: &str) -> Result<JsValue, String> {
    let promise = Promise::new(&mut |resolve, reject| {
        let args = Array::of2(&resolve, &reject);
        if let Err(err) = call_method(target, method, &args) {
            let _ = reject.call1(&JsValue::UNDEFINED, &err);
        }
    });

    JsFuture::from(promise)
        .await
        .map_err(|err| describe_js_error(&err))
}

// =============================================================================
// Entries
// =============================================================================

/// A dropped `FileSystemEntry`.
#[derive(Clone, Debug)]
pub struct BrowserEntry(FileSystemEntry);

impl BrowserEntry {
    pub fn new(entry: FileSystemEntry) -> Self {
        Self(entry)
    }

    pub fn inner(&self) -> &FileSystemEntry {
        &self.0
    }
}

impl Entry for BrowserEntry {
    type Handle = File;
    type Reader = BrowserReader;
    type Error = String;

    fn kind(&self) -> EntryKind {
        if self.0.is_file() {
            EntryKind::File
        } else if self.0.is_directory() {
            EntryKind::Directory
        } else {
            EntryKind::Other
        }
    }

    fn name(&self) -> String {
        self.0.name()
    }

    fn full_path(&self) -> String {
        self.0.full_path()
    }

    async fn materialize(&self) -> Result<Materialized<File>, String> {
        let value = callback_call(&self.0, "file").await?;
        let file: File = value
            .dyn_into()
            .map_err(|_| "entry did not produce a File".to_string())?;

        Ok(Materialized {
            name: file.name(),
            size: file.size() as u64,
            mime: file.type_(),
            last_modified: file.last_modified(),
            handle: file,
        })
    }

    fn reader(&self) -> Result<BrowserReader, String> {
        call_method(&self.0, "createReader", &Array::new())
            .map(BrowserReader)
            .map_err(|err| describe_js_error(&err))
    }
}

/// A `FileSystemDirectoryReader`.
pub struct BrowserReader(JsValue);

impl DirectoryReader for BrowserReader {
    type Entry = BrowserEntry;

    async fn read_batch(&mut self) -> Result<Vec<BrowserEntry>, String> {
        let batch = callback_call(&self.0, "readEntries").await?;
        Ok(Array::from(&batch)
            .iter()
            .map(|value| BrowserEntry(value.unchecked_into()))
            .collect())
    }
}

// =============================================================================
// DataTransfer
// =============================================================================

/// Entries of the `file` items of a transfer, in item order.
///
/// Must be called while the drop event is being dispatched; the items list
/// is emptied once the handler returns.
pub fn transfer_entries(transfer: &DataTransfer) -> Vec<BrowserEntry> {
    let items = transfer.items();
    (0..items.length())
        .filter_map(|index| items.get(index))
        .filter(|item| item.kind() == FILE_ITEM_KIND)
        .filter_map(|item| item.webkit_get_as_entry().ok().flatten())
        .map(BrowserEntry)
        .collect()
}

/// Declared item kinds and types of a transfer.
pub fn summarize(transfer: &DataTransfer) -> TransferSummary {
    let items = transfer.items();
    let kinds = (0..items.length())
        .filter_map(|index| items.get(index))
        .map(|item| ItemKind::parse(&item.kind()))
        .collect();
    let types = transfer
        .types()
        .iter()
        .filter_map(|value| value.as_string())
        .collect();

    TransferSummary::new(kinds, types)
}
