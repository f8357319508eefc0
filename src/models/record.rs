use serde::Serialize;

use crate::core::entry::Materialized;

// =============================================================================
// Records
// =============================================================================

/// A resolved file.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRecord<H> {
    /// Path relative to the drop root, taken from the originating entry
    pub full_path: String,
    pub name: String,
    /// Size in bytes
    pub size: u64,
    /// MIME type (empty when the browser could not guess one)
    #[serde(rename = "type")]
    pub mime: String,
    /// Milliseconds since the Unix epoch
    pub last_modified: f64,
    /// Native file handle for reading content
    #[serde(skip)]
    pub handle: H,
}

impl<H> FileRecord<H> {
    /// Build a record from a materialized file and the path of its entry.
    pub fn from_materialized(full_path: String, file: Materialized<H>) -> Self {
        Self {
            full_path,
            name: file.name,
            size: file.size,
            mime: file.mime,
            last_modified: file.last_modified,
            handle: file.handle,
        }
    }

    #[inline]
    pub fn is_file(&self) -> bool {
        true
    }

    #[inline]
    pub fn is_directory(&self) -> bool {
        false
    }

    /// Last modification time as a JavaScript `Date`.
    pub fn last_modified_date(&self) -> js_sys::Date {
        js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(self.last_modified))
    }
}

/// A resolved directory. Always listed after everything it contains.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryRecord {
    pub full_path: String,
    pub name: String,
}

impl DirectoryRecord {
    #[inline]
    pub fn is_file(&self) -> bool {
        false
    }

    #[inline]
    pub fn is_directory(&self) -> bool {
        true
    }
}

/// Either kind of resolved record.
#[derive(Clone, Debug)]
pub enum Record<H> {
    File(FileRecord<H>),
    Directory(DirectoryRecord),
}

impl<H> Record<H> {
    pub fn full_path(&self) -> &str {
        match self {
            Self::File(file) => &file.full_path,
            Self::Directory(dir) => &dir.full_path,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::File(file) => &file.name,
            Self::Directory(dir) => &dir.name,
        }
    }

    #[inline]
    pub fn is_file(&self) -> bool {
        matches!(self, Self::File(_))
    }

    #[inline]
    pub fn is_directory(&self) -> bool {
        matches!(self, Self::Directory(_))
    }

    pub fn as_file(&self) -> Option<&FileRecord<H>> {
        match self {
            Self::File(file) => Some(file),
            Self::Directory(_) => None,
        }
    }
}

// =============================================================================
// Resolution
// =============================================================================

/// Flattened outcome of resolving one drop.
///
/// Top-level entries appear in drop order. Inside a directory subtree,
/// children come first and the directory's own record last.
#[derive(Clone, Debug)]
pub struct Resolution<H> {
    records: Vec<Record<H>>,
}

impl<H> Resolution<H> {
    pub(crate) fn new(records: Vec<Record<H>>) -> Self {
        Self { records }
    }

    /// A resolution with no records.
    pub fn empty() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in flattened order.
    pub fn records(&self) -> &[Record<H>] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record<H>> {
        self.records.iter()
    }

    /// File records only, in flattened order.
    pub fn files(&self) -> impl Iterator<Item = &FileRecord<H>> {
        self.records.iter().filter_map(Record::as_file)
    }

    /// Directory records only, in flattened order.
    pub fn directories(&self) -> impl Iterator<Item = &DirectoryRecord> {
        self.records.iter().filter_map(|record| match record {
            Record::Directory(dir) => Some(dir),
            Record::File(_) => None,
        })
    }

    /// Split into files and directories, each keeping flattened order.
    pub fn into_parts(self) -> (Vec<FileRecord<H>>, Vec<DirectoryRecord>) {
        let mut files = Vec::new();
        let mut directories = Vec::new();
        for record in self.records {
            match record {
                Record::File(file) => files.push(file),
                Record::Directory(dir) => directories.push(dir),
            }
        }
        (files, directories)
    }

    pub fn into_records(self) -> Vec<Record<H>> {
        self.records
    }
}

impl<H> Default for Resolution<H> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<H> IntoIterator for Resolution<H> {
    type Item = Record<H>;
    type IntoIter = std::vec::IntoIter<Record<H>>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a, H> IntoIterator for &'a Resolution<H> {
    type Item = &'a Record<H>;
    type IntoIter = std::slice::Iter<'a, Record<H>>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

// =============================================================================
// Position
// =============================================================================

/// Client coordinates of the pointer at drop time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Pointer position of a drag event.
    pub fn of(event: &web_sys::DragEvent) -> Self {
        Self::new(event.client_x(), event.client_y())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(path: &str, size: u64) -> Record<()> {
        Record::File(FileRecord {
            full_path: path.to_string(),
            name: path.rsplit('/').next().unwrap_or_default().to_string(),
            size,
            mime: "text/plain".to_string(),
            last_modified: 0.0,
            handle: (),
        })
    }

    fn dir(path: &str) -> Record<()> {
        Record::Directory(DirectoryRecord {
            full_path: path.to_string(),
            name: path.rsplit('/').next().unwrap_or_default().to_string(),
        })
    }

    #[test]
    fn test_into_parts_keeps_order() {
        let resolution = Resolution::new(vec![
            file("/a.txt", 1),
            file("/docs/b.txt", 2),
            dir("/docs"),
            file("/c.txt", 3),
        ]);

        let (files, dirs) = resolution.into_parts();
        let paths: Vec<_> = files.iter().map(|f| f.full_path.as_str()).collect();
        assert_eq!(paths, vec!["/a.txt", "/docs/b.txt", "/c.txt"]);
        assert_eq!(dirs.len(), 1);
        assert_eq!(dirs[0].name, "docs");
    }

    #[test]
    fn test_views() {
        let resolution = Resolution::new(vec![file("/docs/b.txt", 2), dir("/docs")]);
        assert_eq!(resolution.len(), 2);
        assert_eq!(resolution.files().count(), 1);
        assert_eq!(resolution.directories().count(), 1);
        assert!(resolution.records()[1].is_directory());
        assert_eq!(resolution.records()[0].name(), "b.txt");
    }

    #[test]
    fn test_empty_resolution() {
        let resolution: Resolution<()> = Resolution::default();
        assert!(resolution.is_empty());
        let (files, dirs) = resolution.into_parts();
        assert!(files.is_empty() && dirs.is_empty());
    }

    #[test]
    fn test_file_record_serializes_without_handle() {
        let Record::File(record) = file("/a.txt", 7) else {
            unreachable!()
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["fullPath"], "/a.txt");
        assert_eq!(json["type"], "text/plain");
        assert_eq!(json["size"], 7);
        assert!(json.get("handle").is_none());
    }
}
