//! Abstractions over dropped file-system entries.
//!
//! The browser hands out `FileSystemEntry` objects for dropped items. The
//! resolver only needs a handful of capabilities from them, captured here as
//! the [`Entry`] and [`DirectoryReader`] traits so the traversal can run
//! against anything that behaves like an entry.

use std::fmt;

/// Discriminant reported by an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    /// Neither a file nor a directory. Skipped during resolution.
    Other,
}

impl EntryKind {
    /// Whether the resolver knows how to expand this kind.
    #[inline]
    pub fn is_resolvable(self) -> bool {
        matches!(self, Self::File | Self::Directory)
    }
}

/// File metadata produced by materializing a file entry.
///
/// Carries no path; the resolver stamps the path from the originating entry.
#[derive(Debug, Clone)]
pub struct Materialized<H> {
    pub name: String,
    pub size: u64,
    /// MIME type, empty when unknown
    pub mime: String,
    /// Milliseconds since the Unix epoch
    pub last_modified: f64,
    /// Native handle used to read the file content
    pub handle: H,
}

/// One dropped item before resolution.
#[allow(async_fn_in_trait)]
pub trait Entry: Sized + 'static {
    /// Handle to the materialized file content.
    type Handle: 'static;
    /// Reader returned for directory entries.
    type Reader: DirectoryReader<Entry = Self>;
    /// Error reported by materialization and listing.
    type Error: fmt::Display;

    fn kind(&self) -> EntryKind;

    fn name(&self) -> String;

    /// Slash-separated path relative to the drop root (e.g. `/photos/a.png`).
    fn full_path(&self) -> String;

    /// Turn a file entry into a file handle with metadata.
    async fn materialize(&self) -> Result<Materialized<Self::Handle>, Self::Error>;

    /// Open a reader over a directory entry's children.
    fn reader(&self) -> Result<Self::Reader, Self::Error>;
}

/// Batched listing of a directory's immediate children.
///
/// Each call returns the next batch; an empty batch marks the end of the
/// listing. A single call is not guaranteed to return every child.
#[allow(async_fn_in_trait)]
pub trait DirectoryReader: 'static {
    type Entry: Entry;

    async fn read_batch(&mut self) -> Result<Vec<Self::Entry>, <Self::Entry as Entry>::Error>;
}
