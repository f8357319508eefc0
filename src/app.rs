//! Root application module.
//!
//! Contains the demo App component, the AppContext shared with the drop
//! zone, and the DropReport summarizing the latest drop.

use leptos::prelude::*;

use crate::components::{DropSummary, DropZone};
use crate::config::{APP_NAME, MAX_LISTED_RECORDS};
use crate::models::{DirectoryRecord, DroppedFile, Position};

// ============================================================================
// DropReport
// ============================================================================

/// One listed file of a drop.
#[derive(Clone, Debug, PartialEq)]
pub struct FileRow {
    pub path: String,
    pub size: u64,
    pub mime: String,
    /// Milliseconds since the Unix epoch
    pub modified: f64,
}

/// Display summary of the latest drop.
///
/// Holds plain data only; browser handles stay with the drop callback.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DropReport {
    pub files: Vec<FileRow>,
    /// Files not listed because of `MAX_LISTED_RECORDS`
    pub hidden_files: usize,
    pub total_bytes: u64,
    pub directories: usize,
    pub position: Position,
    pub text: Option<String>,
    pub error: Option<String>,
}

impl DropReport {
    /// Summarize resolved files and directories.
    pub fn from_drop(files: &[DroppedFile], directories: &[DirectoryRecord], position: Position) -> Self {
        Self::from_rows(
            files
                .iter()
                .map(|file| FileRow {
                    path: file.full_path.clone(),
                    size: file.size,
                    mime: file.mime.clone(),
                    modified: file.last_modified,
                })
                .collect(),
            directories.len(),
            position,
        )
    }

    pub fn from_rows(mut rows: Vec<FileRow>, directories: usize, position: Position) -> Self {
        let total_bytes = rows.iter().map(|row| row.size).sum();
        let hidden_files = rows.len().saturating_sub(MAX_LISTED_RECORDS);
        rows.truncate(MAX_LISTED_RECORDS);

        Self {
            files: rows,
            hidden_files,
            total_bytes,
            directories,
            position,
            ..Self::default()
        }
    }

    pub fn text(text: String, position: Position) -> Self {
        Self {
            text: Some(text),
            position,
            ..Self::default()
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            ..Self::default()
        }
    }

    /// Total number of files, listed or not.
    pub fn file_count(&self) -> usize {
        self.files.len() + self.hidden_files
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root and read by the drop zone and the summary panel.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// A handleable drag is over the drop zone.
    pub dragging: RwSignal<bool>,

    /// Summary of the most recent drop, if any.
    pub last_drop: RwSignal<Option<DropReport>>,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            dragging: RwSignal::new(false),
            last_drop: RwSignal::new(None),
        }
    }

    pub fn report(&self, report: DropReport) {
        self.last_drop.set(Some(report));
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_context(AppContext::new());

    view! {
        <main style="
            min-height: 100vh;
            padding: 2rem;
            background: #0a0e14;
            color: #c5c8c6;
            font-family: 'Courier New', monospace;
        ">
            <h1 style="color: #4a90e2; font-size: 1.25rem;">{APP_NAME}</h1>
            <DropZone />
            <DropSummary />
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(path: &str, size: u64) -> FileRow {
        FileRow {
            path: path.to_string(),
            size,
            mime: String::new(),
            modified: 0.0,
        }
    }

    #[test]
    fn test_report_totals() {
        let report = DropReport::from_rows(vec![row("/a", 10), row("/d/b", 5)], 1, Position::new(3, 4));
        assert_eq!(report.total_bytes, 15);
        assert_eq!(report.file_count(), 2);
        assert_eq!(report.directories, 1);
        assert_eq!(report.position, Position::new(3, 4));
        assert!(report.error.is_none());
    }

    #[test]
    fn test_report_truncates_listing() {
        let rows = (0..MAX_LISTED_RECORDS + 5)
            .map(|i| row(&format!("/f{i}"), 1))
            .collect();
        let report = DropReport::from_rows(rows, 0, Position::default());
        assert_eq!(report.files.len(), MAX_LISTED_RECORDS);
        assert_eq!(report.hidden_files, 5);
        assert_eq!(report.file_count(), MAX_LISTED_RECORDS + 5);
        assert_eq!(report.total_bytes, (MAX_LISTED_RECORDS + 5) as u64);
    }

    #[test]
    fn test_failed_report() {
        let report = DropReport::failed("boom");
        assert_eq!(report.error.as_deref(), Some("boom"));
        assert_eq!(report.file_count(), 0);
    }
}
