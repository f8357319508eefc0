//! Drop zone configuration.
//!
//! Centralizes the constants shared by the controller, the handleability
//! heuristic and the demo application.

// =============================================================================
// Events
// =============================================================================

/// DOM events a drop zone listens to.
pub mod events {
    pub const DRAG_ENTER: &str = "dragenter";
    pub const DRAG_OVER: &str = "dragover";
    pub const DRAG_LEAVE: &str = "dragleave";
    pub const DROP: &str = "drop";
}

/// Drop effect announced on `dragover`.
///
/// `copy` tells the OS the drop leaves the source untouched.
pub const DROP_EFFECT: &str = "copy";

// =============================================================================
// Payload Detection
// =============================================================================

/// `DataTransfer.types` token for file payloads.
pub const FILES_TYPE: &str = "Files";

/// `DataTransfer.types` prefix for text payloads.
pub const TEXT_TYPE_PREFIX: &str = "text/";

/// Format passed to `DataTransfer.getData` for dropped text.
pub const TEXT_FORMAT: &str = "text";

/// `DataTransferItem.kind` value of items that can carry entries.
pub const FILE_ITEM_KIND: &str = "file";

// =============================================================================
// Visual Indicator
// =============================================================================

/// Class added to the target while a handleable drag is over it.
pub const DRAG_CLASS: &str = "drag";

/// Delay before the indicator is removed after a leave, in milliseconds.
///
/// Absorbs flicker when the pointer crosses sibling boundaries.
pub const INDICATOR_DEBOUNCE_MS: u32 = 50;

// =============================================================================
// Demo Application
// =============================================================================

/// Application name displayed in the demo header.
pub const APP_NAME: &str = "dropzone";

/// Maximum number of records listed per drop in the demo.
pub const MAX_LISTED_RECORDS: usize = 200;
