use std::fmt;
use std::rc::Rc;

use web_sys::{DragEvent, File, FileList};

use crate::config::{DRAG_CLASS, INDICATOR_DEBOUNCE_MS};
use crate::core::error::ResolveError;
use crate::core::handleable::Capabilities;
use crate::models::{DirectoryRecord, FileRecord, Position};

// =============================================================================
// Callbacks
// =============================================================================

/// A resolved browser file.
pub type DroppedFile = FileRecord<File>;

/// Called with resolved files, drop position, the raw `FileList` and the
/// resolved directories.
pub type DropCallback = Rc<dyn Fn(Vec<DroppedFile>, Position, Option<FileList>, Vec<DirectoryRecord>)>;

/// Called with dropped text and the drop position.
pub type TextCallback = Rc<dyn Fn(String, Position)>;

/// Called with the raw drag event.
pub type EventCallback = Rc<dyn Fn(&DragEvent)>;

/// Called when resolving a drop fails.
pub type ErrorCallback = Rc<dyn Fn(ResolveError)>;

// =============================================================================
// Policy
// =============================================================================

/// What to do when a drop resolves to no files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EmptyDropPolicy {
    /// Do not call the drop listener.
    #[default]
    Skip,
    /// Call the drop listener with empty lists.
    Invoke,
}

impl EmptyDropPolicy {
    /// Whether a drop that resolved `file_count` files reaches the listener.
    #[inline]
    pub fn delivers(self, file_count: usize) -> bool {
        file_count > 0 || self == Self::Invoke
    }
}

// =============================================================================
// Options
// =============================================================================

/// Listeners and settings for a drop zone.
///
/// Every listener is optional. Without `on_drop` dropped files are never
/// traversed; without `on_drop_text` dropped text is ignored.
#[derive(Clone)]
pub struct DragDropOptions {
    pub on_drop: Option<DropCallback>,
    pub on_drop_text: Option<TextCallback>,
    pub on_drag_enter: Option<EventCallback>,
    pub on_drag_over: Option<EventCallback>,
    pub on_drag_leave: Option<EventCallback>,
    /// Receives resolution failures. Without it they are logged.
    pub on_error: Option<ErrorCallback>,
    pub empty_drop: EmptyDropPolicy,
    /// Class toggled on the target while a drag is over it
    pub drag_class: String,
    /// Delay before removing the class after a leave; 0 removes immediately
    pub indicator_debounce_ms: u32,
}

impl DragDropOptions {
    pub fn new() -> Self {
        Self {
            on_drop: None,
            on_drop_text: None,
            on_drag_enter: None,
            on_drag_over: None,
            on_drag_leave: None,
            on_error: None,
            empty_drop: EmptyDropPolicy::default(),
            drag_class: DRAG_CLASS.to_string(),
            indicator_debounce_ms: INDICATOR_DEBOUNCE_MS,
        }
    }

    /// Options with only a file drop listener.
    pub fn with_drop(
        callback: impl Fn(Vec<DroppedFile>, Position, Option<FileList>, Vec<DirectoryRecord>) + 'static,
    ) -> Self {
        Self::new().on_drop(callback)
    }

    pub fn on_drop(
        mut self,
        callback: impl Fn(Vec<DroppedFile>, Position, Option<FileList>, Vec<DirectoryRecord>) + 'static,
    ) -> Self {
        self.on_drop = Some(Rc::new(callback));
        self
    }

    pub fn on_drop_text(mut self, callback: impl Fn(String, Position) + 'static) -> Self {
        self.on_drop_text = Some(Rc::new(callback));
        self
    }

    pub fn on_drag_enter(mut self, callback: impl Fn(&DragEvent) + 'static) -> Self {
        self.on_drag_enter = Some(Rc::new(callback));
        self
    }

    pub fn on_drag_over(mut self, callback: impl Fn(&DragEvent) + 'static) -> Self {
        self.on_drag_over = Some(Rc::new(callback));
        self
    }

    pub fn on_drag_leave(mut self, callback: impl Fn(&DragEvent) + 'static) -> Self {
        self.on_drag_leave = Some(Rc::new(callback));
        self
    }

    pub fn on_error(mut self, callback: impl Fn(ResolveError) + 'static) -> Self {
        self.on_error = Some(Rc::new(callback));
        self
    }

    pub fn empty_drop(mut self, policy: EmptyDropPolicy) -> Self {
        self.empty_drop = policy;
        self
    }

    pub fn drag_class(mut self, class: impl Into<String>) -> Self {
        self.drag_class = class.into();
        self
    }

    pub fn indicator_debounce_ms(mut self, ms: u32) -> Self {
        self.indicator_debounce_ms = ms;
        self
    }

    /// Capabilities implied by the registered listeners.
    pub fn capabilities(&self) -> Capabilities {
        Capabilities {
            files: self.on_drop.is_some(),
            text: self.on_drop_text.is_some(),
        }
    }
}

impl Default for DragDropOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DragDropOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DragDropOptions")
            .field("on_drop", &self.on_drop.is_some())
            .field("on_drop_text", &self.on_drop_text.is_some())
            .field("on_drag_enter", &self.on_drag_enter.is_some())
            .field("on_drag_over", &self.on_drag_over.is_some())
            .field("on_drag_leave", &self.on_drag_leave.is_some())
            .field("on_error", &self.on_error.is_some())
            .field("empty_drop", &self.empty_drop)
            .field("drag_class", &self.drag_class)
            .field("indicator_debounce_ms", &self.indicator_debounce_ms)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = DragDropOptions::default();
        assert_eq!(options.capabilities(), Capabilities::default());
        assert_eq!(options.empty_drop, EmptyDropPolicy::Skip);
        assert_eq!(options.drag_class, "drag");
        assert_eq!(options.indicator_debounce_ms, 50);
    }

    #[test]
    fn test_capabilities_follow_listeners() {
        let files = DragDropOptions::with_drop(|_, _, _, _| {});
        assert_eq!(
            files.capabilities(),
            Capabilities {
                files: true,
                text: false
            }
        );

        let both = files.on_drop_text(|_, _| {});
        assert_eq!(
            both.capabilities(),
            Capabilities {
                files: true,
                text: true
            }
        );

        let enter_only = DragDropOptions::new().on_drag_enter(|_| {});
        assert_eq!(enter_only.capabilities(), Capabilities::default());
    }

    #[test]
    fn test_empty_drop_policy() {
        assert!(!EmptyDropPolicy::Skip.delivers(0));
        assert!(EmptyDropPolicy::Skip.delivers(2));
        assert!(EmptyDropPolicy::Invoke.delivers(0));
    }

    #[test]
    fn test_debug_hides_closures() {
        let options = DragDropOptions::new().on_drop_text(|_, _| {});
        let debug = format!("{:?}", options);
        assert!(debug.contains("on_drop_text: true"));
        assert!(debug.contains("on_drop: false"));
    }
}
