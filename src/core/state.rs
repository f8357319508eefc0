//! Enter/leave bookkeeping for a drop target.
//!
//! Browsers fire `dragenter`/`dragleave` pairs every time the pointer crosses
//! a child element inside the target. [`DragState`] counts the nested enters
//! so the caller sees exactly one enter and one leave per visit.

/// Result of a `dragenter` transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Enter {
    /// Pointer entered the target; notify and show the indicator.
    Entered,
    /// Enter from a nested child; ignore.
    Nested,
}

/// Result of a `dragleave` transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Leave {
    /// Pointer left the target; notify and hide the indicator.
    Left,
    /// Matches an earlier nested enter; ignore.
    Nested,
}

/// Drag state of one target: `entered` plus the count of nested enters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DragState {
    entered: bool,
    ignored_enters: u32,
}

impl DragState {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_entered(&self) -> bool {
        self.entered
    }

    #[inline]
    pub fn ignored_enters(&self) -> u32 {
        self.ignored_enters
    }

    pub fn enter(&mut self) -> Enter {
        if self.entered {
            self.ignored_enters += 1;
            return Enter::Nested;
        }
        self.entered = true;
        Enter::Entered
    }

    pub fn leave(&mut self) -> Leave {
        if self.ignored_enters > 0 {
            self.ignored_enters -= 1;
            return Leave::Nested;
        }
        self.entered = false;
        Leave::Left
    }

    /// Back to idle, whatever the previous state. Used on drop.
    pub fn reset(&mut self) {
        self.entered = false;
        self.ignored_enters = 0;
    }
}
