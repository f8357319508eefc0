//! Drag-active visual indicator.
//!
//! Toggles a class on the drop target. Removal after a leave is debounced so
//! crossing between sibling elements does not make the indicator flicker.

use std::cell::RefCell;

use gloo_timers::callback::Timeout;
use web_sys::Element;

pub struct Indicator {
    element: Element,
    class: String,
    debounce_ms: u32,
    pending: RefCell<Option<Timeout>>,
}

impl Indicator {
    pub fn new(element: Element, class: impl Into<String>, debounce_ms: u32) -> Self {
        Self {
            element,
            class: class.into(),
            debounce_ms,
            pending: RefCell::new(None),
        }
    }

    /// Show the indicator, cancelling any scheduled removal.
    pub fn activate(&self) {
        self.cancel_pending();
        let _ = self.element.class_list().add_1(&self.class);
    }

    /// Hide the indicator after the debounce delay.
    pub fn deactivate(&self) {
        if self.debounce_ms == 0 {
            self.deactivate_now();
            return;
        }

        let element = self.element.clone();
        let class = self.class.clone();
        let timeout = Timeout::new(self.debounce_ms, move || {
            let _ = element.class_list().remove_1(&class);
        });

        // Replacing a pending timeout drops, and so cancels, the old one
        *self.pending.borrow_mut() = Some(timeout);
    }

    /// Hide the indicator immediately.
    pub fn deactivate_now(&self) {
        self.cancel_pending();
        let _ = self.element.class_list().remove_1(&self.class);
    }

    pub fn is_active(&self) -> bool {
        self.element.class_list().contains(&self.class)
    }

    fn cancel_pending(&self) {
        // Dropping a Timeout clears it
        drop(self.pending.borrow_mut().take());
    }
}
