//! Drop zone controller.
//!
//! Binds the four drag events of one element to [`DragState`], the
//! handleability heuristic, the visual indicator and the tree resolver.
//!
//! # Lifecycle
//!
//! [`DragDrop::attach`] registers the listeners and returns the handle that
//! owns them. [`DragDrop::detach`] (or dropping the handle) unregisters them
//! and clears the indicator. [`DragDrop::forget`] leaks the handle so the
//! listeners live as long as the page.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen_futures::spawn_local;
use web_sys::{DragEvent, Element, HtmlElement};

use crate::config::{DROP_EFFECT, TEXT_FORMAT, events};
use crate::core::error::AttachError;
use crate::core::handleable::classify;
use crate::core::resolver::deliver;
use crate::core::state::{DragState, Enter, Leave};
use crate::models::{DragDropOptions, Position};
use crate::utils::browser::{summarize, transfer_entries};
use crate::utils::dom;
use crate::utils::Indicator;

// =============================================================================
// Target
// =============================================================================

/// Element a drop zone attaches to.
#[derive(Clone, Debug)]
pub enum Target {
    /// First element matching a CSS selector
    Selector(String),
    Element(Element),
}

impl From<&str> for Target {
    fn from(selector: &str) -> Self {
        Self::Selector(selector.to_string())
    }
}

impl From<String> for Target {
    fn from(selector: String) -> Self {
        Self::Selector(selector)
    }
}

impl From<Element> for Target {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

impl From<HtmlElement> for Target {
    fn from(element: HtmlElement) -> Self {
        Self::Element(element.into())
    }
}

impl Target {
    fn resolve(self) -> Result<Element, AttachError> {
        match self {
            Self::Selector(selector) => dom::query(&selector),
            Self::Element(element) => Ok(element),
        }
    }
}

// =============================================================================
// Zone
// =============================================================================

/// State shared by the listeners of one drop zone.
struct Zone {
    element: Element,
    options: DragDropOptions,
    state: RefCell<DragState>,
    indicator: Indicator,
}

impl Zone {
    fn is_handleable(&self, event: &DragEvent) -> bool {
        event.data_transfer().is_some_and(|transfer| {
            classify(&summarize(&transfer), self.options.capabilities()).is_handleable()
        })
    }

    fn on_drag_enter(&self, event: DragEvent) {
        event.stop_propagation();
        event.prevent_default();

        if !self.is_handleable(&event) {
            return;
        }

        let transition = self.state.borrow_mut().enter();
        if transition == Enter::Nested {
            return;
        }

        if let Some(callback) = &self.options.on_drag_enter {
            callback(&event);
        }
        self.indicator.activate();
    }

    fn on_drag_over(&self, event: DragEvent) {
        event.stop_propagation();
        event.prevent_default();

        if !self.is_handleable(&event) {
            return;
        }

        if let Some(callback) = &self.options.on_drag_over {
            callback(&event);
        }
        if let Some(transfer) = event.data_transfer() {
            transfer.set_drop_effect(DROP_EFFECT);
        }
    }

    fn on_drag_leave(&self, event: DragEvent) {
        event.stop_propagation();
        event.prevent_default();

        if !self.is_handleable(&event) {
            return;
        }

        let transition = self.state.borrow_mut().leave();
        if transition == Leave::Nested {
            return;
        }

        if let Some(callback) = &self.options.on_drag_leave {
            callback(&event);
        }
        self.indicator.deactivate();
    }

    fn on_drop(&self, event: DragEvent) {
        event.stop_propagation();
        event.prevent_default();

        // A drop ends the drag session whatever state we believed we were in
        if let Some(callback) = &self.options.on_drag_leave {
            callback(&event);
        }
        self.indicator.deactivate_now();
        self.state.borrow_mut().reset();

        let position = Position::of(&event);
        let Some(transfer) = event.data_transfer() else {
            return;
        };

        if let Some(on_text) = &self.options.on_drop_text
            && let Ok(text) = transfer.get_data(TEXT_FORMAT)
            && !text.is_empty()
        {
            on_text(text, position);
        }

        let Some(on_drop) = self.options.on_drop.clone() else {
            return;
        };

        // Items and the file list are only readable during dispatch
        let entries = transfer_entries(&transfer);
        let file_list = transfer.files();
        let policy = self.options.empty_drop;
        let on_error = self.options.on_error.clone();

        spawn_local(deliver(
            entries,
            policy,
            move |files, directories| on_drop(files, position, file_list, directories),
            move |err| match on_error {
                Some(callback) => callback(err),
                None => dom::error(&format!("drop failed: {}", err)),
            },
        ));
    }
}

// =============================================================================
// DragDrop
// =============================================================================

type Listener = Closure<dyn FnMut(DragEvent)>;

/// Drag-and-drop behavior attached to one element.
pub struct DragDrop {
    zone: Rc<Zone>,
    listeners: Vec<(&'static str, Listener)>,
    detached: Cell<bool>,
}

impl DragDrop {
    /// Attach drag-and-drop handling to `target`.
    ///
    /// Fails when a selector target matches nothing.
    pub fn attach(target: impl Into<Target>, options: DragDropOptions) -> Result<Self, AttachError> {
        let element = target.into().resolve()?;
        let indicator = Indicator::new(
            element.clone(),
            options.drag_class.clone(),
            options.indicator_debounce_ms,
        );

        let zone = Rc::new(Zone {
            element,
            options,
            state: RefCell::new(DragState::new()),
            indicator,
        });

        let mut drag_drop = Self {
            zone,
            listeners: Vec::with_capacity(4),
            detached: Cell::new(false),
        };

        // On failure the partially attached handle is dropped, which detaches it
        drag_drop.listen(events::DRAG_ENTER, Zone::on_drag_enter)?;
        drag_drop.listen(events::DRAG_OVER, Zone::on_drag_over)?;
        drag_drop.listen(events::DRAG_LEAVE, Zone::on_drag_leave)?;
        drag_drop.listen(events::DROP, Zone::on_drop)?;

        Ok(drag_drop)
    }

    fn listen(&mut self, event: &'static str, handler: fn(&Zone, DragEvent)) -> Result<(), AttachError> {
        let zone = Rc::clone(&self.zone);
        let closure = Closure::wrap(Box::new(move |e: DragEvent| handler(&zone, e)) as Box<dyn FnMut(DragEvent)>);

        self.zone
            .element
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(|_| AttachError::ListenerFailed(event))?;

        self.listeners.push((event, closure));
        Ok(())
    }

    /// Remove all listeners and the indicator. Safe to call repeatedly.
    pub fn detach(&self) {
        if self.detached.replace(true) {
            return;
        }

        for (event, listener) in &self.listeners {
            let _ = self
                .zone
                .element
                .remove_event_listener_with_callback(event, listener.as_ref().unchecked_ref());
        }
        self.zone.indicator.deactivate_now();
        self.zone.state.borrow_mut().reset();
    }

    #[inline]
    pub fn is_attached(&self) -> bool {
        !self.detached.get()
    }

    /// The element this zone is attached to.
    pub fn element(&self) -> &Element {
        &self.zone.element
    }

    /// Whether a drag is currently over the element.
    pub fn is_dragging(&self) -> bool {
        self.zone.state.borrow().is_entered()
    }

    /// Keep the listeners for the lifetime of the page.
    ///
    /// The closures are leaked; the zone can no longer be detached.
    pub fn forget(self) {
        std::mem::forget(self);
    }
}

impl Drop for DragDrop {
    fn drop(&mut self) {
        self.detach();
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;
    use web_sys::{DataTransfer, DragEventInit};

    use super::*;
    use crate::models::EmptyDropPolicy;

    wasm_bindgen_test_configure!(run_in_browser);

    fn zone_element() -> Element {
        let document = dom::document().unwrap();
        let element = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&element).unwrap();
        element
    }

    fn drag_event(kind: &str, transfer: &DataTransfer) -> DragEvent {
        let init = DragEventInit::new();
        init.set_bubbles(true);
        init.set_cancelable(true);
        init.set_data_transfer(Some(transfer));
        DragEvent::new_with_event_init_dict(kind, &init).unwrap()
    }

    fn text_transfer() -> DataTransfer {
        let transfer = DataTransfer::new().unwrap();
        transfer.set_data("text/plain", "hello").unwrap();
        transfer
    }

    #[wasm_bindgen_test]
    fn test_missing_selector() {
        let err = DragDrop::attach("#does-not-exist", DragDropOptions::new()).err();
        assert_eq!(err, Some(AttachError::NoMatch("#does-not-exist".to_string())));
    }

    #[wasm_bindgen_test]
    fn test_text_drop_and_nested_enters() {
        let element = zone_element();
        let enters = Rc::new(Cell::new(0));
        let leaves = Rc::new(Cell::new(0));
        let texts = Rc::new(RefCell::new(Vec::new()));

        let options = DragDropOptions::new()
            .indicator_debounce_ms(0)
            .on_drag_enter({
                let enters = enters.clone();
                move |_| enters.set(enters.get() + 1)
            })
            .on_drag_leave({
                let leaves = leaves.clone();
                move |_| leaves.set(leaves.get() + 1)
            })
            .on_drop_text({
                let texts = texts.clone();
                move |text, _| texts.borrow_mut().push(text)
            });
        let drag_drop = DragDrop::attach(element.clone(), options).unwrap();

        let transfer = text_transfer();
        for _ in 0..3 {
            element.dispatch_event(&drag_event("dragenter", &transfer)).unwrap();
        }
        assert!(element.class_list().contains("drag"));
        for _ in 0..3 {
            element.dispatch_event(&drag_event("dragleave", &transfer)).unwrap();
        }
        assert_eq!((enters.get(), leaves.get()), (1, 1));
        assert!(!element.class_list().contains("drag"));

        element.dispatch_event(&drag_event("drop", &transfer)).unwrap();
        assert_eq!(texts.borrow().as_slice(), ["hello".to_string()]);

        drag_drop.detach();
        drag_drop.detach();
        element.dispatch_event(&drag_event("drop", &transfer)).unwrap();
        element.dispatch_event(&drag_event("dragenter", &transfer)).unwrap();
        assert_eq!(texts.borrow().len(), 1);
        assert_eq!(enters.get(), 1);
    }

    #[wasm_bindgen_test]
    fn test_drag_over_sets_copy_effect() {
        let element = zone_element();
        let overs = Rc::new(Cell::new(0));
        let options = DragDropOptions::new()
            .on_drop_text(|_, _| {})
            .on_drag_over({
                let overs = overs.clone();
                move |_| overs.set(overs.get() + 1)
            });
        let _drag_drop = DragDrop::attach(element.clone(), options).unwrap();

        let transfer = text_transfer();
        let event = drag_event("dragover", &transfer);
        element.dispatch_event(&event).unwrap();

        assert_eq!(overs.get(), 1);
        assert!(event.default_prevented());
        assert_eq!(transfer.drop_effect(), DROP_EFFECT);
    }

    #[wasm_bindgen_test]
    fn test_unhandleable_leave_keeps_counter() {
        let element = zone_element();
        let leaves = Rc::new(Cell::new(0));
        let options = DragDropOptions::new()
            .indicator_debounce_ms(0)
            .on_drop_text(|_, _| {})
            .on_drag_leave({
                let leaves = leaves.clone();
                move |_| leaves.set(leaves.get() + 1)
            });
        let drag_drop = DragDrop::attach(element.clone(), options).unwrap();

        let transfer = text_transfer();
        element.dispatch_event(&drag_event("dragenter", &transfer)).unwrap();
        assert!(drag_drop.is_dragging());

        // No items and no types: neither files nor text
        let empty = DataTransfer::new().unwrap();
        element.dispatch_event(&drag_event("dragleave", &empty)).unwrap();
        assert!(drag_drop.is_dragging());
        assert_eq!(leaves.get(), 0);
        assert!(element.class_list().contains("drag"));

        element.dispatch_event(&drag_event("dragleave", &transfer)).unwrap();
        assert!(!drag_drop.is_dragging());
        assert_eq!(leaves.get(), 1);
    }

    fn counting_drop(policy: EmptyDropPolicy, drops: &Rc<Cell<usize>>, texts: &Rc<Cell<usize>>) -> DragDropOptions {
        let drops = drops.clone();
        let texts = texts.clone();
        DragDropOptions::with_drop(move |files, _, _, directories| {
            assert!(files.is_empty() && directories.is_empty());
            drops.set(drops.get() + 1);
        })
        .on_drop_text(move |_, _| texts.set(texts.get() + 1))
        .empty_drop(policy)
    }

    #[wasm_bindgen_test]
    async fn test_text_only_drop_skips_file_listener() {
        let element = zone_element();
        let (drops, texts) = (Rc::new(Cell::new(0)), Rc::new(Cell::new(0)));
        let _drag_drop =
            DragDrop::attach(element.clone(), counting_drop(EmptyDropPolicy::Skip, &drops, &texts)).unwrap();

        element.dispatch_event(&drag_event("drop", &text_transfer())).unwrap();
        TimeoutFuture::new(0).await;

        assert_eq!(texts.get(), 1);
        assert_eq!(drops.get(), 0);
    }

    #[wasm_bindgen_test]
    async fn test_text_only_drop_invokes_file_listener_when_asked() {
        let element = zone_element();
        let (drops, texts) = (Rc::new(Cell::new(0)), Rc::new(Cell::new(0)));
        let _drag_drop =
            DragDrop::attach(element.clone(), counting_drop(EmptyDropPolicy::Invoke, &drops, &texts)).unwrap();

        element.dispatch_event(&drag_event("drop", &text_transfer())).unwrap();
        TimeoutFuture::new(0).await;

        assert_eq!(texts.get(), 1);
        assert_eq!(drops.get(), 1);
    }
}
