//! Drop zone component.
//!
//! Attaches [`DragDrop`] to its own element once mounted and reports drops
//! into the [`AppContext`].

use leptos::prelude::*;

use crate::app::{AppContext, DropReport};
use crate::core::DragDrop;
use crate::models::{DragDropOptions, EmptyDropPolicy};
use crate::utils::dom;

fn options(ctx: AppContext) -> DragDropOptions {
    DragDropOptions::new()
        .on_drag_enter(move |_| ctx.dragging.set(true))
        .on_drag_leave(move |_| ctx.dragging.set(false))
        .on_drop(move |files, position, _, directories| {
            ctx.report(DropReport::from_drop(&files, &directories, position));
        })
        .on_drop_text(move |text, position| ctx.report(DropReport::text(text, position)))
        .on_error(move |err| {
            dom::warn(&err.to_string());
            ctx.report(DropReport::failed(err.to_string()));
        })
        .empty_drop(EmptyDropPolicy::Invoke)
}

/// Area accepting dropped files, folders and text.
#[component]
pub fn DropZone() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let zone_ref = NodeRef::<leptos::html::Div>::new();
    let handle = StoredValue::new_local(None::<DragDrop>);

    // Attach once the element exists
    Effect::new(move || {
        let Some(element) = zone_ref.get() else {
            return;
        };
        if handle.with_value(Option::is_some) {
            return;
        }

        let element: web_sys::Element = element.into();
        match DragDrop::attach(element, options(ctx)) {
            Ok(drag_drop) => handle.set_value(Some(drag_drop)),
            Err(err) => ctx.report(DropReport::failed(err.to_string())),
        }
    });

    on_cleanup(move || handle.update_value(|h| drop(h.take())));

    let style = move || {
        let border = if ctx.dragging.get() { "#4a90e2" } else { "#3a3f4b" };
        format!(
            "padding: 3rem; margin: 1rem 0; border: 2px dashed {}; border-radius: 8px; \
             text-align: center; color: #6c7a89;",
            border
        )
    };

    view! {
        <div node_ref=zone_ref style=style>
            {move || if ctx.dragging.get() { "Release to drop" } else { "Drop files, folders or text here" }}
        </div>
    }
}
