//! JavaScript entry point.
//!
//! ```js
//! import { dragDrop } from "dropzone";
//!
//! const detach = dragDrop("#target", (files, pos, fileList, directories) => {
//!   for (const f of files) console.log(f.fullPath, f.size, f.file);
//! });
//!
//! dragDrop(document.body, {
//!   onDrop: (files) => upload(files),
//!   onDropText: (text, pos) => console.log(text, pos.x, pos.y),
//!   onDragEnter: (event) => {},
//! });
//! ```

use js_sys::{Array, Function, Reflect};
use serde::Serialize;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{DragEvent, Element};

use crate::core::{DragDrop, Target};
use crate::models::{DirectoryRecord, DragDropOptions, DroppedFile, Position};
use crate::utils::dom;

/// Plain-object view of a record handed to JavaScript.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RecordView<'a> {
    full_path: &'a str,
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    size: Option<u64>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    mime: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    last_modified: Option<f64>,
    is_file: bool,
    is_directory: bool,
}

impl<'a> RecordView<'a> {
    fn file(file: &'a DroppedFile) -> Self {
        Self {
            full_path: &file.full_path,
            name: &file.name,
            size: Some(file.size),
            mime: Some(&file.mime),
            last_modified: Some(file.last_modified),
            is_file: true,
            is_directory: false,
        }
    }

    fn directory(dir: &'a DirectoryRecord) -> Self {
        Self {
            full_path: &dir.full_path,
            name: &dir.name,
            size: None,
            mime: None,
            last_modified: None,
            is_file: false,
            is_directory: true,
        }
    }
}

fn to_js<T: Serialize>(value: &T) -> Option<JsValue> {
    serde_wasm_bindgen::to_value(value)
        .map_err(|err| dom::error(&format!("failed to convert drop record: {}", err)))
        .ok()
}

/// Records that fail to convert are logged and left out.
fn files_to_js(files: &[DroppedFile]) -> Array {
    files
        .iter()
        .filter_map(|file| {
            let object = to_js(&RecordView::file(file))?;
            if let Err(err) = Reflect::set(&object, &"file".into(), &file.handle) {
                dom::error(&dom::describe_js_error(&err));
            }
            Some(object)
        })
        .collect()
}

fn directories_to_js(directories: &[DirectoryRecord]) -> Array {
    directories
        .iter()
        .filter_map(|dir| to_js(&RecordView::directory(dir)))
        .collect()
}

fn position_to_js(position: &Position) -> JsValue {
    to_js(position).unwrap_or(JsValue::UNDEFINED)
}

// =============================================================================
// Arguments
// =============================================================================

/// Accept a CSS selector or a DOM element.
fn parse_target(value: JsValue) -> Result<Target, JsValue> {
    if let Some(selector) = value.as_string() {
        return Ok(Target::Selector(selector));
    }
    value
        .dyn_into::<Element>()
        .map(Target::Element)
        .map_err(|_| JsValue::from_str("target must be a selector string or an element"))
}

/// JavaScript listeners, given either as a bare drop function or as an
/// object with `onDrop`, `onDropText`, `onDragEnter`, `onDragOver` and
/// `onDragLeave` members.
#[derive(Default)]
struct Listeners {
    on_drop: Option<Function>,
    on_drop_text: Option<Function>,
    on_drag_enter: Option<Function>,
    on_drag_over: Option<Function>,
    on_drag_leave: Option<Function>,
}

impl Listeners {
    fn parse(value: JsValue) -> Result<Self, JsValue> {
        if value.is_function() {
            return Ok(Self {
                on_drop: Some(value.unchecked_into()),
                ..Self::default()
            });
        }
        if !value.is_object() {
            return Err(JsValue::from_str("listeners must be a function or an object"));
        }

        let member = |name: &str| {
            Reflect::get(&value, &JsValue::from_str(name))
                .ok()
                .and_then(|member| member.dyn_into::<Function>().ok())
        };

        Ok(Self {
            on_drop: member("onDrop"),
            on_drop_text: member("onDropText"),
            on_drag_enter: member("onDragEnter"),
            on_drag_over: member("onDragOver"),
            on_drag_leave: member("onDragLeave"),
        })
    }

    fn into_options(self) -> DragDropOptions {
        let mut options = DragDropOptions::new();

        if let Some(on_drop) = self.on_drop {
            options = options.on_drop(move |files, position, file_list, directories| {
                let args = Array::of4(
                    &files_to_js(&files),
                    &position_to_js(&position),
                    &file_list.map(JsValue::from).unwrap_or(JsValue::NULL),
                    &directories_to_js(&directories),
                );
                report(on_drop.apply(&JsValue::NULL, &args));
            });
        }
        if let Some(on_text) = self.on_drop_text {
            options = options.on_drop_text(move |text, position| {
                report(on_text.call2(&JsValue::NULL, &text.into(), &position_to_js(&position)));
            });
        }
        if let Some(callback) = self.on_drag_enter {
            options = options.on_drag_enter(event_listener(callback));
        }
        if let Some(callback) = self.on_drag_over {
            options = options.on_drag_over(event_listener(callback));
        }
        if let Some(callback) = self.on_drag_leave {
            options = options.on_drag_leave(event_listener(callback));
        }

        options
    }
}

fn event_listener(callback: Function) -> impl Fn(&DragEvent) + 'static {
    move |event: &DragEvent| report(callback.call1(&JsValue::NULL, event))
}

/// Log an exception thrown by a JavaScript listener.
fn report(result: Result<JsValue, JsValue>) {
    if let Err(err) = result {
        dom::error(&dom::describe_js_error(&err));
    }
}

/// Attach a drop zone to a selector or element.
///
/// `listeners` is either the file drop function
/// `(files, pos, fileList, directories)` or an object of listeners. Returns a
/// function that detaches the zone.
#[wasm_bindgen(js_name = dragDrop)]
pub fn drag_drop(target: JsValue, listeners: JsValue) -> Result<Function, JsValue> {
    let target = parse_target(target)?;
    let options = Listeners::parse(listeners)?.into_options();

    let handle = DragDrop::attach(target, options).map_err(|err| JsValue::from_str(&err.to_string()))?;

    // The closure owns the handle; it is leaked with the returned function
    let detach = Closure::wrap(Box::new(move || handle.detach()) as Box<dyn Fn()>);
    Ok(detach.into_js_value().unchecked_into())
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use js_sys::Object;
    use wasm_bindgen_test::*;
    use web_sys::File;

    use super::*;
    use crate::core::Capabilities;

    wasm_bindgen_test_configure!(run_in_browser);

    fn noop() -> Function {
        Function::new_no_args("")
    }

    #[wasm_bindgen_test]
    fn test_bare_function_is_drop_listener() {
        let options = Listeners::parse(noop().into()).unwrap().into_options();
        assert_eq!(
            options.capabilities(),
            Capabilities {
                files: true,
                text: false
            }
        );
    }

    #[wasm_bindgen_test]
    fn test_listener_object() {
        let object = Object::new();
        Reflect::set(&object, &"onDropText".into(), &noop()).unwrap();
        Reflect::set(&object, &"onDragOver".into(), &noop()).unwrap();
        Reflect::set(&object, &"onDragLeave".into(), &JsValue::from_str("not a function")).unwrap();

        let listeners = Listeners::parse(object.into()).unwrap();
        assert!(listeners.on_drop.is_none());
        assert!(listeners.on_drop_text.is_some());
        assert!(listeners.on_drag_over.is_some());
        assert!(listeners.on_drag_leave.is_none());

        let options = listeners.into_options();
        assert_eq!(
            options.capabilities(),
            Capabilities {
                files: false,
                text: true
            }
        );
        assert!(options.on_drag_over.is_some());
    }

    #[wasm_bindgen_test]
    fn test_rejects_bad_arguments() {
        assert!(Listeners::parse(JsValue::from_f64(1.0)).is_err());
        assert!(parse_target(JsValue::from_f64(1.0)).is_err());
        assert!(matches!(parse_target("#zone".into()), Ok(Target::Selector(s)) if s == "#zone"));

        let element = dom::document().unwrap().create_element("div").unwrap();
        assert!(matches!(parse_target(element.into()), Ok(Target::Element(_))));
    }

    #[wasm_bindgen_test]
    fn test_file_records_carry_handle() {
        let handle = File::new_with_str_sequence(&Array::of1(&"hi".into()), "a.txt").unwrap();
        let files = vec![DroppedFile {
            full_path: "/d/a.txt".to_string(),
            name: "a.txt".to_string(),
            size: 2,
            mime: "text/plain".to_string(),
            last_modified: 0.0,
            handle: handle.clone(),
        }];

        let array = files_to_js(&files);
        assert_eq!(array.length(), 1);
        let record = array.get(0);
        assert_eq!(
            Reflect::get(&record, &"fullPath".into()).unwrap().as_string().as_deref(),
            Some("/d/a.txt")
        );
        assert_eq!(Reflect::get(&record, &"type".into()).unwrap().as_string().as_deref(), Some("text/plain"));
        assert!(Reflect::get(&record, &"isFile".into()).unwrap().is_truthy());
        assert_eq!(Reflect::get(&record, &"file".into()).unwrap(), JsValue::from(handle));
    }
}
