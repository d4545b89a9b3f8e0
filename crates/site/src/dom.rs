//! DOM plumbing shared by the components
//!
//! Typed element lookups that turn "missing" into `SiteError::MissingElement`,
//! owned event listeners, and the per-component wiring registry that keeps
//! re-initialization from stacking listeners.

use std::cell::RefCell;
use std::collections::HashMap;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, Document, Element, Event, EventTarget};

use crate::error::{Result, SiteError};

/// Get document helper
pub fn document() -> Result<Document> {
    window()
        .ok_or(SiteError::NoWindow)?
        .document()
        .ok_or(SiteError::NoDocument)
}

/// Whether the document is still being parsed
pub fn is_loading(doc: &Document) -> bool {
    doc.ready_state() == "loading"
}

/// Look up `#id` and cast it to the expected element type
pub fn by_id<T: JsCast>(doc: &Document, id: &str) -> Result<T> {
    doc.get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
        .ok_or_else(|| SiteError::MissingElement(format!("#{id}")))
}

/// First match for `selector` in the whole document
pub fn query<T: JsCast>(doc: &Document, selector: &str) -> Result<T> {
    doc.query_selector(selector)?
        .and_then(|el| el.dyn_into::<T>().ok())
        .ok_or_else(|| SiteError::MissingElement(selector.to_string()))
}

/// First match for `selector` below `root`
pub fn query_in<T: JsCast>(root: &Element, selector: &str) -> Result<T> {
    root.query_selector(selector)?
        .and_then(|el| el.dyn_into::<T>().ok())
        .ok_or_else(|| SiteError::MissingElement(selector.to_string()))
}

/// All elements matching `selector`, skipping non-elements
pub fn query_all(doc: &Document, selector: &str) -> Result<Vec<Element>> {
    let nodes = doc.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// True when the event was dispatched on `element` itself, not a descendant
pub fn targets(event: &Event, element: &JsValue) -> bool {
    event
        .target()
        .is_some_and(|target| JsValue::from(target) == *element)
}

/// An event listener that stays registered for as long as this value lives
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

thread_local! {
    static WIRING: RefCell<HashMap<&'static str, Vec<Listener>>> = RefCell::new(HashMap::new());
}

/// Install `listeners` as the live wiring for `component`.
///
/// Whatever the component registered before is dropped, which unregisters it.
pub fn rewire(component: &'static str, listeners: Vec<Listener>) {
    let previous = WIRING.with(|wiring| wiring.borrow_mut().insert(component, listeners));
    drop(previous);
}

/// Remove every listener a component registered
pub fn unwire(component: &'static str) {
    let previous = WIRING.with(|wiring| wiring.borrow_mut().remove(component));
    drop(previous);
}

/// Number of live listeners for a component
pub fn wired_count(component: &'static str) -> usize {
    WIRING.with(|wiring| wiring.borrow().get(component).map_or(0, Vec::len))
}
