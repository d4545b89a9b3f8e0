//! Common test utilities for the browser tests
#![allow(dead_code)] // Not every helper is used by every test file

use js_sys::{Array, Promise};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    window, DataTransfer, Document, Element, Event, EventTarget, File, FilePropertyBag,
    HtmlInputElement,
};

const FIXTURE_ID: &str = "test-fixture";

pub fn document() -> Document {
    window().unwrap().document().unwrap()
}

/// Replace the current fixture with `html` and return the document
pub fn mount(html: &str) -> Document {
    let doc = document();
    if let Some(old) = doc.get_element_by_id(FIXTURE_ID) {
        old.remove();
    }
    let fixture = doc.create_element("div").unwrap();
    fixture.set_id(FIXTURE_ID);
    fixture.set_inner_html(html);
    doc.body().unwrap().append_child(&fixture).unwrap();
    doc
}

pub fn element(doc: &Document, id: &str) -> Element {
    doc.get_element_by_id(id)
        .unwrap_or_else(|| panic!("fixture has no #{id}"))
}

pub fn text_of(doc: &Document, id: &str) -> String {
    element(doc, id).text_content().unwrap_or_default()
}

pub fn dispatch(target: &EventTarget, event_type: &str) {
    let event = Event::new(event_type).unwrap();
    target.dispatch_event(&event).unwrap();
}

/// A file with `contents` as its body
pub fn file(name: &str, media_type: &str, contents: &str) -> File {
    let parts = Array::of1(&contents.into());
    let options = FilePropertyBag::new();
    options.set_type(media_type);
    File::new_with_str_sequence_and_options(&parts, name, &options).unwrap()
}

/// Put `files` on the input as if the user picked them, then fire `change`
pub fn select_files(input: &HtmlInputElement, files: &[File]) {
    let transfer = DataTransfer::new().unwrap();
    for file in files {
        transfer.items().add_with_file(file).unwrap();
    }
    input.set_files(transfer.files().as_ref());
    dispatch(input, "change");
}

pub async fn sleep(ms: i32) {
    let promise = Promise::new(&mut |resolve, _reject| {
        window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

/// Poll `check` every 10ms for up to a second
pub async fn eventually(mut check: impl FnMut() -> bool) -> bool {
    for _ in 0..100 {
        if check() {
            return true;
        }
        sleep(10).await;
    }
    check()
}

pub fn input(doc: &Document, id: &str) -> HtmlInputElement {
    element(doc, id).dyn_into().unwrap()
}
