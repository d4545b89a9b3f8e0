//! Browser tests for the mood-board file preview
#![cfg(target_arch = "wasm32")]

mod common;

use sachet_site::components::preview;
use sachet_site::config::PreviewConfig;
use sachet_site::dom;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, HtmlImageElement};

wasm_bindgen_test_configure!(run_in_browser);

const FIXTURE: &str = r#"
<input type="file" id="moodBoard" accept="image/*,.pdf">
<div id="moodPreview"></div>
"#;

const EMPTY: &str = "Файл не выбран.";
const UNSUPPORTED: &str = "Невозможно показать превью этого формата, но файл прикреплён.";

fn setup() -> Document {
    let doc = common::mount(FIXTURE);
    preview::init(&doc, &PreviewConfig::default()).unwrap();
    doc
}

fn preview_image(doc: &Document) -> Option<HtmlImageElement> {
    common::element(doc, "moodPreview")
        .query_selector("img")
        .unwrap()
        .and_then(|el| el.dyn_into().ok())
}

#[wasm_bindgen_test]
fn shows_placeholder_before_any_selection() {
    let doc = setup();
    assert_eq!(common::text_of(&doc, "moodPreview"), EMPTY);
}

#[wasm_bindgen_test]
fn non_image_shows_info_and_note() {
    let doc = setup();
    let input = common::input(&doc, "moodBoard");
    let pdf = common::file("doc.pdf", "application/pdf", &"a".repeat(2048));
    common::select_files(&input, &[pdf]);

    let container = common::element(&doc, "moodPreview");
    assert_eq!(container.child_element_count(), 2);
    let text = container.text_content().unwrap();
    assert!(text.contains("doc.pdf"), "{text}");
    assert!(text.contains("2 КБ"), "{text}");
    assert!(text.contains(UNSUPPORTED), "{text}");
    assert!(preview_image(&doc).is_none());
}

#[wasm_bindgen_test]
async fn image_is_inlined_as_data_url() {
    let doc = setup();
    let input = common::input(&doc, "moodBoard");
    let png = common::file("moodboard.png", "image/png", "not really a png");
    common::select_files(&input, &[png]);

    let text = common::text_of(&doc, "moodPreview");
    assert!(text.contains("moodboard.png"), "{text}");
    assert!(text.contains("0 КБ"), "{text}");

    let loaded = common::eventually(|| {
        preview_image(&doc).is_some_and(|img| img.src().starts_with("data:image/"))
    })
    .await;
    assert!(loaded, "image preview never received a data URL");
}

#[wasm_bindgen_test]
async fn latest_selection_wins() {
    let doc = setup();
    let input = common::input(&doc, "moodBoard");
    common::select_files(&input, &[common::file("first.png", "image/png", "one")]);
    common::select_files(&input, &[common::file("second.png", "image/png", "two")]);

    let loaded = common::eventually(|| {
        preview_image(&doc).is_some_and(|img| img.src().starts_with("data:image/"))
    })
    .await;
    assert!(loaded);

    common::sleep(50).await;
    let container = common::element(&doc, "moodPreview");
    assert_eq!(container.query_selector_all("img").unwrap().length(), 1);
    let img = preview_image(&doc).unwrap();
    assert_eq!(img.alt(), "second.png");
    // base64 of "two"
    assert_eq!(img.src(), "data:image/png;base64,dHdv");
    assert!(!container.text_content().unwrap().contains("first.png"));
}

#[wasm_bindgen_test]
fn multi_file_selection_uses_first_entry() {
    let doc = setup();
    let input = common::input(&doc, "moodBoard");
    common::select_files(
        &input,
        &[
            common::file("notes.txt", "text/plain", "hello"),
            common::file("photo.png", "image/png", "px"),
        ],
    );

    let text = common::text_of(&doc, "moodPreview");
    assert!(text.contains("notes.txt"), "{text}");
    assert!(!text.contains("photo.png"), "{text}");
}

#[wasm_bindgen_test]
fn cleared_selection_restores_placeholder() {
    let doc = setup();
    let input = common::input(&doc, "moodBoard");
    common::select_files(&input, &[common::file("doc.pdf", "application/pdf", "x")]);
    common::select_files(&input, &[]);

    assert_eq!(common::text_of(&doc, "moodPreview"), EMPTY);
}

#[wasm_bindgen_test]
fn reinit_renders_placeholder_once() {
    let doc = setup();
    preview::init(&doc, &PreviewConfig::default()).unwrap();
    preview::init(&doc, &PreviewConfig::default()).unwrap();

    assert_eq!(common::text_of(&doc, "moodPreview"), EMPTY);
    assert_eq!(dom::wired_count(preview::COMPONENT), 1);
}

#[wasm_bindgen_test]
fn missing_container_is_skipped() {
    let doc = common::mount(r#"<input type="file" id="moodBoard">"#);
    let err = preview::init(&doc, &PreviewConfig::default()).unwrap_err();
    assert!(err.is_absent());
}
