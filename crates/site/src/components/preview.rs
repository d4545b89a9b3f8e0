//! Mood-board file preview
//!
//! Shows the selected file's name and size, plus an inline image when the
//! file is an image. Reading the image runs on `spawn_local`; every
//! selection takes a new request token and a completion whose token is no
//! longer current is dropped, so the latest selection always wins.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Document, Element, File, FileReader, HtmlImageElement, HtmlInputElement};

use crate::config::PreviewConfig;
use crate::dom::{self, Listener};
use crate::error::{describe_js, Result};

pub const COMPONENT: &str = "preview";

const IMAGE_PREFIX: &str = "image/";

/// File size in whole kibibytes, rounded half away from zero
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn size_kib(bytes: f64) -> u64 {
    (bytes / 1024.0).round().max(0.0) as u64
}

/// `Файл: name (N КБ)`
pub fn info_line(name: &str, bytes: f64) -> String {
    format!("Файл: {name} ({} КБ)", size_kib(bytes))
}

/// Media type used to decide on an inline preview.
///
/// Browsers leave `File.type` empty for extensions they don't know; fall
/// back to a guess from the name in that case.
pub fn media_type(declared: &str, name: &str) -> String {
    if declared.is_empty() {
        mime_guess::from_path(name)
            .first()
            .map(|mime| mime.essence_str().to_string())
            .unwrap_or_default()
    } else {
        declared.to_string()
    }
}

pub fn is_image(media_type: &str) -> bool {
    media_type.starts_with(IMAGE_PREFIX)
}

/// Elements and shared state captured by the change listener
#[derive(Clone)]
struct Preview {
    doc: Document,
    input: HtmlInputElement,
    container: Element,
    empty_message: Rc<str>,
    unsupported_message: Rc<str>,
    /// Token of the most recent selection
    latest: Rc<Cell<u64>>,
}

impl Preview {
    fn locate(doc: &Document, config: &PreviewConfig) -> Result<Self> {
        Ok(Self {
            doc: doc.clone(),
            input: dom::by_id(doc, &config.input_id)?,
            container: dom::by_id(doc, &config.container_id)?,
            empty_message: config.empty_message.as_str().into(),
            unsupported_message: config.unsupported_message.as_str().into(),
            latest: Rc::new(Cell::new(0)),
        })
    }

    fn reset(&self) {
        self.container.set_text_content(Some(&self.empty_message));
    }

    fn paragraph(&self, text: &str) -> Result<Element> {
        let p = self.doc.create_element("p")?;
        p.set_text_content(Some(text));
        Ok(p)
    }

    fn on_change(&self) -> Result<()> {
        let token = self.latest.get().wrapping_add(1);
        self.latest.set(token);

        let Some(file) = self.input.files().and_then(|files| files.item(0)) else {
            self.reset();
            return Ok(());
        };
        self.show(&file, token)
    }

    fn show(&self, file: &File, token: u64) -> Result<()> {
        let name = file.name();
        self.container.set_text_content(None);
        let info = self.paragraph(&info_line(&name, file.size()))?;
        self.container.append_child(&info)?;

        if !is_image(&media_type(&file.type_(), &name)) {
            let note = self.paragraph(&self.unsupported_message)?;
            self.container.append_child(&note)?;
            return Ok(());
        }

        let img = self
            .doc
            .create_element("img")?
            .dyn_into::<HtmlImageElement>()
            .map_err(JsValue::from)?;
        img.set_alt(&name);
        self.container.append_child(&img)?;

        let reader = read_as_data_url(file)?;
        let preview = self.clone();
        spawn_local(async move {
            let result = JsFuture::from(reader).await;
            preview.complete(token, &name, result);
        });
        Ok(())
    }

    /// The image currently shown in the container, if any
    fn image(&self) -> Option<HtmlImageElement> {
        self.container
            .query_selector("img")
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into().ok())
    }

    /// Apply a finished read to the container's image.
    ///
    /// Reads for anything but the latest selection are dropped.
    fn complete(&self, token: u64, name: &str, result: std::result::Result<JsValue, JsValue>) {
        if self.latest.get() != token {
            tracing::debug!("preview: dropping stale read of {name}");
            return;
        }
        let Some(img) = self.image() else {
            return;
        };
        match result.map(|url| url.as_string()) {
            Ok(Some(url)) => img.set_src(&url),
            Ok(None) => {
                tracing::warn!("preview: reader returned no data URL for {name}");
                img.remove();
            }
            Err(e) => {
                tracing::warn!("preview: failed to read {name}: {}", describe_js(&e));
                img.remove();
            }
        }
    }
}

/// Start `FileReader.readAsDataURL` and expose the outcome as a promise.
///
/// Settled from `loadend`, which fires once after success, failure or abort.
fn read_as_data_url(file: &File) -> Result<js_sys::Promise> {
    let reader = FileReader::new()?;
    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        let done = reader.clone();
        let settle = Closure::once_into_js(move || {
            if let Some(error) = done.error() {
                let _ = reject.call1(&JsValue::NULL, &error);
            } else {
                let result = done.result().unwrap_or(JsValue::UNDEFINED);
                let _ = resolve.call1(&JsValue::NULL, &result);
            }
        });
        reader.set_onloadend(Some(settle.unchecked_ref()));
    });
    reader.read_as_data_url(file)?;
    Ok(promise)
}

/// Render the placeholder and rebuild the preview on every `change`
pub fn init(doc: &Document, config: &PreviewConfig) -> Result<()> {
    dom::unwire(COMPONENT);
    let preview = Preview::locate(doc, config)?;
    preview.reset();

    let handle = preview.clone();
    let listener = Listener::new(&preview.input, "change", move |_| {
        if let Err(e) = handle.on_change() {
            tracing::warn!("preview: {e}");
        }
    })?;

    dom::rewire(COMPONENT, vec![listener]);
    Ok(())
}
