use wasm_bindgen::{JsCast, JsValue};

/// Failures while wiring an enhancement onto the page.
///
/// Only `Config` is ever surfaced to JS; everything else is logged and the
/// affected component is skipped.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("no global `window` exists")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("required element missing: {0}")]
    MissingElement(String),
    #[error("2d context unavailable on #{0}")]
    NoContext(String),
    #[error("invalid site config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("DOM call failed: {0}")]
    Js(String),
}

impl SiteError {
    /// Expected on pages that simply don't carry the widget.
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::MissingElement(_) | Self::NoContext(_))
    }
}

impl From<JsValue> for SiteError {
    fn from(value: JsValue) -> Self {
        Self::Js(describe_js(&value))
    }
}

impl From<SiteError> for JsValue {
    fn from(err: SiteError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

/// Best-effort message for a thrown JS value
pub fn describe_js(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

pub type Result<T> = std::result::Result<T, SiteError>;
