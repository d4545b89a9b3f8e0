//! Page enhancements for the sachet marketing site.
//!
//! Loaded as an ES module by every page. On start it wires six independent
//! widgets against whatever the current page contains; a widget whose
//! elements are missing is skipped without touching the others.

pub mod components;
pub mod config;
pub mod dom;
pub mod error;

use wasm_bindgen::prelude::*;
use web_sys::Document;

use crate::components::canvas::{sachet, word_art};
use crate::components::{modal, nav, preview, range};
use crate::config::{SiteConfig, GLOBAL_CONFIG_KEY};
use crate::error::{Result, SiteError};

const STARTUP: &str = "startup";

#[wasm_bindgen(start)]
pub fn main_js() {
    console_error_panic_hook::set_once();

    let loaded = SiteConfig::from_global();
    let config = match &loaded {
        Ok(Some(config)) => config.clone(),
        _ => SiteConfig::default(),
    };
    init_logging(config.tracing_level());
    if let Err(e) = loaded {
        tracing::warn!("Ignoring window.{GLOBAL_CONFIG_KEY}: {e}");
    }

    if let Err(e) = run_when_ready(config) {
        tracing::warn!("Page enhancements not started: {e}");
    }
}

/// Install the browser-console subscriber (once per page)
fn init_logging(level: tracing::Level) {
    #[cfg(target_arch = "wasm32")]
    {
        static INIT: std::sync::Once = std::sync::Once::new();
        INIT.call_once(|| {
            let config = tracing_wasm::WASMLayerConfigBuilder::new()
                .set_max_level(level)
                .build();
            tracing_wasm::set_as_global_default_with_config(config);
        });
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = level;
}

/// Enhance now, or on `DOMContentLoaded` if the document is still parsing
fn run_when_ready(config: SiteConfig) -> Result<()> {
    let doc = dom::document()?;
    if dom::is_loading(&doc) {
        let listener = dom::Listener::new(&doc, "DOMContentLoaded", move |_| {
            enhance_page(&config);
        })?;
        dom::rewire(STARTUP, vec![listener]);
    } else {
        enhance_page(&config);
    }
    Ok(())
}

/// Log one component's outcome; returns whether it is active
fn report(component: &str, outcome: Result<()>) -> bool {
    match outcome {
        Ok(()) => true,
        Err(e) if e.is_absent() => {
            tracing::debug!("{component}: skipped ({e})");
            false
        }
        Err(e) => {
            tracing::warn!("{component}: {e}");
            false
        }
    }
}

/// The nav counts as active only when a link for the current page exists
fn nav_outcome(doc: &Document, config: &SiteConfig) -> Result<()> {
    match nav::highlight(doc, &config.nav)? {
        0 => Err(SiteError::MissingElement(format!(
            "{} for the current page",
            config.nav.link_selector
        ))),
        _ => Ok(()),
    }
}

/// Run every enhancement against the current document.
///
/// Returns how many components ended up active.
pub fn enhance_page(config: &SiteConfig) -> usize {
    let doc = match dom::document() {
        Ok(doc) => doc,
        Err(e) => {
            tracing::warn!("Cannot enhance page: {e}");
            return 0;
        }
    };

    let outcomes = [
        ("nav", nav_outcome(&doc, config)),
        ("sachet", sachet::render(&doc, &config.sachet)),
        ("word art", word_art::render(&doc, &config.word_art)),
        ("modal", modal::init(&doc, &config.modal)),
        ("preview", preview::init(&doc, &config.preview)),
        ("range", range::init(&doc, &config.range)),
    ];
    let total = outcomes.len();
    let active = outcomes
        .into_iter()
        .map(|(component, outcome)| report(component, outcome))
        .filter(|active| *active)
        .count();

    tracing::info!("Page enhanced: {active}/{total} components active");
    active
}

/// Re-run every enhancement with the current `window.SITE_CONFIG`
#[wasm_bindgen]
pub fn enhance() -> usize {
    enhance_page(&SiteConfig::load())
}

/// Re-run every enhancement with a JSON config; missing fields take defaults
#[wasm_bindgen(js_name = enhanceWithConfig)]
pub fn enhance_with_config(json: &str) -> std::result::Result<usize, JsValue> {
    let config = SiteConfig::from_json(json)?;
    Ok(enhance_page(&config))
}

/// Repaint both canvases with a fresh random layout; returns how many
/// were painted
#[wasm_bindgen]
pub fn redraw() -> usize {
    let config = SiteConfig::load();
    let Ok(doc) = dom::document() else {
        return 0;
    };
    [
        report("sachet", sachet::render(&doc, &config.sachet)),
        report("word art", word_art::render(&doc, &config.word_art)),
    ]
    .into_iter()
    .filter(|painted| *painted)
    .count()
}
