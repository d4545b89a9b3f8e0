//! Live readout for the intensity slider

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlInputElement};

use crate::config::RangeConfig;
use crate::dom::{self, Listener};
use crate::error::Result;

pub const COMPONENT: &str = "range";

/// Display text for a slider value; the value is shown as-is
pub fn format_value(value: &str, suffix: &str) -> String {
    format!("{value}{suffix}")
}

struct RangeElements {
    input: HtmlInputElement,
    display: Element,
}

impl RangeElements {
    fn locate(doc: &Document, config: &RangeConfig) -> Result<Self> {
        Ok(Self {
            input: dom::by_id(doc, &config.input_id)?,
            display: dom::by_id(doc, &config.display_id)?,
        })
    }
}

/// Render the current value now and on every `input` event
pub fn init(doc: &Document, config: &RangeConfig) -> Result<()> {
    dom::unwire(COMPONENT);
    let RangeElements { input, display } = RangeElements::locate(doc, config)?;

    display.set_text_content(Some(&format_value(&input.value(), &config.suffix)));

    let suffix = config.suffix.clone();
    let listener = Listener::new(&input, "input", move |event: Event| {
        if let Some(target) = event.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
            display.set_text_content(Some(&format_value(&target.value(), &suffix)));
        }
    })?;

    dom::rewire(COMPONENT, vec![listener]);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_suffix() {
        assert_eq!(format_value("42", "%"), "42%");
        assert_eq!(format_value("7", "%"), "7%");
        assert_eq!(format_value("0", "%"), "0%");
    }

    #[test]
    fn test_value_not_coerced() {
        assert_eq!(format_value("12.5", "%"), "12.5%");
        assert_eq!(format_value("", "%"), "%");
        assert_eq!(format_value("50", " pts"), "50 pts");
    }
}
