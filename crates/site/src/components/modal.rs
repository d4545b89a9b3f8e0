//! Privacy policy modal
//!
//! The dialog's `hidden` attribute is the only state; every event reads it,
//! runs it through [`ModalState::next`] and writes the result back.

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::{Document, Event, HtmlElement, KeyboardEvent};

use crate::config::ModalConfig;
use crate::dom::{self, Listener};
use crate::error::{Result, SiteError};

pub const COMPONENT: &str = "modal";

const ESCAPE: &str = "Escape";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalState {
    Closed,
    Open,
}

/// Something the user did that may move the modal
#[derive(Clone, Copy, Debug)]
pub enum ModalInput<'a> {
    Trigger,
    CloseControl,
    /// A click that reached the dialog; `on_backdrop` when it hit the
    /// overlay itself rather than the content
    Click { on_backdrop: bool },
    Key(&'a str),
}

impl ModalState {
    pub const fn from_hidden(hidden: bool) -> Self {
        if hidden {
            Self::Closed
        } else {
            Self::Open
        }
    }

    pub fn next(self, input: ModalInput<'_>) -> Self {
        match (self, input) {
            (_, ModalInput::Trigger) => Self::Open,
            (Self::Open, ModalInput::CloseControl | ModalInput::Click { on_backdrop: true }) => {
                Self::Closed
            }
            (Self::Open, ModalInput::Key(key)) if key == ESCAPE => Self::Closed,
            (state, _) => state,
        }
    }
}

#[derive(Clone)]
struct ModalElements {
    trigger: HtmlElement,
    dialog: HtmlElement,
    close: HtmlElement,
    body: HtmlElement,
}

impl ModalElements {
    fn locate(doc: &Document, config: &ModalConfig) -> Result<Self> {
        let trigger = dom::query(doc, &config.trigger_selector)?;
        let dialog: HtmlElement = dom::by_id(doc, &config.dialog_id)?;
        let close = dom::query_in(&dialog, &config.close_selector)?;
        let body = doc
            .body()
            .ok_or_else(|| SiteError::MissingElement("body".to_string()))?;
        Ok(Self {
            trigger,
            dialog,
            close,
            body,
        })
    }

    fn state(&self) -> ModalState {
        ModalState::from_hidden(self.dialog.hidden())
    }

    fn apply(&self, input: ModalInput<'_>) {
        let current = self.state();
        let next = current.next(input);
        if next != current {
            self.show(next);
        }
    }

    fn show(&self, state: ModalState) {
        let open = state == ModalState::Open;
        self.dialog.set_hidden(!open);
        let overflow = if open { "hidden" } else { "" };
        if let Err(e) = self.body.style().set_property("overflow", overflow) {
            tracing::warn!("modal: could not set body overflow: {e:?}");
        }
    }
}

/// Wire the trigger, close control, backdrop and Escape key
pub fn init(doc: &Document, config: &ModalConfig) -> Result<()> {
    dom::unwire(COMPONENT);
    let elements = ModalElements::locate(doc, config)?;
    elements.show(ModalState::Closed);

    let on_trigger = {
        let handle = elements.clone();
        Listener::new(&elements.trigger, "click", move |_| {
            handle.apply(ModalInput::Trigger);
        })?
    };

    let on_close = {
        let handle = elements.clone();
        Listener::new(&elements.close, "click", move |_| {
            handle.apply(ModalInput::CloseControl);
        })?
    };

    let on_backdrop = {
        let handle = elements.clone();
        let backdrop = JsValue::from(elements.dialog.clone());
        Listener::new(&elements.dialog, "click", move |event: Event| {
            let on_backdrop = dom::targets(&event, &backdrop);
            handle.apply(ModalInput::Click { on_backdrop });
        })?
    };

    let on_key = Listener::new(doc, "keydown", move |event: Event| {
        if let Some(key_event) = event.dyn_ref::<KeyboardEvent>() {
            elements.apply(ModalInput::Key(&key_event.key()));
        }
    })?;

    dom::rewire(COMPONENT, vec![on_trigger, on_close, on_backdrop, on_key]);
    Ok(())
}
