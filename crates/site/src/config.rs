//! Site configuration
//!
//! Every DOM id, selector and piece of page copy the enhancements touch.
//! Defaults match the shipped markup; a page can override any subset by
//! defining `window.SITE_CONFIG` before the module loads, or by calling
//! `enhance_with_config` with a JSON string.

use serde::Deserialize;

use crate::error::Result;

/// Name of the optional global the page may define
pub const GLOBAL_CONFIG_KEY: &str = "SITE_CONFIG";

#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NavConfig {
    pub link_selector: String,
    /// Target treated as current when the path has no file segment
    pub home: String,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            link_selector: "nav a".to_string(),
            home: "index.html".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SachetConfig {
    pub canvas_id: String,
}

impl Default for SachetConfig {
    fn default() -> Self {
        Self {
            canvas_id: "sachetCanvas".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WordArtConfig {
    pub canvas_id: String,
    pub text: String,
}

impl Default for WordArtConfig {
    fn default() -> Self {
        Self {
            canvas_id: "feelCanvas".to_string(),
            text: "чувствуй".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RangeConfig {
    pub input_id: String,
    pub display_id: String,
    pub suffix: String,
}

impl Default for RangeConfig {
    fn default() -> Self {
        Self {
            input_id: "intensityRange".to_string(),
            display_id: "intensityValue".to_string(),
            suffix: "%".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ModalConfig {
    pub trigger_selector: String,
    pub dialog_id: String,
    /// Queried inside the dialog, not the whole document
    pub close_selector: String,
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            trigger_selector: ".privacy-trigger".to_string(),
            dialog_id: "privacyModal".to_string(),
            close_selector: ".privacy-modal__close".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PreviewConfig {
    pub input_id: String,
    pub container_id: String,
    pub empty_message: String,
    pub unsupported_message: String,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            input_id: "moodBoard".to_string(),
            container_id: "moodPreview".to_string(),
            empty_message: "Файл не выбран.".to_string(),
            unsupported_message: "Невозможно показать превью этого формата, но файл прикреплён."
                .to_string(),
        }
    }
}

/// Full enhancement configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    pub nav: NavConfig,
    pub sachet: SachetConfig,
    pub word_art: WordArtConfig,
    pub range: RangeConfig,
    pub modal: ModalConfig,
    pub preview: PreviewConfig,
    /// `trace`, `debug`, `info`, `warn` or `error`
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            nav: NavConfig::default(),
            sachet: SachetConfig::default(),
            word_art: WordArtConfig::default(),
            range: RangeConfig::default(),
            modal: ModalConfig::default(),
            preview: PreviewConfig::default(),
            log_level: "info".to_string(),
        }
    }
}

impl SiteConfig {
    /// Parse a (possibly partial) JSON config
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load from `window.SITE_CONFIG`, falling back to defaults
    pub fn load() -> Self {
        match Self::from_global() {
            Ok(Some(config)) => config,
            Ok(None) => Self::default(),
            Err(e) => {
                tracing::warn!("Ignoring window.{GLOBAL_CONFIG_KEY}: {e}");
                Self::default()
            }
        }
    }

    /// `window.SITE_CONFIG`, if the page defines one
    pub fn from_global() -> Result<Option<Self>> {
        let Some(window) = web_sys::window() else {
            return Ok(None);
        };
        let value = js_sys::Reflect::get(&window, &GLOBAL_CONFIG_KEY.into())?;
        if !value.is_object() {
            return Ok(None);
        }
        let json = js_sys::JSON::stringify(&value)?
            .as_string()
            .unwrap_or_default();
        Self::from_json(&json).map(Some)
    }

    /// Max level for the console subscriber; unknown names fall back to INFO
    pub fn tracing_level(&self) -> tracing::Level {
        self.log_level.parse().unwrap_or(tracing::Level::INFO)
    }
}
