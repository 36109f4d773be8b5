//! Runtime Configuration
//!
//! Read once at startup from the hosting page. Sources, first hit wins:
//! 1. `window.__CCD_ADMIN_CONFIG__` (a plain JS object)
//! 2. `<script type="application/json" id="ccd-admin-config">`
//! 3. built-in defaults

use serde::Deserialize;
use thiserror::Error;
use wasm_bindgen::JsValue;

const WINDOW_CONFIG_KEY: &str = "__CCD_ADMIN_CONFIG__";
const CONFIG_ELEMENT_ID: &str = "ccd-admin-config";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid window config: {0}")]
    Window(String),
    #[error("invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL of the report API, without trailing slash
    pub api_base_url: String,
    /// How long an alert banner stays up
    pub alert_dismiss_ms: u32,
    /// XSLT block edited on the settings page
    pub xslt_block: String,
    /// Console log level
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "/api".to_string(),
            alert_dismiss_ms: 10_000,
            xslt_block: "MetadataXSLT".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_js(value: JsValue) -> Result<Self, ConfigError> {
        serde_wasm_bindgen::from_value(value).map_err(|e| ConfigError::Window(e.to_string()))
    }

    /// Load from the hosting page, falling back to defaults.
    ///
    /// Runs before the logger is installed, so problems are returned as
    /// warnings for the caller to log afterwards.
    pub fn load() -> (Self, Vec<String>) {
        let mut warnings = Vec::new();
        let Some(window) = web_sys::window() else {
            return (Self::default(), warnings);
        };

        if let Ok(value) = js_sys::Reflect::get(&window, &JsValue::from_str(WINDOW_CONFIG_KEY)) {
            if !value.is_undefined() && !value.is_null() {
                match Self::from_js(value) {
                    Ok(config) => return (config, warnings),
                    Err(e) => warnings.push(e.to_string()),
                }
            }
        }

        let script = window
            .document()
            .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());
        if let Some(json) = script {
            match Self::from_json(&json) {
                Ok(config) => return (config, warnings),
                Err(e) => warnings.push(e.to_string()),
            }
        }

        (Self::default(), warnings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = AppConfig::from_json(r#"{"api_base_url": "https://ccd.example.org/api"}"#).unwrap();
        assert_eq!(config.api_base_url, "https://ccd.example.org/api");
        assert_eq!(config.alert_dismiss_ms, 10_000);
        assert_eq!(config.xslt_block, "MetadataXSLT");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(AppConfig::from_json("{}").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_full_config() {
        let json = r#"{
            "api_base_url": "http://localhost:5000",
            "alert_dismiss_ms": 3000,
            "xslt_block": "ResultsXSLT",
            "log_level": "debug"
        }"#;
        let config = AppConfig::from_json(json).unwrap();
        assert_eq!(config.alert_dismiss_ms, 3000);
        assert_eq!(config.xslt_block, "ResultsXSLT");
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(AppConfig::from_json("{not json"), Err(ConfigError::Json(_))));
        assert!(AppConfig::from_json(r#"{"alert_dismiss_ms": "soon"}"#).is_err());
    }
}
