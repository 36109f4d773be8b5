//! Alert Messages
//!
//! Transient banner notifications shown after user actions.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Success,
    Warning,
    Error,
}

impl AlertKind {
    /// CSS modifier class of the banner
    pub fn class(self) -> &'static str {
        match self {
            AlertKind::Success => "success",
            AlertKind::Warning => "warning",
            AlertKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertMessage {
    #[serde(rename = "type")]
    pub kind: AlertKind,
    pub message: String,
}

impl AlertMessage {
    pub fn new(kind: AlertKind, message: impl Into<String>) -> Self {
        Self { kind, message: message.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_serializes_lowercase() {
        let alert = AlertMessage::new(AlertKind::Warning, "Save action canceled.");
        let json = serde_json::to_string(&alert).unwrap();
        assert_eq!(json, r#"{"type":"warning","message":"Save action canceled."}"#);

        let parsed: AlertMessage = serde_json::from_str(r#"{"type":"error","message":"x"}"#).unwrap();
        assert_eq!(parsed.kind, AlertKind::Error);
    }

    #[test]
    fn test_class_matches_serialized_name() {
        for kind in [AlertKind::Success, AlertKind::Warning, AlertKind::Error] {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.class()));
        }
    }
}
