//! IPC protocol between the manager and hosted pages.
//!
//! - **Page -> Rust**: injected scripts call
//!   `window.ipc.postMessage(JSON.stringify({kind, payload}))`, which reaches
//!   the engine's IPC handler and is turned into a [`ContentSignal`].
//! - **Rust -> Page**: [`js_dispatch_message`] builds a script that invokes
//!   handlers registered with `window.canopy.on(kind, fn)`.

use serde::{Deserialize, Serialize};

use crate::backend::{ContentSignal, KeyInput};

/// A typed IPC message from a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IpcMessage {
    /// The message type.
    pub kind: String,
    /// Arbitrary JSON payload.
    #[serde(default)]
    pub payload: serde_json::Value,
}

#[derive(Deserialize)]
struct ShortcutPayload {
    key: String,
    #[serde(default)]
    ctrl: bool,
    #[serde(default)]
    meta: bool,
    #[serde(default)]
    alt: bool,
    #[serde(default)]
    shift: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ContextMenuPayload {
    #[serde(default)]
    selection_text: String,
    #[serde(default)]
    x: f64,
    #[serde(default)]
    y: f64,
}

impl IpcMessage {
    /// Parse an IPC message from a raw JSON string.
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }

    pub fn new(kind: impl Into<String>, payload: serde_json::Value) -> Self {
        Self {
            kind: kind.into(),
            payload,
        }
    }

    /// Map messages posted by the injected scripts onto content signals.
    /// Unknown kinds and malformed payloads yield `None`.
    pub fn into_signal(self) -> Option<ContentSignal> {
        match self.kind.as_str() {
            "shortcut" => {
                let p: ShortcutPayload = serde_json::from_value(self.payload).ok()?;
                Some(ContentSignal::KeyInput(KeyInput {
                    key: p.key,
                    ctrl: p.ctrl,
                    meta: p.meta,
                    alt: p.alt,
                    shift: p.shift,
                }))
            }
            "context-menu" => {
                let p: ContextMenuPayload = serde_json::from_value(self.payload).ok()?;
                Some(ContentSignal::ContextMenu {
                    selection_text: p.selection_text,
                    x: p.x,
                    y: p.y,
                })
            }
            _ => None,
        }
    }
}

/// Bridge installed in every page before its own scripts run.
pub const IPC_INIT_SCRIPT: &str = r#"
(function() {
    window.canopy = window.canopy || {};
    window.canopy.ipc = {
        send: function(kind, payload) {
            window.ipc.postMessage(JSON.stringify({
                kind: kind,
                payload: payload || null
            }));
        }
    };
    window.canopy._handlers = {};
    window.canopy.on = function(kind, callback) {
        window.canopy._handlers[kind] = callback;
    };
    window.canopy._dispatch = function(kind, payload) {
        var handler = window.canopy._handlers[kind];
        if (handler) {
            handler(payload);
        }
    };
})();
"#;

/// Reports right-clicks with the current selection. The native menu is left alone.
pub const CONTEXT_MENU_SCRIPT: &str = r#"
(function() {
    window.addEventListener('contextmenu', function(e) {
        var selection = window.getSelection ? String(window.getSelection()) : '';
        window.ipc.postMessage(JSON.stringify({
            kind: 'context-menu',
            payload: { selectionText: selection, x: e.clientX, y: e.clientY }
        }));
    }, true);
})();
"#;

/// Generate a JS snippet that dispatches a message to page handlers.
pub fn js_dispatch_message(kind: &str, payload: &serde_json::Value) -> String {
    let payload_json = serde_json::to_string(payload).unwrap_or_else(|_| "null".to_string());
    format!(
        "window.canopy && window.canopy._dispatch({}, {});",
        serde_json::to_string(kind).unwrap_or_else(|_| "\"unknown\"".to_string()),
        payload_json,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn shortcut_message_becomes_key_input() {
        let raw = r#"{"kind":"shortcut","payload":{"key":"P","ctrl":true,"meta":false,"alt":false,"shift":true}}"#;
        let signal = IpcMessage::from_json(raw).unwrap().into_signal().unwrap();
        assert_eq!(
            signal,
            ContentSignal::KeyInput(KeyInput {
                key: "P".into(),
                ctrl: true,
                meta: false,
                alt: false,
                shift: true,
            })
        );
    }

    #[test]
    fn context_menu_message_is_parsed() {
        let msg = IpcMessage::new(
            "context-menu",
            json!({"selectionText": "hello", "x": 10.0, "y": 20.5}),
        );
        match msg.into_signal() {
            Some(ContentSignal::ContextMenu {
                selection_text,
                x,
                y,
            }) => {
                assert_eq!(selection_text, "hello");
                assert_eq!(x, 10.0);
                assert_eq!(y, 20.5);
            }
            other => panic!("unexpected signal: {other:?}"),
        }
    }

    #[test]
    fn unknown_or_malformed_messages_are_dropped() {
        assert!(IpcMessage::new("ping", json!(null)).into_signal().is_none());
        assert!(IpcMessage::new("shortcut", json!({"ctrl": true}))
            .into_signal()
            .is_none());
        assert!(IpcMessage::from_json("not json").is_none());
    }

    #[test]
    fn dispatch_script_quotes_kind_and_payload() {
        let script = js_dispatch_message("credentials", &json!({"service": "google"}));
        assert_eq!(
            script,
            r#"window.canopy && window.canopy._dispatch("credentials", {"service":"google"});"#
        );
    }
}
