//! IPC protocol between Rust and the shell's JavaScript.
//!
//! Messages flow in both directions:
//! - **JS -> Rust**: the shell calls `window.msb.ipc.send(kind, payload)`,
//!   which posts `{"kind": ..., "payload": ...}` through `window.ipc` to the
//!   `ipc_handler` registered on the WebView.
//! - **Rust -> JS**: Rust evaluates `window.msb.ipc._dispatch(kind, payload)`
//!   in the WebView context.

use serde::Deserialize;

/// A typed IPC message from JavaScript to Rust.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IpcMessage {
    /// The message type / command name.
    pub kind: String,
    /// The message payload. Missing payloads parse as `null`.
    #[serde(default)]
    pub payload: serde_json::Value,
}

impl IpcMessage {
    /// Parse an IPC message from a raw JSON string (from JS postMessage).
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }

    /// Read an integer field from an object payload.
    pub fn u64_field(&self, name: &str) -> Option<u64> {
        self.payload.get(name)?.as_u64()
    }

    /// Read a numeric field from an object payload.
    ///
    /// Non-finite numbers cannot appear in JSON, so any value returned
    /// here is finite.
    pub fn f64_field(&self, name: &str) -> Option<f64> {
        self.payload.get(name)?.as_f64()
    }

    /// Read a string field from an object payload.
    pub fn str_field(&self, name: &str) -> Option<&str> {
        self.payload.get(name)?.as_str()
    }
}

/// JavaScript snippet that sets up the IPC bridge on the JS side.
/// This is injected as an initialization script into the shell WebView.
pub const IPC_INIT_SCRIPT: &str = r#"
(function() {
    // MSB IPC bridge
    window.msb = window.msb || {};
    window.msb.ipc = {
        send: function(kind, payload) {
            window.ipc.postMessage(JSON.stringify({
                kind: kind,
                payload: payload === undefined ? null : payload
            }));
        },
        // Callbacks registered by the shell to handle messages from Rust
        _handlers: {},
        on: function(kind, callback) {
            this._handlers[kind] = callback;
        },
        _dispatch: function(kind, payload) {
            var handler = this._handlers[kind];
            if (handler) {
                handler(payload);
            }
        }
    };
})();
"#;

/// Generate a JS snippet that dispatches a message to the JS IPC handler.
pub fn js_dispatch_message(kind: &str, payload: &serde_json::Value) -> String {
    let payload_json = serde_json::to_string(payload).unwrap_or_else(|_| "null".to_string());
    format!(
        "window.msb.ipc._dispatch({}, {});",
        serde_json::to_string(kind).unwrap_or_else(|_| "\"unknown\"".to_string()),
        payload_json,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_kind_and_payload() {
        let msg = IpcMessage::from_json(r#"{"kind":"close_panel","payload":{"id":3}}"#).unwrap();
        assert_eq!(msg.kind, "close_panel");
        assert_eq!(msg.u64_field("id"), Some(3));
    }

    #[test]
    fn missing_payload_is_null() {
        let msg = IpcMessage::from_json(r#"{"kind":"shell_ready"}"#).unwrap();
        assert_eq!(msg.payload, serde_json::Value::Null);
        assert_eq!(msg.u64_field("id"), None);
    }

    #[test]
    fn rejects_non_messages() {
        assert!(IpcMessage::from_json("not json").is_none());
        assert!(IpcMessage::from_json(r#"{"payload":1}"#).is_none());
        assert!(IpcMessage::from_json(r#"{"kind":5}"#).is_none());
        assert!(IpcMessage::from_json("[]").is_none());
    }

    #[test]
    fn field_accessors_check_types() {
        let msg = IpcMessage {
            kind: "set_input".into(),
            payload: json!({"id": "1", "text": 7, "x": 12.5}),
        };
        assert_eq!(msg.u64_field("id"), None);
        assert_eq!(msg.str_field("text"), None);
        assert_eq!(msg.f64_field("x"), Some(12.5));
    }

    #[test]
    fn negative_id_is_not_u64() {
        let msg = IpcMessage::from_json(r#"{"kind":"close_panel","payload":{"id":-1}}"#).unwrap();
        assert_eq!(msg.u64_field("id"), None);
    }

    #[test]
    fn dispatch_script_escapes_payload() {
        let script = js_dispatch_message("state", &json!({"url": "a\"); alert(1); (\""}));
        assert!(script.starts_with("window.msb.ipc._dispatch(\"state\", {"));
        assert!(script.contains(r#"a\"); alert(1); (\""#));
        assert!(script.ends_with(");"));
    }

    #[test]
    fn init_script_defines_bridge() {
        assert!(IPC_INIT_SCRIPT.contains("window.msb.ipc"));
        assert!(IPC_INIT_SCRIPT.contains("_dispatch"));
        assert!(IPC_INIT_SCRIPT.contains("window.ipc.postMessage"));
    }
}
