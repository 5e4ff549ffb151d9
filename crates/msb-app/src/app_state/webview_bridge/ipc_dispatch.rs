//! IPC message validation and translation from shell messages to actions.

use msb_common::{Action, PanelId};
use msb_webview::IpcMessage;

use crate::app_state::core::MsbApp;

// =============================================================================
// IPC ALLOWLIST
// =============================================================================

/// Allowed IPC message kinds from JavaScript.
///
/// Any message with a `kind` not in this list is rejected and logged.
const ALLOWED_IPC_KINDS: &[&str] = &[
    "shell_ready",
    "start_split",
    "close_panel",
    "set_input",
    "submit_address",
    "toggle_mute",
    "zoom_in",
    "zoom_out",
    "zoom_reset",
    "open_external",
    "resize_begin",
    "resize_move",
    "resize_end",
    "viewport",
];

/// Check whether an IPC message kind is in the allowlist.
pub fn is_ipc_kind_allowed(kind: &str) -> bool {
    ALLOWED_IPC_KINDS.contains(&kind)
}

// =============================================================================
// PAYLOAD PARSING
// =============================================================================

fn panel_id(msg: &IpcMessage) -> Result<PanelId, &'static str> {
    let raw = msg.u64_field("id").ok_or("missing or invalid `id`")?;
    u32::try_from(raw)
        .map(PanelId)
        .map_err(|_| "`id` out of range")
}

fn number(msg: &IpcMessage, name: &'static str) -> Result<f64, &'static str> {
    msg.f64_field(name).ok_or(match name {
        "x" => "missing or invalid `x`",
        "width" => "missing or invalid `width`",
        _ => "missing or invalid number",
    })
}

/// Translate an allowlisted message into an [`Action`].
pub fn parse_action(msg: &IpcMessage) -> Result<Action, &'static str> {
    let action = match msg.kind.as_str() {
        "shell_ready" => Action::ShellReady,
        "start_split" => {
            let count = msg.u64_field("count").ok_or("missing or invalid `count`")?;
            let count = u32::try_from(count).map_err(|_| "`count` out of range")?;
            Action::StartSplit(count)
        }
        "close_panel" => Action::ClosePanel(panel_id(msg)?),
        "set_input" => Action::SetInput {
            panel: panel_id(msg)?,
            text: msg
                .str_field("text")
                .ok_or("missing or invalid `text`")?
                .to_string(),
        },
        "submit_address" => Action::SubmitAddress(panel_id(msg)?),
        "toggle_mute" => Action::ToggleMute(panel_id(msg)?),
        "zoom_in" => Action::ZoomIn(panel_id(msg)?),
        "zoom_out" => Action::ZoomOut(panel_id(msg)?),
        "zoom_reset" => Action::ZoomReset(panel_id(msg)?),
        "open_external" => Action::OpenExternal(panel_id(msg)?),
        "resize_begin" => Action::ResizeBegin {
            panel: panel_id(msg)?,
            x: number(msg, "x")?,
            // Optional: the shell may not have measured the panel yet.
            width: msg.f64_field("width").filter(|w| *w > 0.0),
        },
        "resize_move" => Action::ResizeMove {
            x: number(msg, "x")?,
        },
        "resize_end" => Action::ResizeEnd,
        "viewport" => Action::ViewportMeasured {
            width: number(msg, "width")?,
        },
        _ => return Err("unknown kind"),
    };
    Ok(action)
}

// =============================================================================
// DISPATCH
// =============================================================================

impl MsbApp {
    /// Handle a single IPC message from the shell.
    pub(in crate::app_state) fn handle_ipc_message(&mut self, body: &str) {
        let msg = match IpcMessage::from_json(body) {
            Some(m) => m,
            None => {
                tracing::warn!(body_len = body.len(), "IPC message rejected: failed to parse");
                return;
            }
        };

        if !is_ipc_kind_allowed(&msg.kind) {
            tracing::warn!(kind = %msg.kind, "IPC message rejected: unknown kind");
            return;
        }

        match parse_action(&msg) {
            Ok(action) => {
                tracing::trace!(kind = %msg.kind, "IPC message dispatched");
                self.dispatch(action);
            }
            Err(reason) => {
                tracing::warn!(kind = %msg.kind, reason, "IPC message rejected: bad payload");
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
