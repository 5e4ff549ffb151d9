use crate::types::PanelId;

/// Every user-triggerable action in the application.
///
/// Shell IPC messages and CLI startup options all resolve to an `Action`.
/// The app state dispatcher matches on this enum to route to subsystems.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // -- Layout --
    StartSplit(u32),
    ClosePanel(PanelId),

    // -- Address field --
    SetInput { panel: PanelId, text: String },
    SubmitAddress(PanelId),
    OpenExternal(PanelId),

    // -- Media / zoom --
    ToggleMute(PanelId),
    ZoomIn(PanelId),
    ZoomOut(PanelId),
    ZoomReset(PanelId),

    // -- Resize drag --
    ResizeBegin {
        panel: PanelId,
        x: f64,
        /// Measured on-screen width, used when the panel has no explicit width.
        width: Option<f64>,
    },
    ResizeMove { x: f64 },
    ResizeEnd,

    // -- Shell --
    ShellReady,
    ViewportMeasured { width: f64 },
    Quit,
}

impl Action {
    /// Stable short name, used as a structured log field.
    pub fn name(&self) -> &'static str {
        match self {
            Action::StartSplit(_) => "start_split",
            Action::ClosePanel(_) => "close_panel",
            Action::SetInput { .. } => "set_input",
            Action::SubmitAddress(_) => "submit_address",
            Action::OpenExternal(_) => "open_external",
            Action::ToggleMute(_) => "toggle_mute",
            Action::ZoomIn(_) => "zoom_in",
            Action::ZoomOut(_) => "zoom_out",
            Action::ZoomReset(_) => "zoom_reset",
            Action::ResizeBegin { .. } => "resize_begin",
            Action::ResizeMove { .. } => "resize_move",
            Action::ResizeEnd => "resize_end",
            Action::ShellReady => "shell_ready",
            Action::ViewportMeasured { .. } => "viewport",
            Action::Quit => "quit",
        }
    }

    /// The panel this action targets, if any.
    pub fn panel(&self) -> Option<PanelId> {
        match self {
            Action::ClosePanel(id)
            | Action::SubmitAddress(id)
            | Action::OpenExternal(id)
            | Action::ToggleMute(id)
            | Action::ZoomIn(id)
            | Action::ZoomOut(id)
            | Action::ZoomReset(id) => Some(*id),
            Action::SetInput { panel, .. } | Action::ResizeBegin { panel, .. } => Some(*panel),
            _ => None,
        }
    }

    /// Whether the action can change what the shell shows.
    ///
    /// `OpenExternal` and `Quit` leave the session untouched.
    pub fn changes_view(&self) -> bool {
        !matches!(self, Action::OpenExternal(_) | Action::Quit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_snake_case() {
        let actions = [
            Action::StartSplit(2),
            Action::ClosePanel(PanelId(1)),
            Action::SetInput {
                panel: PanelId(1),
                text: "a".into(),
            },
            Action::ResizeMove { x: 1.0 },
            Action::ViewportMeasured { width: 10.0 },
            Action::Quit,
        ];
        for action in &actions {
            let name = action.name();
            assert!(!name.is_empty());
            assert!(name.chars().all(|c| c.is_ascii_lowercase() || c == '_'));
        }
    }

    #[test]
    fn panel_target_extraction() {
        assert_eq!(Action::ZoomIn(PanelId(3)).panel(), Some(PanelId(3)));
        assert_eq!(
            Action::ResizeBegin {
                panel: PanelId(4),
                x: 0.0,
                width: None
            }
            .panel(),
            Some(PanelId(4))
        );
        assert_eq!(Action::StartSplit(3).panel(), None);
        assert_eq!(Action::ResizeEnd.panel(), None);
    }

    #[test]
    fn open_external_does_not_change_view() {
        assert!(!Action::OpenExternal(PanelId(1)).changes_view());
        assert!(!Action::Quit.changes_view());
        assert!(Action::ToggleMute(PanelId(1)).changes_view());
    }
}
