use serde::{Deserialize, Serialize};

/// Every entry of the tool panel.
///
/// Tool buttons and the headless harness both resolve to a `ToolAction`.
/// The overlay shell matches on this enum to route to subsystems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolAction {
    OpenChat,
    Eval,
    SelectAll,
    Reload,
    ToggleDarkMode,
}

impl ToolAction {
    /// Human-readable label shown under the tool icon.
    pub fn label(&self) -> &'static str {
        match self {
            ToolAction::OpenChat => "Chat AI",
            ToolAction::Eval => "Eval",
            ToolAction::SelectAll => "Select All",
            ToolAction::Reload => "Reload",
            ToolAction::ToggleDarkMode => "Dark Mode",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ToolAction::OpenChat => "\u{1F4AC}",
            ToolAction::Eval => "\u{1F4BB}",
            ToolAction::SelectAll => "\u{1F4DD}",
            ToolAction::Reload => "\u{1F504}",
            ToolAction::ToggleDarkMode => "\u{1F319}",
        }
    }

    /// Tool panel entries in display order.
    pub fn panel_entries() -> &'static [ToolAction] {
        &[
            ToolAction::OpenChat,
            ToolAction::Eval,
            ToolAction::SelectAll,
            ToolAction::Reload,
            ToolAction::ToggleDarkMode,
        ]
    }
}

/// Side effects the overlay asks the host surface to perform.
///
/// The overlay never touches the host directly; the embedding layer
/// drains these and applies them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum HostCommand {
    /// Force `user-select: text` on every host element.
    EnableTextSelection,
    /// Reload the host page.
    Reload,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_panel_entries_have_labels_and_icons() {
        for action in ToolAction::panel_entries() {
            assert!(!action.label().is_empty(), "{action:?} has empty label");
            assert!(!action.icon().is_empty(), "{action:?} has empty icon");
        }
    }

    #[test]
    fn panel_entries_start_with_chat() {
        assert_eq!(ToolAction::panel_entries()[0], ToolAction::OpenChat);
    }

    #[test]
    fn tool_action_serializes_snake_case() {
        let json = serde_json::to_string(&ToolAction::SelectAll).unwrap();
        assert_eq!(json, "\"select_all\"");
        let back: ToolAction = serde_json::from_str("\"open_chat\"").unwrap();
        assert_eq!(back, ToolAction::OpenChat);
    }

    #[test]
    fn host_command_is_tagged() {
        let json = serde_json::to_string(&HostCommand::Reload).unwrap();
        assert_eq!(json, r#"{"type":"Reload"}"#);
    }
}
