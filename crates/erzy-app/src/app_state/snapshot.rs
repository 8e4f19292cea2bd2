//! Presentation snapshot of the overlay.

use erzy_common::ToolAction;
use erzy_gesture::{DraggableElement, PanelToggle};

use super::core::OverlayShell;
use super::types::{
    ChatMessageSnapshot, ChatSnapshot, PanelSnapshot, ShellSnapshot, ToastSnapshot,
    ToolEntrySnapshot, WidgetSnapshot, HOST_Z_INDEX,
};

impl OverlayShell {
    pub fn snapshot(&mut self) -> ShellSnapshot {
        let viewport = self.viewport;
        let widget = |el: &DraggableElement| WidgetSnapshot {
            position: el.position(viewport),
            size: el.size(),
            dragging: el.tracker().state().moved && el.is_tracking(),
        };
        let panel = |toggle: &PanelToggle| PanelSnapshot {
            state: toggle.state(),
            transform: toggle.transform(),
        };

        let tools = ToolAction::panel_entries()
            .iter()
            .map(|&action| ToolEntrySnapshot {
                action,
                label: action.label(),
                icon: action.icon(),
                enabled: self.is_tool_enabled(action),
            })
            .collect();

        let messages = self
            .chat
            .transcript()
            .messages()
            .iter()
            .map(|m| ChatMessageSnapshot {
                text: m.text.clone(),
                is_user: m.is_user,
                is_notice: m.is_notice(),
            })
            .collect();

        let chat = ChatSnapshot {
            window: widget(&self.chat_window),
            panel: panel(&self.chat_panel),
            model: self.settings.model(),
            input: self.chat.input().to_string(),
            input_enabled: self.chat.is_input_enabled(),
            outstanding: self.chat.outstanding(),
            messages,
        };

        let notifications = self
            .notifications
            .visible()
            .into_iter()
            .map(|n| ToastSnapshot {
                level: n.level,
                message: n.message.clone(),
            })
            .collect();

        ShellSnapshot {
            viewport,
            z_index: HOST_Z_INDEX,
            launcher: widget(&self.launcher),
            tools_panel: panel(&self.tools_panel),
            tools,
            chat,
            dark_mode: self.settings.dark_mode(),
            notifications,
            host_commands: self.host_commands.clone(),
            events: Vec::new(),
        }
    }
}
