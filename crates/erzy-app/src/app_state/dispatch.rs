//! Tool dispatch: routes tool panel activations and close controls.

use erzy_common::{HostCommand, Notification, OverlayEvent, PanelKind, ToolAction};
use erzy_gesture::PanelState;
use tracing::{info, warn};

use crate::eval::{evaluate, format_value};

use super::core::OverlayShell;

impl OverlayShell {
    /// Run a tool panel entry.
    ///
    /// `input` is the user's answer to the tool's prompt; only Eval uses it,
    /// and `None` or a blank answer means the prompt was dismissed. Every activation closes
    /// the tool panel.
    pub fn activate(&mut self, action: ToolAction, input: Option<&str>) {
        info!(tool = ?action, "tool activated");
        self.close_tools_panel();

        match action {
            ToolAction::OpenChat => self.open_chat(),
            ToolAction::Eval => self.run_eval(input),
            ToolAction::SelectAll => {
                self.emit_host_command(HostCommand::EnableTextSelection);
                self.notifications
                    .push(Notification::info("Copy mode active"));
            }
            ToolAction::Reload => self.emit_host_command(HostCommand::Reload),
            ToolAction::ToggleDarkMode => {
                let enabled = !self.settings.dark_mode();
                if let Err(e) = self.settings.set_dark_mode(enabled) {
                    warn!(error = %e, "failed to persist dark mode");
                }
            }
        }
    }

    /// Whether `action` can currently run.
    pub fn is_tool_enabled(&self, action: ToolAction) -> bool {
        match action {
            ToolAction::Eval => self.config.tools.eval_enabled,
            _ => true,
        }
    }

    pub fn toggle_tools_panel(&mut self) {
        let state = self.tools_panel.toggle();
        let event = match state {
            PanelState::Open => OverlayEvent::PanelOpened(PanelKind::Tools),
            PanelState::Closed => OverlayEvent::PanelClosed(PanelKind::Tools),
        };
        self.event_bus.publish(event);
    }

    /// The tool panel's close control.
    pub fn close_tools_panel(&mut self) {
        if self.tools_panel.close() {
            self.event_bus.publish(OverlayEvent::PanelClosed(PanelKind::Tools));
        }
    }

    pub fn open_chat(&mut self) {
        if self.chat_panel.open() {
            self.event_bus.publish(OverlayEvent::PanelOpened(PanelKind::Chat));
        }
    }

    /// The chat window's close control.
    pub fn close_chat(&mut self) {
        if self.chat_panel.close() {
            self.event_bus.publish(OverlayEvent::PanelClosed(PanelKind::Chat));
        }
    }

    fn run_eval(&mut self, input: Option<&str>) {
        if !self.config.tools.eval_enabled {
            warn!("eval tool is disabled");
            self.notifications
                .push(Notification::error("Eval is disabled"));
            return;
        }
        let Some(expression) = input.filter(|s| !s.trim().is_empty()) else {
            return;
        };

        let toast = match evaluate(expression) {
            Ok(value) => Notification::info(format_value(value)),
            Err(e) => Notification::error(format!("Error: {e}")),
        };
        self.notifications.push(toast);
    }

    fn emit_host_command(&mut self, command: HostCommand) {
        self.event_bus.publish(OverlayEvent::Host(command.clone()));
        self.host_commands.push(command);
    }
}
