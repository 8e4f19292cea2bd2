//! OverlayShell struct definition and constructor.

use std::sync::Arc;

use erzy_ai::ChatController;
use erzy_common::{EventBus, HostCommand, NotificationQueue, PanelKind, Size, Viewport, WidgetId};
use erzy_config::ErzyConfig;
use erzy_gesture::{Anchor, DraggableElement, PanelToggle, PointerTracker};
use erzy_platform::storage::{keys, KeyValueStore};
use tracing::info;

use super::settings::OverlaySettings;
use super::types::{CHAT_HEADER_TARGET, LAUNCHER_TARGET};

/// The whole overlay: launcher, tool panel, chat window and chat state.
pub struct OverlayShell {
    pub(super) config: ErzyConfig,
    pub(super) store: Arc<dyn KeyValueStore>,
    pub(super) settings: OverlaySettings,
    pub(super) viewport: Viewport,

    // Floating launcher and the panel its tap toggles
    pub(super) launcher: DraggableElement,
    pub(super) tools_panel: PanelToggle,

    // Chat window, its visibility, and the conversation behind it
    pub(super) chat_window: DraggableElement,
    pub(super) chat_panel: PanelToggle,
    pub(super) chat: ChatController,

    pub(super) event_bus: EventBus,
    pub(super) notifications: NotificationQueue,

    // Side effects waiting for the host to apply
    pub(super) host_commands: Vec<HostCommand>,
}

impl OverlayShell {
    pub fn new(config: ErzyConfig, store: Arc<dyn KeyValueStore>, viewport: Viewport) -> Self {
        let tracker = PointerTracker::new()
            .with_threshold(config.gesture.drag_threshold)
            .with_tap_max_ms(config.gesture.tap_max_ms);

        let launcher = DraggableElement::restore(
            WidgetId::new(keys::GEAR_POSITION),
            LAUNCHER_TARGET,
            Size::square(config.launcher.size),
            Anchor::BottomRight {
                right: config.launcher.margin_right,
                bottom: config.launcher.margin_bottom,
            },
            store.as_ref(),
        )
        .with_tracker(tracker.clone());

        let chat_window = DraggableElement::restore(
            WidgetId::new(keys::CHAT_POSITION),
            CHAT_HEADER_TARGET,
            Size::new(config.chat.width, config.chat.height),
            Anchor::Centered,
            store.as_ref(),
        )
        .with_tracker(tracker);

        let chat = ChatController::restore(
            store.as_ref(),
            config.chat.history_limit,
            config.chat.context_chars,
        );

        let settings = OverlaySettings::new(Arc::clone(&store), config.chat.model.clone());

        info!(
            width = viewport.width,
            height = viewport.height,
            history = chat.transcript().len(),
            "overlay shell created"
        );

        Self {
            config,
            store,
            settings,
            viewport,
            launcher,
            tools_panel: PanelToggle::new(PanelKind::Tools),
            chat_window,
            chat_panel: PanelToggle::new(PanelKind::Chat),
            chat,
            event_bus: EventBus::new(64),
            notifications: NotificationQueue::new(8),
            host_commands: Vec::new(),
        }
    }

    pub fn config(&self) -> &ErzyConfig {
        &self.config
    }

    pub fn settings(&self) -> &OverlaySettings {
        &self.settings
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }

    pub fn launcher(&self) -> &DraggableElement {
        &self.launcher
    }

    pub fn chat_window(&self) -> &DraggableElement {
        &self.chat_window
    }

    pub fn tools_panel(&self) -> &PanelToggle {
        &self.tools_panel
    }

    pub fn chat_panel(&self) -> &PanelToggle {
        &self.chat_panel
    }

    pub fn chat(&self) -> &ChatController {
        &self.chat
    }

    /// Host commands emitted so far, oldest first. The host applies and
    /// drains them.
    pub fn take_host_commands(&mut self) -> Vec<HostCommand> {
        std::mem::take(&mut self.host_commands)
    }
}
