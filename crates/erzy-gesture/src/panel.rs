//! Open/closed state for slide-in panels.

use erzy_common::PanelKind;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelState {
    #[default]
    Closed,
    Open,
}

/// Presentation a panel state implies. Rendering is up to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SlideTransform {
    /// `translateY(0)`: fully on screen.
    SlideIn,
    /// `translateY(100%)`: parked below the viewport edge.
    SlideOut,
}

#[derive(Debug, Clone)]
pub struct PanelToggle {
    kind: PanelKind,
    state: PanelState,
}

impl PanelToggle {
    pub fn new(kind: PanelKind) -> Self {
        Self {
            kind,
            state: PanelState::Closed,
        }
    }

    pub fn kind(&self) -> PanelKind {
        self.kind
    }

    pub fn state(&self) -> PanelState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == PanelState::Open
    }

    /// Flip the state and return the new one.
    pub fn toggle(&mut self) -> PanelState {
        self.state = match self.state {
            PanelState::Closed => PanelState::Open,
            PanelState::Open => PanelState::Closed,
        };
        self.state
    }

    /// Returns `true` if the panel was closed before.
    pub fn open(&mut self) -> bool {
        let changed = self.state == PanelState::Closed;
        self.state = PanelState::Open;
        changed
    }

    /// Returns `true` if the panel was open before.
    pub fn close(&mut self) -> bool {
        let changed = self.state == PanelState::Open;
        self.state = PanelState::Closed;
        changed
    }

    pub fn transform(&self) -> SlideTransform {
        match self.state {
            PanelState::Open => SlideTransform::SlideIn,
            PanelState::Closed => SlideTransform::SlideOut,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        let panel = PanelToggle::new(PanelKind::Tools);
        assert_eq!(panel.state(), PanelState::Closed);
        assert!(!panel.is_open());
        assert_eq!(panel.transform(), SlideTransform::SlideOut);
    }

    #[test]
    fn toggle_flips() {
        let mut panel = PanelToggle::new(PanelKind::Tools);
        assert_eq!(panel.toggle(), PanelState::Open);
        assert_eq!(panel.transform(), SlideTransform::SlideIn);
        assert_eq!(panel.toggle(), PanelState::Closed);
    }

    #[test]
    fn open_and_close_are_unconditional() {
        let mut panel = PanelToggle::new(PanelKind::Chat);
        assert!(panel.open());
        assert!(!panel.open());
        assert!(panel.is_open());

        assert!(panel.close());
        assert!(!panel.close());
        assert!(!panel.is_open());
    }

    #[test]
    fn panels_are_independent() {
        let mut tools = PanelToggle::new(PanelKind::Tools);
        let mut chat = PanelToggle::new(PanelKind::Chat);
        tools.open();
        chat.open();
        assert!(tools.is_open() && chat.is_open());
        tools.close();
        assert!(chat.is_open());
    }

    #[test]
    fn state_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&PanelState::Open).unwrap(), "\"open\"");
    }
}
