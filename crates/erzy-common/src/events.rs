use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::actions::HostCommand;
use crate::types::{PanelKind, Point};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum OverlayEvent {
    PanelOpened(PanelKind),
    PanelClosed(PanelKind),
    PositionSaved { widget: String, position: Point },
    ChatReply { text: String },
    ChatNotice { text: String },
    Host(HostCommand),
    #[serde(other)]
    Unknown,
}

pub struct EventBus {
    sender: broadcast::Sender<OverlayEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<OverlayEvent> {
        self.sender.subscribe()
    }

    pub fn publish(&self, event: OverlayEvent) -> usize {
        self.sender.send(event).unwrap_or(0)
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn publish_and_receive() {
        let bus = EventBus::new(16);
        let mut rx = bus.subscribe();

        bus.publish(OverlayEvent::PanelOpened(PanelKind::Tools));

        let event = rx.recv().await.unwrap();
        assert!(matches!(event, OverlayEvent::PanelOpened(PanelKind::Tools)));
    }

    #[tokio::test]
    async fn multiple_subscribers() {
        let bus = EventBus::new(16);
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();

        bus.publish(OverlayEvent::PanelClosed(PanelKind::Chat));

        assert!(matches!(
            rx1.recv().await.unwrap(),
            OverlayEvent::PanelClosed(PanelKind::Chat)
        ));
        assert!(matches!(
            rx2.recv().await.unwrap(),
            OverlayEvent::PanelClosed(PanelKind::Chat)
        ));
    }

    #[tokio::test]
    async fn position_and_chat_events() {
        let bus = EventBus::new(16);
        let mut rx = bus.subscribe();

        bus.publish(OverlayEvent::PositionSaved {
            widget: "erzyGearPos".into(),
            position: Point::new(120.0, 340.0),
        });
        bus.publish(OverlayEvent::ChatReply {
            text: "hello".into(),
        });

        let e1 = rx.recv().await.unwrap();
        assert!(
            matches!(e1, OverlayEvent::PositionSaved { ref widget, position } if widget == "erzyGearPos" && position == Point::new(120.0, 340.0))
        );

        let e2 = rx.recv().await.unwrap();
        assert!(matches!(e2, OverlayEvent::ChatReply { ref text } if text == "hello"));
    }

    #[test]
    fn publish_returns_zero_with_no_subscribers() {
        let bus = EventBus::new(16);
        assert_eq!(bus.publish(OverlayEvent::Host(HostCommand::Reload)), 0);
    }

    #[tokio::test]
    async fn publish_returns_subscriber_count() {
        let bus = EventBus::new(16);
        let _rx1 = bus.subscribe();
        let _rx2 = bus.subscribe();

        assert_eq!(bus.publish(OverlayEvent::Host(HostCommand::Reload)), 2);
    }

    #[test]
    fn unknown_event_deserializes() {
        let json = r#"{"type":"SomethingNew","data":null}"#;
        let event: OverlayEvent = serde_json::from_str(json).unwrap();
        assert!(matches!(event, OverlayEvent::Unknown));
    }
}
