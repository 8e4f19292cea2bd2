pub mod actions;
pub mod errors;
pub mod events;
pub mod id;
pub mod notifications;
pub mod types;

pub use actions::{HostCommand, ToolAction};
pub use errors::{ConfigError, ErzyError, PlatformError};
pub use events::{EventBus, OverlayEvent};
pub use id::{new_correlation_id, WidgetId};
pub use notifications::{Notification, NotificationLevel, NotificationQueue};
pub use types::{Offset, PanelKind, Point, Size, Viewport};

pub type Result<T> = std::result::Result<T, ErzyError>;
