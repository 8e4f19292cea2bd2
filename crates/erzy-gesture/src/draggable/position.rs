//! Position persistence.

use erzy_common::{PlatformError, WidgetId};
use erzy_platform::storage::{read_json, write_json, KeyValueStore};
use tracing::debug;

use super::types::ElementPosition;

/// Read a widget's saved position.
///
/// Absent, malformed, or non-finite data all mean "no saved position".
pub fn load_position(store: &dyn KeyValueStore, id: &WidgetId) -> Option<ElementPosition> {
    let position: ElementPosition = read_json(store, id.as_str())?;
    if !position.is_finite() {
        debug!(widget = %id, "ignoring non-finite saved position");
        return None;
    }
    Some(position)
}

pub fn save_position(
    store: &dyn KeyValueStore,
    id: &WidgetId,
    position: ElementPosition,
) -> Result<(), PlatformError> {
    write_json(store, id.as_str(), &position)
}
