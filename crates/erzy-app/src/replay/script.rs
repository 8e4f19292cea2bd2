use std::path::Path;

use erzy_common::{ErzyError, PanelKind, ToolAction, Viewport};
use erzy_platform::PointerEvent;
use serde::Deserialize;

/// A replay script.
///
/// ```json
/// {
///   "page_text": "Text of the host page",
///   "steps": [
///     { "type": "pointer", "phase": "start", "source": "touch",
///       "target": "gear", "touches": [{ "x": 300, "y": 600 }], "time_ms": 0 },
///     { "type": "pointer", "phase": "end", "source": "touch", "time_ms": 80 },
///     { "type": "tool", "action": "eval", "input": "6 * 7" },
///     { "type": "chat", "text": "What is this page about?" }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Script {
    /// Overrides the viewport given on the command line.
    pub viewport: Option<Viewport>,
    /// Host page text used as chat context.
    pub page_text: String,
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Step {
    Pointer(PointerEvent),
    Tool {
        action: ToolAction,
        #[serde(default)]
        input: Option<String>,
    },
    Close {
        panel: PanelKind,
    },
    Chat {
        text: String,
    },
    ClearChat,
    Resize {
        width: f64,
        height: f64,
    },
}

pub fn load_script(path: &Path) -> Result<Script, ErzyError> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}
