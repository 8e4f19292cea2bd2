use erzy_ai::{AiClient, ChatError};
use erzy_common::{OverlayEvent, PanelKind, Viewport};
use tokio::sync::broadcast::error::TryRecvError;
use tokio::sync::broadcast::Receiver;
use tracing::{debug, info, warn};

use crate::app_state::{OverlayShell, ShellSnapshot};

use super::script::{Script, Step};

/// Apply every step of `script` to `shell` and return the final snapshot,
/// including the events published along the way.
pub async fn run(
    shell: &mut OverlayShell,
    script: &Script,
    client: &dyn AiClient,
) -> ShellSnapshot {
    let mut events = shell.event_bus().subscribe();
    let mut collected = Vec::new();

    if let Some(viewport) = script.viewport {
        shell.set_viewport(viewport);
    }

    for (index, step) in script.steps.iter().enumerate() {
        debug!(step = index, ?step, "replaying");
        match step {
            Step::Pointer(event) => {
                let response = shell.handle_pointer(event);
                debug!(
                    step = index,
                    handled = response.handled,
                    prevent_default = response.prevent_default,
                    "pointer event"
                );
            }
            Step::Tool { action, input } => shell.activate(*action, input.as_deref()),
            Step::Close { panel } => match panel {
                PanelKind::Tools => shell.close_tools_panel(),
                PanelKind::Chat => shell.close_chat(),
            },
            Step::Chat { text } => {
                shell.set_chat_input(text.clone());
                match shell.send_chat(client, &script.page_text).await {
                    Ok(entry) => debug!(step = index, notice = entry.is_notice(), "chat resolved"),
                    Err(ChatError::EmptyInput) => warn!(step = index, "empty chat message skipped"),
                    Err(e) => warn!(step = index, error = %e, "chat step failed"),
                }
            }
            Step::ClearChat => shell.clear_chat(),
            Step::Resize { width, height } => shell.set_viewport(Viewport::new(*width, *height)),
        }
        drain_events(&mut events, &mut collected);
    }

    let mut snapshot = shell.snapshot();
    drain_events(&mut events, &mut collected);
    snapshot.events = collected;
    info!(
        steps = script.steps.len(),
        events = snapshot.events.len(),
        "replay finished"
    );
    snapshot
}

/// Move everything buffered on `events` into `out`. A lagged receiver
/// loses the overwritten events but keeps reading what is still buffered.
fn drain_events(events: &mut Receiver<OverlayEvent>, out: &mut Vec<OverlayEvent>) {
    loop {
        match events.try_recv() {
            Ok(event) => out.push(event),
            Err(TryRecvError::Lagged(skipped)) => {
                warn!(skipped, "replay event receiver lagged; events dropped");
            }
            Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => break,
        }
    }
}
