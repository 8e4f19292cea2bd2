//! Idempotent mounting into a host surface.

use tracing::debug;

use super::core::OverlayShell;

/// Guards against injecting the overlay twice into the same host.
///
/// The first `mount` builds the shell; later calls return the existing one
/// and never run the builder.
#[derive(Default)]
pub struct HostMount {
    shell: Option<OverlayShell>,
}

impl HostMount {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_mounted(&self) -> bool {
        self.shell.is_some()
    }

    pub fn mount(&mut self, build: impl FnOnce() -> OverlayShell) -> &mut OverlayShell {
        if self.shell.is_some() {
            debug!("overlay already mounted");
        }
        self.shell.get_or_insert_with(build)
    }

    pub fn shell(&mut self) -> Option<&mut OverlayShell> {
        self.shell.as_mut()
    }

    pub fn unmount(&mut self) -> Option<OverlayShell> {
        self.shell.take()
    }
}
