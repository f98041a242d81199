use crate::kernel::services::ports::Settings;
use crate::kernel::workspace::WorkspaceState;

/// Per-session zoom state. The modifier-held flag lives here, passed into
/// dispatch explicitly rather than floating as ambient mutable state; it is
/// only ever touched from the single event-dispatch thread.
pub struct ZoomState {
    pub settings: Settings,
    pub workspace: WorkspaceState,
    pub(super) modifier_held: bool,
}

impl ZoomState {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            workspace: WorkspaceState::new(),
            modifier_held: false,
        }
    }

    pub fn modifier_held(&self) -> bool {
        self.modifier_held
    }
}
