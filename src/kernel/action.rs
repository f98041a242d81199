use crossterm::event::KeyModifiers;

use crate::core::{Command, Key, WheelDirection};
use crate::kernel::services::ports::Settings;

use super::workspace::ImageElement;

#[derive(Debug, Clone)]
pub enum Action {
    KeyDown(Key),
    KeyUp(Key),
    Wheel {
        element: ImageElement,
        /// Modifier bits as reported by the wheel event itself, used to
        /// detect a stale held flag after a swallowed keyup.
        modifiers: KeyModifiers,
        direction: WheelDirection,
    },
    RunCommand {
        pane: usize,
        command: Command,
    },
    UpdateSettings(Settings),
}
