use std::ops::RangeInclusive;

use crossterm::event::{KeyCode, KeyModifiers, ModifierKeyCode};
use serde::{Deserialize, Serialize};

use crate::core::Key;

/// Preferences slider ranges. The core trusts the preferences surface to
/// stay inside them and does not re-validate.
pub const STEP_SIZE_RANGE: RangeInclusive<u32> = 0..=100;
pub const INITIAL_SIZE_RANGE: RangeInclusive<u32> = 0..=1000;
pub const INITIAL_SIZE_SLIDER_STEP: u32 = 25;

/// Which held key activates wheel-zoom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModifierKey {
    Alt,
    Ctrl,
    Shift,
}

impl ModifierKey {
    pub fn as_modifiers(self) -> KeyModifiers {
        match self {
            Self::Alt => KeyModifiers::ALT,
            Self::Ctrl => KeyModifiers::CONTROL,
            Self::Shift => KeyModifiers::SHIFT,
        }
    }

    /// Whether a key event represents this modifier going down or up, either
    /// as a dedicated modifier keycode or as modifier bits on another key.
    pub fn matches(self, key: &Key) -> bool {
        if key.modifiers.contains(self.as_modifiers()) {
            return true;
        }
        matches!(
            (self, key.code),
            (
                Self::Alt,
                KeyCode::Modifier(ModifierKeyCode::LeftAlt | ModifierKeyCode::RightAlt)
            ) | (
                Self::Ctrl,
                KeyCode::Modifier(
                    ModifierKeyCode::LeftControl | ModifierKeyCode::RightControl
                )
            ) | (
                Self::Shift,
                KeyCode::Modifier(ModifierKeyCode::LeftShift | ModifierKeyCode::RightShift)
            )
        )
    }

    /// The dedicated key event for this modifier, as the host delivers it.
    pub fn as_key(self) -> Key {
        match self {
            Self::Alt => Key::new(
                KeyCode::Modifier(ModifierKeyCode::LeftAlt),
                KeyModifiers::ALT,
            ),
            Self::Ctrl => Key::new(
                KeyCode::Modifier(ModifierKeyCode::LeftControl),
                KeyModifiers::CONTROL,
            ),
            Self::Shift => Key::new(
                KeyCode::Modifier(ModifierKeyCode::LeftShift),
                KeyModifiers::SHIFT,
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_modifier_key")]
    pub modifier_key: ModifierKey,
    #[serde(default = "default_step_size")]
    pub step_size: u32,
    #[serde(default = "default_initial_size")]
    pub initial_size: u32,
}

fn default_modifier_key() -> ModifierKey {
    ModifierKey::Alt
}

fn default_step_size() -> u32 {
    25
}

fn default_initial_size() -> u32 {
    500
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            modifier_key: default_modifier_key(),
            step_size: default_step_size(),
            initial_size: default_initial_size(),
        }
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/settings.rs"]
mod tests;
