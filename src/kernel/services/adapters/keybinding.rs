//! Shortcut table: key → command.
//!
//! The keyboard-step shortcuts are fixed, not configurable.

use crossterm::event::KeyCode;
use rustc_hash::FxHashMap;

use crate::core::{Command, Key};

pub struct Keybindings {
    bindings: FxHashMap<Key, Command>,
}

impl Keybindings {
    pub fn with_defaults() -> Self {
        let mut bindings = FxHashMap::default();
        bindings.insert(Key::ctrl_shift(KeyCode::Char('k')), Command::ImageGrow);
        bindings.insert(Key::ctrl_shift(KeyCode::Char('j')), Command::ImageShrink);
        Self { bindings }
    }

    pub fn resolve(&self, key: &Key) -> Option<Command> {
        self.bindings.get(key).copied()
    }

    pub fn keys_for_command(&self, command: Command) -> Vec<Key> {
        self.bindings
            .iter()
            .filter(|(_, cmd)| **cmd == command)
            .map(|(key, _)| *key)
            .collect()
    }
}

impl Default for Keybindings {
    fn default() -> Self {
        Self::with_defaults()
    }
}
