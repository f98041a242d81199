use crossterm::event::KeyModifiers;

use crate::core::{Command, Key, WheelDirection};
use crate::kernel::action::Action;
use crate::kernel::effect::Effect;
use crate::kernel::error::Result;
use crate::kernel::services::ports::Settings;
use crate::kernel::workspace::ImageElement;

use super::keystep::{self, StepDirection};
use super::reference::ImageRef;
use super::state::ZoomState;
use super::wheel;

impl ZoomState {
    /// Handle one input event to completion. Returns whether state changed
    /// and the effects the service host should run.
    pub fn dispatch_action(&mut self, action: Action) -> (bool, Vec<Effect>) {
        match action {
            Action::KeyDown(key) => self.key_down(key),
            Action::KeyUp(key) => self.key_up(key),
            Action::Wheel {
                element,
                modifiers,
                direction,
            } => self.wheel(element, modifiers, direction),
            Action::RunCommand { pane, command } => self.run_command(pane, command),
            Action::UpdateSettings(settings) => self.update_settings(settings),
        }
    }

    fn key_down(&mut self, key: Key) -> (bool, Vec<Effect>) {
        if self.modifier_held || !self.settings.modifier_key.matches(&key) {
            return (false, Vec::new());
        }
        self.modifier_held = true;
        (true, Vec::new())
    }

    fn key_up(&mut self, key: Key) -> (bool, Vec<Effect>) {
        if !self.modifier_held || !self.settings.modifier_key.matches(&key) {
            return (false, Vec::new());
        }
        self.modifier_held = false;
        (true, Vec::new())
    }

    fn wheel(
        &mut self,
        element: ImageElement,
        modifiers: KeyModifiers,
        direction: WheelDirection,
    ) -> (bool, Vec<Effect>) {
        if self.modifier_held && !modifiers.contains(self.settings.modifier_key.as_modifiers()) {
            // The keyup was swallowed (window switch and the like); drop the
            // stale flag and let the wheel event scroll normally.
            self.modifier_held = false;
            return (true, Vec::new());
        }
        if !self.modifier_held {
            return (false, Vec::new());
        }

        match self.zoom_element(&element, direction) {
            Ok(result) => result,
            Err(err) => {
                tracing::debug!(src = %element.src, error = %err, "zoom aborted");
                (false, Vec::new())
            }
        }
    }

    fn zoom_element(
        &mut self,
        element: &ImageElement,
        direction: WheelDirection,
    ) -> Result<(bool, Vec<Effect>)> {
        let pane = self.workspace.resolve_owner(element.id)?;
        let image_ref = ImageRef::resolve(element)?;
        let params = image_ref.zoom_params();

        let pane_state = &mut self.workspace.panes[pane];
        let text = pane_state.buffer.text();
        let Some(next) = wheel::apply_wheel(
            &text,
            &params,
            direction,
            self.settings.step_size,
            self.settings.initial_size,
            element.natural_width,
        ) else {
            return Ok((false, Vec::new()));
        };

        pane_state.buffer.replace_all(&next);
        pane_state.dirty = true;
        let effects = pane_state
            .path
            .clone()
            .map(|path| vec![Effect::WriteDocument { pane, path }])
            .unwrap_or_default();
        Ok((true, effects))
    }

    fn run_command(&mut self, pane: usize, command: Command) -> (bool, Vec<Effect>) {
        let direction = match command {
            Command::ImageGrow => StepDirection::Grow,
            Command::ImageShrink => StepDirection::Shrink,
        };

        let Some(pane_state) = self.workspace.panes.get_mut(pane) else {
            return (false, Vec::new());
        };
        let (row, _) = pane_state.buffer.cursor();
        let Some(line) = pane_state.buffer.line(row) else {
            return (false, Vec::new());
        };

        match keystep::apply_step(&line, direction) {
            Ok(next) if next != line => {
                pane_state.buffer.set_line(row, &next);
                pane_state.dirty = true;
                let effects = pane_state
                    .path
                    .clone()
                    .map(|path| vec![Effect::WriteDocument { pane, path }])
                    .unwrap_or_default();
                (true, effects)
            }
            Ok(_) => (false, Vec::new()),
            Err(err) => {
                tracing::debug!(pane, row, error = %err, "image step abandoned");
                (false, Vec::new())
            }
        }
    }

    fn update_settings(&mut self, settings: Settings) -> (bool, Vec<Effect>) {
        if self.settings == settings {
            return (false, Vec::new());
        }
        self.settings = settings.clone();
        (true, vec![Effect::PersistSettings(settings)])
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/zoom/reducer.rs"]
mod tests;
