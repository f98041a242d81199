//! Image zoom domain: headless state + actions.
//!
//! Two interaction modes over the same document buffers: modifier+wheel
//! (syntax-aware, whole-text rewrite) and fixed keyboard shortcuts
//! (syntax-agnostic, single-line rewrite).

mod keystep;
mod params;
mod reducer;
mod reference;
mod state;
mod wheel;

pub use keystep::{apply_step, StepDirection, DEFAULT_SIZE, MIN_SIZE, STEP};
pub use params::{ReplaceRule, ZoomParams};
pub use reference::ImageRef;
pub use state::ZoomState;
pub use wheel::apply_wheel;
