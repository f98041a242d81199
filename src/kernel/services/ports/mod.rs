//! Service ports: traits + data contracts.

pub mod probe;
pub mod settings;

pub use probe::NaturalWidthProbe;
pub use settings::{ModifierKey, Settings};
