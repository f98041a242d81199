//! mdzoom - image size annotations for Markdown-style documents
//!
//! Module structure:
//! - core: input model (Key, WheelDirection, Command)
//! - models: data models (TextBuffer)
//! - kernel: headless application core (state/action/effect) and services
//! - logging: tracing setup for the CLI surface

pub mod core;
pub mod kernel;
pub mod logging;
pub mod models;
