//! Data model layer.

pub mod text_buffer;

pub use text_buffer::{slice_to_cow, TextBuffer};
