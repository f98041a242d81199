//! Document text buffer.
//!
//! Responsibilities:
//! - text storage (Rope)
//! - cursor position
//! - line-addressable reads and single-line replacement

use ropey::{Rope, RopeSlice};
use std::borrow::Cow;
use std::io::{self, Write};

/// Borrow the slice as a str when it is contiguous, copy otherwise.
pub fn slice_to_cow(slice: RopeSlice<'_>) -> Cow<'_, str> {
    match slice.as_str() {
        Some(s) => Cow::Borrowed(s),
        None => Cow::Owned(slice.to_string()),
    }
}

#[derive(Clone)]
pub struct TextBuffer {
    rope: Rope,
    cursor: (usize, usize),
}

impl TextBuffer {
    pub fn new() -> Self {
        Self {
            rope: Rope::new(),
            cursor: (0, 0),
        }
    }

    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            cursor: (0, 0),
        }
    }

    pub fn rope(&self) -> &Rope {
        &self.rope
    }

    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Streaming write to a Writer, avoids materializing large documents.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        for chunk in self.rope.chunks() {
            writer.write_all(chunk.as_bytes())?;
        }
        Ok(())
    }

    pub fn cursor(&self) -> (usize, usize) {
        self.cursor
    }

    pub fn set_cursor(&mut self, row: usize, col: usize) {
        self.cursor = (row, col);
    }

    pub fn len_lines(&self) -> usize {
        self.rope.len_lines()
    }

    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    /// Line content without the trailing newline.
    pub fn line(&self, row: usize) -> Option<String> {
        if row >= self.rope.len_lines() {
            return None;
        }
        let slice = self.rope.line(row);
        let mut text = slice_to_cow(slice).into_owned();
        if text.ends_with('\n') {
            text.pop();
            if text.ends_with('\r') {
                text.pop();
            }
        }
        Some(text)
    }

    /// Replace one line in place, preserving its line terminator.
    pub fn set_line(&mut self, row: usize, text: &str) -> bool {
        if row >= self.rope.len_lines() {
            return false;
        }

        let start = self.rope.line_to_char(row);
        let line = self.rope.line(row);
        let mut end = start + line.len_chars();
        let mut tail = line.len_chars();
        if tail > 0 && line.char(tail - 1) == '\n' {
            end -= 1;
            tail -= 1;
        }
        if tail > 0 && line.char(tail - 1) == '\r' {
            end -= 1;
        }

        self.rope.remove(start..end);
        self.rope.insert(start, text);
        true
    }

    /// Swap in entirely new content; the wheel variant works read→compute→write
    /// on the whole text.
    pub fn replace_all(&mut self, text: &str) {
        self.rope = Rope::from_str(text);
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/text_buffer.rs"]
mod tests;
