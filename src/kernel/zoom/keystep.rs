use std::sync::OnceLock;

use regex::Regex;

use crate::kernel::error::{Result, ZoomError};

/// Fixed per-press increment of the shortcut variant.
pub const STEP: u32 = 100;
/// Shrinking below this abandons the edit outright.
pub const MIN_SIZE: u32 = 50;
/// Size inserted when the line carries no annotation yet.
pub const DEFAULT_SIZE: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    Grow,
    Shrink,
}

impl StepDirection {
    fn delta(self) -> i64 {
        match self {
            Self::Grow => STEP as i64,
            Self::Shrink => -(STEP as i64),
        }
    }
}

/// Pipe-delimited numeric annotation immediately preceding a closing
/// bracket. Syntax-agnostic: matches remote, attachment, and drawing
/// references alike.
fn size_suffix_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\|(\d+)\]").expect("size suffix pattern is valid"))
}

/// Bump or shrink the annotation on one line.
///
/// An unannotated line gains `|100]` before its first closing bracket,
/// regardless of direction; a line without any closing bracket comes back
/// unchanged. `Err(NoOpEdit)` when the shrink would land below the floor,
/// which is a hard floor, not a clamp.
pub fn apply_step(line: &str, direction: StepDirection) -> Result<String> {
    if let Some(caps) = size_suffix_re().captures(line) {
        let (Some(whole), Some(digits)) = (caps.get(0), caps.get(1)) else {
            return Ok(line.to_string());
        };
        let Ok(old) = digits.as_str().parse::<i64>() else {
            return Ok(line.to_string());
        };

        let new_size = old + direction.delta();
        if new_size < MIN_SIZE as i64 {
            return Err(ZoomError::NoOpEdit);
        }

        let mut out = String::with_capacity(line.len() + 4);
        out.push_str(&line[..whole.start()]);
        out.push_str(&format!("|{new_size}]"));
        out.push_str(&line[whole.end()..]);
        return Ok(out);
    }

    Ok(line.replacen(']', &format!("|{DEFAULT_SIZE}]"), 1))
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/zoom/keystep.rs"]
mod tests;
