use crate::core::WheelDirection;

use super::params::ZoomParams;

/// One wheel tick against a document's raw text. Returns the rewritten text,
/// or `None` when the tick leaves the document unchanged.
///
/// The zoom-out guard is checked on the not-yet-decremented value: a size
/// equal to or below the step never shrinks.
pub fn apply_wheel(
    text: &str,
    params: &ZoomParams,
    direction: WheelDirection,
    step: u32,
    initial_size: u32,
    natural_width: Option<u32>,
) -> Option<String> {
    if let Some(old) = params.existing_size(text) {
        let mut new_size = old;
        match direction {
            WheelDirection::In => new_size = new_size.saturating_add(step),
            WheelDirection::Out => {
                if new_size > step {
                    new_size -= step;
                }
            }
        }
        if new_size == old {
            return None;
        }
        let next = params.replace_existing(old, new_size).apply(text);
        return (next != text).then_some(next);
    }

    // First zoom on an unsized image: start from the natural width capped by
    // the configured initial size, falling back to the configured value when
    // the width could not be resolved in time.
    let size = natural_width.map_or(initial_size, |w| w.min(initial_size));
    let next = params.replace_missing(size).apply(text);
    (next != text).then_some(next)
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/zoom/wheel.rs"]
mod tests;
