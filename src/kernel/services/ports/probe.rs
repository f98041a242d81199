use std::path::Path;

/// Resolves the intrinsic pixel width of an image resource.
///
/// Implementations must be bounded: return `None` rather than wait
/// indefinitely when the resource cannot be inspected in time. Callers fall
/// back to the configured initial size on `None`.
pub trait NaturalWidthProbe {
    fn natural_width(&self, source: &Path) -> Option<u32>;
}
