pub type Result<T> = std::result::Result<T, ZoomError>;

/// Failure of one zoom interaction. Never fatal: the edit simply does not
/// happen and the document is left untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ZoomError {
    /// The image reference matches none of the known annotation syntaxes.
    UnresolvableReference(String),
    /// The triggering element was not found in any open document pane.
    NoOwningDocument,
    /// The shrink would cross the size floor; the edit is abandoned.
    NoOpEdit,
}

impl std::fmt::Display for ZoomError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ZoomError::UnresolvableReference(src) => {
                write!(f, "unresolvable image reference: {}", src)
            }
            ZoomError::NoOwningDocument => write!(f, "no owning document for element"),
            ZoomError::NoOpEdit => write!(f, "size floor reached, edit abandoned"),
        }
    }
}

impl std::error::Error for ZoomError {}
