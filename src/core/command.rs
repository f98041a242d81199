/// Named operations the keybinding layer resolves key events to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Bump the image size annotation on the cursor line.
    ImageGrow,
    /// Shrink the image size annotation on the cursor line.
    ImageShrink,
}

impl Command {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "imagegrow" | "image.grow" | "grow" => Some(Self::ImageGrow),
            "imageshrink" | "image.shrink" | "shrink" => Some(Self::ImageShrink),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::ImageGrow => "image.grow",
            Self::ImageShrink => "image.shrink",
        }
    }
}
