use crate::kernel::error::{Result, ZoomError};
use crate::kernel::workspace::ImageElement;

use super::params::ZoomParams;

/// Marker substring identifying a remote resource.
const REMOTE_MARKER: &str = "http";
/// Scheme marker identifying a locally-resolved attachment link.
const LOCAL_SCHEME_MARKER: &str = "app://";
/// Render-marker class prefix attached to inline vector-drawing embeds.
const DRAWING_EMBED_CLASS: &str = "drawing-embed";

/// Which annotation syntax is in play for one image reference.
///
/// Detection order is load-bearing: remote, then attachment, then drawing
/// embed. A drawing embed resolves to the attachment syntax with a name
/// derived from its fallback source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageRef {
    Remote { url: String },
    Attachment { name: String },
    DrawingEmbed { name: String },
}

impl ImageRef {
    pub fn resolve(element: &ImageElement) -> Result<Self> {
        if element.src.contains(REMOTE_MARKER) {
            return Ok(Self::Remote {
                url: element.src.clone(),
            });
        }

        if element.src.contains(LOCAL_SCHEME_MARKER) {
            return Ok(Self::Attachment {
                name: attachment_name(&element.src),
            });
        }

        if let Some(name) = drawing_embed_name(element) {
            return Ok(Self::DrawingEmbed { name });
        }

        Err(ZoomError::UnresolvableReference(element.src.clone()))
    }

    pub fn zoom_params(&self) -> ZoomParams {
        match self {
            Self::Remote { url } => ZoomParams::remote(url),
            Self::Attachment { name } | Self::DrawingEmbed { name } => {
                ZoomParams::attachment(name)
            }
        }
    }

    /// The attachment file name, when this reference resolves to one.
    pub fn attachment_name(&self) -> Option<&str> {
        match self {
            Self::Remote { .. } => None,
            Self::Attachment { name } | Self::DrawingEmbed { name } => Some(name),
        }
    }
}

/// Bare file name from a resolved attachment URI: query stripped, last path
/// component taken, percent-escapes decoded.
fn attachment_name(src: &str) -> String {
    let path = src.split('?').next().unwrap_or(src);
    let name = path.rsplit('/').next().unwrap_or(path);
    percent_decode(name)
}

/// Drawing embeds render from a generated file; the document references the
/// drawing itself. Strip the trailing 3-character extension of the fallback
/// source, then take the last path component.
fn drawing_embed_name(element: &ImageElement) -> Option<String> {
    if !element
        .classes
        .iter()
        .any(|c| c.starts_with(DRAWING_EMBED_CLASS))
    {
        return None;
    }

    let src = element.fallback_src.as_deref()?;
    let cut = src.len().saturating_sub(4);
    let stem = src.get(..cut).unwrap_or(src);
    let name = stem.rsplit('/').next().unwrap_or(stem);
    Some(name.to_string())
}

// No pack crate covers percent-decoding; a minimal local decoder is enough
// for attachment file names.
fn percent_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 3 <= bytes.len() {
            let hex = std::str::from_utf8(&bytes[i + 1..i + 3]).ok();
            if let Some(byte) = hex.and_then(|h| u8::from_str_radix(h, 16).ok()) {
                out.push(byte);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/zoom/reference.rs"]
mod tests;
