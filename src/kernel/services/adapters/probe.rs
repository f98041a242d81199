use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use crate::kernel::services::ports::NaturalWidthProbe;

/// Header-only dimension read of a local image file, bounded by a timeout.
/// The read runs on a worker thread; a slow or wedged filesystem costs at
/// most `timeout`, after which the caller falls back to the configured
/// initial size.
pub struct FileProbe {
    timeout: Duration,
}

impl FileProbe {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl Default for FileProbe {
    fn default() -> Self {
        Self::new(Duration::from_millis(250))
    }
}

impl NaturalWidthProbe for FileProbe {
    fn natural_width(&self, source: &Path) -> Option<u32> {
        let (tx, rx) = mpsc::channel();
        let path: PathBuf = source.to_path_buf();
        thread::spawn(move || {
            let width = image::image_dimensions(&path).ok().map(|(w, _)| w);
            let _ = tx.send(width);
        });

        match rx.recv_timeout(self.timeout) {
            Ok(width) => width,
            Err(_) => {
                tracing::debug!(path = %source.display(), "natural width probe timed out");
                None
            }
        }
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/probe.rs"]
mod tests;
