use std::path::PathBuf;

use crate::kernel::services::ports::Settings;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Persist the pane's buffer to its backing file.
    WriteDocument { pane: usize, path: PathBuf },
    /// Settings changed through the preferences surface; write them out.
    PersistSettings(Settings),
}
