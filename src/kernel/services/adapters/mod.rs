//! Service adapters: OS/runtime specific implementations (IO).

pub mod keybinding;
pub mod probe;
pub mod settings;

pub use keybinding::Keybindings;
pub use probe::FileProbe;
pub use settings::{
    ensure_log_dir, ensure_settings_file, get_log_dir, get_settings_path, load_settings,
    save_settings,
};
