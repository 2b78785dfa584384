//! Path helpers for the config directory and config file.

use std::path::PathBuf;

use crate::core::app;

/// Env var pointing at an explicit config file, bypassing the platform directory.
pub const CONFIG_PATH_ENV: &str = "TUTOR_CHAT_FORMAT_CONFIG";

/// Project directories from the standard platform locations.
pub fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("io", app::VENDOR, app::NAME)
}

/// Config directory (~/.config/tutor-chat-format/).
pub fn config_dir() -> Option<PathBuf> {
    project_dirs().map(|d| d.config_dir().to_path_buf())
}

/// Config file: `$TUTOR_CHAT_FORMAT_CONFIG` if set, else `config.json` in [`config_dir`].
pub fn config_file() -> Option<PathBuf> {
    if let Some(p) = std::env::var_os(CONFIG_PATH_ENV).filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(p));
    }
    config_dir().map(|d| d.join("config.json"))
}
