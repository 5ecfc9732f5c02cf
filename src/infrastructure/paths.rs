//! Platform directory resolution.
//!
//! Trace files live under the user's local data directory and the optional
//! configuration file under the user's configuration directory, both in a
//! `pixgrid` subdirectory.

use std::path::PathBuf;

/// Application directory name used under the platform base directories.
const APP_DIR: &str = "pixgrid";

/// Environment variable that overrides the configuration file location.
pub const CONFIG_PATH_ENV: &str = "PIXGRID_CONFIG";

/// Returns the data directory for trace output.
///
/// Resolves to `~/.local/share/pixgrid` on Linux and the platform equivalent
/// elsewhere. Falls back to the system temp directory when no home directory
/// can be determined.
///
/// # Examples
///
/// ```
/// use pixgrid::infrastructure::get_data_dir;
///
/// let data_dir = get_data_dir();
/// assert!(data_dir.ends_with("pixgrid"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(APP_DIR)
}

/// Returns the configuration file path to load, if one is expected.
///
/// `$PIXGRID_CONFIG` wins when set; otherwise `<config_dir>/pixgrid/config.toml`.
/// The file may not exist; callers decide whether that is an error.
#[must_use]
pub fn config_file_path() -> Option<PathBuf> {
    if let Some(explicit) = std::env::var_os(CONFIG_PATH_ENV).filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(explicit));
    }
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.toml"))
}
