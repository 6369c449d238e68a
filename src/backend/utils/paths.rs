//! Path utilities.

use std::path::PathBuf;

use anyhow::Result;

/// Name of the application directory.
const APP_DIR: &str = "Gatehouse";

/// Config file name inside the application directory.
pub const CONFIG_FILE: &str = "config.json";

/// Session file name inside the application directory.
pub const SESSION_FILE: &str = "session.json";

/// Per-user data directory the application folder lives in.
fn data_base_dir() -> Option<PathBuf> {
    let var = |name: &str| std::env::var_os(name).map(PathBuf::from);

    match std::env::consts::OS {
        "windows" => var("APPDATA"),
        "macos" => var("HOME").map(|home| home.join("Library/Application Support")),
        _ => var("XDG_DATA_HOME").or_else(|| var("HOME").map(|home| home.join(".local/share"))),
    }
}

/// Get the base application directory (`Gatehouse`).
#[inline]
pub fn get_app_dir() -> Result<PathBuf> {
    data_base_dir()
        .map(|base| base.join(APP_DIR))
        .ok_or_else(|| anyhow::anyhow!("Could not determine a data directory"))
}

/// Path of the config file.
pub fn get_config_path() -> Result<PathBuf> {
    Ok(get_app_dir()?.join(CONFIG_FILE))
}

/// Path of the stored session file.
pub fn get_session_path() -> Result<PathBuf> {
    Ok(get_app_dir()?.join(SESSION_FILE))
}
