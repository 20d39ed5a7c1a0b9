// src/infra/paths.rs — Config file location
//
// TWEAK_AGENT_HOME overrides everything. Otherwise config lives in
// ~/.tweak-agent/.

use directories::BaseDirs;
use std::path::PathBuf;

/// Returns the TWEAK_AGENT_HOME override, if set.
fn tweak_agent_home() -> Option<PathBuf> {
    std::env::var_os("TWEAK_AGENT_HOME").map(PathBuf::from)
}

/// Configuration directory: $TWEAK_AGENT_HOME/ or ~/.tweak-agent/
///
/// Falls back to the current directory when no home directory can be
/// determined (minimal containers).
pub fn config_dir() -> PathBuf {
    if let Some(home) = tweak_agent_home() {
        return home;
    }
    match BaseDirs::new() {
        Some(dirs) => dirs.home_dir().join(".tweak-agent"),
        None => PathBuf::from(".tweak-agent"),
    }
}

pub fn config_file_path() -> PathBuf {
    config_dir().join("config.toml")
}
