mod settings;

pub use settings::{
    ApiSettings, Config, SyncSettings, SyncStrategy, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS,
};

use crate::error::{ContactsError, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// Get the config directory path (XDG config dir or ~/.contacts/)
pub fn config_dir() -> Result<PathBuf> {
    if let Some(proj_dirs) = ProjectDirs::from("", "", "contacts") {
        return Ok(proj_dirs.config_dir().to_path_buf());
    }

    let home = std::env::var_os("HOME").map(PathBuf::from).ok_or_else(|| {
        ContactsError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Could not determine home directory",
        ))
    })?;

    Ok(home.join(".contacts"))
}

pub fn config_file(config_dir: &PathBuf) -> PathBuf {
    config_dir.join("config.toml")
}

/// Load config.toml (defaults if missing)
pub fn load_config(config_dir: &PathBuf) -> Result<Config> {
    let path = config_file(config_dir);
    if !path.exists() {
        debug!(path = %path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }
    let content = fs::read_to_string(&path)?;
    toml::from_str(&content).map_err(|e| ContactsError::ConfigParse { path, source: e })
}

/// Template content for config.toml
pub const CONFIG_TEMPLATE: &str = r#"[api]
base_url = "https://contact-meeno.onrender.com"
timeout_secs = 30

[sync]
# "refetch" reloads the whole list after every change,
# "apply" patches the local list with the server's response instead
refresh = "refetch"
"#;
