use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::utils::debug_enabled;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) output_dir: Option<PathBuf>,
    #[serde(default)]
    pub(crate) base_name: Option<String>,
    #[serde(default)]
    pub(crate) truncated_name: Option<String>,
    #[serde(default)]
    pub(crate) marker: Option<String>,
    #[serde(default)]
    pub(crate) debug: bool,
}

impl Config {
    pub(crate) fn load() -> Self {
        Self::get_config_paths()
            .iter()
            .find_map(|path| Self::load_from(path))
            .unwrap_or_default()
    }

    /// Read one candidate file. Missing or unparsable files yield `None`; parse
    /// failures are reported on stderr so a typo does not go unnoticed.
    fn load_from(path: &Path) -> Option<Self> {
        if !path.exists() {
            return None;
        }
        let content = fs::read_to_string(path).ok()?;
        match toml::from_str::<Config>(&content) {
            Ok(config) => {
                if debug_enabled() {
                    eprintln!("[DEBUG] Loaded config from {}", path.display());
                }
                Some(config)
            }
            Err(e) => {
                eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                None
            }
        }
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/logcut/config.toml (Linux/cross-platform)
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("logcut").join("config.toml"));
        }

        // 2. Platform config dir, e.g. ~/Library/Application Support/logcut/config.toml
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("logcut").join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. Home directory: ~/.logcut.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".logcut.toml"));
        }

        paths
    }
}
