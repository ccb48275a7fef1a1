use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

use crate::consts::APP_NAME;

#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ConfigFetcher {
    Wget,
    Native,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) verbose: bool,
    #[serde(default)]
    pub(crate) no_color: bool,
    #[serde(default)]
    pub(crate) keep_going: bool,
    #[serde(default)]
    pub(crate) output_dir: Option<PathBuf>,
    #[serde(default)]
    pub(crate) timezone: Option<String>,
    #[serde(default)]
    pub(crate) fetcher: Option<ConfigFetcher>,
    /// Network timeout passed to the downloader (wget `-T`)
    #[serde(default)]
    pub(crate) timeout_secs: Option<u64>,
    /// wget binary to run instead of the one on PATH
    #[serde(default)]
    pub(crate) wget_path: Option<PathBuf>,
}

impl Config {
    pub(crate) fn load() -> Self {
        // Try config locations in order of priority
        for path in Self::get_config_paths() {
            if path.exists()
                && let Ok(content) = fs::read_to_string(&path)
            {
                match Self::parse(&content) {
                    Ok(config) => return config,
                    Err(e) => {
                        eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                    }
                }
            }
        }

        Self::default()
    }

    pub(crate) fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str::<Config>(content)
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/cambly-dl/config.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join(APP_NAME).join("config.toml"));
        }

        // 2. Platform config dir (e.g. macOS Application Support)
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join(APP_NAME).join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. Home directory: ~/.cambly-dl.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(format!(".{APP_NAME}.toml")));
        }

        paths
    }
}
