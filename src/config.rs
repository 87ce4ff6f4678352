use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub static CONFIG_PATH: Lazy<&'static Path> = Lazy::new(|| {
    Path::new(
        option_env!("FACESELECT_CONFIG_PATH").unwrap_or("/usr/local/etc/faceselect/config.toml"),
    )
});

/// Where fetched resources are cached. Falls back to the platform cache dir.
pub static STORE_PREFIX: Lazy<PathBuf> = Lazy::new(|| {
    if let Some(prefix) = option_env!("FACESELECT_STORE_PREFIX") {
        return PathBuf::from(prefix);
    }
    ProjectDirs::from("", "", "faceselect")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| std::env::temp_dir().join("faceselect"))
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Width the photo is fitted to, in display units.
    pub viewport_width: f64,
    pub faces_source: PathBuf,
    pub image_source: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            viewport_width: 375.0,
            faces_source: PathBuf::from("family_faces.json"),
            image_source: PathBuf::from("family.jpg"),
        }
    }
}

pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let path = path.unwrap_or(&CONFIG_PATH);
    if !path.exists() {
        return Ok(Config::default());
    }
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading config at {}", path.display()))?;
    toml::from_str(&raw).with_context(|| format!("parsing config {}", path.display()))
}

pub fn save_config(cfg: &Config, path: Option<&Path>) -> Result<()> {
    let path = path.unwrap_or(&CONFIG_PATH);
    let data = toml::to_string_pretty(cfg).context("serializing config")?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    std::fs::write(path, data).with_context(|| format!("writing config {}", path.display()))
}
