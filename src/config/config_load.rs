// src/config/config_load.rs
//
// loading of config.toml

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::config_types::{AnimationConfig, PathConfig, StyleConfig, WindowConfig};

#[derive(Debug, Deserialize)]
pub struct Config {
    pub window: WindowConfig,
    pub animation: AnimationConfig,
    pub style: StyleConfig,
    pub paths: PathConfig,
}

impl Config {
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        // First try to load from the executable's directory
        if let Some(exe_config) = Self::load_from_exe_dir() {
            return Ok(exe_config);
        }

        // Fallback to loading from the current working directory
        Self::load_from_working_dir()
    }

    fn load_from_exe_dir() -> Option<Self> {
        let exe_path = std::env::current_exe().ok()?;
        let exe_dir = exe_path.parent()?;
        let config_path = exe_dir.join("config.toml");

        if config_path.exists() {
            let content = fs::read_to_string(&config_path).ok()?;
            toml::from_str(&content).ok()
        } else {
            None
        }
    }

    fn load_from_working_dir() -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string("config.toml")?;
        Ok(toml::from_str(&content)?)
    }

    /// Resolve the optional extra-models file against the executable's
    /// directory when the configured path is relative.
    pub fn resolve_models_path(&self) -> Option<PathBuf> {
        let file = self.paths.models_file.as_ref()?;
        if Path::new(file).is_absolute() {
            return Some(PathBuf::from(file));
        }
        let resolved = std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|d| d.join(file)))
            .unwrap_or_else(|| PathBuf::from(file));
        Some(resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_config() {
        let raw = r#"
            [window]
            width = 800
            height = 600

            [animation]
            angular_velocity = 1.0
            idle_timeout_ms = 5000.0
            y_spin = 0.10
            z_spin = 0.14

            [style]
            explode = 0.045
            titles = true
            authentic = false

            [paths]
            models_file = "models.txt"
        "#;
        let config: Config = toml::from_str(raw).unwrap();
        assert_eq!(config.window.width, 800);
        assert_eq!(config.animation.idle_timeout_ms, 5000.0);
        assert!(config.style.titles);
        assert_eq!(config.paths.models_file.as_deref(), Some("models.txt"));
    }

    #[test]
    fn models_file_is_optional() {
        let raw = r#"
            [window]
            width = 320
            height = 240

            [animation]
            angular_velocity = 1.5
            idle_timeout_ms = 3000.0
            y_spin = 0.1
            z_spin = 0.1

            [style]
            explode = 0.0
            titles = false
            authentic = true

            [paths]
        "#;
        let config: Config = toml::from_str(raw).unwrap();
        assert!(config.paths.models_file.is_none());
    }
}
