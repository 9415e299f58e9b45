//! Global configuration for tessera-studio
//!
//! Stores the button style and export settings the builder starts with.
//! Default location: ~/.config/tessera/config.yaml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tessera_core::{ButtonStyle, ExportOptions};

use crate::fields::{fit_style, Adjustment};

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Button the builder opens with
    pub button: ButtonStyle,
    /// Template and document wrapping used by Export
    pub export: ExportOptions,
}

impl Config {
    /// Fit numeric values to their field's precision and range
    ///
    /// Values that cannot be fitted fall back to the built-in defaults.
    /// Returns what changed.
    pub fn validate(&mut self) -> Vec<Adjustment> {
        fit_style(&mut self.button, &ButtonStyle::default())
    }
}

/// Get the default config file path
///
/// Returns: ~/.config/tessera/config.yaml (platform config dir)
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tessera")
        .join("config.yaml")
}

fn read_config(path: &Path) -> Result<Config> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;
    serde_yaml::from_str(&contents).with_context(|| format!("Failed to parse config file: {:?}", path))
}

/// Load configuration from a YAML file
///
/// A missing file gives the default config. An unreadable or invalid file
/// is logged and also gives the default config. Loaded values are fitted
/// with [`Config::validate`].
pub fn load_config(path: &Path) -> Config {
    if !path.exists() {
        log::info!("load_config: {:?} not found, using defaults", path);
        return Config::default();
    }

    let mut config = match read_config(path) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("load_config: {:#}, using defaults", e);
            return Config::default();
        }
    };

    let adjusted = config.validate();
    log::info!(
        "load_config: {}x{} button, {:?} export, {} value(s) adjusted",
        config.button.width,
        config.button.height,
        config.export.template,
        adjusted.len()
    );
    config
}

/// Save configuration to a YAML file
///
/// Creates parent directories if needed. The file is written next to its
/// destination and renamed into place, so a failed write leaves the old
/// defaults intact.
pub fn save_config(config: &Config, path: &Path) -> Result<()> {
    let yaml = serde_yaml::to_string(config).context("Failed to serialize config to YAML")?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
    }

    let staging = path.with_extension("yaml.tmp");
    std::fs::write(&staging, yaml).with_context(|| format!("Failed to write {:?}", staging))?;
    std::fs::rename(&staging, path).with_context(|| format!("Failed to replace config file: {:?}", path))?;

    log::info!("save_config: Saved {:?}", path);
    Ok(())
}

/// [`save_config`] on tokio's blocking pool
pub async fn persist(config: Config, path: PathBuf) -> Result<()> {
    tokio::task::spawn_blocking(move || save_config(&config, &path))
        .await
        .context("Config save task failed")?
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::StyleField;
    use tessera_core::ExportTemplate;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("tessera-config-test-{}-{}", name, std::process::id()))
            .join("config.yaml")
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.button, ButtonStyle::default());
        assert_eq!(config.export.template, ExportTemplate::Inline);
        assert!(!config.export.wrap_html);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = load_config(Path::new("/nonexistent/tessera/config.yaml"));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load() {
        let path = temp_path("roundtrip");
        let mut config = Config::default();
        config.button.label = String::from("Subscribe");
        config.button.width = 200.0;
        config.button.background_alpha = 0.6;
        config.export.template = ExportTemplate::StyleAndElement;
        config.export.wrap_html = true;

        save_config(&config, &path).unwrap();
        let loaded = load_config(&path);
        assert_eq!(loaded, config);

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_partial_yaml() {
        let yaml = "button:\n  label: Go\nexport:\n  template: style_and_element\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.button.label, "Go");
        assert_eq!(config.button.width, ButtonStyle::default().width);
        assert_eq!(config.export.template, ExportTemplate::StyleAndElement);
    }

    #[test]
    fn test_validate_replaces_out_of_range() {
        let mut config = Config::default();
        config.button.width = 9000.0;
        config.button.font_size = 0.0;
        config.button.background_alpha = 0.4;
        let adjusted = config.validate();
        assert_eq!(config.button.width, ButtonStyle::default().width);
        assert_eq!(config.button.font_size, ButtonStyle::default().font_size);
        assert_eq!(config.button.background_alpha, 0.4);
        assert_eq!(adjusted.len(), 2);
    }

    #[test]
    fn test_load_snaps_precision() {
        let path = temp_path("precision");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "button:\n  width: 120.5\n  background_alpha: 0.36\n  border_width: 2.9\n").unwrap();

        let config = load_config(&path);
        assert_eq!(config.button.width, 120.0);
        assert_eq!(config.button.background_alpha, 0.4);
        assert_eq!(config.button.border_width, 2.0);

        // Holding + from a loaded value stays on whole numbers
        let mut counter = tessera_core::BoundedCounter::new(StyleField::Width.limit(), StyleField::Width.number_type());
        counter.start_hold(tessera_core::Direction::Increment, config.button.width);
        assert_eq!(counter.hold_tick(), Some(121.0));

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_persist_on_blocking_pool() {
        let path = temp_path("persist");
        let mut config = Config::default();
        config.button.font_size = 18.0;

        let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
        runtime.block_on(persist(config.clone(), path.clone())).unwrap();

        assert_eq!(load_config(&path), config);
        assert!(!path.with_extension("yaml.tmp").exists());
        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_invalid_yaml_uses_defaults() {
        let path = temp_path("invalid");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "button: [not, a, map").unwrap();
        assert_eq!(load_config(&path), Config::default());
        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }
}
