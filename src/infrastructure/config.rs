use crate::presentation::config::{keybindings, slots, styles};

use std::path::PathBuf;

use color_eyre::eyre::Result;
use config::ConfigError;
use serde::Deserialize;

use crate::core::countdown::CountdownConfig;
use crate::utils;

const CONFIG: &str = include_str!("../../.config/config.json5");

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub _data_dir: PathBuf,
    #[serde(default)]
    pub _config_dir: PathBuf,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub keybindings: keybindings::KeyBindings,
    #[serde(default)]
    pub styles: styles::Styles,
    #[serde(default)]
    pub countdown: Option<CountdownConfig>,
    #[serde(default)]
    pub slots: slots::SlideSlots,
}

impl Config {
    /// Built-in configuration shipped with the binary
    pub fn defaults() -> Result<Self, ConfigError> {
        json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))
    }

    /// Load user configuration from the config directory over the defaults.
    pub fn new() -> Result<Self, ConfigError> {
        Self::from_dir(utils::get_config_dir(), utils::get_data_dir())
    }

    pub fn from_dir(config_dir: PathBuf, data_dir: PathBuf) -> Result<Self, ConfigError> {
        let default_config = Self::defaults()?;
        let mut builder = config::Config::builder()
            .set_default("_data_dir", data_dir.to_string_lossy().to_string())?
            .set_default("_config_dir", config_dir.to_string_lossy().to_string())?;

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.json", config::FileFormat::Json),
            ("config.yaml", config::FileFormat::Yaml),
            ("config.toml", config::FileFormat::Toml),
            ("config.ini", config::FileFormat::Ini),
        ];
        let mut found_config = false;
        for (file, format) in &config_files {
            builder = builder.add_source(
                config::File::from(config_dir.join(file))
                    .format(*format)
                    .required(false),
            );
            if config_dir.join(file).exists() {
                found_config = true
            }
        }
        if !found_config {
            log::info!(
                "No configuration file found in {}, using defaults",
                config_dir.display()
            );
        }

        let mut cfg: Self = builder.build()?.try_deserialize()?;

        for (keyseq, action) in default_config.keybindings.iter() {
            cfg.keybindings
                .entry(keyseq.clone())
                .or_insert_with(|| action.clone());
        }
        for (style_key, style) in default_config.styles.iter() {
            cfg.styles
                .entry(style_key.clone())
                .or_insert_with(|| *style);
        }
        cfg.slots.merge(&default_config.slots);
        if cfg.countdown.is_none() {
            cfg.countdown = default_config.countdown;
        }

        Ok(cfg)
    }

    /// Countdown inputs, zero when nothing configured them
    pub fn countdown(&self) -> CountdownConfig {
        self.countdown.clone().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;
    use ratatui::style::Color;

    use super::*;
    use crate::action::Action;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "{}-{name}-{}",
            env!("CARGO_PKG_NAME"),
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        let _ = fs::create_dir_all(&dir);
        dir
    }

    #[test]
    fn test_defaults() {
        let cfg = Config::defaults().expect("embedded config must parse");
        assert_eq!(cfg.countdown(), CountdownConfig::new(0, 0, 5, 0));
        assert_eq!(
            cfg.keybindings
                .get(&vec![KeyEvent::new(KeyCode::Char('q'), KeyModifiers::empty())]),
            Some(&Action::Quit)
        );
        assert!(cfg.styles.contains_key("figure"));
        assert_eq!(cfg.slots.hours.as_deref(), Some("Hours"));
    }

    #[test]
    fn test_without_config_file() {
        let dir = scratch_dir("empty");
        let cfg = Config::from_dir(dir.clone(), dir).expect("defaults should apply");
        assert_eq!(cfg.countdown(), CountdownConfig::new(0, 0, 5, 0));
        assert!(!cfg.keybindings.is_empty());
        assert_eq!(cfg.slots.title.as_deref(), Some("Starting soon"));
    }

    #[test]
    fn test_user_config_overrides_defaults() {
        let dir = scratch_dir("user");
        fs::write(
            dir.join("config.json5"),
            r#"{
                countdown: { hours: 1, minutes: 30, until: "2030-01-01T00:00:00Z" },
                slots: { title: "Keynote" },
                styles: { figure: "bold red on black" },
                keybindings: { "<p>": "Stop" },
            }"#,
        )
        .expect("write config");

        let cfg = Config::from_dir(dir.clone(), dir).expect("config should load");
        let countdown = cfg.countdown();
        assert_eq!(countdown.hours, 1);
        assert_eq!(countdown.minutes, 30);
        assert_eq!(countdown.seconds, 0);
        assert_eq!(countdown.until.as_deref(), Some("2030-01-01T00:00:00Z"));
        assert_eq!(cfg.slots.title.as_deref(), Some("Keynote"));
        assert_eq!(cfg.slots.minutes.as_deref(), Some("Minutes"));
        assert_eq!(cfg.styles.style("figure").fg, Some(Color::Red));
        assert_eq!(
            cfg.keybindings
                .get(&vec![KeyEvent::new(KeyCode::Char('p'), KeyModifiers::empty())]),
            Some(&Action::Stop)
        );
        assert_eq!(
            cfg.keybindings
                .get(&vec![KeyEvent::new(KeyCode::Char('s'), KeyModifiers::empty())]),
            Some(&Action::Start)
        );
    }
}
