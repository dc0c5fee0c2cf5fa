//! Configuration settings for Agent Arena.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Prefix for environment overrides, e.g. `ARENA__ROTATION__ASSETS__TICK_SECS=5`.
pub const ENV_PREFIX: &str = "ARENA";

/// Main configuration struct.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// UI configuration.
    pub ui: UiConfig,
    /// Featured-item rotation timing.
    pub rotation: RotationSettings,
    /// Key bindings.
    pub keybindings: KeyBindings,
    /// Optional TOML file replacing the built-in catalog.
    pub catalog_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the default location and environment.
    pub fn load_or_default() -> crate::Result<Self> {
        Self::load(None)
    }

    /// Load configuration from file, layered over defaults and under
    /// `ARENA__*` environment variables.
    pub fn load(path: Option<PathBuf>) -> crate::Result<Self> {
        let config_path = path.unwrap_or_else(default_config_path);
        Self::load_with_env(&config_path, environment())
    }

    /// Load configuration using an explicit environment source.
    pub fn load_with_env(path: &Path, env: config::Environment) -> crate::Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::Config::try_from(&Self::default())?)
            .add_source(
                config::File::from(path.to_path_buf())
                    .format(config::FileFormat::Toml)
                    .required(false),
            )
            .add_source(env)
            .build()?;

        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "Configuration loaded");
        Ok(config)
    }

    /// Save configuration to file.
    pub fn save(&self, path: Option<PathBuf>) -> crate::Result<()> {
        let config_path = path.unwrap_or_else(default_config_path);

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::config(e.to_string()))?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    /// Check values that deserialize fine but make no sense.
    pub fn validate(&self) -> crate::Result<()> {
        if self.ui.tick_rate_ms == 0 {
            return Err(crate::Error::config("ui.tick_rate_ms must be greater than 0"));
        }
        self.rotation.agents.validate("rotation.agents")?;
        self.rotation.assets.validate("rotation.assets")?;
        self.keybindings.compile()?;
        Ok(())
    }
}

fn default_config_path() -> PathBuf {
    super::config_dir()
        .map(|p| p.join("config.toml"))
        .unwrap_or_else(|_| PathBuf::from("config.toml"))
}

fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

/// UI configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Input poll timeout / redraw cadence in milliseconds.
    pub tick_rate_ms: u64,
    /// Enable mouse support.
    pub mouse_support: bool,
    /// Show status bar.
    pub show_status_bar: bool,
    /// Show help bar.
    pub show_help_bar: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 250,
            mouse_support: true,
            show_status_bar: true,
            show_help_bar: true,
        }
    }
}

impl UiConfig {
    /// Poll timeout as a duration.
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

/// Rotation timing for both featured lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RotationSettings {
    /// Featured agent on the arena view.
    pub agents: RotationConfig,
    /// Featured asset on the markets view.
    pub assets: RotationConfig,
}

impl Default for RotationSettings {
    fn default() -> Self {
        Self {
            agents: RotationConfig {
                tick_secs: 10,
                cooldown_secs: 30,
            },
            assets: RotationConfig {
                tick_secs: 7,
                cooldown_secs: 15,
            },
        }
    }
}

impl RotationSettings {
    /// Timing for the given target.
    pub fn for_target(&self, target: crate::rotation::RotationTarget) -> &RotationConfig {
        match target {
            crate::rotation::RotationTarget::Agents => &self.agents,
            crate::rotation::RotationTarget::Assets => &self.assets,
        }
    }
}

/// Timing for one rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RotationConfig {
    /// Seconds between automatic advances.
    pub tick_secs: u64,
    /// Seconds a manual selection stays pinned.
    pub cooldown_secs: u64,
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            tick_secs: 7,
            cooldown_secs: 15,
        }
    }
}

impl RotationConfig {
    /// Period between automatic advances.
    pub fn tick_period(&self) -> Duration {
        Duration::from_secs(self.tick_secs)
    }

    /// How long a manual selection stays pinned.
    pub fn cooldown(&self) -> Duration {
        Duration::from_secs(self.cooldown_secs)
    }

    fn validate(&self, section: &str) -> crate::Result<()> {
        if self.tick_secs == 0 {
            return Err(crate::Error::config(format!(
                "{section}.tick_secs must be greater than 0"
            )));
        }
        if self.cooldown_secs == 0 {
            return Err(crate::Error::config(format!(
                "{section}.cooldown_secs must be greater than 0"
            )));
        }
        Ok(())
    }
}

/// Key bindings configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    /// Quit the application.
    pub quit: String,
    /// Show help.
    pub help: String,
    /// Feature the next item.
    pub next: String,
    /// Feature the previous item.
    pub previous: String,
    /// Switch to arena view.
    pub arena: String,
    /// Switch to markets view.
    pub markets: String,
    /// Switch to predictions view.
    pub predictions: String,
    /// Switch to history view.
    pub history: String,
    /// Cycle to the next view.
    pub next_view: String,
    /// Open the bet ticket for the featured agent or selected market.
    pub open_ticket: String,
    /// Cycle the prediction category filter.
    pub filter: String,
    /// Cancel/back.
    pub back: String,
    /// Increase ticket amount.
    pub increase: String,
    /// Decrease ticket amount.
    pub decrease: String,
    /// Toggle ticket side.
    pub toggle_side: String,
    /// Toggle between YES and NO shares.
    pub toggle_outcome: String,
    /// Submit the ticket.
    pub submit: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            quit: "q".to_string(),
            help: "?".to_string(),
            next: "j".to_string(),
            previous: "k".to_string(),
            arena: "1".to_string(),
            markets: "2".to_string(),
            predictions: "3".to_string(),
            history: "4".to_string(),
            next_view: "Tab".to_string(),
            open_ticket: "b".to_string(),
            filter: "f".to_string(),
            back: "Esc".to_string(),
            increase: "+".to_string(),
            decrease: "-".to_string(),
            toggle_side: "s".to_string(),
            toggle_outcome: "o".to_string(),
            submit: "Enter".to_string(),
        }
    }
}

impl KeyBindings {
    /// Parse every binding, failing on the first invalid one.
    pub fn compile(&self) -> crate::Result<crate::events::KeyMap> {
        crate::events::KeyMap::from_bindings(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn no_env() -> config::Environment {
        environment().source(Some(HashMap::new()))
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_with_env(&dir.path().join("absent.toml"), no_env()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[rotation.assets]\ntick_secs = 9\n\n[keybindings]\nquit = \"Ctrl+c\"\n",
        )
        .unwrap();

        let config = Config::load_with_env(&path, no_env()).unwrap();
        assert_eq!(config.rotation.assets.tick_secs, 9);
        assert_eq!(config.rotation.assets.cooldown_secs, 15);
        assert_eq!(config.rotation.agents, RotationSettings::default().agents);
        assert_eq!(config.keybindings.quit, "Ctrl+c");
    }

    #[test]
    fn test_environment_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[rotation.agents]\ncooldown_secs = 20\n").unwrap();

        let env = environment().source(Some(HashMap::from([(
            "ARENA__ROTATION__AGENTS__COOLDOWN_SECS".to_string(),
            "25".to_string(),
        )])));
        let config = Config::load_with_env(&path, env).unwrap();
        assert_eq!(config.rotation.agents.cooldown_secs, 25);
    }

    #[test]
    fn test_zero_tick_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[rotation.assets]\ntick_secs = 0\n").unwrap();

        let err = Config::load_with_env(&path, no_env()).unwrap_err();
        assert!(err.to_string().contains("rotation.assets.tick_secs"));
    }

    #[test]
    fn test_bad_keybinding_is_rejected() {
        let mut config = Config::default();
        config.keybindings.next = "Hyper+j".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let mut config = Config::default();
        config.rotation.agents.tick_secs = 8;
        config.catalog_path = Some(PathBuf::from("/tmp/catalog.toml"));
        config.save(Some(path.clone())).unwrap();

        let loaded = Config::load_with_env(&path, no_env()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_durations() {
        let rotation = RotationSettings::default();
        assert_eq!(rotation.assets.tick_period(), Duration::from_secs(7));
        assert_eq!(rotation.agents.cooldown(), Duration::from_secs(30));
    }
}
