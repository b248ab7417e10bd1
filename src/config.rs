use anyhow::{Context, Result};
use config::{Config as ConfigBuilder, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub youtube: YouTubeConfig,
    #[serde(default)]
    pub playback: PlaybackConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct YouTubeConfig {
    /// Plain-text API key (legacy; migrated into the keyring on load)
    pub api_key: Option<String>,
    /// Optional API URL override for testing (e.g. mocking)
    pub api_url: Option<String>,
    /// Set false to keep the key in the config file instead of the keyring
    #[serde(default = "default_use_keyring")]
    pub use_keyring: bool,
}

fn default_use_keyring() -> bool {
    true
}

impl Default for YouTubeConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: None,
            use_keyring: true,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PlaybackConfig {
    #[serde(default = "default_speeds")]
    pub speeds: Vec<f64>,
}

fn default_speeds() -> Vec<f64> {
    crate::calculator::DEFAULT_SPEEDS.to_vec()
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            speeds: default_speeds(),
        }
    }
}

impl PlaybackConfig {
    /// Validate playback configuration
    pub fn validate(&self) -> Result<()> {
        if self.speeds.is_empty() {
            anyhow::bail!("playback.speeds must list at least one speed");
        }
        for &speed in &self.speeds {
            if speed <= 0.0 || !speed.is_finite() {
                anyhow::bail!("Invalid playback speed {} (must be a positive number)", speed);
            }
        }
        Ok(())
    }
}

impl Config {
    /// Get the YouTube API key from keyring or config (with migration)
    pub fn get_api_key(&self) -> Result<String> {
        // Try keyring first, unless disabled
        if self.youtube.use_keyring {
            if let Ok(key) = crate::keyring::get_api_key() {
                return Ok(key);
            }
        }

        // Fall back to config file (legacy)
        if let Some(key) = &self.youtube.api_key {
            return Ok(key.clone());
        }

        anyhow::bail!("YouTube API key not found. Run 'tubetally key set <KEY>' to configure")
    }

    /// Validate all configuration
    pub fn validate(&self) -> Result<()> {
        self.playback.validate()?;
        Ok(())
    }

    /// Migrate a plain-text API key to the keyring
    pub fn migrate_credentials(&mut self) -> Result<bool> {
        if !self.youtube.use_keyring {
            return Ok(false);
        }

        let mut migrated = false;

        if let Some(key) = &self.youtube.api_key {
            // Store in keyring
            crate::keyring::store_api_key(key).context("Failed to store API key in keyring")?;

            // Clear from config
            self.youtube.api_key = None;
            migrated = true;
        }

        Ok(migrated)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let config_dir = home::home_dir()
        .context("Could not find home directory")?
        .join(".tube-tally");
    Ok(config_dir.join("config.toml"))
}

pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Config> {
    let loader = ConfigBuilder::builder()
        .add_source(File::from(path.as_ref()).format(FileFormat::Toml))
        .build()
        .context("Failed to build config loader")?;

    loader
        .try_deserialize()
        .context("Failed to parse config file")
}

pub fn load() -> Result<Config> {
    let config_path = config_path()?;

    // A missing file means an unconfigured install, not an error
    if !config_path.exists() {
        return Ok(Config::default());
    }

    let mut config = load_from_path(&config_path)?;

    // Validate configuration
    config.validate()?;

    // Auto-migrate credentials on load if needed
    if config.migrate_credentials()? {
        eprintln!("Migrated API key to secure storage.");
        // Save config without the key
        save_to_path(&config, &config_path)?;
    }

    Ok(config)
}

pub fn save(config: &Config) -> Result<()> {
    let config_path = config_path()?;
    if let Some(dir) = config_path.parent() {
        std::fs::create_dir_all(dir).context("Failed to create config directory")?;
    }
    save_to_path(config, &config_path)
}

pub fn save_to_path<P: AsRef<Path>>(config: &Config, path: P) -> Result<()> {
    let toml_string = toml::to_string_pretty(config).context("Failed to serialize config")?;

    std::fs::write(path.as_ref(), toml_string).context("Failed to write config file")?;

    Ok(())
}
