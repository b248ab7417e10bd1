use crate::config::{self, Config};
use anyhow::{Context, Result};

pub fn list(config: &Config) -> Result<()> {
    // Pretty print config as TOML
    let toml_str = toml::to_string_pretty(config).context("Failed to serialize config")?;
    println!("{}", toml_str);
    Ok(())
}

pub fn get(key: &str, config: &Config) -> Result<()> {
    // Convert to Value and walk the dot-notation path ("youtube.api_url")
    let value = serde_json::to_value(config).context("Failed to serialize config")?;

    let mut current = &value;
    for part in key.split('.') {
        current = current
            .get(part)
            .context(format!("Key not found: {}", part))?;
    }

    match current {
        serde_json::Value::String(s) => println!("{}", s),
        v => println!("{}", v),
    }

    Ok(())
}

pub fn set(key: &str, value: &str, config: &Config) -> Result<()> {
    let mut updated = config.clone();

    match key {
        "youtube.api_key" => updated.youtube.api_key = Some(value.to_string()),
        "youtube.api_url" => updated.youtube.api_url = Some(value.to_string()),
        "youtube.use_keyring" => {
            updated.youtube.use_keyring = value
                .parse()
                .context("Expected 'true' or 'false' for youtube.use_keyring")?;
        }
        "playback.speeds" => {
            updated.playback.speeds = value
                .split(',')
                .map(|s| s.trim().parse::<f64>())
                .collect::<std::result::Result<Vec<_>, _>>()
                .context("Expected a comma-separated list of numbers for playback.speeds")?;
        }
        _ => anyhow::bail!(
            "Unknown config key: {} (known keys: youtube.api_key, youtube.api_url, \
             youtube.use_keyring, playback.speeds)",
            key
        ),
    }

    updated.validate()?;
    config::save(&updated)?;

    println!("✓ Set {} = {}", key, value);
    Ok(())
}
