use crate::config::{self, Config};
use anyhow::{Context, Result};

pub fn set(config: &Config, key: &str) -> Result<()> {
    if config.youtube.use_keyring {
        crate::keyring::store_api_key(key).context("Failed to store API key in keyring")?;
        println!("✓ API key stored in the system keyring");
    } else {
        let mut updated = config.clone();
        updated.youtube.api_key = Some(key.to_string());
        config::save(&updated)?;
        println!(
            "✓ API key stored in {}",
            config::config_path()?.display()
        );
    }
    Ok(())
}

pub fn status(config: &Config) -> Result<()> {
    if config.youtube.use_keyring && crate::keyring::get_api_key().is_ok() {
        println!("✓ API key present in the system keyring");
    } else if config.youtube.api_key.is_some() {
        println!("✓ API key present in the config file");
    } else {
        println!("No API key stored. Run 'tubetally key set <KEY>'");
    }
    Ok(())
}

pub fn clear(config: &Config) -> Result<()> {
    let mut removed = false;

    if config.youtube.use_keyring && crate::keyring::delete_api_key().is_ok() {
        removed = true;
    }

    if config.youtube.api_key.is_some() {
        let mut updated = config.clone();
        updated.youtube.api_key = None;
        config::save(&updated)?;
        removed = true;
    }

    if removed {
        println!("✓ API key removed");
    } else {
        println!("No API key stored.");
    }
    Ok(())
}
