use anyhow::{Context, Result};
use keyring::Entry;

const SERVICE: &str = "tube-tally";
const ACCOUNT: &str = "youtube-api-key";

fn entry() -> Result<Entry> {
    Entry::new(SERVICE, ACCOUNT).context("Failed to create keyring entry")
}

/// Store the YouTube API key in the system keyring
pub fn store_api_key(key: &str) -> Result<()> {
    entry()?
        .set_password(key)
        .context("Failed to store API key in keyring")
}

/// Retrieve the YouTube API key from the system keyring
pub fn get_api_key() -> Result<String> {
    entry()?
        .get_password()
        .context("Failed to retrieve API key from keyring")
}

/// Delete the YouTube API key from the system keyring
pub fn delete_api_key() -> Result<()> {
    entry()?
        .delete_credential()
        .context("Failed to delete API key from keyring")
}
