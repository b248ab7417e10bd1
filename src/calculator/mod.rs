pub mod selection;
pub mod speeds;

pub use selection::{Selection, SelectionRange};
pub use speeds::{DEFAULT_SPEEDS, SpeedProjection};

use crate::error::{Error, Result};
use crate::youtube::client::YouTubeClient;
use crate::youtube::url::extract_playlist_id;
use serde::Serialize;

/// Everything the presentation layer needs to describe a playlist's watch
/// time.
#[derive(Debug, Clone, Serialize)]
pub struct WatchReport {
    pub playlist_id: String,
    pub total_videos: usize,
    pub range: SelectionRange,
    pub total_seconds: u64,
    /// Selected videos the API returned no duration for (deleted or
    /// private). They contribute nothing to the total.
    pub unresolved: usize,
    pub projections: Vec<SpeedProjection>,
}

/// Fetch, select, total and project a playlist in one pass.
///
/// Fails fast: the first API, parse or validation problem aborts the run.
pub fn calculate(
    client: &YouTubeClient,
    url: &str,
    selection: Selection,
    speeds: &[f64],
) -> Result<WatchReport> {
    let playlist_id = extract_playlist_id(url)?;
    let entries = client.list_playlist(&playlist_id)?;
    let total_videos = entries.len();

    let range = selection.resolve(total_videos)?;
    let selected = range.slice(&entries);

    let ids: Vec<String> = selected.iter().map(|e| e.video_id.clone()).collect();
    let durations = client.video_durations(&ids)?;

    let mut total_seconds: u64 = 0;
    let mut unresolved = 0;
    for entry in selected {
        match durations.get(&entry.video_id) {
            Some(&secs) => total_seconds = total_seconds.saturating_add(secs),
            None => unresolved += 1,
        }
    }

    // Guard against reporting an all-zero range as a success
    if total_seconds == 0 {
        return Err(Error::Validation(format!(
            "no valid video durations found in positions {}-{}",
            range.start, range.end
        )));
    }

    let projections = speeds::project(total_seconds, speeds)?;

    Ok(WatchReport {
        playlist_id,
        total_videos,
        range,
        total_seconds,
        unresolved,
        projections,
    })
}
