use crate::OutputFormat;
use crate::calculator::{self, Selection, WatchReport};
use crate::config::Config;
use crate::youtube::client::YouTubeClient;
use crate::youtube::duration::format_duration;
use anyhow::{Context, Result};

pub fn run(
    config: &Config,
    url: &str,
    from: usize,
    to: Option<usize>,
    speeds: Option<&[f64]>,
    format: OutputFormat,
) -> Result<()> {
    let api_key = config.get_api_key()?;

    let mut client = YouTubeClient::new(&api_key);
    if let Some(api_url) = &config.youtube.api_url {
        client = client.with_base_url(api_url);
    }

    let selection = Selection {
        start: from,
        end: to,
    };
    let speeds = speeds.unwrap_or(&config.playback.speeds);

    let report = calculator::calculate(&client, url, selection, speeds)
        .context("Failed to calculate playlist watch time")?;

    match format {
        OutputFormat::Json => print_json(&report)?,
        OutputFormat::Text => print_text(&report),
    }

    Ok(())
}

fn print_json(report: &WatchReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("Failed to serialize report")?;
    println!("{}", json);
    Ok(())
}

fn print_text(report: &WatchReport) {
    println!("Playlist: {}", report.playlist_id);
    println!(
        "Videos: {} of {} (positions {}-{})",
        report.range.count(),
        report.total_videos,
        report.range.start,
        report.range.end
    );
    if report.unresolved > 0 {
        println!(
            "Note: {} videos had no duration and were skipped",
            report.unresolved
        );
    }
    println!("Total watch time: {}", format_duration(report.total_seconds));

    println!();
    println!("{:<8} {:<14} {}", "Speed", "Watch time", "Saved");
    println!("{}", "-".repeat(38));

    for projection in &report.projections {
        // Seconds are exact quotients; truncate only for display
        let saved = if projection.saved_seconds > 0.0 {
            format!("Saves {}", format_duration(projection.saved_seconds as u64))
        } else {
            String::new()
        };
        println!(
            "{:<8} {:<14} {}",
            format!("{}x", projection.speed),
            format_duration(projection.watch_seconds as u64),
            saved
        );
    }
}
