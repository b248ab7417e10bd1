use crate::error::{Error, Result};
use serde::Serialize;

/// Speeds projected when the user does not ask for specific ones.
pub const DEFAULT_SPEEDS: [f64; 5] = [1.0, 1.25, 1.5, 1.75, 2.0];

/// Watch time at one playback speed.
///
/// Figures are exact quotients; rendering decides how to round. For the 1.0
/// baseline `saved_seconds` is exactly 0, and for speeds below 1.0 it goes
/// negative (watching slower costs time).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpeedProjection {
    pub speed: f64,
    pub watch_seconds: f64,
    pub saved_seconds: f64,
}

/// Project a total runtime across playback speeds, preserving their order.
pub fn project(total_seconds: u64, speeds: &[f64]) -> Result<Vec<SpeedProjection>> {
    let mut projections = Vec::with_capacity(speeds.len());

    for &speed in speeds {
        if speed <= 0.0 || !speed.is_finite() {
            return Err(Error::Domain(format!(
                "playback speed must be a positive number, got {speed}"
            )));
        }

        let watch_seconds = total_seconds as f64 / speed;
        projections.push(SpeedProjection {
            speed,
            watch_seconds,
            saved_seconds: total_seconds as f64 - watch_seconds,
        });
    }

    Ok(projections)
}
