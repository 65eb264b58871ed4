// SPDX-License-Identifier: MPL-2.0
//! Playback progress computation.

/// Converts a playback position into a 0–100 percentage.
///
/// Returns `0.0` while the duration is unknown or zero, which is the state a
/// media element reports before its metadata has loaded. The result is
/// clamped so a position slightly past the reported duration never yields
/// more than 100.
///
/// Progress is fed by the element's own time-update signal; there is no
/// separate polling timer in this crate.
#[must_use]
pub fn progress_percent(current_time: f64, duration: Option<f64>) -> f32 {
    match duration {
        Some(duration) if duration > 0.0 => {
            ((current_time / duration) * 100.0).clamp(0.0, 100.0) as f32
        }
        _ => 0.0,
    }
}
