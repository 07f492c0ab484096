// SPDX-License-Identifier: MPL-2.0
//! Text rendering of playback times and speeds.

/// Formats seconds as `m:ss`.
///
/// There is no hours component: minutes grow without bound, so one hour
/// renders as `60:00`. Negative and non-finite inputs render as `0:00`.
///
/// # Examples
///
/// ```
/// use speedplay::video_player::time_format::format_time;
///
/// assert_eq!(format_time(0.0), "0:00");
/// assert_eq!(format_time(65.0), "1:05");
/// assert_eq!(format_time(3600.0), "60:00");
/// ```
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds <= 0.0 {
        return "0:00".to_string();
    }
    let minutes = (seconds / 60.0).floor() as u64;
    let secs = (seconds % 60.0).floor() as u64;
    format!("{minutes}:{secs:02}")
}

/// Formats the `current / total` label under the seek bar.
///
/// An unknown duration renders as `0:00`.
pub fn time_label(current: f64, duration: Option<f64>) -> String {
    format!(
        "{} / {}",
        format_time(current),
        format_time(duration.unwrap_or(0.0))
    )
}

/// Formats a speed with two decimals, as on the large speed readout.
///
/// ```
/// use speedplay::video_player::time_format::format_speed;
///
/// assert_eq!(format_speed(1.0), "1.00x");
/// ```
pub fn format_speed(speed: f64) -> String {
    format!("{speed:.2}x")
}

/// Formats a speed in its shortest form (`1x`, `2.75x`), as on buttons.
pub fn speed_label(speed: f64) -> String {
    format!("{speed}x")
}
