//! Beat time
//!
//! Divides the day into 1000 beats of 86.4 seconds each, counted from
//! midnight at UTC+1 regardless of the wearer's time zone.

/// Offset of the beat reference meridian from UTC
pub const REFERENCE_OFFSET_S: i64 = 3600;

/// Seconds per day
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Beats per day
pub const BEATS_PER_DAY: u16 = 1000;

/// Beat time (0-999) for an instant given as Unix seconds, UTC
///
/// Truncates: a beat only advances once its full 86.4 s have elapsed.
pub fn beat_time(utc_seconds: i64) -> u16 {
    let shifted = (utc_seconds.rem_euclid(SECONDS_PER_DAY) + REFERENCE_OFFSET_S)
        .rem_euclid(SECONDS_PER_DAY);

    let hour = shifted / 3600;
    let minute = shifted / 60 % 60;
    let second = shifted % 60;
    let total = hour * 3600 + minute * 60 + second;

    // total * 1000 / 86400, reduced
    (total * 10 / 864) as u16
}
