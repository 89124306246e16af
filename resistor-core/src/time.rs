//! Wall-clock time snapshot

/// Local calendar time captured on one tick
///
/// Fields come from the platform's time service and are always valid
/// calendar values. `utc_seconds` is the same instant as Unix time; beat
/// time is derived from it rather than from the local fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimeSample {
    /// Hour (0-23)
    pub hour: u8,
    /// Minute (0-59)
    pub minute: u8,
    /// Second (0-59)
    pub second: u8,
    /// Month (1-12)
    pub month: u8,
    /// Day of month (1-31)
    pub day: u8,
    /// Seconds since the Unix epoch, UTC
    pub utc_seconds: i64,
}

impl TimeSample {
    /// Create a sample on January 1st whose UTC instant matches the local
    /// fields (a UTC-zoned watch on day zero)
    pub const fn hms(hour: u8, minute: u8, second: u8) -> Self {
        Self {
            hour,
            minute,
            second,
            month: 1,
            day: 1,
            utc_seconds: hour as i64 * 3600 + minute as i64 * 60 + second as i64,
        }
    }

    /// Replace the calendar date
    pub const fn on(mut self, month: u8, day: u8) -> Self {
        self.month = month;
        self.day = day;
        self
    }

    /// Replace the UTC instant
    pub const fn at_utc(mut self, utc_seconds: i64) -> Self {
        self.utc_seconds = utc_seconds;
        self
    }

    /// Copy with a different second, keeping the UTC instant in step
    pub const fn with_second(mut self, second: u8) -> Self {
        self.utc_seconds += second as i64 - self.second as i64;
        self.second = second;
        self
    }

    /// Check if the displayed hour, minute or date differs from `other`
    pub fn minute_changed(&self, other: &TimeSample) -> bool {
        self.minute != other.minute
            || self.hour != other.hour
            || self.day != other.day
            || self.month != other.month
    }
}
