use crate::domain::models::{AgeUnit, DurationBreakdown};

pub const MILLIS_IN_SECOND: u64 = 1000;
pub const MILLIS_IN_MINUTE: u64 = MILLIS_IN_SECOND * 60;
pub const MILLIS_IN_HOUR: u64 = MILLIS_IN_MINUTE * 60;
pub const MILLIS_IN_DAY: u64 = MILLIS_IN_HOUR * 24;
// No leap-year correction.
pub const MILLIS_IN_YEAR: u64 = MILLIS_IN_DAY * 365;

impl DurationBreakdown {
    /// Splits a duration into years/days/hours/minutes/seconds, largest unit first.
    /// The sub-second remainder is dropped.
    pub fn from_millis(millis: u64) -> Self {
        let mut rest = millis;
        let mut take = |unit: u64| {
            let n = rest / unit;
            rest %= unit;
            n
        };
        let years = take(MILLIS_IN_YEAR);
        let days = take(MILLIS_IN_DAY);
        let hours = take(MILLIS_IN_HOUR);
        let minutes = take(MILLIS_IN_MINUTE);
        let seconds = take(MILLIS_IN_SECOND);
        Self {
            years,
            days,
            hours,
            minutes,
            seconds,
        }
    }

    pub fn describe(&self) -> String {
        format!(
            "{} years, {} days, {} hours, {} minutes, {} seconds",
            self.years, self.days, self.hours, self.minutes, self.seconds
        )
    }
}

pub fn unit_millis(unit: AgeUnit) -> u64 {
    match unit {
        AgeUnit::Years => MILLIS_IN_YEAR,
        AgeUnit::Days => MILLIS_IN_DAY,
        AgeUnit::Hours => MILLIS_IN_HOUR,
        AgeUnit::Minutes => MILLIS_IN_MINUTE,
    }
}

/// Whole `unit`s contained in `millis`.
pub fn whole_units(millis: u64, unit: AgeUnit) -> u64 {
    millis / unit_millis(unit)
}

/// Milliseconds from `published` to `now`. A publish time in the future counts as zero.
pub fn elapsed_millis(now: i64, published: i64) -> u64 {
    u64::try_from(now.saturating_sub(published)).unwrap_or(0)
}
