//! Durations: non-negative spans of time
//!
//! A duration counts milliseconds. Months and years use the average
//! Gregorian lengths (a year is 365.2425 days, a month a twelfth of that),
//! so a duration converts between units without reference to a calendar.
//!
//! Source text is ISO 8601 prefixed with `~`, e.g. `~P1Y2M3DT4H5M6.7S`,
//! with every unit carried into the next larger one. Zero is `~P0W`.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use primer_core::{
    anchored, Factored, Lexical, Ordered, Polarized, PrimitiveError, PrimitiveResult, Temporal,
};

pub const MILLISECONDS_PER_SECOND: u64 = 1_000;
pub const MILLISECONDS_PER_MINUTE: u64 = 60 * MILLISECONDS_PER_SECOND;
pub const MILLISECONDS_PER_HOUR: u64 = 60 * MILLISECONDS_PER_MINUTE;
pub const MILLISECONDS_PER_DAY: u64 = 24 * MILLISECONDS_PER_HOUR;
pub const MILLISECONDS_PER_WEEK: u64 = 7 * MILLISECONDS_PER_DAY;
/// 365.2425 days
pub const MILLISECONDS_PER_YEAR: u64 = 31_556_952_000;
/// 30.436875 days
pub const MILLISECONDS_PER_MONTH: u64 = MILLISECONDS_PER_YEAR / 12;

static DURATION: Lazy<Regex> = Lazy::new(|| {
    let count = r"0|[1-9][0-9]*";
    anchored(&format!(
        concat!(
            r"~P(?:(?P<weeks>{count})W",
            r"|(?:(?P<years>{count})Y)?(?:(?P<months>{count})M)?(?:(?P<days>{count})D)?",
            r"(?P<time>T(?:(?P<hours>{count})H)?(?:(?P<minutes>{count})M)?",
            r"(?:(?P<seconds>{count})(?:\.(?P<fraction>[0-9]{{1,3}}))?S)?)?)",
        ),
        count = count,
    ))
});

/// Span of time in milliseconds
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Duration(u64);

impl Duration {
    pub const ZERO: Duration = Duration(0);

    #[inline]
    pub fn new(milliseconds: u64) -> Self {
        Duration(milliseconds)
    }

    pub fn from_source(source: &str) -> PrimitiveResult<Self> {
        let illegal = || PrimitiveError::illegal_source("Duration", source);
        let captures = DURATION.captures(source).ok_or_else(illegal)?;
        let count = |name: &str| -> PrimitiveResult<Option<u64>> {
            captures
                .name(name)
                .map(|text| text.as_str().parse::<u64>().map_err(|_| illegal()))
                .transpose()
        };

        let units = [
            ("weeks", MILLISECONDS_PER_WEEK),
            ("years", MILLISECONDS_PER_YEAR),
            ("months", MILLISECONDS_PER_MONTH),
            ("days", MILLISECONDS_PER_DAY),
            ("hours", MILLISECONDS_PER_HOUR),
            ("minutes", MILLISECONDS_PER_MINUTE),
            ("seconds", MILLISECONDS_PER_SECOND),
        ];
        let mut total: u64 = 0;
        let mut parts = 0;
        let mut time_parts = 0;
        for (name, unit) in units {
            if let Some(value) = count(name)? {
                parts += 1;
                if matches!(name, "hours" | "minutes" | "seconds") {
                    time_parts += 1;
                }
                total = value
                    .checked_mul(unit)
                    .and_then(|milliseconds| total.checked_add(milliseconds))
                    .ok_or_else(illegal)?;
            }
        }
        if let Some(fraction) = captures.name("fraction") {
            let digits = format!("{:0<3}", fraction.as_str());
            let milliseconds: u64 = digits.parse().map_err(|_| illegal())?;
            total = total.checked_add(milliseconds).ok_or_else(illegal)?;
        }
        // `~P` and `~P1DT` carry no value for the designators they open.
        if parts == 0 || (captures.name("time").is_some() && time_parts == 0) {
            return Err(illegal());
        }
        // Only the fully carried form is canonical: `~PT1H30M`, never `~PT90M`.
        let duration = Duration(total);
        if duration.as_source() != source {
            return Err(illegal());
        }
        Ok(duration)
    }

    #[inline]
    pub fn as_intrinsic(self) -> u64 {
        self.0
    }

    // Milliseconds left over after the whole years, months and days.
    fn within_day(self) -> u64 {
        self.0 % MILLISECONDS_PER_YEAR % MILLISECONDS_PER_MONTH % MILLISECONDS_PER_DAY
    }
}

impl Factored for Duration {
    fn get_milliseconds(&self) -> i64 {
        (self.within_day() % MILLISECONDS_PER_SECOND) as i64
    }

    fn get_seconds(&self) -> i64 {
        (self.within_day() % MILLISECONDS_PER_MINUTE / MILLISECONDS_PER_SECOND) as i64
    }

    fn get_minutes(&self) -> i64 {
        (self.within_day() % MILLISECONDS_PER_HOUR / MILLISECONDS_PER_MINUTE) as i64
    }

    fn get_hours(&self) -> i64 {
        (self.within_day() / MILLISECONDS_PER_HOUR) as i64
    }

    fn get_days(&self) -> i64 {
        (self.0 % MILLISECONDS_PER_YEAR % MILLISECONDS_PER_MONTH / MILLISECONDS_PER_DAY) as i64
    }

    /// Whole weeks within the days part.
    fn get_weeks(&self) -> i64 {
        self.get_days() / 7
    }

    fn get_months(&self) -> i64 {
        (self.0 % MILLISECONDS_PER_YEAR / MILLISECONDS_PER_MONTH) as i64
    }

    fn get_years(&self) -> i64 {
        (self.0 / MILLISECONDS_PER_YEAR) as i64
    }
}

impl Temporal for Duration {
    fn as_milliseconds(&self) -> f64 {
        self.0 as f64
    }

    fn as_seconds(&self) -> f64 {
        self.0 as f64 / MILLISECONDS_PER_SECOND as f64
    }

    fn as_minutes(&self) -> f64 {
        self.0 as f64 / MILLISECONDS_PER_MINUTE as f64
    }

    fn as_hours(&self) -> f64 {
        self.0 as f64 / MILLISECONDS_PER_HOUR as f64
    }

    fn as_days(&self) -> f64 {
        self.0 as f64 / MILLISECONDS_PER_DAY as f64
    }

    fn as_weeks(&self) -> f64 {
        self.0 as f64 / MILLISECONDS_PER_WEEK as f64
    }

    fn as_months(&self) -> f64 {
        self.0 as f64 / MILLISECONDS_PER_MONTH as f64
    }

    fn as_years(&self) -> f64 {
        self.0 as f64 / MILLISECONDS_PER_YEAR as f64
    }
}

impl Polarized for Duration {
    fn is_negative(&self) -> bool {
        false
    }
}

impl Ordered for Duration {
    fn is_before(&self, other: &Self) -> bool {
        self < other
    }
}

impl Lexical for Duration {
    fn as_source(&self) -> String {
        if self.0 == 0 {
            return "~P0W".to_string();
        }
        let mut source = String::from("~P");
        for (value, designator) in [
            (self.get_years(), 'Y'),
            (self.get_months(), 'M'),
            (self.get_days(), 'D'),
        ] {
            if value > 0 {
                source.push_str(&format!("{value}{designator}"));
            }
        }
        let (hours, minutes) = (self.get_hours(), self.get_minutes());
        let (seconds, milliseconds) = (self.get_seconds(), self.get_milliseconds());
        if hours + minutes + seconds + milliseconds > 0 {
            source.push('T');
            if hours > 0 {
                source.push_str(&format!("{hours}H"));
            }
            if minutes > 0 {
                source.push_str(&format!("{minutes}M"));
            }
            if milliseconds > 0 {
                let fraction = format!("{milliseconds:03}");
                source.push_str(&format!("{seconds}.{}S", fraction.trim_end_matches('0')));
            } else if seconds > 0 {
                source.push_str(&format!("{seconds}S"));
            }
        }
        source
    }
}

impl From<std::time::Duration> for Duration {
    fn from(duration: std::time::Duration) -> Self {
        Duration(u64::try_from(duration.as_millis()).unwrap_or(u64::MAX))
    }
}

impl fmt::Debug for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Duration({})", self.as_source())
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_source())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_minute() {
        let minute = Duration::new(60_000);
        assert_eq!(minute.as_source(), "~PT1M");
        assert_eq!(minute.as_milliseconds(), 60_000.0);
        assert_eq!(minute.as_seconds(), 60.0);
        assert_eq!(minute.as_minutes(), 1.0);
        assert_eq!(minute.as_hours(), 0.016_666_666_666_666_666);
        assert_eq!(minute.as_months(), 2.281_589_172_490_423_2e-5);
        assert_eq!(minute.as_years(), 1.901_324_310_408_685_8e-6);
        assert_eq!(minute.get_minutes(), 1);
        assert_eq!(minute.get_seconds(), 0);
        assert_eq!(minute.get_years(), 0);
        assert!(!minute.is_negative());
    }

    #[test]
    fn test_duration_source() {
        for source in ["~P0W", "~P1Y2M3DT4H5M6S", "~PT1M", "~P3D", "~PT6.789S", "~PT0.5S", "~P1Y"] {
            assert_eq!(Duration::from_source(source).unwrap().as_source(), source);
        }
        assert_eq!(Duration::new(2 * MILLISECONDS_PER_WEEK).as_source(), "~P14D");
        assert_eq!(Duration::new(90 * MILLISECONDS_PER_MINUTE).as_source(), "~PT1H30M");
        for source in [
            "~P",
            "P1D",
            "~P1DT",
            "~PT",
            "~P01D",
            "~PT1.2345S",
            "~P1W2D",
            "~P2W",
            "~PT90M",
            "~P0D",
            "~PT1.50S",
            "~P12M",
        ] {
            assert!(Duration::from_source(source).is_err(), "{source}");
        }
    }

    #[test]
    fn test_duration_factoring() {
        let duration = Duration::from_source("~P1Y2M3DT4H5M6.7S").unwrap();
        assert_eq!(duration.get_years(), 1);
        assert_eq!(duration.get_months(), 2);
        assert_eq!(duration.get_days(), 3);
        assert_eq!(duration.get_hours(), 4);
        assert_eq!(duration.get_minutes(), 5);
        assert_eq!(duration.get_seconds(), 6);
        assert_eq!(duration.get_milliseconds(), 700);
        assert_eq!(Duration::from_source("~P15D").unwrap().get_weeks(), 2);
    }

    #[test]
    fn test_duration_ordering() {
        assert!(Duration::new(1).is_before(&Duration::new(2)));
        assert_eq!(
            Duration::from(std::time::Duration::from_secs(2)),
            Duration::new(2_000)
        );
    }
}
