//! Moments: instants on the proleptic Gregorian calendar in UTC
//!
//! A moment counts milliseconds since the Unix epoch. Its source text is
//! the shortest `<Y-MM-DD[THH[:MM[:SS[.mmm]]]]>` form that loses no
//! information. Years are astronomical, so `0` is 1 BC and `-1` is 2 BC.

use std::fmt;

use chrono::{DateTime, Datelike, NaiveDate, Timelike, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

use primer_core::{
    anchored, Factored, Lexical, Ordered, PrimitiveError, PrimitiveResult, Temporal,
};

use crate::duration::{
    Duration, MILLISECONDS_PER_DAY, MILLISECONDS_PER_HOUR, MILLISECONDS_PER_MINUTE,
    MILLISECONDS_PER_MONTH, MILLISECONDS_PER_SECOND, MILLISECONDS_PER_WEEK, MILLISECONDS_PER_YEAR,
};

static MOMENT: Lazy<Regex> = Lazy::new(|| {
    anchored(concat!(
        r"<(?P<year>-?[1-9][0-9]*|0)-(?P<month>[0-9]{2})-(?P<day>[0-9]{2})",
        r"(?:T(?P<hour>[0-9]{2})(?::(?P<minute>[0-9]{2})",
        r"(?::(?P<second>[0-9]{2})(?:\.(?P<millisecond>[0-9]{3}))?)?)?)?>",
    ))
});

/// Instant in milliseconds since the Unix epoch
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Moment(i64);

impl Moment {
    pub const EPOCH: Moment = Moment(0);

    /// Clamps into the range the calendar can represent.
    pub fn new(milliseconds: i64) -> Self {
        let earliest = DateTime::<Utc>::MIN_UTC.timestamp_millis();
        let latest = DateTime::<Utc>::MAX_UTC.timestamp_millis();
        Moment(milliseconds.clamp(earliest, latest))
    }

    pub fn now() -> Self {
        Moment(Utc::now().timestamp_millis())
    }

    pub fn from_source(source: &str) -> PrimitiveResult<Self> {
        let illegal = || PrimitiveError::illegal_source("Moment", source);
        let captures = MOMENT.captures(source).ok_or_else(illegal)?;
        let field = |name: &str| -> PrimitiveResult<u32> {
            captures
                .name(name)
                .map_or(Ok(0), |text| text.as_str().parse().map_err(|_| illegal()))
        };
        let year: i32 = captures["year"].parse().map_err(|_| illegal())?;
        let instant = NaiveDate::from_ymd_opt(year, field("month")?, field("day")?)
            .and_then(|date| {
                date.and_hms_milli_opt(
                    field("hour").ok()?,
                    field("minute").ok()?,
                    field("second").ok()?,
                    field("millisecond").ok()?,
                )
            })
            .ok_or_else(illegal)?;
        // Trailing zero fields such as `T00` are dropped by the formatter.
        let moment = Moment(instant.and_utc().timestamp_millis());
        if moment.as_source() != source {
            return Err(illegal());
        }
        Ok(moment)
    }

    #[inline]
    pub fn as_intrinsic(self) -> i64 {
        self.0
    }

    fn as_date_time(self) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(self.0).unwrap_or_default()
    }

    pub fn earlier(self, duration: Duration) -> Self {
        let offset = i64::try_from(duration.as_intrinsic()).unwrap_or(i64::MAX);
        Moment::new(self.0.saturating_sub(offset))
    }

    pub fn later(self, duration: Duration) -> Self {
        let offset = i64::try_from(duration.as_intrinsic()).unwrap_or(i64::MAX);
        Moment::new(self.0.saturating_add(offset))
    }

    /// Time between two moments, regardless of their order.
    pub fn duration(first: Moment, second: Moment) -> Duration {
        Duration::new(first.0.abs_diff(second.0))
    }
}

impl Factored for Moment {
    fn get_milliseconds(&self) -> i64 {
        i64::from(self.as_date_time().timestamp_subsec_millis())
    }

    fn get_seconds(&self) -> i64 {
        i64::from(self.as_date_time().second())
    }

    fn get_minutes(&self) -> i64 {
        i64::from(self.as_date_time().minute())
    }

    fn get_hours(&self) -> i64 {
        i64::from(self.as_date_time().hour())
    }

    fn get_days(&self) -> i64 {
        i64::from(self.as_date_time().day())
    }

    /// ISO 8601 week of the year.
    fn get_weeks(&self) -> i64 {
        i64::from(self.as_date_time().iso_week().week())
    }

    fn get_months(&self) -> i64 {
        i64::from(self.as_date_time().month())
    }

    fn get_years(&self) -> i64 {
        i64::from(self.as_date_time().year())
    }
}

/// Time since the epoch in each unit.
impl Temporal for Moment {
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

impl Ordered for Moment {
    fn is_before(&self, other: &Self) -> bool {
        self < other
    }
}

impl Lexical for Moment {
    fn as_source(&self) -> String {
        let instant = self.as_date_time();
        let mut source = format!(
            "<{}-{:02}-{:02}",
            instant.year(),
            instant.month(),
            instant.day()
        );
        let (hour, minute) = (instant.hour(), instant.minute());
        let (second, millisecond) = (instant.second(), instant.timestamp_subsec_millis());
        if millisecond > 0 {
            source.push_str(&format!(
                "T{hour:02}:{minute:02}:{second:02}.{millisecond:03}"
            ));
        } else if second > 0 {
            source.push_str(&format!("T{hour:02}:{minute:02}:{second:02}"));
        } else if minute > 0 {
            source.push_str(&format!("T{hour:02}:{minute:02}"));
        } else if hour > 0 {
            source.push_str(&format!("T{hour:02}"));
        }
        source.push('>');
        source
    }
}

impl From<DateTime<Utc>> for Moment {
    fn from(instant: DateTime<Utc>) -> Self {
        Moment(instant.timestamp_millis())
    }
}

impl fmt::Debug for Moment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Moment({})", self.as_source())
    }
}

impl fmt::Display for Moment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_source())
    }
}
