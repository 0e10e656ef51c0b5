//! Percentages
//!
//! A percentage holds its value in percent; the intrinsic value is the
//! corresponding fraction, so `Percentage::new(25.0).as_intrinsic()` is
//! `0.25`.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use primer_core::{
    anchored, float_from_source, source_from_float, Continuous, Lexical, Polarized,
    PrimitiveError, PrimitiveResult, REAL,
};

static PERCENTAGE: Lazy<Regex> =
    Lazy::new(|| anchored(&format!(r"(?P<percent>{})%", *REAL)));

/// A value in percent
#[derive(Clone, Copy, Default, PartialOrd)]
pub struct Percentage(f64);

impl Percentage {
    #[inline]
    pub fn new(percent: f64) -> Self {
        Percentage(percent)
    }

    pub fn from_integer(percent: i64) -> Self {
        Percentage(percent as f64)
    }

    pub fn from_source(source: &str) -> PrimitiveResult<Self> {
        PERCENTAGE
            .captures(source)
            .and_then(|captures| float_from_source(&captures["percent"]))
            .map(Percentage)
            .ok_or_else(|| PrimitiveError::illegal_source("Percentage", source))
    }

    /// The fraction this percentage represents.
    #[inline]
    pub fn as_intrinsic(self) -> f64 {
        self.0 / 100.0
    }
}

impl Continuous for Percentage {
    /// The value in percent.
    #[inline]
    fn as_float(&self) -> f64 {
        self.0
    }

    fn has_magnitude(&self) -> bool {
        self.is_defined() && self.0 != 0.0
    }

    fn is_infinite(&self) -> bool {
        self.0.is_infinite()
    }

    fn is_defined(&self) -> bool {
        !self.0.is_nan()
    }

    fn is_minimum(&self) -> bool {
        self.0 == f64::NEG_INFINITY
    }

    fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    fn is_maximum(&self) -> bool {
        self.0 == f64::INFINITY
    }
}

impl Polarized for Percentage {
    fn is_negative(&self) -> bool {
        self.0 < 0.0
    }
}

impl Lexical for Percentage {
    fn as_source(&self) -> String {
        format!("{}%", source_from_float(self.0))
    }
}

impl PartialEq for Percentage {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 || (self.0.is_nan() && other.0.is_nan())
    }
}

impl fmt::Debug for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Percentage({})", self.as_source())
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_source())
    }
}
