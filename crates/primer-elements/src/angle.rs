//! Angles in radians
//!
//! An angle is always normalized into `[0, τ)` and locked onto the axes,
//! so repeated trigonometric round trips land on exact values. The
//! trigonometric functions use exact values for the multiples of `π/4`.

use std::f64::consts::{FRAC_1_SQRT_2, PI, TAU};
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use primer_core::{
    anchored, float_from_source, lock_angle, remainder, Continuous, Lexical, PrimitiveError,
    PrimitiveResult, AMPLITUDE,
};

static ANGLE: Lazy<Regex> =
    Lazy::new(|| anchored(&format!(r"~(?P<angle>0|undefined|{})", *AMPLITUDE)));

/// Units an angle can be expressed in
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Units {
    Degrees,
    Radians,
    Gradians,
}

impl Units {
    /// Size of a half turn in these units.
    fn half_turn(self) -> f64 {
        match self {
            Units::Degrees => 180.0,
            Units::Radians => PI,
            Units::Gradians => 200.0,
        }
    }
}

/// Normalized angle in radians
#[derive(Clone, Copy, Default)]
pub struct Angle(f64);

impl Angle {
    pub const ZERO: Angle = Angle(0.0);
    pub const PI: Angle = Angle(PI);
    pub const TAU: Angle = Angle(TAU);
    pub const UNDEFINED: Angle = Angle(f64::NAN);

    pub fn new(radians: f64) -> Self {
        let mut value = radians;
        if value < -TAU || value >= TAU {
            value = remainder(value, TAU);
        }
        if value < 0.0 {
            value += TAU;
        }
        value = lock_angle(value);
        // A tiny negative input wraps to just below τ.
        if value as f32 == TAU as f32 {
            value = 0.0;
        }
        Angle(value)
    }

    pub fn from_units(value: f64, units: Units) -> Self {
        Angle::new(value / units.half_turn() * PI)
    }

    pub fn from_source(source: &str) -> PrimitiveResult<Self> {
        let illegal = || PrimitiveError::illegal_source("Angle", source);
        let captures = ANGLE.captures(source).ok_or_else(illegal)?;
        match &captures["angle"] {
            "pi" | "π" => Ok(Angle::PI),
            "tau" | "τ" => Ok(Angle::TAU),
            text => float_from_source(text)
                .filter(|&radians| is_normalized(radians))
                .map(Angle)
                .ok_or_else(illegal),
        }
    }

    #[inline]
    pub fn as_intrinsic(self) -> f64 {
        self.0
    }

    pub fn as_units(self, units: Units) -> f64 {
        self.0 / PI * units.half_turn()
    }

    /// The cosine and sine of this angle.
    pub fn as_parts(self) -> (f64, f64) {
        (self.cosine(), self.sine())
    }

    // Exact (cosine, sine, tangent) for the multiples of π/4.
    fn exact(self) -> Option<(f64, f64, f64)> {
        let value = self.0;
        let parts = if value == 0.0 || value == TAU {
            (1.0, 0.0, 0.0)
        } else if value == 0.25 * PI {
            (FRAC_1_SQRT_2, FRAC_1_SQRT_2, 1.0)
        } else if value == 0.5 * PI {
            (0.0, 1.0, f64::INFINITY)
        } else if value == 0.75 * PI {
            (-FRAC_1_SQRT_2, FRAC_1_SQRT_2, -1.0)
        } else if value == PI {
            (-1.0, 0.0, 0.0)
        } else if value == 1.25 * PI {
            (-FRAC_1_SQRT_2, -FRAC_1_SQRT_2, 1.0)
        } else if value == 1.5 * PI {
            (0.0, -1.0, f64::INFINITY)
        } else if value == 1.75 * PI {
            (FRAC_1_SQRT_2, -FRAC_1_SQRT_2, -1.0)
        } else {
            return None;
        };
        Some(parts)
    }

    pub fn cosine(self) -> f64 {
        self.exact().map_or_else(|| self.0.cos(), |(cosine, _, _)| cosine)
    }

    pub fn sine(self) -> f64 {
        self.exact().map_or_else(|| self.0.sin(), |(_, sine, _)| sine)
    }

    pub fn tangent(self) -> f64 {
        self.exact().map_or_else(|| self.0.tan(), |(_, _, tangent)| tangent)
    }

    pub fn arc_cosine(x: f64) -> Self {
        Angle::new(x.acos())
    }

    pub fn arc_sine(y: f64) -> Self {
        Angle::new(y.asin())
    }

    pub fn arc_tangent(x: f64, y: f64) -> Self {
        Angle::new(y.atan2(x))
    }

    /// The opposite direction.
    pub fn inverse(self) -> Self {
        Angle::new(self.0 - PI)
    }

    pub fn sum(self, other: Angle) -> Self {
        Angle::new(self.0 + other.0)
    }

    pub fn difference(self, other: Angle) -> Self {
        Angle::new(self.0 - other.0)
    }

    pub fn scaled(self, factor: f64) -> Self {
        Angle::new(self.0 * factor)
    }

    pub fn complement(self) -> Self {
        Angle::new(0.5 * PI - self.0)
    }

    pub fn supplement(self) -> Self {
        Angle::new(PI - self.0)
    }

    pub fn conjugate(self) -> Self {
        Angle::new(-self.0)
    }
}

impl Continuous for Angle {
    #[inline]
    fn as_float(&self) -> f64 {
        self.0
    }

    fn has_magnitude(&self) -> bool {
        self.is_defined() && !self.is_zero()
    }

    fn is_infinite(&self) -> bool {
        false
    }

    fn is_defined(&self) -> bool {
        !self.0.is_nan()
    }

    fn is_minimum(&self) -> bool {
        self.0 == 0.0
    }

    /// Both zero and a full turn point along the positive axis.
    fn is_zero(&self) -> bool {
        self.0 == 0.0 || self.0 == TAU
    }

    fn is_maximum(&self) -> bool {
        self.0 == TAU
    }
}

impl Lexical for Angle {
    fn as_source(&self) -> String {
        if self.0 == PI {
            "~π".to_string()
        } else if self.0 == TAU {
            "~τ".to_string()
        } else if self.0.is_nan() {
            "~undefined".to_string()
        } else {
            format!("~{}", primer_core::format_float(self.0))
        }
    }
}

impl PartialEq for Angle {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 || (self.0.is_nan() && other.0.is_nan())
    }
}

impl From<f64> for Angle {
    fn from(radians: f64) -> Self {
        Angle::new(radians)
    }
}

impl fmt::Debug for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Angle({})", self.as_source())
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_source())
    }
}

/// Whether the radians are already in the form `Angle::new` leaves them.
pub(crate) fn is_normalized(radians: f64) -> bool {
    Angle::new(radians) == Angle(radians)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_angle_normalization() {
        assert_eq!(Angle::new(TAU).as_source(), "~0");
        assert_eq!(Angle::new(-PI), Angle::PI);
        assert_eq!(Angle::new(-0.5 * PI), Angle::new(1.5 * PI));
        assert_eq!(Angle::new(5.0 * PI), Angle::PI);
        assert_eq!(Angle::new(-1e-20), Angle::ZERO);
        assert!(!Angle::new(f64::NAN).is_defined());
    }

    #[test]
    fn test_angle_source() {
        assert_eq!(Angle::from_source("~π"), Ok(Angle::PI));
        assert_eq!(Angle::from_source("~pi"), Ok(Angle::PI));
        assert_eq!(Angle::from_source("~τ"), Ok(Angle::TAU));
        assert_eq!(Angle::from_source("~0"), Ok(Angle::ZERO));
        assert_eq!(Angle::TAU.as_source(), "~τ");
        for source in ["~1.5", "~0.25", "~2E-7", "~undefined", "~0.3333333333333333"] {
            let angle = Angle::from_source(source).unwrap();
            assert_eq!(angle.as_source(), source);
        }
        for source in ["π", "~-1", "~00", "~1.", "~ 1", "~7", "~1E-90", "~4.712389"] {
            assert!(Angle::from_source(source).is_err(), "{source}");
        }
    }

    #[test]
    fn test_angle_aspects() {
        assert!(Angle::TAU.is_zero());
        assert!(Angle::TAU.is_maximum());
        assert!(Angle::ZERO.is_minimum());
        assert!(!Angle::ZERO.has_magnitude());
        assert!(Angle::PI.has_magnitude());
        assert!(!Angle::PI.is_infinite());
    }

    #[test]
    fn test_angle_units() {
        assert_eq!(Angle::PI.as_units(Units::Degrees), 180.0);
        assert_eq!(Angle::PI.as_units(Units::Gradians), 200.0);
        assert_eq!(Angle::PI.as_units(Units::Radians), PI);
        assert_eq!(Angle::from_units(90.0, Units::Degrees), Angle::new(0.5 * PI));
        assert_eq!(Angle::from_units(200.0, Units::Gradians), Angle::PI);
    }

    #[test]
    fn test_angle_operations() {
        let quarter = Angle::new(0.5 * PI);
        assert_eq!(Angle::PI.inverse(), Angle::ZERO);
        assert_eq!(Angle::ZERO.inverse(), Angle::PI);
        assert_eq!(Angle::TAU.inverse(), Angle::PI);
        assert_eq!(quarter.sum(Angle::PI), Angle::new(1.5 * PI));
        assert_eq!(quarter.difference(Angle::PI), Angle::new(1.5 * PI));
        assert_eq!(quarter.scaled(2.0), Angle::PI);
        assert_eq!(Angle::ZERO.complement(), quarter);
        assert_eq!(quarter.supplement(), quarter);
        assert_eq!(quarter.conjugate(), Angle::new(1.5 * PI));
        assert!(!Angle::UNDEFINED.sum(quarter).is_defined());
    }

    #[test]
    fn test_angle_trigonometry() {
        let quarter = Angle::new(0.5 * PI);
        assert_eq!(quarter.cosine(), 0.0);
        assert_eq!(quarter.sine(), 1.0);
        assert_eq!(quarter.tangent(), f64::INFINITY);
        assert_eq!(Angle::new(1.5 * PI).tangent(), f64::INFINITY);
        assert_eq!(Angle::PI.as_parts(), (-1.0, 0.0));
        assert_eq!(Angle::new(0.25 * PI).tangent(), 1.0);
        assert_eq!(Angle::new(1.0).cosine(), 1f64.cos());
    }

    #[test]
    fn test_angle_inverse_trigonometry() {
        for angle in [Angle::ZERO, Angle::new(0.5 * PI), Angle::PI] {
            assert_eq!(Angle::arc_cosine(angle.cosine()), angle);
        }
        for angle in [Angle::ZERO, Angle::new(0.5 * PI), Angle::new(1.5 * PI)] {
            assert_eq!(Angle::arc_sine(angle.sine()), angle);
        }
        for angle in [
            Angle::ZERO,
            Angle::new(0.5 * PI),
            Angle::PI,
            Angle::new(1.5 * PI),
        ] {
            assert_eq!(Angle::arc_tangent(angle.cosine(), angle.sine()), angle);
        }
        assert_eq!(Angle::arc_tangent(-1.0, 0.0), Angle::PI);
    }
}
