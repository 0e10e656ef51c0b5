//! Numbers on the Riemann sphere
//!
//! A number is a complex value extended with a single unsigned `infinity`
//! and a single `undefined`, plus the two signed real extremes `minimum`
//! and `maximum`. Every value passes through normalization:
//! - zero, the infinities and undefined collapse onto their singletons
//! - remaining components are locked onto `0`, `-1` and `1`
//!
//! Arithmetic is total. Operations resolve `undefined`, `zero` and
//! `infinity` operands up front and only then fall back to complex
//! arithmetic, so no caller ever sees a raw IEEE special value.

use std::cmp::Ordering;
use std::f64::consts;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

use num_complex::Complex64;
use once_cell::sync::Lazy;
use regex::Regex;

use primer_core::{
    anchored, float_from_source, lock_angle, lock_float, rounded_source_from_float,
    source_from_float, Continuous, Lexical, Polarized, PrimitiveError, PrimitiveResult, AMPLITUDE,
    FLOAT, PHI, REAL, SIGN,
};

use crate::angle::{is_normalized, Angle};

static NUMBER: Lazy<Regex> = Lazy::new(|| {
    anchored(&format!(
        concat!(
            r"(?P<magnitude>{amplitude})e\^~(?P<angle>{amplitude})i",
            r"|(?P<real>{float})(?P<imaginary>{sign}{amplitude})i",
            r"|(?P<pure>{float})i",
            r"|(?P<scalar>{real})",
        ),
        amplitude = *AMPLITUDE,
        float = *FLOAT,
        sign = SIGN,
        real = *REAL,
    ))
});

/// Point on the Riemann sphere
#[derive(Clone, Copy)]
pub struct Number(Complex64);

impl Number {
    pub const ZERO: Number = Number(Complex64::new(0.0, 0.0));
    pub const ONE: Number = Number(Complex64::new(1.0, 0.0));
    pub const I: Number = Number(Complex64::new(0.0, 1.0));
    pub const E: Number = Number(Complex64::new(consts::E, 0.0));
    pub const PI: Number = Number(Complex64::new(consts::PI, 0.0));
    pub const TAU: Number = Number(Complex64::new(consts::TAU, 0.0));
    pub const PHI: Number = Number(Complex64::new(PHI, 0.0));
    pub const MINIMUM: Number = Number(Complex64::new(f64::NEG_INFINITY, 0.0));
    pub const MAXIMUM: Number = Number(Complex64::new(f64::INFINITY, 0.0));
    pub const INFINITY: Number = Number(Complex64::new(f64::INFINITY, f64::INFINITY));
    pub const UNDEFINED: Number = Number(Complex64::new(f64::NAN, f64::NAN));

    /// Normalize a raw complex value onto the sphere.
    pub fn new(value: Complex64) -> Self {
        let Complex64 { re, im } = value;
        if value.norm() == 0.0 {
            Number::ZERO
        } else if im == 0.0 && re == f64::NEG_INFINITY {
            Number::MINIMUM
        } else if im == 0.0 && re == f64::INFINITY {
            Number::MAXIMUM
        } else if re.is_infinite() || im.is_infinite() {
            Number::INFINITY
        } else if re.is_nan() || im.is_nan() {
            Number::UNDEFINED
        } else {
            Number(Complex64::new(lock_float(re), lock_float(im)))
        }
    }

    #[inline]
    pub fn from_float(value: f64) -> Self {
        Number::new(Complex64::new(value, 0.0))
    }

    #[inline]
    pub fn from_integer(value: i64) -> Self {
        Number::from_float(value as f64)
    }

    #[inline]
    pub fn from_rectangular(real: f64, imaginary: f64) -> Self {
        Number::new(Complex64::new(real, imaginary))
    }

    /// Build from polar parts, using exact trigonometry on the axes.
    pub fn from_polar(magnitude: f64, angle: Angle) -> Self {
        if magnitude.is_nan() || !angle.is_defined() {
            return Number::UNDEFINED;
        }
        let (cosine, sine) = angle.as_parts();
        Number::from_rectangular(magnitude * cosine, magnitude * sine)
    }

    pub fn from_source(source: &str) -> PrimitiveResult<Self> {
        let illegal = || PrimitiveError::illegal_source("Number", source);
        let captures = NUMBER.captures(source).ok_or_else(illegal)?;
        let float = |name: &str| float_from_source(&captures[name]).ok_or_else(illegal);
        if captures.name("magnitude").is_some() {
            // The angle must already lie in (0, τ) as the polar form writes it.
            let angle = float("angle")?;
            if !is_normalized(angle) {
                return Err(illegal());
            }
            Ok(Number::from_polar(float("magnitude")?, Angle::new(angle)))
        } else if captures.name("real").is_some() {
            Ok(Number::from_rectangular(float("real")?, float("imaginary")?))
        } else if captures.name("pure").is_some() {
            Ok(Number::from_rectangular(0.0, float("pure")?))
        } else {
            match &captures["scalar"] {
                "∞" | "infinity" => Ok(Number::INFINITY),
                _ => Ok(Number::from_float(float("scalar")?)),
            }
        }
    }

    #[inline]
    pub fn as_intrinsic(self) -> Complex64 {
        self.0
    }

    #[inline]
    pub fn get_real(self) -> f64 {
        self.0.re
    }

    #[inline]
    pub fn get_imaginary(self) -> f64 {
        self.0.im
    }

    pub fn get_magnitude(self) -> f64 {
        lock_float(self.0.norm())
    }

    pub fn get_angle(self) -> Angle {
        Angle::new(self.0.arg())
    }

    // Text for the singleton values, shared by both formats.
    fn singleton_source(self) -> Option<&'static str> {
        if !self.is_defined() {
            Some("undefined")
        } else if self == Number::ZERO {
            Some("0")
        } else if self == Number::MINIMUM {
            Some("-∞")
        } else if self == Number::MAXIMUM {
            Some("+∞")
        } else if self == Number::INFINITY {
            Some("∞")
        } else {
            None
        }
    }

    /// Rectangular form, e.g. `-1.2-3.4i`.
    pub fn as_rectangular(self) -> String {
        if let Some(source) = self.singleton_source() {
            return source.to_string();
        }
        let Complex64 { re, im } = self.0;
        if im == 0.0 {
            source_from_float(re)
        } else if re == 0.0 {
            format!("{}i", source_from_float(im))
        } else {
            let sign = if im > 0.0 { "+" } else { "" };
            format!("{}{sign}{}i", source_from_float(re), source_from_float(im))
        }
    }

    /// Polar form, e.g. `5e^~1i`. The angle is omitted when it is zero.
    ///
    /// Magnitude and angle come from trigonometry, so they are rounded to
    /// `SOURCE_PRECISION` digits rather than written exactly.
    pub fn as_polar(self) -> String {
        if let Some(source) = self.singleton_source() {
            return source.to_string();
        }
        let magnitude = rounded_source_from_float(self.get_magnitude());
        let angle = self.get_angle().as_float();
        if angle > 0.0 {
            format!("{magnitude}e^~{}i", rounded_source_from_float(angle))
        } else {
            magnitude
        }
    }

    /// Additive inverse. The real extremes trade places.
    pub fn inverse(self) -> Self {
        if self == Number::MINIMUM {
            Number::MAXIMUM
        } else if self == Number::MAXIMUM {
            Number::MINIMUM
        } else if self.has_magnitude() {
            Number::new(-self.0)
        } else {
            self
        }
    }

    pub fn reciprocal(self) -> Self {
        Number::ONE.quotient(self)
    }

    pub fn conjugate(self) -> Self {
        Number::new(self.0.conj())
    }

    #[inline]
    fn is_real(self) -> bool {
        self.0.im == 0.0
    }

    pub fn sum(self, other: Number) -> Self {
        if !self.is_defined() || !other.is_defined() {
            Number::UNDEFINED
        } else if self.is_real() && other.is_real() {
            Number::from_float(self.0.re + other.0.re)
        } else if self.is_infinite() || other.is_infinite() {
            Number::INFINITY
        } else {
            Number::new(self.0 + other.0)
        }
    }

    pub fn difference(self, other: Number) -> Self {
        if !self.is_defined() || !other.is_defined() {
            Number::UNDEFINED
        } else if self.is_real() && other.is_real() {
            Number::from_float(self.0.re - other.0.re)
        } else if self.is_infinite() && other.is_infinite() {
            Number::UNDEFINED
        } else if self.is_infinite() || other.is_infinite() {
            Number::INFINITY
        } else {
            Number::new(self.0 - other.0)
        }
    }

    pub fn scaled(self, factor: f64) -> Self {
        self.product(Number::from_float(factor))
    }

    pub fn product(self, other: Number) -> Self {
        if !self.is_defined() || !other.is_defined() {
            Number::UNDEFINED
        } else if self.is_real() && other.is_real() {
            Number::from_float(self.0.re * other.0.re)
        } else if (self.is_infinite() && other.is_zero()) || (self.is_zero() && other.is_infinite())
        {
            Number::UNDEFINED
        } else if self.is_infinite() || other.is_infinite() {
            Number::INFINITY
        } else {
            Number::new(self.0 * other.0)
        }
    }

    pub fn quotient(self, other: Number) -> Self {
        if !self.is_defined() || !other.is_defined() {
            Number::UNDEFINED
        } else if self.is_zero() && other.is_zero() {
            Number::UNDEFINED
        } else if self.is_infinite() && other.is_infinite() {
            Number::UNDEFINED
        } else if self.is_zero() || other.is_infinite() {
            Number::ZERO
        } else if other.is_zero() {
            Number::INFINITY
        } else if self.is_real() && other.is_real() {
            // Keeps the sign of `minimum` and `maximum`.
            Number::from_float(self.0.re / other.0.re)
        } else if self.is_infinite() {
            Number::INFINITY
        } else {
            Number::new(self.0 / other.0)
        }
    }

    /// Remainder of the magnitudes, rotated by the second angle less the
    /// first.
    pub fn remainder(self, other: Number) -> Self {
        if !self.is_defined() || !other.is_defined() {
            return Number::UNDEFINED;
        }
        let magnitude = lock_float(self.0.norm() % other.0.norm());
        let angle = lock_angle(other.0.arg() - self.0.arg());
        Number::from_polar(magnitude, Angle::new(angle))
    }

    pub fn power(self, exponent: Number) -> Self {
        if !self.is_defined() || !exponent.is_defined() {
            return Number::UNDEFINED;
        }
        if exponent.is_zero() {
            return Number::ONE;
        }
        if self.is_zero() {
            return Number::ZERO;
        }
        if self.is_infinite() {
            return Number::INFINITY;
        }
        if exponent.is_infinite() {
            let mut ordering = self.get_magnitude().partial_cmp(&1.0);
            // z^-∞ is (1/z)^∞.
            if exponent.is_minimum() {
                ordering = ordering.map(Ordering::reverse);
            }
            return match ordering {
                Some(Ordering::Less) => Number::ZERO,
                Some(Ordering::Equal) => Number::ONE,
                Some(Ordering::Greater) => Number::INFINITY,
                None => Number::UNDEFINED,
            };
        }
        Number::new(self.0.powc(exponent.0))
    }

    /// Natural logarithm on the sphere: zero and the infinities map to
    /// infinity.
    fn ln(self) -> Self {
        if !self.is_defined() {
            Number::UNDEFINED
        } else if self.is_zero() || self.is_infinite() {
            Number::INFINITY
        } else {
            Number::new(self.0.ln())
        }
    }

    /// Logarithm of this number in the given base.
    pub fn logarithm(self, base: Number) -> Self {
        self.ln().quotient(base.ln())
    }
}

impl Continuous for Number {
    #[inline]
    fn as_float(&self) -> f64 {
        self.0.re
    }

    fn has_magnitude(&self) -> bool {
        self.is_defined() && !self.is_zero() && !self.is_infinite()
    }

    /// True for `minimum`, `maximum` and `infinity`.
    fn is_infinite(&self) -> bool {
        self.0.re.is_infinite() || self.0.im.is_infinite()
    }

    fn is_defined(&self) -> bool {
        !(self.0.re.is_nan() || self.0.im.is_nan())
    }

    fn is_minimum(&self) -> bool {
        *self == Number::MINIMUM
    }

    fn is_zero(&self) -> bool {
        *self == Number::ZERO
    }

    fn is_maximum(&self) -> bool {
        *self == Number::MAXIMUM
    }
}

impl Polarized for Number {
    fn is_negative(&self) -> bool {
        self.0.re < 0.0
    }
}

impl Lexical for Number {
    fn as_source(&self) -> String {
        self.as_rectangular()
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 || (!self.is_defined() && !other.is_defined())
    }
}

// Normalization leaves a single bit pattern per value.
impl Eq for Number {}

impl Hash for Number {
    fn hash<H: Hasher>(&self, state: &mut H) {
        if self.is_defined() {
            self.0.re.to_bits().hash(state);
            self.0.im.to_bits().hash(state);
        } else {
            u64::MAX.hash(state);
        }
    }
}

impl Default for Number {
    fn default() -> Self {
        Number::ZERO
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::from_float(value)
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::from_integer(value)
    }
}

impl From<Complex64> for Number {
    fn from(value: Complex64) -> Self {
        Number::new(value)
    }
}

impl Add for Number {
    type Output = Number;
    fn add(self, other: Number) -> Number {
        self.sum(other)
    }
}

impl Sub for Number {
    type Output = Number;
    fn sub(self, other: Number) -> Number {
        self.difference(other)
    }
}

impl Mul for Number {
    type Output = Number;
    fn mul(self, other: Number) -> Number {
        self.product(other)
    }
}

impl Div for Number {
    type Output = Number;
    fn div(self, other: Number) -> Number {
        self.quotient(other)
    }
}

impl Rem for Number {
    type Output = Number;
    fn rem(self, other: Number) -> Number {
        self.remainder(other)
    }
}

impl Neg for Number {
    type Output = Number;
    fn neg(self) -> Number {
        self.inverse()
    }
}

impl fmt::Debug for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Number({})", self.as_rectangular())
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_rectangular())
    }
}
