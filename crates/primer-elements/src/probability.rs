//! Probabilities and fuzzy logic
//!
//! A probability is a float clamped into `[0, 1]`. Its logical operations
//! treat the operands as independent events, so for the certain values
//! `0` and `1` they agree with boolean logic.

use std::fmt;

use once_cell::sync::Lazy;
use rand::rngs::OsRng;
use rand::Rng;
use regex::Regex;

use primer_core::{
    anchored, format_positional, Continuous, Lexical, PrimitiveError, PrimitiveResult, FRACTION,
};

use crate::Boolean;

static PROBABILITY: Lazy<Regex> =
    Lazy::new(|| anchored(&format!(r"p(?P<probability>0{FRACTION}?|1)")));

// Random probabilities are drawn from the integers in [0, 2^53], so every
// draw is exactly representable.
const RANDOM_RESOLUTION: u64 = 1 << 53;

/// Likelihood in `[0, 1]`
#[derive(Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Probability(f64);

impl Probability {
    pub const IMPOSSIBLE: Probability = Probability(0.0);
    pub const CERTAIN: Probability = Probability(1.0);

    /// Clamps into `[0, 1]`; `NaN` becomes impossible.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            Probability(0.0)
        } else {
            Probability(value.clamp(0.0, 1.0))
        }
    }

    pub fn from_boolean(value: Boolean) -> Self {
        if value.as_intrinsic() {
            Probability::CERTAIN
        } else {
            Probability::IMPOSSIBLE
        }
    }

    pub fn from_source(source: &str) -> PrimitiveResult<Self> {
        let illegal = || PrimitiveError::illegal_source("Probability", source);
        let probability = PROBABILITY
            .captures(source)
            .and_then(|captures| captures["probability"].parse().ok())
            .map(Probability::new)
            .ok_or_else(illegal)?;
        // Trailing zeros and excess digits do not read back.
        if probability.as_source() != source {
            return Err(illegal());
        }
        Ok(probability)
    }

    /// Uniformly random probability from the operating system generator.
    pub fn random() -> Self {
        let draw = OsRng.gen_range(0..=RANDOM_RESOLUTION);
        tracing::trace!(draw, "random probability");
        Probability(draw as f64 / RANDOM_RESOLUTION as f64)
    }

    #[inline]
    pub fn as_intrinsic(self) -> f64 {
        self.0
    }

    /// Rounds to the nearer certain value.
    pub fn as_boolean(self) -> Boolean {
        Boolean::new(self.0 >= 0.5)
    }

    pub fn not(self) -> Self {
        Probability::new(1.0 - self.0)
    }

    pub fn and(self, other: Probability) -> Self {
        Probability::new(self.0 * other.0)
    }

    /// First and not second.
    pub fn san(self, other: Probability) -> Self {
        Probability::new(self.0 * (1.0 - other.0))
    }

    pub fn ior(self, other: Probability) -> Self {
        Probability::new(self.0 + other.0 - self.0 * other.0)
    }

    pub fn xor(self, other: Probability) -> Self {
        Probability::new(self.0 + other.0 - 2.0 * self.0 * other.0)
    }
}

impl Continuous for Probability {
    #[inline]
    fn as_float(&self) -> f64 {
        self.0
    }

    fn has_magnitude(&self) -> bool {
        self.0 != 0.0
    }

    fn is_infinite(&self) -> bool {
        false
    }

    fn is_defined(&self) -> bool {
        true
    }

    fn is_minimum(&self) -> bool {
        self.0 == 0.0
    }

    fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    fn is_maximum(&self) -> bool {
        self.0 == 1.0
    }
}

impl Lexical for Probability {
    fn as_source(&self) -> String {
        format!("p{}", format_positional(self.0))
    }
}

impl From<Boolean> for Probability {
    fn from(value: Boolean) -> Self {
        Probability::from_boolean(value)
    }
}

impl fmt::Debug for Probability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Probability({})", self.as_source())
    }
}

impl fmt::Display for Probability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_source())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probability_clamps() {
        assert_eq!(Probability::new(-0.5), Probability::IMPOSSIBLE);
        assert_eq!(Probability::new(1.5), Probability::CERTAIN);
        assert_eq!(Probability::new(f64::NAN), Probability::IMPOSSIBLE);
        assert_eq!(Probability::new(0.25).as_intrinsic(), 0.25);
    }

    #[test]
    fn test_probability_source() {
        for source in ["p0", "p0.5", "p1", "p0.125", "p0.000015", "p0.3333333333333333"] {
            assert_eq!(Probability::from_source(source).unwrap().as_source(), source);
        }
        assert_eq!(Probability::new(1.5e-5).as_source(), "p0.000015");
        for source in ["p", "p1.0", "p2", "0.5", "p.5", "p-0.5", "p0.50", "p0.0", "p1.5E-5"] {
            assert!(Probability::from_source(source).is_err(), "{source}");
        }
    }

    #[test]
    fn test_probability_booleans() {
        assert_eq!(Probability::from_boolean(Boolean::TRUE), Probability::CERTAIN);
        assert_eq!(Probability::from(Boolean::FALSE), Probability::IMPOSSIBLE);
        assert_eq!(Probability::new(0.75).as_boolean(), Boolean::TRUE);
        assert_eq!(Probability::new(0.25).as_boolean(), Boolean::FALSE);
    }

    #[test]
    fn test_probability_random() {
        for _ in 0..100 {
            let p = Probability::random().as_intrinsic();
            assert!((0.0..=1.0).contains(&p));
        }
    }

    #[test]
    fn test_probability_logic() {
        let t = Probability::new(0.75);
        let f = Probability::new(0.25);
        assert_eq!(t.not(), f);
        assert_eq!(t.and(f).as_intrinsic(), 0.1875);
        assert_eq!(t.san(f).as_intrinsic(), 0.5625);
        assert_eq!(t.ior(f).as_intrinsic(), 0.8125);
        assert_eq!(t.xor(f).as_intrinsic(), 0.625);
        assert_eq!(
            t.xor(f).as_intrinsic(),
            t.san(f).as_intrinsic() + f.san(t).as_intrinsic()
        );
    }

    #[test]
    fn test_probability_agrees_with_boolean() {
        let certain = [Probability::IMPOSSIBLE, Probability::CERTAIN];
        for a in certain {
            for b in certain {
                let (x, y) = (a.as_boolean(), b.as_boolean());
                assert_eq!(a.and(b).as_boolean(), x.and(y));
                assert_eq!(a.san(b).as_boolean(), x.san(y));
                assert_eq!(a.ior(b).as_boolean(), x.ior(y));
                assert_eq!(a.xor(b).as_boolean(), x.xor(y));
            }
        }
    }
}
