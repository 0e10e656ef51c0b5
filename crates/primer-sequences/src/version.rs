//! Versions: dotted ordinals such as `v1.2.3`
//!
//! Levels are numbered from 1 at the left. Ordinals start at 1 and carry
//! no leading zeros.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use primer_core::{
    anchored, to_offsets, Accessible, Lexical, Ordered, PrimitiveError, PrimitiveResult,
    Searchable, Sequential, ORDINAL,
};

static VERSION: Lazy<Regex> = Lazy::new(|| anchored(&format!(r"v{ORDINAL}(?:\.{ORDINAL})*")));

/// Version number
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Version(Vec<u64>);

impl Version {
    pub fn new(ordinals: Vec<u64>) -> PrimitiveResult<Self> {
        if ordinals.is_empty() {
            return Err(PrimitiveError::illegal_value(
                "Version",
                "a version needs at least one ordinal",
            ));
        }
        if ordinals.contains(&0) {
            return Err(PrimitiveError::illegal_value(
                "Version",
                format!("{ordinals:?} contains a zero ordinal"),
            ));
        }
        Ok(Version(ordinals))
    }

    pub fn from_source(source: &str) -> PrimitiveResult<Self> {
        let illegal = || PrimitiveError::illegal_source("Version", source);
        if !VERSION.is_match(source) {
            return Err(illegal());
        }
        source[1..]
            .split('.')
            .map(|ordinal| ordinal.parse::<u64>().map_err(|_| illegal()))
            .collect::<PrimitiveResult<Vec<u64>>>()
            .map(Version)
    }

    #[inline]
    pub fn as_intrinsic(&self) -> &[u64] {
        &self.0
    }

    /// Increment the ordinal at `level`, dropping the levels after it.
    ///
    /// Level 0 means the last level. A level past the end adds a new last
    /// level, so `v1.2` becomes `v1.2.1`.
    pub fn get_next_version(&self, level: usize) -> Version {
        let mut ordinals = self.0.clone();
        let level = match level {
            0 => ordinals.len(),
            level if level <= ordinals.len() => {
                ordinals.truncate(level);
                level
            }
            _ => {
                ordinals.push(0);
                ordinals.len()
            }
        };
        ordinals[level - 1] = ordinals[level - 1].saturating_add(1);
        Version(ordinals)
    }

    /// Whether `next` is one of the versions `get_next_version` can produce
    /// from this one.
    pub fn is_valid_next_version(&self, next: &Version) -> bool {
        if next.0.len() > self.0.len() + 1 {
            return false;
        }
        for (offset, (current, candidate)) in self.0.iter().zip(&next.0).enumerate() {
            if current == candidate {
                continue;
            }
            return current.checked_add(1) == Some(*candidate) && offset + 1 == next.0.len();
        }
        next.0.get(self.0.len()..) == Some(&[1][..])
    }

    pub fn concatenate(&self, other: &Version) -> Version {
        Version([self.0.as_slice(), other.0.as_slice()].concat())
    }
}

impl Sequential<u64> for Version {
    fn as_array(&self) -> Vec<u64> {
        self.0.clone()
    }

    #[inline]
    fn get_size(&self) -> usize {
        self.0.len()
    }

    fn is_empty(&self) -> bool {
        false
    }
}

impl Accessible<u64> for Version {
    fn get_values(&self, first: isize, last: isize) -> PrimitiveResult<Self> {
        let range = to_offsets(first, last, self.0.len())?;
        Ok(Version(self.0[range].to_vec()))
    }
}

impl Searchable<u64> for Version {}

impl Ordered for Version {
    fn is_before(&self, other: &Self) -> bool {
        self < other
    }
}

impl Lexical for Version {
    fn as_source(&self) -> String {
        let ordinals: Vec<String> = self.0.iter().map(u64::to_string).collect();
        format!("v{}", ordinals.join("."))
    }
}

impl fmt::Debug for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Version({})", self.as_source())
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_source())
    }
}
