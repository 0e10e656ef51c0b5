//! Aspect traits
//!
//! Each primitive type implements the subset of aspects it supports:
//! - `Lexical`: canonical source text
//! - `Continuous` / `Discrete`: scalar views
//! - `Polarized`: sign
//! - `Temporal` / `Factored`: time spans split into units
//! - `Sequential` / `Accessible` / `Searchable`: ordered collections
//! - `Ordered`: total ordering

use crate::{ordinal_of, to_offset, PrimitiveResult};

/// Values with a canonical source text.
pub trait Lexical {
    fn as_source(&self) -> String;
}

/// Values on a continuous scale.
pub trait Continuous {
    fn as_float(&self) -> f64;
    fn has_magnitude(&self) -> bool;
    fn is_infinite(&self) -> bool;
    fn is_defined(&self) -> bool;
    fn is_minimum(&self) -> bool;
    fn is_zero(&self) -> bool;
    fn is_maximum(&self) -> bool;
}

/// Values on a discrete scale.
pub trait Discrete {
    fn as_boolean(&self) -> bool;
    fn as_integer(&self) -> i64;
    fn is_defined(&self) -> bool;
    fn is_minimum(&self) -> bool;
    fn is_zero(&self) -> bool;
    fn is_maximum(&self) -> bool;
}

pub trait Polarized {
    fn is_negative(&self) -> bool;
}

/// Whole calendar units contained in a time value.
pub trait Factored {
    fn get_milliseconds(&self) -> i64;
    fn get_seconds(&self) -> i64;
    fn get_minutes(&self) -> i64;
    fn get_hours(&self) -> i64;
    fn get_days(&self) -> i64;
    fn get_weeks(&self) -> i64;
    fn get_months(&self) -> i64;
    fn get_years(&self) -> i64;
}

/// A time value expressed as a fraction of each unit.
pub trait Temporal {
    fn as_milliseconds(&self) -> f64;
    fn as_seconds(&self) -> f64;
    fn as_minutes(&self) -> f64;
    fn as_hours(&self) -> f64;
    fn as_days(&self) -> f64;
    fn as_weeks(&self) -> f64;
    fn as_months(&self) -> f64;
    fn as_years(&self) -> f64;
}

/// An ordered run of values.
pub trait Sequential<V> {
    fn as_array(&self) -> Vec<V>;

    fn get_size(&self) -> usize {
        self.as_array().len()
    }

    fn is_empty(&self) -> bool {
        self.get_size() == 0
    }
}

/// Indexed access using 1-based ordinals; negative ordinals count from the
/// end.
pub trait Accessible<V>: Sequential<V> + Sized {
    fn get_value(&self, index: isize) -> PrimitiveResult<V> {
        let mut values = self.as_array();
        let offset = to_offset(index, values.len())?;
        Ok(values.swap_remove(offset))
    }

    /// Values from `first` through `last` inclusive.
    fn get_values(&self, first: isize, last: isize) -> PrimitiveResult<Self>;

    /// Ordinal of the first matching value, 0 when absent.
    fn get_index(&self, value: &V) -> usize
    where
        V: PartialEq,
    {
        ordinal_of(&self.as_array(), value)
    }
}

pub trait Searchable<V: PartialEq>: Sequential<V> {
    fn contains_value(&self, value: &V) -> bool {
        self.as_array().contains(value)
    }

    fn contains_any(&self, values: &[V]) -> bool {
        let array = self.as_array();
        values.iter().any(|value| array.contains(value))
    }

    fn contains_all(&self, values: &[V]) -> bool {
        let array = self.as_array();
        values.iter().all(|value| array.contains(value))
    }
}

pub trait Ordered {
    fn is_before(&self, other: &Self) -> bool;
}
