//! Property tests for the shared codecs

use proptest::prelude::*;

use primer_core::{format_float, format_positional, quote, to_offset, to_offsets, unquote};

proptest! {
    #[test]
    fn prop_quote_round_trip(text in any::<String>()) {
        let quoted = quote(&text);
        prop_assert!(!quoted.chars().any(char::is_control));
        prop_assert_eq!(unquote(&quoted), Some(text));
    }

    #[test]
    fn prop_format_float_reads_back(
        value in any::<f64>().prop_filter("finite", |v| v.is_finite())
    ) {
        let text = format_float(value);
        let parsed: f64 = text.parse().unwrap();
        prop_assert_eq!(parsed, value);
        prop_assert_eq!(format_float(parsed), text);
    }

    #[test]
    fn prop_format_positional_reads_back(value in 0.0f64..=1.0) {
        let text = format_positional(value);
        prop_assert!(!text.contains('E'));
        prop_assert_eq!(text.parse::<f64>().unwrap(), value);
    }

    #[test]
    fn prop_offsets_cover_both_ends(size in 1usize..64, ordinal in 1usize..64) {
        prop_assume!(ordinal <= size);
        let index = ordinal as isize;
        prop_assert_eq!(to_offset(index, size), Ok(ordinal - 1));
        prop_assert_eq!(to_offset(-index, size), Ok(size - ordinal));
        prop_assert_eq!(to_offsets(index, -1, size), Ok(ordinal - 1..size));
    }
}
