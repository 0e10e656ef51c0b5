//! Property tests for sequence algebra and source round trips

use proptest::collection::vec;
use proptest::prelude::*;

use primer_core::{Lexical, SourceLayout};
use primer_sequences::{Binary, Bytecode, Name, Narrative, Quote, Tag, Version};

fn padded(bytes: &[u8], size: usize) -> Binary {
    let mut bytes = bytes.to_vec();
    bytes.resize(size, 0);
    Binary::from(bytes)
}

proptest! {
    #[test]
    fn prop_binary_de_morgan(a in vec(any::<u8>(), 0..40), b in vec(any::<u8>(), 0..40)) {
        let size = a.len().max(b.len());
        let (wide_a, wide_b) = (padded(&a, size), padded(&b, size));
        let (a, b) = (Binary::from(a), Binary::from(b));
        prop_assert_eq!((!&wide_a).and(&!&wide_b), !&a.ior(&b));
        prop_assert_eq!((!&wide_a).ior(&!&wide_b), !&a.and(&b));
        prop_assert_eq!(a.xor(&b), a.san(&b).ior(&b.san(&a)));
    }

    #[test]
    fn prop_binary_source_round_trip(bytes in vec(any::<u8>(), 0..200)) {
        let binary = Binary::from(bytes);
        let source = binary.as_source();
        prop_assert_eq!(Binary::from_source(&source), Ok(binary.clone()));
        let layout = SourceLayout::narrow();
        let narrow = binary.as_source_with(&layout);
        prop_assert_eq!(Binary::from_source_with(&narrow, &layout), Ok(binary));
    }

    #[test]
    fn prop_bytecode_source_round_trip(instructions in vec(any::<u16>(), 0..40)) {
        let bytecode = Bytecode::new(instructions);
        prop_assert_eq!(Bytecode::from_source(&bytecode.as_source()), Ok(bytecode));
    }

    #[test]
    fn prop_quote_source_round_trip(text in any::<String>()) {
        let quote = Quote::new(text);
        let source = quote.as_source();
        prop_assert_eq!(Quote::from_source(&source), Ok(quote));
    }

    #[test]
    fn prop_narrative_source_round_trip(lines in vec("[ -\\[\\]-~]{0,20}", 0..6)) {
        let narrative = Narrative::new(lines).unwrap();
        let source = narrative.as_source();
        prop_assert_eq!(Narrative::from_source(&source), Ok(narrative));
    }

    #[test]
    fn prop_name_source_round_trip(source in "(/[a-zA-Z0-9-]{1,8}){1,5}") {
        prop_assert_eq!(Name::from_source(&source).unwrap().as_source(), source);
    }

    #[test]
    fn prop_tag_source_round_trip(bytes in vec(any::<u8>(), 8..40)) {
        let tag = Tag::new(bytes).unwrap();
        let source = tag.as_source();
        prop_assert_eq!(source.len(), 1 + (tag.as_intrinsic().len() * 8 + 4) / 5);
        prop_assert_eq!(Tag::from_source(&source), Ok(tag));
    }

    #[test]
    fn prop_version_next_is_valid(ordinals in vec(1u64..20, 1..6)) {
        let version = Version::new(ordinals).unwrap();
        for level in 0..=version.as_intrinsic().len() + 1 {
            let next = version.get_next_version(level);
            prop_assert!(version.is_valid_next_version(&next), "{} at {}", version, level);
            prop_assert!(version < next);
        }
        prop_assert!(!version.is_valid_next_version(&version));
        prop_assert_eq!(Version::from_source(&version.as_source()), Ok(version));
    }
}
