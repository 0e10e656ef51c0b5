#![no_main]

use libfuzzer_sys::fuzz_target;
use primer_core::Lexical;
use primer_sequences::{
    Binary, Bytecode, Identifier, Name, Narrative, Pattern, Quote, Tag, Version,
};

// Sequence sources are canonical: accepted text is reproduced exactly.
macro_rules! round_trips {
    ($kind:ty, $text:expr) => {
        if let Ok(value) = <$kind>::from_source($text) {
            assert_eq!(value.as_source(), $text);
        }
    };
}

fuzz_target!(|text: &str| {
    if text.len() > 16_384 {
        return;
    }
    round_trips!(Binary, text);
    round_trips!(Bytecode, text);
    round_trips!(Identifier, text);
    round_trips!(Name, text);
    round_trips!(Narrative, text);
    round_trips!(Quote, text);
    round_trips!(Tag, text);
    round_trips!(Pattern, text);
    round_trips!(Version, text);
});
