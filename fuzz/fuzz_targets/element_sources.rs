#![no_main]

use libfuzzer_sys::fuzz_target;
use primer_core::Lexical;
use primer_elements::{
    Angle, Boolean, Duration, Glyph, Moment, Number, Percentage, Probability, Resource, Symbol,
};

// Accepted text is reproduced exactly.
macro_rules! round_trips {
    ($kind:ty, $text:expr) => {
        if let Ok(value) = <$kind>::from_source($text) {
            assert_eq!(value.as_source(), $text);
        }
    };
}

// Text with lenient signs and names must settle on a canonical source after
// one parse.
macro_rules! settles {
    ($kind:ty, $text:expr) => {
        if let Ok(value) = <$kind>::from_source($text) {
            let source = value.as_source();
            let again = <$kind>::from_source(&source).expect("canonical source parses");
            assert_eq!(again.as_source(), source);
        }
    };
}

fuzz_target!(|text: &str| {
    if text.len() > 4_096 {
        return;
    }
    round_trips!(Boolean, text);
    round_trips!(Duration, text);
    round_trips!(Glyph, text);
    round_trips!(Moment, text);
    round_trips!(Probability, text);
    round_trips!(Resource, text);
    round_trips!(Symbol, text);
    settles!(Angle, text);
    settles!(Number, text);
    settles!(Percentage, text);
});
