#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use primer_core::Continuous;
use primer_elements::Number;

#[derive(Arbitrary, Debug)]
struct Operands {
    a: (f64, f64),
    b: (f64, f64),
}

fuzz_target!(|operands: Operands| {
    let a = Number::from_rectangular(operands.a.0, operands.a.1);
    let b = Number::from_rectangular(operands.b.0, operands.b.1);
    // The algebra is total and every result is normalized.
    for result in [
        a + b,
        a - b,
        a * b,
        a / b,
        a % b,
        a.power(b),
        a.logarithm(b),
        a.reciprocal(),
        -a,
    ] {
        assert_eq!(Number::new(result.as_intrinsic()), result);
    }
    assert_eq!(a + b, b + a);
    if !a.is_defined() || !b.is_defined() {
        assert!(!(a * b).is_defined());
    }
});
