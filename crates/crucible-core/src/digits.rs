//! Digit-string composition.

use crate::number;
use crate::twister::MersenneTwister;

/// A string of `len` decimal digits, drawn left to right.
///
/// Each position is one uniform draw in `[0, 9]`; when
/// `allow_leading_zero` is false the first position draws from
/// `[1, 9]` instead. Draw order is part of the output contract, so a
/// fixed seed always yields the same string. A zero length yields the
/// empty string.
pub fn numeric_string(rng: &mut MersenneTwister, len: usize, allow_leading_zero: bool) -> String {
    let mut out = String::with_capacity(len);
    for position in 0..len {
        let digit = if position == 0 && !allow_leading_zero {
            1 + number::sample_span(rng, 9)
        } else {
            number::sample_span(rng, 10)
        };
        out.push(char::from(b'0' + digit as u8));
    }
    out
}
