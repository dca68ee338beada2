//! Uniform numeric sampling over inclusive ranges.

use crate::error::SampleError;
use crate::twister::MersenneTwister;
use rand::RngCore;

/// Spans up to 2^53 fit the 53-bit real path without precision loss.
const EXACT_SPAN_LIMIT: u64 = 1 << 53;

/// Uniform integer in `[min, max]`, inclusive on both ends.
///
/// Spans that fit in 53 bits map one 53-bit real draw onto the range.
/// Wider spans cannot ride through an `f64` without silently dropping
/// low bits, so they switch to threshold rejection sampling over full
/// 64-bit draws instead.
pub fn int_in_range(
    rng: &mut MersenneTwister,
    min: i64,
    max: i64,
) -> Result<i64, SampleError> {
    if min > max {
        return Err(SampleError::InvalidIntRange { min, max });
    }
    // Wrapping arithmetic encodes the full-domain span (2^64) as 0.
    let span = (max as u64).wrapping_sub(min as u64).wrapping_add(1);
    Ok(min.wrapping_add(sample_span(rng, span) as i64))
}

/// Uniform offset in `[0, span)`, where `span == 0` means the full
/// 2^64 domain. Infallible; range validation happens in the callers.
pub(crate) fn sample_span(rng: &mut MersenneTwister, span: u64) -> u64 {
    if span == 0 {
        return rng.next_u64();
    }
    if span <= EXACT_SPAN_LIMIT {
        let offset = (rng.next_real53() * span as f64) as u64;
        // The real is strictly below 1.0, but the product can round up
        // to the span itself at the widest scales.
        return offset.min(span - 1);
    }
    let threshold = u64::MAX - (u64::MAX % span);
    loop {
        let value = rng.next_u64();
        if value < threshold {
            return value % span;
        }
    }
}

/// Uniform float in `[min, max]`, rounded to `fraction_digits` decimal
/// places.
///
/// One 53-bit real draw is scaled into the interval, then rounded at
/// the decimal scale (ties away from zero). Rounding at coarse scales
/// can carry the value past either bound, so the result is clamped
/// back into `[min, max]`.
pub fn float_in_range(
    rng: &mut MersenneTwister,
    min: f64,
    max: f64,
    fraction_digits: u8,
) -> Result<f64, SampleError> {
    if !min.is_finite() || !max.is_finite() || min > max {
        return Err(SampleError::InvalidFloatRange { min, max });
    }
    let raw = min + rng.next_real53() * (max - min);
    let scale = 10f64.powi(i32::from(fraction_digits));
    let rounded = (raw * scale).round() / scale;
    Ok(rounded.clamp(min, max))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn rejects_inverted_int_range() {
        let mut rng = MersenneTwister::new(1);
        assert_eq!(
            int_in_range(&mut rng, 10, 9),
            Err(SampleError::InvalidIntRange { min: 10, max: 9 })
        );
    }

    #[test]
    fn rejects_inverted_or_nan_float_range() {
        let mut rng = MersenneTwister::new(1);
        assert!(float_in_range(&mut rng, 2.0, 1.0, 2).is_err());
        assert!(float_in_range(&mut rng, f64::NAN, 1.0, 2).is_err());
        assert!(float_in_range(&mut rng, 0.0, f64::INFINITY, 2).is_err());
    }

    #[test]
    fn rejection_leaves_stream_untouched() {
        let mut rng = MersenneTwister::new(77);
        let mut witness = rng.clone();
        assert!(int_in_range(&mut rng, 5, 4).is_err());
        assert!(float_in_range(&mut rng, 5.0, 4.0, 0).is_err());
        assert_eq!(rng.next_u32(), witness.next_u32());
    }

    #[test]
    fn degenerate_range_returns_min() {
        let mut rng = MersenneTwister::new(5);
        assert_eq!(int_in_range(&mut rng, 42, 42).unwrap(), 42);
    }

    #[test]
    fn full_domain_range_is_accepted() {
        let mut rng = MersenneTwister::new(5);
        // Smoke test for the span == 0 encoding; any i64 is in range.
        int_in_range(&mut rng, i64::MIN, i64::MAX).unwrap();
    }

    #[test]
    fn wide_span_stays_in_bounds() {
        let mut rng = MersenneTwister::new(9);
        let min = i64::MIN / 2;
        let max = i64::MAX / 2;
        for _ in 0..1000 {
            let value = int_in_range(&mut rng, min, max).unwrap();
            assert!((min..=max).contains(&value));
        }
    }

    #[test]
    fn float_rounding_respects_bounds() {
        let mut rng = MersenneTwister::new(2024);
        for _ in 0..10_000 {
            let value = float_in_range(&mut rng, 0.005, 9.995, 2).unwrap();
            assert!((0.005..=9.995).contains(&value), "escaped: {value}");
        }
    }

    #[test]
    fn zero_fraction_digits_yields_integers() {
        let mut rng = MersenneTwister::new(31);
        for _ in 0..1000 {
            let value = float_in_range(&mut rng, 1.0, 100.0, 0).unwrap();
            assert_eq!(value, value.trunc());
        }
    }

    proptest! {
        #[test]
        fn int_draws_stay_inclusive(
            seed in any::<u32>(),
            a in -100_000i64..100_000,
            b in -100_000i64..100_000,
        ) {
            let (min, max) = if a <= b { (a, b) } else { (b, a) };
            let mut rng = MersenneTwister::new(seed);
            for _ in 0..16 {
                let value = int_in_range(&mut rng, min, max).unwrap();
                prop_assert!((min..=max).contains(&value));
            }
        }

        #[test]
        fn float_draws_stay_inclusive(
            seed in any::<u32>(),
            a in -1000.0f64..1000.0,
            b in -1000.0f64..1000.0,
            digits in 0u8..6,
        ) {
            let (min, max) = if a <= b { (a, b) } else { (b, a) };
            let mut rng = MersenneTwister::new(seed);
            for _ in 0..16 {
                let value = float_in_range(&mut rng, min, max, digits).unwrap();
                prop_assert!(value >= min && value <= max);
            }
        }
    }
}
