//! Built-in generators for common types.
//!
//! Every constructor validates its request up front and returns
//! `Result`, so `generate` itself never fails and never consumes
//! engine words for a request that would be rejected.

use crate::gen::Generator;
use chrono::{Duration, NaiveDate};
use crucible_core::{choice, digits, number, MersenneTwister, SampleError};
use rand::RngCore;
use uuid::Uuid;

/// Uniform integer in an inclusive range.
pub struct UniformInt {
    min: i64,
    max: i64,
}

impl UniformInt {
    pub fn new(min: i64, max: i64) -> Result<Self, SampleError> {
        if min > max {
            return Err(SampleError::InvalidIntRange { min, max });
        }
        Ok(Self { min, max })
    }
}

impl Generator<i64> for UniformInt {
    fn generate(&self, rng: &mut MersenneTwister) -> i64 {
        number::int_in_range(rng, self.min, self.max).expect("bounds validated at construction")
    }
}

/// Convenience constructor for [`UniformInt`].
pub fn uniform_int(min: i64, max: i64) -> Result<UniformInt, SampleError> {
    UniformInt::new(min, max)
}

/// Uniform float in an inclusive range with fixed decimal precision.
pub struct UniformFloat {
    min: f64,
    max: f64,
    fraction_digits: u8,
}

impl UniformFloat {
    pub fn new(min: f64, max: f64, fraction_digits: u8) -> Result<Self, SampleError> {
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(SampleError::InvalidFloatRange { min, max });
        }
        Ok(Self {
            min,
            max,
            fraction_digits,
        })
    }
}

impl Generator<f64> for UniformFloat {
    fn generate(&self, rng: &mut MersenneTwister) -> f64 {
        number::float_in_range(rng, self.min, self.max, self.fraction_digits)
            .expect("bounds validated at construction")
    }
}

/// Convenience constructor for [`UniformFloat`].
pub fn uniform_float(min: f64, max: f64, fraction_digits: u8) -> Result<UniformFloat, SampleError> {
    UniformFloat::new(min, max, fraction_digits)
}

/// Equal-probability selection from a fixed candidate list.
pub struct OneOf<T> {
    items: Vec<T>,
}

impl<T: Clone + Send + Sync> OneOf<T> {
    pub fn new(items: Vec<T>) -> Result<Self, SampleError> {
        if items.is_empty() {
            return Err(SampleError::EmptyCandidates);
        }
        Ok(Self { items })
    }
}

impl<T: Clone + Send + Sync> Generator<T> for OneOf<T> {
    fn generate(&self, rng: &mut MersenneTwister) -> T {
        choice::pick(rng, &self.items)
            .expect("candidates validated at construction")
            .clone()
    }
}

/// Convenience constructor for [`OneOf`].
pub fn one_of<T: Clone + Send + Sync>(items: Vec<T>) -> Result<OneOf<T>, SampleError> {
    OneOf::new(items)
}

/// Weight-proportional selection from a fixed candidate list.
pub struct WeightedChoice<T> {
    entries: Vec<(T, f64)>,
}

impl<T: Clone + Send + Sync> WeightedChoice<T> {
    pub fn new(entries: Vec<(T, f64)>) -> Result<Self, SampleError> {
        choice::validate_weights(&entries)?;
        Ok(Self { entries })
    }
}

impl<T: Clone + Send + Sync> Generator<T> for WeightedChoice<T> {
    fn generate(&self, rng: &mut MersenneTwister) -> T {
        choice::pick_weighted(rng, &self.entries)
            .expect("weights validated at construction")
            .clone()
    }
}

/// Convenience constructor for [`WeightedChoice`].
pub fn weighted_choice<T: Clone + Send + Sync>(
    entries: Vec<(T, f64)>,
) -> Result<WeightedChoice<T>, SampleError> {
    WeightedChoice::new(entries)
}

/// Fixed-length decimal digit strings.
pub struct Digits {
    len: usize,
    allow_leading_zero: bool,
}

impl Digits {
    pub fn new(len: usize, allow_leading_zero: bool) -> Self {
        Self {
            len,
            allow_leading_zero,
        }
    }
}

impl Generator<String> for Digits {
    fn generate(&self, rng: &mut MersenneTwister) -> String {
        digits::numeric_string(rng, self.len, self.allow_leading_zero)
    }
}

/// Convenience constructor for [`Digits`] without leading zeros.
pub fn digit_string(len: usize) -> Digits {
    Digits::new(len, false)
}

/// Boolean with a fixed probability of `true`.
pub struct BoolWithProb {
    prob: f64,
}

impl BoolWithProb {
    pub fn new(prob: f64) -> Self {
        Self { prob }
    }
}

impl Generator<bool> for BoolWithProb {
    fn generate(&self, rng: &mut MersenneTwister) -> bool {
        rng.next_real53() < self.prob
    }
}

/// Convenience constructor for [`BoolWithProb`].
pub fn bool_with_prob(prob: f64) -> BoolWithProb {
    BoolWithProb::new(prob)
}

/// Deterministic version-4 UUIDs from engine bytes.
pub struct UuidGen;

impl Generator<Uuid> for UuidGen {
    fn generate(&self, rng: &mut MersenneTwister) -> Uuid {
        let mut bytes = [0u8; 16];
        rng.fill_bytes(&mut bytes);
        // Version 4 and variant bits per RFC 4122
        bytes[6] = (bytes[6] & 0x0f) | 0x40;
        bytes[8] = (bytes[8] & 0x3f) | 0x80;
        Uuid::from_bytes(bytes)
    }
}

/// Convenience constructor for [`UuidGen`].
pub fn uuid_gen() -> UuidGen {
    UuidGen
}

/// Uniform date in an inclusive calendar range.
pub struct DateBetween {
    start: NaiveDate,
    span_days: i64,
}

impl DateBetween {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, SampleError> {
        let span_days = (end - start).num_days();
        if span_days < 0 {
            return Err(SampleError::InvalidIntRange {
                min: 0,
                max: span_days,
            });
        }
        Ok(Self { start, span_days })
    }
}

impl Generator<NaiveDate> for DateBetween {
    fn generate(&self, rng: &mut MersenneTwister) -> NaiveDate {
        let offset =
            number::int_in_range(rng, 0, self.span_days).expect("span validated at construction");
        self.start + Duration::days(offset)
    }
}

/// Convenience constructor for [`DateBetween`].
pub fn date_between(start: NaiveDate, end: NaiveDate) -> Result<DateBetween, SampleError> {
    DateBetween::new(start, end)
}
