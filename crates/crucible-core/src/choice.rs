//! Discrete selection from candidate lists.

use crate::error::SampleError;
use crate::number;
use crate::twister::MersenneTwister;

/// Select one candidate with equal probability.
///
/// Consumes exactly one 53-bit real draw (two engine words).
pub fn pick<'a, T>(rng: &mut MersenneTwister, items: &'a [T]) -> Result<&'a T, SampleError> {
    if items.is_empty() {
        return Err(SampleError::EmptyCandidates);
    }
    let index = number::sample_span(rng, items.len() as u64) as usize;
    Ok(&items[index])
}

/// Check a weight table without consuming any engine words.
///
/// Rejects empty tables, negative or non-finite weights, and tables
/// whose weights sum to zero. Returns the cumulative total.
pub fn validate_weights<T>(entries: &[(T, f64)]) -> Result<f64, SampleError> {
    if entries.is_empty() {
        return Err(SampleError::EmptyCandidates);
    }
    let mut total = 0.0;
    for (_, weight) in entries {
        if !weight.is_finite() || *weight < 0.0 {
            return Err(SampleError::DegenerateWeights);
        }
        total += *weight;
    }
    if total <= 0.0 {
        return Err(SampleError::DegenerateWeights);
    }
    Ok(total)
}

/// Select one candidate with probability proportional to its weight.
///
/// Draws a real in `[0, total)` and walks the entries in order; each
/// entry owns the half-open span `[sum_before, sum_before + weight)`,
/// so zero-weight entries are never selected and a draw landing
/// exactly on a boundary goes to the entry above it. The float edge
/// where the scaled draw equals the total falls through to the last
/// entry. With all-equal weights this consumes the same draw and
/// selects the same index as [`pick`].
pub fn pick_weighted<'a, T>(
    rng: &mut MersenneTwister,
    entries: &'a [(T, f64)],
) -> Result<&'a T, SampleError> {
    let total = validate_weights(entries)?;
    let target = rng.next_real53() * total;
    let mut cumulative = 0.0;
    for (value, weight) in entries {
        cumulative += *weight;
        if target < cumulative {
            return Ok(value);
        }
    }
    entries
        .last()
        .map(|(value, _)| value)
        .ok_or(SampleError::EmptyCandidates)
}
