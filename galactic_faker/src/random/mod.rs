//! Random selection primitives.

use galactic_data::{RegistryPattern, UniverseAttribute};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{FakerError, Result};

/// Placeholder replaced by a random ASCII digit.
pub const DIGIT_PLACEHOLDER: char = '#';

/// Placeholder replaced by a random ASCII letter.
pub const LETTER_PLACEHOLDER: char = '?';

const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Pick one item uniformly at random.
///
/// `attribute` names the data being sampled so an empty slice can be reported.
pub fn pick<'a, T, R>(rng: &mut R, attribute: UniverseAttribute, items: &'a [T]) -> Result<&'a T>
where
    R: Rng + ?Sized,
{
    items
        .choose(rng)
        .ok_or(FakerError::EmptySelection { attribute })
}

/// Pick one registry pattern with probability proportional to its weight.
pub fn pick_weighted<'a, R>(
    rng: &mut R,
    attribute: UniverseAttribute,
    patterns: &[&'a RegistryPattern],
) -> Result<&'a RegistryPattern>
where
    R: Rng + ?Sized,
{
    if patterns.is_empty() {
        return Err(FakerError::EmptySelection { attribute });
    }

    patterns
        .choose_weighted(rng, |pattern| pattern.weight)
        .map(|pattern| *pattern)
        .map_err(|e| FakerError::InvalidWeights {
            attribute,
            reason: e.to_string(),
        })
}

/// Expand a pattern: `#` becomes a random digit, `?` a random letter.
///
/// Every other character is copied as-is.
pub fn bothify<R>(rng: &mut R, pattern: &str) -> String
where
    R: Rng + ?Sized,
{
    pattern
        .chars()
        .map(|c| match c {
            DIGIT_PLACEHOLDER => char::from(b'0' + rng.gen_range(0..10u8)),
            LETTER_PLACEHOLDER => char::from(LETTERS[rng.gen_range(0..LETTERS.len())]),
            other => other,
        })
        .collect()
}
