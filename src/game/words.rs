//! Word bank: uniform-random pick from the tier table for the current level.

use super::rng::Lcg;

/// Tier table for `level`. Levels past the last tier clamp to it, so picks
/// never index out of bounds.
fn tier_words(level: u32) -> &'static [&'static str] {
    match level {
        0 | 1 => crate::TIER1_WORDS,
        2 => crate::TIER2_WORDS,
        _ => crate::TIER3_WORDS,
    }
}

/// Uniform-random word from the tier for `level`.
pub fn pick_word(level: u32, rng: &mut Lcg) -> &'static str {
    let words = tier_words(level);
    words[rng.next_range(words.len() as u32) as usize]
}
