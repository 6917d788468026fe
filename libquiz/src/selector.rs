//! Question selection
//!
//! Turns the full question pool into the ordered list used by one session:
//! shuffle, filter by difficulty, then cut to the requested count.
//!
//! Randomness is injected so callers (and tests) control the permutation.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::types::{DifficultyFilter, Question};

/// Select the questions for a session
///
/// 1. Shuffle a copy of `pool` (Fisher-Yates, every ordering equally likely).
/// 2. Keep only questions matching `difficulty`, preserving shuffled order.
/// 3. Take the first `limit` of them; `None` or `Some(0)` means all.
///
/// The input pool is never modified. An empty result is possible when no
/// question matches the filter.
pub fn select<R: Rng + ?Sized>(
    pool: &[Question],
    difficulty: DifficultyFilter,
    limit: Option<usize>,
    rng: &mut R,
) -> Vec<Question> {
    let mut shuffled = pool.to_vec();
    shuffled.shuffle(rng);

    let filtered: Vec<Question> = shuffled
        .into_iter()
        .filter(|q| difficulty.matches(q.difficulty))
        .collect();

    let effective_limit = match limit {
        Some(n) if n > 0 => n,
        _ => filtered.len(),
    };

    filtered.into_iter().take(effective_limit).collect()
}
