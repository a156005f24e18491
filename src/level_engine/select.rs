//! Seeded selection utilities.
//!
//! Quiz content is regenerated from `level_num` alone on every load, so
//! every "random" choice here is a pure function of an integer seed. The
//! arithmetic mix below is an observable contract: changing it would
//! silently rewrite the questions of already-played levels whose progress
//! is keyed by level id.

const MIX_MULT: i64 = 9301;
const MIX_INC: i64 = 49297;
const MIX_MOD: i64 = 233280;

/// Linear-congruential mix of `seed` and step `i`.
///
/// Negative seeds are normalized into range first, so callers may pass
/// arbitrary integer arithmetic results.
fn mix(seed: i64, i: i64) -> usize {
    let s = seed.rem_euclid(MIX_MOD);
    ((s * MIX_MULT + i * MIX_INC).rem_euclid(MIX_MOD)) as usize
}

/// Deterministic total permutation of `items`.
///
/// Same `items` + same `seed` → same order, always. Different seeds
/// usually (not guaranteed) produce different orders.
pub fn seeded_shuffle<T: Clone>(items: &[T], seed: i64) -> Vec<T> {
    let mut out: Vec<T> = items.to_vec();
    // Fisher-Yates driven by the mix instead of an RNG.
    for i in (1..out.len()).rev() {
        let j = mix(seed, i as i64) % (i + 1);
        out.swap(i, j);
    }
    out
}

/// Deterministic single selection: `seed mod len`.
pub fn seeded_pick<T>(items: &[T], seed: i64) -> &T {
    debug_assert!(!items.is_empty(), "seeded_pick on empty pool");
    &items[seed.rem_euclid(items.len() as i64) as usize]
}

/// `count` distinct items chosen deterministically.
///
/// When the pool holds fewer than `count` items, the result pads by
/// cycling from the start of the shuffled pool rather than failing.
pub fn seeded_unique_pick<T: Clone>(items: &[T], seed: i64, count: usize) -> Vec<T> {
    debug_assert!(!items.is_empty(), "seeded_unique_pick on empty pool");
    let shuffled = seeded_shuffle(items, seed);
    (0..count).map(|i| shuffled[i % shuffled.len()].clone()).collect()
}

/// Build a full answer-option list around one correct answer.
///
/// Returns exactly `count` distinct strings containing `correct` exactly
/// once; the remaining entries are drawn deterministically from `pool`
/// (skipping accidental duplicates of `correct`), and the final order is
/// shuffled by `seed`. The second element is the index of `correct` in
/// the shuffled list.
pub fn build_distractor_options(
    correct: &str,
    pool: &[&str],
    seed: i64,
    count: usize,
) -> (Vec<String>, usize) {
    debug_assert!(count >= 2, "an answer list needs at least 2 options");

    // Drop the correct answer and any repeated pool entries up front, so a
    // pool like ["circle", "circle", "square"] cannot yield duplicates.
    let mut seen = std::collections::HashSet::new();
    let candidates: Vec<&str> = pool
        .iter()
        .copied()
        .filter(|p| *p != correct && seen.insert(*p))
        .collect();
    debug_assert!(
        !candidates.is_empty(),
        "distractor pool only contains the correct answer"
    );

    let mut options: Vec<String> = Vec::with_capacity(count);
    options.push(correct.to_string());
    for pick in seeded_unique_pick(&candidates, seed, count - 1) {
        // Cycling pads of a tiny pool can repeat; keep the list duplicate-free.
        if !options.iter().any(|o| o == pick) {
            options.push(pick.to_string());
        }
    }

    let options = seeded_shuffle(&options, seed.wrapping_add(MIX_INC));
    let correct_index = options
        .iter()
        .position(|o| o == correct)
        .expect("correct answer survives the shuffle");
    (options, correct_index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shuffle_is_deterministic_and_total() {
        let items: Vec<u32> = (0..20).collect();
        let a = seeded_shuffle(&items, 77);
        let b = seeded_shuffle(&items, 77);
        assert_eq!(a, b);
        assert_eq!(a.len(), items.len());

        // Same multiset.
        let mut sorted = a.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, items);
    }

    #[test]
    fn different_seeds_usually_differ() {
        let items: Vec<u32> = (0..20).collect();
        let same = (0..50)
            .filter(|&s| seeded_shuffle(&items, s) == seeded_shuffle(&items, s + 1000))
            .count();
        assert!(same < 5, "too many identical shuffles across seeds ({same}/50)");
    }

    #[test]
    fn pick_normalizes_negative_seeds() {
        let items = ["a", "b", "c"];
        assert_eq!(*seeded_pick(&items, 4), "b");
        assert_eq!(*seeded_pick(&items, -1), "c");
        assert_eq!(*seeded_pick(&items, -3), "a");
    }

    #[test]
    fn unique_pick_never_repeats_within_pool() {
        let items: Vec<u32> = (0..10).collect();
        for seed in 0..25 {
            let picked = seeded_unique_pick(&items, seed, 6);
            let mut seen = std::collections::HashSet::new();
            for p in &picked {
                assert!(seen.insert(*p), "duplicate pick {p} for seed {seed}");
            }
        }
    }

    #[test]
    fn unique_pick_pads_small_pools_by_cycling() {
        let items = ["x", "y"];
        let picked = seeded_unique_pick(&items, 3, 5);
        assert_eq!(picked.len(), 5);
        assert_eq!(picked[0], picked[2]);
        assert_eq!(picked[1], picked[3]);
    }

    #[test]
    fn distractors_contain_correct_exactly_once() {
        let pool = ["cat", "dog", "cow", "hen", "fox", "bee"];
        for seed in 0..40 {
            let (options, idx) = build_distractor_options("dog", &pool, seed, 4);
            assert_eq!(options.len(), 4, "seed {seed}");
            assert_eq!(options[idx], "dog");
            assert_eq!(options.iter().filter(|o| *o == "dog").count(), 1);
            let mut seen = std::collections::HashSet::new();
            for o in &options {
                assert!(seen.insert(o.clone()), "duplicate option {o} for seed {seed}");
            }
        }
    }

    #[test]
    fn distractors_exclude_pool_duplicates_of_correct() {
        // "sun" appears in the pool too; it must not show up twice.
        let pool = ["sun", "moon", "star", "sky"];
        let (options, idx) = build_distractor_options("sun", &pool, 9, 3);
        assert_eq!(options.iter().filter(|o| *o == "sun").count(), 1);
        assert_eq!(options[idx], "sun");
    }
}
