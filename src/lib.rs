//! # adventure_quiz_gen
//!
//! The offline core of a children's educational activity app: a
//! deterministic 200-level adventure-map quiz generator plus the
//! progression store that tracks a learner's stars, streak, badges, and
//! per-level completion.
//!
//! ## How it works
//!
//! 1. Call [`get_level`] (or [`get_all_levels`]) — levels 1–75 come from a
//!    hand-authored curriculum, levels 76–200 are generated on the fly
//!    from content tables, seeded by the level number alone.
//! 2. The UI plays the level's 3–5 questions and counts first-try correct
//!    answers; [`stars_for_score`] maps the outcome to 1–3 stars.
//! 3. Report the outcome to the [`ProgressStore`] with
//!    [`ProgressStore::complete_adventure_level`] and
//!    [`ProgressStore::award_stars`] — completion, best stars, streak, and
//!    badges all update through that single chokepoint.
//!
//! ## Key properties
//!
//! - **Deterministic**: the same `level_num` yields byte-identical
//!   questions in every session and process, so persisted progress keyed
//!   by level id stays meaningful across reloads. Levels are never
//!   persisted — only ids and star counts are.
//! - **Total operations**: store operations never fail; out-of-range
//!   numeric input is clamped, not rejected.
//! - **No I/O**: persistence is the host's job — register an on-change
//!   callback with [`ProgressStore::set_on_change`] and encode state with
//!   [`progression::persist`].
//!
//! ## Quick start
//!
//! ```rust
//! use adventure_quiz_gen::{get_level, stars_for_score, ProgressStore, CANDY_WORLD};
//! use chrono::NaiveDate;
//!
//! let level = get_level(76).expect("level 76 is in the catalog");
//! println!("{} {} — {}", level.emoji, level.title, level.area_label);
//!
//! // The child answers 2 of 3 questions right on the first try:
//! let stars = stars_for_score(2, level.questions.len() as u32);
//! assert_eq!(stars, 2);
//!
//! let mut store = ProgressStore::new();
//! let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
//! store.complete_adventure_level(CANDY_WORLD, &level.id, stars);
//! store.award_stars(level.area, stars as f64, today);
//! assert_eq!(store.state().streak.count, 1);
//! ```

pub mod level_engine;
pub mod progression;

// Convenience re-exports so callers can use `adventure_quiz_gen::get_level`
// directly without reaching into sub-modules.
pub use level_engine::{
    get_all_levels, get_level, level_id, theme_for_level, Level, Question, QuestionKind, Reward,
    Subject, Theme, ALL_SUBJECTS, MAX_LEVEL,
};
pub use progression::{
    is_level_unlocked, stars_for_score, ParentGate, ProgressStore, Progression, CANDY_WORLD,
};

#[cfg(test)]
mod tests;
