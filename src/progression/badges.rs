//! Badge threshold tables.
//!
//! Badges are permanent, de-duplicated achievement markers. The functions
//! here return every badge name whose threshold is met; the store appends
//! them idempotently, so re-evaluating on every call is safe.

use crate::level_engine::models::Subject;

const STAR_THRESHOLDS: [(u64, &str); 4] = [
    (1, "First Star"),
    (10, "Star Collector"),
    (50, "Superstar"),
    (100, "Champion"),
];

const STREAK_THRESHOLDS: [(u32, &str); 3] = [
    (3, "3-day streak"),
    (7, "7-day streak"),
    (14, "14-day streak"),
];

/// Badges earned at or below a total star count.
pub fn star_badges(total_stars: u64) -> Vec<&'static str> {
    STAR_THRESHOLDS
        .iter()
        .filter(|(t, _)| total_stars >= *t)
        .map(|(_, name)| *name)
        .collect()
}

/// Per-subject session badges ("First Letters play", "Letters expert").
pub fn session_badges(subject: Subject, sessions: u32) -> Vec<String> {
    let mut earned = Vec::new();
    if sessions >= 1 {
        earned.push(format!("First {} play", subject.label()));
    }
    if sessions >= 10 {
        earned.push(format!("{} expert", subject.label()));
    }
    earned
}

/// Streak badges — only evaluated on the increment branch of the streak
/// machine (a restart back to 1 never re-triggers them).
pub fn streak_badges(count: u32) -> Vec<&'static str> {
    STREAK_THRESHOLDS
        .iter()
        .filter(|(t, _)| count >= *t)
        .map(|(_, name)| *name)
        .collect()
}
