use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};

use crate::level_engine::models::ALL_SUBJECTS;

/// The only world shipped in the reference content.
pub const CANDY_WORLD: &str = "candy";

/// Consecutive-calendar-day activity counter.
///
/// `last_active_date` is an ISO `YYYY-MM-DD` string, empty until the first
/// scored activity. Dates are stored as strings because the persisted
/// record is a flat JSON document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Streak {
    pub count: u32,
    pub last_active_date: String,
}

/// Per-subject play statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectStats {
    pub sessions: u32,
    pub stars: u64,
    pub seconds_played: u64,
    pub last_played_date: Option<String>,
    pub completed_item_ids: Vec<String>,
}

/// Completion state for one world of adventure levels.
///
/// `completed_level_ids` has set semantics (no duplicates, insertion
/// order kept); `level_stars` records the best star count per level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldProgress {
    pub completed_level_ids: Vec<String>,
    pub level_stars: BTreeMap<String, u8>,
}

/// Screen-time bookkeeping for the current calendar day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyUsage {
    pub date: String,
    pub seconds_today: u64,
}

/// Salted PIN credential for the parent gate. Absent = no PIN set.
/// The plaintext PIN is never stored — only salt and digest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentGate {
    pub salt_hex: String,
    pub pin_hash_hex: String,
}

/// The full persisted learner record.
///
/// Owned exclusively by [`ProgressStore`](crate::progression::ProgressStore);
/// every mutation goes through a named store operation so the invariants
/// (monotone stars, de-duplicated badges, best-of level stars) are
/// enforced at a single chokepoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Progression {
    pub stars: u64,
    pub badges: Vec<String>,
    pub streak: Streak,
    pub per_subject_stats: BTreeMap<String, SubjectStats>,
    pub adventure_progress: BTreeMap<String, WorldProgress>,
    pub daily_usage: DailyUsage,
    pub focus_subjects: Vec<String>,
    pub daily_limit_minutes: u32,
    pub parent_gate: Option<ParentGate>,
}

impl Default for Progression {
    fn default() -> Self {
        Progression {
            stars: 0,
            badges: Vec::new(),
            streak: Streak::default(),
            per_subject_stats: zeroed_subject_stats(),
            adventure_progress: BTreeMap::new(),
            daily_usage: DailyUsage::default(),
            // Everything visible until a parent narrows the focus.
            focus_subjects: ALL_SUBJECTS.iter().map(|s| s.key().to_string()).collect(),
            daily_limit_minutes: 20,
            parent_gate: None,
        }
    }
}

/// A stats map holding all 11 subject keys with zeroed counters.
pub fn zeroed_subject_stats() -> BTreeMap<String, SubjectStats> {
    ALL_SUBJECTS
        .iter()
        .map(|s| (s.key().to_string(), SubjectStats::default()))
        .collect()
}
