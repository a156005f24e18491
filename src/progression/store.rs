//! The progression store — single mutation authority for learner state.
//!
//! Operations are synchronous, total, and run to completion; invalid
//! numeric input is clamped rather than rejected (a crash is worse than a
//! no-op in a kids' app). The store performs no I/O: after every mutating
//! operation it fires the on-change callback and the host decides how and
//! when to persist.

use chrono::NaiveDate;
use log::{debug, info};

use crate::level_engine::{generator, models::Subject};
use crate::progression::{
    badges,
    state::{DailyUsage, ParentGate, Progression, Streak, WorldProgress},
};

/// Upper bound on one usage tick; a stalled timer must not burn a whole
/// day's allowance in a single call.
const MAX_TICK_SECONDS: u64 = 3600;

type ChangeCallback = Box<dyn FnMut(&Progression) + Send>;

/// How the streak machine reacted to an activity day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StreakOutcome {
    Started,
    Continued,
    AlreadyCounted,
    Restarted,
}

pub struct ProgressStore {
    state: Progression,
    on_change: Option<ChangeCallback>,
}

impl ProgressStore {
    pub fn new() -> Self {
        Self::from_state(Progression::default())
    }

    /// Wrap previously-loaded state (see `persist::from_json`).
    pub fn from_state(state: Progression) -> Self {
        ProgressStore { state, on_change: None }
    }

    /// Read-only view of the current record.
    pub fn state(&self) -> &Progression {
        &self.state
    }

    /// Register the host's persistence hook, fired after every mutation.
    pub fn set_on_change(&mut self, callback: impl FnMut(&Progression) + Send + 'static) {
        self.on_change = Some(Box::new(callback));
    }

    fn notify(&mut self) {
        if let Some(callback) = self.on_change.as_mut() {
            callback(&self.state);
        }
    }

    // -----------------------------------------------------------------------
    // Scoring operations
    // -----------------------------------------------------------------------

    /// Record a finished scored activity.
    ///
    /// Adds the (clamped) stars to the total and the subject's stats,
    /// advances the streak for `today`, and appends any newly-earned
    /// badges. Safe to call with `stars_to_add = 0` — the session still
    /// counts, the streak still advances, and badge evaluation stays
    /// idempotent.
    pub fn award_stars(&mut self, subject: Subject, stars_to_add: f64, today: NaiveDate) {
        let add = clamp_count(stars_to_add);
        self.state.stars += add;

        let today_str = iso_date(today);
        let stats = self
            .state
            .per_subject_stats
            .entry(subject.key().to_string())
            .or_default();
        stats.sessions += 1;
        stats.stars += add;
        stats.last_played_date = Some(today_str);
        let sessions = stats.sessions;

        let outcome = advance_streak(&mut self.state.streak, today);
        debug!(
            "award_stars: {} +{} (total {}, streak {} [{:?}])",
            subject.key(),
            add,
            self.state.stars,
            self.state.streak.count,
            outcome
        );

        let mut earned: Vec<String> = badges::star_badges(self.state.stars)
            .into_iter()
            .map(str::to_string)
            .collect();
        earned.extend(badges::session_badges(subject, sessions));
        if outcome == StreakOutcome::Continued {
            earned.extend(
                badges::streak_badges(self.state.streak.count)
                    .into_iter()
                    .map(str::to_string),
            );
        }
        for badge in earned {
            self.push_badge(badge);
        }

        self.notify();
    }

    /// Log screen time for today. Rolls the counter over on a new date.
    pub fn record_usage(&mut self, seconds: f64, today: NaiveDate) {
        let mut secs = clamp_count(seconds);
        if secs > MAX_TICK_SECONDS {
            debug!("record_usage: tick of {}s capped at {}s", secs, MAX_TICK_SECONDS);
            secs = MAX_TICK_SECONDS;
        }

        let today_str = iso_date(today);
        if self.state.daily_usage.date != today_str {
            self.state.daily_usage = DailyUsage { date: today_str, seconds_today: secs };
        } else {
            self.state.daily_usage.seconds_today += secs;
        }
        self.notify();
    }

    /// `record_usage` plus per-subject time bookkeeping for the activity
    /// screen the tick came from.
    pub fn record_usage_for(&mut self, subject: Subject, seconds: f64, today: NaiveDate) {
        let secs = clamp_count(seconds).min(MAX_TICK_SECONDS);
        self.state
            .per_subject_stats
            .entry(subject.key().to_string())
            .or_default()
            .seconds_played += secs;
        self.record_usage(seconds, today);
    }

    /// Mark an adventure level done and keep its best star count.
    ///
    /// Idempotent: re-completing adds nothing, and a worse replay never
    /// lowers the stored stars.
    pub fn complete_adventure_level(&mut self, world_id: &str, level_id: &str, stars_earned: u8) {
        let stars = stars_earned.clamp(1, 3);
        let world = self
            .state
            .adventure_progress
            .entry(world_id.to_string())
            .or_default();

        let newly_completed = !world.completed_level_ids.iter().any(|id| id == level_id);
        if newly_completed {
            world.completed_level_ids.push(level_id.to_string());
        }
        let best = world.level_stars.entry(level_id.to_string()).or_insert(0);
        *best = (*best).max(stars);

        if newly_completed {
            info!("level {} completed in world '{}' ({}★)", level_id, world_id, stars);
            // Mirror completion into the owning subject's item log.
            if let Some(subject) = subject_for_level_id(level_id) {
                let stats = self
                    .state
                    .per_subject_stats
                    .entry(subject.key().to_string())
                    .or_default();
                if !stats.completed_item_ids.iter().any(|id| id == level_id) {
                    stats.completed_item_ids.push(level_id.to_string());
                }
            }
        }

        self.notify();
    }

    // -----------------------------------------------------------------------
    // Settings operations
    // -----------------------------------------------------------------------

    /// Store a parent-gate credential (salt + digest, never the PIN).
    pub fn set_parent_pin(&mut self, salt_hex: &str, pin_hash_hex: &str) {
        self.state.parent_gate = Some(ParentGate {
            salt_hex: salt_hex.to_string(),
            pin_hash_hex: pin_hash_hex.to_string(),
        });
        self.notify();
    }

    /// Show/hide a subject on the home screen.
    pub fn toggle_focus_subject(&mut self, subject: Subject) {
        let key = subject.key();
        if let Some(pos) = self.state.focus_subjects.iter().position(|k| k == key) {
            self.state.focus_subjects.remove(pos);
        } else {
            self.state.focus_subjects.push(key.to_string());
        }
        self.notify();
    }

    pub fn set_daily_limit_minutes(&mut self, minutes: u32) {
        self.state.daily_limit_minutes = minutes;
        self.notify();
    }

    /// Wipe progress only: stars, badges, streak, stats, adventure
    /// completion, and today's usage. Parental settings — focus subjects,
    /// daily limit, and the parent gate — survive a reset.
    pub fn reset_progress(&mut self, today: NaiveDate) {
        let mut fresh = Progression::default();
        fresh.focus_subjects = std::mem::take(&mut self.state.focus_subjects);
        fresh.daily_limit_minutes = self.state.daily_limit_minutes;
        fresh.parent_gate = self.state.parent_gate.take();
        fresh.daily_usage = DailyUsage { date: iso_date(today), seconds_today: 0 };
        self.state = fresh;
        info!("progress reset");
        self.notify();
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Map-navigator gating against this store's progress.
    pub fn level_unlocked(&self, world_id: &str, level_num: u32) -> bool {
        match self.state.adventure_progress.get(world_id) {
            Some(world) => is_level_unlocked(world, level_num),
            None => level_num == 1,
        }
    }

    fn push_badge(&mut self, badge: String) {
        if !self.state.badges.iter().any(|b| *b == badge) {
            info!("badge earned: {}", badge);
            self.state.badges.push(badge);
        }
    }
}

impl Default for ProgressStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Strictly sequential unlock chain: level 1 is always open, every other
/// level opens when its predecessor is completed.
pub fn is_level_unlocked(world: &WorldProgress, level_num: u32) -> bool {
    if level_num == 1 {
        return true;
    }
    let prev = crate::level_engine::models::level_id(level_num - 1);
    world.completed_level_ids.iter().any(|id| *id == prev)
}

/// Floor to a non-negative integer; negative and non-finite input is 0.
fn clamp_count(value: f64) -> u64 {
    if value.is_finite() && value > 0.0 {
        value.floor() as u64
    } else {
        0
    }
}

fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// The subject that owns a catalog level id (`"lv42"` → its area).
fn subject_for_level_id(level_id: &str) -> Option<Subject> {
    let num: u32 = level_id.strip_prefix("lv")?.parse().ok()?;
    generator::get_level(num).map(|level| level.area)
}

/// Advance the streak machine for an activity on `today`.
fn advance_streak(streak: &mut Streak, today: NaiveDate) -> StreakOutcome {
    let today_str = iso_date(today);
    let last = NaiveDate::parse_from_str(&streak.last_active_date, "%Y-%m-%d").ok();

    match last {
        None => {
            // First activity ever — or an unreadable stored date, which
            // behaves like a broken streak.
            let outcome = if streak.last_active_date.is_empty() {
                StreakOutcome::Started
            } else {
                StreakOutcome::Restarted
            };
            streak.count = 1;
            streak.last_active_date = today_str;
            outcome
        }
        Some(last) if last == today => StreakOutcome::AlreadyCounted,
        Some(last) if last.succ_opt() == Some(today) => {
            streak.count += 1;
            streak.last_active_date = today_str;
            StreakOutcome::Continued
        }
        Some(_) => {
            streak.count = 1;
            streak.last_active_date = today_str;
            StreakOutcome::Restarted
        }
    }
}
