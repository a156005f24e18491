//! Unit tests for the `adventure_quiz_gen` crate.
//!
//! Included from `lib.rs` under `#[cfg(test)]`.
//!
//! # Coverage
//!
//! | Group | What is tested |
//! |-------|----------------|
//! | Determinism | Same level number → byte-identical level, every time |
//! | Catalog | Exactly 200 levels, contiguous numbering, id format |
//! | Option integrity | No duplicate options; correct index always in range |
//! | Themes & areas | Closed theme bands; 6-subject rotation in the procedural band |
//! | Rewards | Stickers on every 5th level; milestone badges; star bounds |
//! | Store | Clamping, badges, streak transitions, usage rollover, reset scope |
//! | Completion | Idempotent completion, best-of stars, unlock gating |
//! | Persistence | Round trip through the versioned save document |

use chrono::NaiveDate;

use crate::level_engine::{
    generator::{AREA_CYCLE, CURRICULUM_END, MAX_LEVEL},
    get_all_levels, get_level, theme_for_level,
    models::{level_id, Subject, Theme},
};
use crate::progression::{
    from_json, is_level_unlocked, to_json,
    state::{Progression, Streak},
    ProgressStore, CANDY_WORLD,
};

// ── helpers ──────────────────────────────────────────────────────────────────

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("test dates are well-formed")
}

/// A store whose streak is pre-seeded, for transition-table tests.
fn store_with_streak(count: u32, last_active_date: &str) -> ProgressStore {
    let mut state = Progression::default();
    state.streak = Streak { count, last_active_date: last_active_date.to_string() };
    ProgressStore::from_state(state)
}

// ── determinism ──────────────────────────────────────────────────────────────

#[test]
fn every_level_regenerates_identically() {
    for n in 1..=MAX_LEVEL {
        let a = get_level(n).expect("level in catalog range");
        let b = get_level(n).expect("level in catalog range");
        assert_eq!(a, b, "level {n} is not deterministic");
    }
}

#[test]
fn same_subject_levels_vary_across_the_band() {
    // Levels 6 apart share a subject builder. Identical content for a pair
    // is possible in principle, but the band must not collapse into
    // repeats.
    let mut identical = 0usize;
    for n in (CURRICULUM_END + 1)..=(MAX_LEVEL - 6) {
        let a = get_level(n).unwrap();
        let b = get_level(n + 6).unwrap();
        if a.questions == b.questions {
            identical += 1;
        }
    }
    assert!(identical < 10, "too many identical same-subject levels ({identical})");
}

// ── catalog shape ────────────────────────────────────────────────────────────

#[test]
fn catalog_is_contiguous_from_1_to_200() {
    let levels = get_all_levels();
    assert_eq!(levels.len(), 200);
    for (i, level) in levels.iter().enumerate() {
        assert_eq!(level.level_num, i as u32 + 1, "gap or duplicate at index {i}");
        assert_eq!(level.id, level_id(level.level_num));
    }
}

#[test]
fn out_of_range_levels_are_absent() {
    assert!(get_level(0).is_none());
    assert!(get_level(MAX_LEVEL + 1).is_none());
    assert!(get_level(9999).is_none());
}

#[test]
fn every_level_has_3_to_5_questions_with_unique_ids() {
    for level in get_all_levels() {
        let n = level.level_num;
        assert!(
            (3..=5).contains(&level.questions.len()),
            "level {n} has {} questions",
            level.questions.len()
        );
        let mut seen = std::collections::HashSet::new();
        for q in &level.questions {
            assert!(q.id.starts_with(&format!("lv{n}-q")), "bad question id {}", q.id);
            assert!(seen.insert(q.id.clone()), "duplicate question id {} in level {n}", q.id);
        }
    }
}

// ── option integrity ─────────────────────────────────────────────────────────

#[test]
fn no_question_has_duplicate_options_or_bad_index() {
    for level in get_all_levels() {
        for q in &level.questions {
            assert!(
                q.options.len() >= 2,
                "{}: fewer than 2 options",
                q.id
            );
            assert!(
                q.correct_index < q.options.len(),
                "{}: correct_index {} out of range",
                q.id,
                q.correct_index
            );
            let mut seen = std::collections::HashSet::new();
            for opt in &q.options {
                assert!(!opt.is_empty(), "{}: empty option", q.id);
                assert!(seen.insert(opt.clone()), "{}: duplicate option '{opt}'", q.id);
            }
            assert!(!q.prompt.is_empty(), "{}: empty prompt", q.id);
            assert!(!q.explanation.is_empty(), "{}: empty explanation", q.id);
        }
    }
}

// ── themes and areas ─────────────────────────────────────────────────────────

#[test]
fn theme_bands_are_closed_and_ordered() {
    for n in (CURRICULUM_END + 1)..=MAX_LEVEL {
        let expected = match n {
            76..=110 => Theme::Animals,
            111..=145 => Theme::Shapes,
            146..=175 => Theme::Festivals,
            _ => Theme::Bengal,
        };
        assert_eq!(theme_for_level(n), expected, "wrong theme for level {n}");
    }
    // Band edges.
    assert_eq!(theme_for_level(110), Theme::Animals);
    assert_eq!(theme_for_level(111), Theme::Shapes);
    assert_eq!(theme_for_level(145), Theme::Shapes);
    assert_eq!(theme_for_level(146), Theme::Festivals);
    assert_eq!(theme_for_level(175), Theme::Festivals);
    assert_eq!(theme_for_level(176), Theme::Bengal);
    assert_eq!(theme_for_level(200), Theme::Bengal);
}

#[test]
fn procedural_band_follows_the_subject_cycle() {
    for n in (CURRICULUM_END + 1)..=MAX_LEVEL {
        let level = get_level(n).unwrap();
        let expected = AREA_CYCLE[(n as usize - 1) % AREA_CYCLE.len()];
        assert_eq!(level.area, expected, "wrong area for level {n}");
        assert_eq!(level.area_label, expected.label());
        assert_eq!(level.area_color, expected.color());
    }
}

#[test]
fn curriculum_covers_all_11_subjects() {
    let mut seen = std::collections::HashSet::new();
    for n in 1..=CURRICULUM_END {
        seen.insert(get_level(n).unwrap().area);
    }
    assert_eq!(seen.len(), 11, "hand-authored levels miss a subject");
}

// ── rewards ──────────────────────────────────────────────────────────────────

#[test]
fn stickers_appear_on_every_5th_level_only() {
    for level in get_all_levels() {
        if level.level_num % 5 == 0 {
            assert!(level.reward.sticker.is_some(), "level {} misses its sticker", level.level_num);
        } else {
            assert!(level.reward.sticker.is_none(), "level {} has a stray sticker", level.level_num);
        }
    }
}

#[test]
fn milestone_badges_sit_at_band_ends() {
    let milestones = [110u32, 145, 175, 200];
    for level in get_all_levels() {
        if milestones.contains(&level.level_num) {
            assert!(level.reward.badge.is_some(), "level {} misses its badge", level.level_num);
        } else {
            assert!(level.reward.badge.is_none(), "level {} has a stray badge", level.level_num);
        }
    }
}

#[test]
fn reward_stars_stay_in_bounds() {
    for level in get_all_levels() {
        assert!((1..=3).contains(&level.reward.stars), "level {}", level.level_num);
        if level.level_num > CURRICULUM_END {
            assert_eq!(level.reward.stars, 1, "procedural levels grant 1 base star");
        }
    }
}

// ── store: award_stars and clamping ──────────────────────────────────────────

#[test]
fn award_stars_clamps_bad_input_to_zero() {
    let today = date("2024-01-01");
    let mut store = ProgressStore::new();
    store.award_stars(Subject::Letters, -5.0, today);
    store.award_stars(Subject::Letters, f64::NAN, today);
    store.award_stars(Subject::Letters, f64::INFINITY, today);
    store.award_stars(Subject::Letters, 2.9, today);
    assert_eq!(store.state().stars, 2, "only the floored 2.9 counts");
    assert_eq!(store.state().per_subject_stats["letters"].sessions, 4);
}

#[test]
fn award_stars_updates_subject_stats() {
    let today = date("2024-03-10");
    let mut store = ProgressStore::new();
    store.award_stars(Subject::Math, 3.0, today);
    let stats = &store.state().per_subject_stats["math"];
    assert_eq!(stats.sessions, 1);
    assert_eq!(stats.stars, 3);
    assert_eq!(stats.last_played_date.as_deref(), Some("2024-03-10"));
    assert_eq!(store.state().stars, 3);
}

// ── store: badges ────────────────────────────────────────────────────────────

#[test]
fn first_star_and_first_play_badges_arrive_together() {
    let mut store = ProgressStore::new();
    store.award_stars(Subject::Shapes, 1.0, date("2024-01-01"));
    let badges = &store.state().badges;
    assert!(badges.iter().any(|b| b == "First Star"));
    assert!(badges.iter().any(|b| b == "First Shapes play"));
}

#[test]
fn star_collector_appends_exactly_once() {
    let today = date("2024-01-01");
    let mut store = ProgressStore::new();
    store.award_stars(Subject::Letters, 9.0, today);
    assert!(!store.state().badges.iter().any(|b| b == "Star Collector"));
    store.award_stars(Subject::Letters, 1.0, today);
    let count = |s: &ProgressStore| {
        s.state().badges.iter().filter(|b| *b == "Star Collector").count()
    };
    assert_eq!(count(&store), 1);
    // A later no-op award must not duplicate it.
    store.award_stars(Subject::Letters, 0.0, today);
    assert_eq!(count(&store), 1);
}

#[test]
fn streak_badge_is_earned_on_the_third_consecutive_day() {
    let mut store = ProgressStore::new();
    store.award_stars(Subject::Letters, 1.0, date("2024-05-01"));
    store.award_stars(Subject::Letters, 1.0, date("2024-05-02"));
    assert!(!store.state().badges.iter().any(|b| b == "3-day streak"));
    store.award_stars(Subject::Letters, 1.0, date("2024-05-03"));
    assert_eq!(store.state().streak.count, 3);
    assert!(store.state().badges.iter().any(|b| b == "3-day streak"));
}

#[test]
fn restarting_a_streak_does_not_grant_streak_badges() {
    // Pre-seeded count of 5 with a stale date: the next activity restarts
    // at 1 and must not hand out the 3-day badge.
    let mut store = store_with_streak(5, "2024-01-01");
    store.award_stars(Subject::Letters, 1.0, date("2024-02-01"));
    assert_eq!(store.state().streak.count, 1);
    assert!(!store.state().badges.iter().any(|b| b.ends_with("day streak")));
}

// ── store: streak transition table ───────────────────────────────────────────

#[test]
fn streak_continues_on_the_next_day() {
    let mut store = store_with_streak(4, "2024-01-01");
    store.award_stars(Subject::Letters, 1.0, date("2024-01-02"));
    assert_eq!(store.state().streak.count, 5);
    assert_eq!(store.state().streak.last_active_date, "2024-01-02");
}

#[test]
fn streak_is_unchanged_on_a_repeat_day() {
    let mut store = store_with_streak(4, "2024-01-01");
    store.award_stars(Subject::Letters, 1.0, date("2024-01-01"));
    assert_eq!(store.state().streak.count, 4);
    assert_eq!(store.state().streak.last_active_date, "2024-01-01");
}

#[test]
fn streak_restarts_after_a_gap() {
    let mut store = store_with_streak(4, "2024-01-01");
    store.award_stars(Subject::Letters, 1.0, date("2024-01-05"));
    assert_eq!(store.state().streak.count, 1);
    assert_eq!(store.state().streak.last_active_date, "2024-01-05");
}

#[test]
fn streak_starts_at_one_on_first_activity() {
    let mut store = ProgressStore::new();
    store.award_stars(Subject::Letters, 1.0, date("2024-01-01"));
    assert_eq!(store.state().streak.count, 1);
}

#[test]
fn streak_handles_a_month_boundary() {
    let mut store = store_with_streak(2, "2024-01-31");
    store.award_stars(Subject::Letters, 1.0, date("2024-02-01"));
    assert_eq!(store.state().streak.count, 3);
}

// ── store: usage ─────────────────────────────────────────────────────────────

#[test]
fn usage_accumulates_within_a_day_and_resets_across_days() {
    let mut store = ProgressStore::new();
    store.record_usage(5.0, date("2024-01-01"));
    store.record_usage(5.0, date("2024-01-01"));
    assert_eq!(store.state().daily_usage.seconds_today, 10);
    assert_eq!(store.state().daily_usage.date, "2024-01-01");

    store.record_usage(7.0, date("2024-01-02"));
    assert_eq!(store.state().daily_usage.seconds_today, 7);
    assert_eq!(store.state().daily_usage.date, "2024-01-02");
}

#[test]
fn usage_clamps_negative_and_caps_stalled_ticks() {
    let mut store = ProgressStore::new();
    store.record_usage(-30.0, date("2024-01-01"));
    assert_eq!(store.state().daily_usage.seconds_today, 0);
    store.record_usage(1_000_000.0, date("2024-01-01"));
    assert_eq!(store.state().daily_usage.seconds_today, 3600);
}

#[test]
fn usage_for_a_subject_also_books_subject_time() {
    let mut store = ProgressStore::new();
    store.record_usage_for(Subject::Rhymes, 5.0, date("2024-01-01"));
    assert_eq!(store.state().per_subject_stats["rhymes"].seconds_played, 5);
    assert_eq!(store.state().daily_usage.seconds_today, 5);
}

// ── store: completion and unlock gating ──────────────────────────────────────

#[test]
fn completion_is_idempotent() {
    let mut store = ProgressStore::new();
    store.complete_adventure_level(CANDY_WORLD, "lv1", 2);
    store.complete_adventure_level(CANDY_WORLD, "lv1", 2);
    let world = &store.state().adventure_progress[CANDY_WORLD];
    assert_eq!(
        world.completed_level_ids.iter().filter(|id| *id == "lv1").count(),
        1
    );
}

#[test]
fn level_stars_keep_the_best_result() {
    let mut store = ProgressStore::new();
    store.complete_adventure_level(CANDY_WORLD, "lv4", 2);
    store.complete_adventure_level(CANDY_WORLD, "lv4", 1);
    let world = &store.state().adventure_progress[CANDY_WORLD];
    assert_eq!(world.level_stars["lv4"], 2, "a worse replay must not regress");
    store.complete_adventure_level(CANDY_WORLD, "lv4", 3);
    let world = &store.state().adventure_progress[CANDY_WORLD];
    assert_eq!(world.level_stars["lv4"], 3);
}

#[test]
fn completion_mirrors_into_the_subject_item_log() {
    let mut store = ProgressStore::new();
    let area = get_level(1).unwrap().area;
    store.complete_adventure_level(CANDY_WORLD, "lv1", 3);
    store.complete_adventure_level(CANDY_WORLD, "lv1", 3);
    let stats = &store.state().per_subject_stats[area.key()];
    assert_eq!(stats.completed_item_ids, vec!["lv1".to_string()]);
}

#[test]
fn unlock_chain_is_strictly_sequential() {
    let mut store = ProgressStore::new();
    assert!(store.level_unlocked(CANDY_WORLD, 1));
    assert!(!store.level_unlocked(CANDY_WORLD, 2));

    store.complete_adventure_level(CANDY_WORLD, "lv1", 1);
    assert!(store.level_unlocked(CANDY_WORLD, 2));
    assert!(!store.level_unlocked(CANDY_WORLD, 3));

    let world = &store.state().adventure_progress[CANDY_WORLD];
    assert!(is_level_unlocked(world, 1));
    assert!(is_level_unlocked(world, 2));
    assert!(!is_level_unlocked(world, 3));
}

// ── store: settings and reset ────────────────────────────────────────────────

#[test]
fn toggle_focus_subject_is_a_symmetric_difference() {
    let mut store = ProgressStore::new();
    assert!(store.state().focus_subjects.iter().any(|k| k == "art"));
    store.toggle_focus_subject(Subject::Art);
    assert!(!store.state().focus_subjects.iter().any(|k| k == "art"));
    store.toggle_focus_subject(Subject::Art);
    assert!(store.state().focus_subjects.iter().any(|k| k == "art"));
}

#[test]
fn set_parent_pin_overwrites_unconditionally() {
    let mut store = ProgressStore::new();
    assert!(store.state().parent_gate.is_none());
    store.set_parent_pin("aa", "hash-one");
    store.set_parent_pin("bb", "hash-two");
    let gate = store.state().parent_gate.as_ref().unwrap();
    assert_eq!(gate.salt_hex, "bb");
    assert_eq!(gate.pin_hash_hex, "hash-two");
}

#[test]
fn reset_clears_progress_but_keeps_parental_settings() {
    let today = date("2024-06-01");
    let mut store = ProgressStore::new();
    store.award_stars(Subject::Numbers, 5.0, today);
    store.complete_adventure_level(CANDY_WORLD, "lv1", 2);
    store.record_usage(30.0, today);
    store.toggle_focus_subject(Subject::Stories);
    store.set_daily_limit_minutes(45);
    store.set_parent_pin("salt", "hash");

    store.reset_progress(date("2024-06-02"));

    let state = store.state();
    assert_eq!(state.stars, 0);
    assert!(state.badges.is_empty());
    assert_eq!(state.streak.count, 0);
    assert!(state.adventure_progress.is_empty());
    assert_eq!(state.per_subject_stats["numbers"].sessions, 0);
    assert_eq!(state.daily_usage.date, "2024-06-02");
    assert_eq!(state.daily_usage.seconds_today, 0);

    // Parental settings survive.
    assert!(!state.focus_subjects.iter().any(|k| k == "stories"));
    assert_eq!(state.daily_limit_minutes, 45);
    assert!(state.parent_gate.is_some());
}

// ── store: on-change notification ────────────────────────────────────────────

#[test]
fn every_mutation_fires_the_on_change_callback() {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    let fired = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&fired);

    let mut store = ProgressStore::new();
    store.set_on_change(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    let today = date("2024-01-01");
    store.award_stars(Subject::Letters, 1.0, today);
    store.record_usage(5.0, today);
    store.complete_adventure_level(CANDY_WORLD, "lv1", 1);
    store.set_daily_limit_minutes(30);
    store.reset_progress(today);
    assert_eq!(fired.load(Ordering::SeqCst), 5);
}

// ── persistence ──────────────────────────────────────────────────────────────

#[test]
fn store_state_survives_a_save_load_cycle() {
    let today = date("2024-04-04");
    let mut store = ProgressStore::new();
    store.award_stars(Subject::Feelings, 2.0, today);
    store.complete_adventure_level(CANDY_WORLD, "lv1", 3);
    store.record_usage(12.0, today);

    let restored = from_json(&to_json(store.state())).expect("own documents always load");
    assert_eq!(&restored, store.state());
}
