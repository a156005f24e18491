//! Shared assembly functions used by the curriculum and every area builder.
//!
//! Each builder produces the same pieces: question records with checked
//! invariants, reward payouts, and the final [`Level`] struct. Centralising
//! that here keeps the builder files focused on content.

use crate::level_engine::content::STICKERS;
use crate::level_engine::models::{level_id, Level, Question, QuestionKind, Reward, Subject};

/// Build one question, enforcing the option-list invariants.
///
/// Panics in debug builds when a builder produces a malformed option list;
/// the content tables make that unreachable in practice.
pub fn question(
    level_num: u32,
    index: usize,
    kind: QuestionKind,
    prompt: impl Into<String>,
    options: Vec<String>,
    correct_index: usize,
    explanation: impl Into<String>,
    emoji: Option<&str>,
) -> Question {
    debug_assert!(options.len() >= 2, "lv{level_num}-q{index}: needs at least 2 options");
    debug_assert!(
        correct_index < options.len(),
        "lv{level_num}-q{index}: correct_index out of range"
    );
    debug_assert!(
        options.iter().all(|a| options.iter().filter(|b| *b == a).count() == 1),
        "lv{level_num}-q{index}: duplicate options"
    );

    Question {
        id: format!("lv{}-q{}", level_num, index + 1),
        kind,
        prompt: prompt.into(),
        options,
        correct_index,
        explanation: explanation.into(),
        emoji: emoji.map(str::to_string),
    }
}

/// Sticker payout: every 5th level earns one, cycled through the table.
pub fn sticker_for(level_num: u32) -> Option<String> {
    if level_num % 5 == 0 {
        let idx = (level_num / 5 - 1) as usize % STICKERS.len();
        Some(STICKERS[idx].to_string())
    } else {
        None
    }
}

/// Milestone badge payout at the end of each theme band.
pub fn milestone_badge(level_num: u32) -> Option<String> {
    let name = match level_num {
        110 => "Animal Explorer",
        145 => "Shape Wizard",
        175 => "Festival Star",
        200 => "Bengal Champion",
        _ => return None,
    };
    Some(name.to_string())
}

/// Assemble the final [`Level`] from its parts.
///
/// The last call in the curriculum and in the procedural dispatch — fills
/// in the id, per-subject display metadata, and the reward payout.
pub fn level(
    level_num: u32,
    title: impl Into<String>,
    emoji: impl Into<String>,
    area: Subject,
    questions: Vec<Question>,
) -> Level {
    debug_assert!(
        (3..=5).contains(&questions.len()),
        "lv{level_num}: a level holds 3–5 questions"
    );

    Level {
        id: level_id(level_num),
        level_num,
        title: title.into(),
        emoji: emoji.into(),
        area,
        area_label: area.label().to_string(),
        area_color: area.color().to_string(),
        questions,
        reward: Reward {
            stars: 1,
            sticker: sticker_for(level_num),
            badge: milestone_badge(level_num),
        },
    }
}
