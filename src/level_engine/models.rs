use std::fmt;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Subjects
// ---------------------------------------------------------------------------

/// One of the 11 fixed content areas of the app.
///
/// The string `key()` is the stable identifier used in persisted state
/// (per-subject stats, focus subjects) and must never change once shipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Subject {
    Letters,
    Reading,
    Numbers,
    Math,
    Shapes,
    MyWorld,
    Stories,
    Rhymes,
    Art,
    SmartKids,
    Feelings,
}

/// All subjects in canonical order.
pub const ALL_SUBJECTS: [Subject; 11] = [
    Subject::Letters,
    Subject::Reading,
    Subject::Numbers,
    Subject::Math,
    Subject::Shapes,
    Subject::MyWorld,
    Subject::Stories,
    Subject::Rhymes,
    Subject::Art,
    Subject::SmartKids,
    Subject::Feelings,
];

impl Subject {
    /// Stable storage key.
    pub fn key(self) -> &'static str {
        match self {
            Subject::Letters   => "letters",
            Subject::Reading   => "reading",
            Subject::Numbers   => "numbers",
            Subject::Math      => "math",
            Subject::Shapes    => "shapes",
            Subject::MyWorld   => "my-world",
            Subject::Stories   => "stories",
            Subject::Rhymes    => "rhymes",
            Subject::Art       => "art",
            Subject::SmartKids => "smart-kids",
            Subject::Feelings  => "feelings",
        }
    }

    /// Child-facing display label.
    pub fn label(self) -> &'static str {
        match self {
            Subject::Letters   => "Letters",
            Subject::Reading   => "Reading",
            Subject::Numbers   => "Numbers",
            Subject::Math      => "Math",
            Subject::Shapes    => "Shapes",
            Subject::MyWorld   => "My World",
            Subject::Stories   => "Stories",
            Subject::Rhymes    => "Rhymes",
            Subject::Art       => "Art",
            Subject::SmartKids => "Smart Kids",
            Subject::Feelings  => "Feelings",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Subject::Letters   => "🔤",
            Subject::Reading   => "📖",
            Subject::Numbers   => "🔢",
            Subject::Math      => "➕",
            Subject::Shapes    => "🔷",
            Subject::MyWorld   => "🌍",
            Subject::Stories   => "📚",
            Subject::Rhymes    => "🎵",
            Subject::Art       => "🎨",
            Subject::SmartKids => "💡",
            Subject::Feelings  => "💛",
        }
    }

    /// Map tile color for this subject's levels.
    pub fn color(self) -> &'static str {
        match self {
            Subject::Letters   => "#f97316",
            Subject::Reading   => "#8b5cf6",
            Subject::Numbers   => "#0ea5e9",
            Subject::Math      => "#22c55e",
            Subject::Shapes    => "#ec4899",
            Subject::MyWorld   => "#14b8a6",
            Subject::Stories   => "#a855f7",
            Subject::Rhymes    => "#f43f5e",
            Subject::Art       => "#eab308",
            Subject::SmartKids => "#6366f1",
            Subject::Feelings  => "#fb7185",
        }
    }

    /// Look up a subject by its storage key.
    pub fn from_key(key: &str) -> Option<Subject> {
        ALL_SUBJECTS.iter().copied().find(|s| s.key() == key)
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ---------------------------------------------------------------------------
// Themes
// ---------------------------------------------------------------------------

/// Content theme for the procedural band (levels 76–200).
///
/// Each theme owns a closed, ordered range of level numbers; the ranges
/// have no gaps and no overlaps (see `generator::theme_for_level`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    Animals,
    Shapes,
    Festivals,
    Bengal,
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Theme::Animals   => "animals",
            Theme::Shapes    => "shapes",
            Theme::Festivals => "festivals",
            Theme::Bengal    => "bengal",
        };
        write!(f, "{}", s)
    }
}

// ---------------------------------------------------------------------------
// Questions and levels
// ---------------------------------------------------------------------------

/// Rendering hint only — grading is always "selected index == correct_index".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionKind {
    PickOne,
    PickEmoji,
    TrueFalse,
}

/// One quiz prompt.
///
/// Invariants (enforced at construction in `helpers::question`):
/// `options` has ≥ 2 entries with no duplicates, `correct_index` is in
/// range, and `options[correct_index]` is the intended correct answer.
/// Option order is meaningful and must never be re-sorted — the index
/// identifies the answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub kind: QuestionKind,
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_index: usize,
    pub explanation: String,
    pub emoji: Option<String>,
}

/// Star/sticker/badge payout attached to a level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reward {
    /// Base stars for finishing the level (1–3).
    pub stars: u8,
    /// Sticker emoji, present on every 5th level.
    pub sticker: Option<String>,
    /// Milestone badge name, present on milestone levels only.
    pub badge: Option<String>,
}

/// One unit of the adventure-map progression.
///
/// Levels are derived — a pure function of `level_num` — and are never
/// persisted; progress is keyed by `id` and stays meaningful across
/// reloads because regeneration is deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    pub id: String,
    pub level_num: u32,
    pub title: String,
    pub emoji: String,
    pub area: Subject,
    pub area_label: String,
    pub area_color: String,
    pub questions: Vec<Question>,
    pub reward: Reward,
}

/// Canonical level id for a level number (`lv1`, `lv2`, …).
pub fn level_id(level_num: u32) -> String {
    format!("lv{}", level_num)
}
