//! Core level engine — content tables, seeded selection, and the 200-level
//! adventure-map catalog.
//!
//! ## Module overview
//!
//! | Module       | Purpose |
//! |--------------|---------|
//! | `models`     | All shared types: subjects, themes, questions, levels, rewards |
//! | `select`     | Seeded shuffle/pick/distractor utilities — determinism lives here |
//! | `content`    | Static content tables: letters, words, shapes, themed facts |
//! | `curriculum` | Hand-authored levels 1–75, verbatim lookup |
//! | `areas`      | Six per-subject question builders for the procedural band |
//! | `helpers`    | Shared question/level assembly and reward payouts |
//! | `generator`  | Entry points `get_level()` / `get_all_levels()` — dispatch |

pub mod areas;
pub mod content;
pub mod curriculum;
pub mod generator;
pub mod helpers;
pub mod models;
pub mod select;

// Re-export the public API surface so callers can use
// `level_engine::get_level` without reaching into sub-modules.
pub use generator::{get_all_levels, get_level, theme_for_level, AREA_CYCLE, CURRICULUM_END, MAX_LEVEL};
pub use models::{level_id, Level, Question, QuestionKind, Reward, Subject, Theme, ALL_SUBJECTS};
