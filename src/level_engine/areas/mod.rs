//! Per-area question builders for the procedural band (levels 76–200).
//!
//! One module per subject in the generation cycle. Every builder has the
//! same signature — `build(level_num, theme) -> Vec<Question>` — and
//! produces exactly 3 questions, seeded by `level_num` with distinct
//! per-question multipliers so picks within a level stay uncorrelated.

pub mod letters;
pub mod math;
pub mod my_world;
pub mod numbers;
pub mod reading;
pub mod shapes;
