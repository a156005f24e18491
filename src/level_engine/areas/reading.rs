use crate::level_engine::{
    content::{theme_items, RHYME_FAMILIES, SIGHT_WORDS},
    helpers::question,
    models::{Question, QuestionKind, Theme},
    select::{build_distractor_options, seeded_pick},
};

/// Filler words guaranteed not to rhyme with any base in `RHYME_FAMILIES`.
const ODD_WORDS: &[&str] = &["tree", "milk", "star", "book", "fish", "hand", "door", "cup"];

/// Three reading questions for one procedural level.
pub fn build(level_num: u32, theme: Theme) -> Vec<Question> {
    let n = level_num as i64;

    // q1: sight-word recognition (the prompt is read aloud by the host).
    let word = *seeded_pick(SIGHT_WORDS, n * 17 + 1);
    let (options, correct_index) = build_distractor_options(word, SIGHT_WORDS, n * 31 + 2, 3);
    let q1 = question(
        level_num,
        0,
        QuestionKind::PickOne,
        format!("Find the word '{}'.", word),
        options,
        correct_index,
        format!("You read the word '{}'!", word),
        None,
    );

    // q2: match the themed picture to its word.
    let items = theme_items(theme);
    let ti = seeded_pick(items, n * 19 + 3);
    let names: Vec<&str> = items.iter().map(|t| t.name).collect();
    let (options, correct_index) = build_distractor_options(ti.name, &names, n * 53 + 4, 3);
    let q2 = question(
        level_num,
        1,
        QuestionKind::PickOne,
        format!("Which word goes with this picture? {}", ti.emoji),
        options,
        correct_index,
        format!("{} is {}!", ti.emoji, ti.name),
        Some(ti.emoji),
    );

    // q3: rhymes.
    let &(base, rhymes) = seeded_pick(RHYME_FAMILIES, n * 23 + 5);
    let rhyme = *seeded_pick(rhymes, n * 29 + 6);
    let (options, correct_index) = build_distractor_options(rhyme, ODD_WORDS, n * 97 + 7, 3);
    let q3 = question(
        level_num,
        2,
        QuestionKind::PickOne,
        format!("Which word rhymes with '{}'?", base),
        options,
        correct_index,
        format!("'{}' and '{}' rhyme — they end with the same sound!", base, rhyme),
        None,
    );

    vec![q1, q2, q3]
}
