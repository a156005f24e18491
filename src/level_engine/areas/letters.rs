use crate::level_engine::{
    content::{theme_items, LETTERS, LETTER_WORDS},
    helpers::question,
    models::{Question, QuestionKind, Theme},
    select::{build_distractor_options, seeded_pick},
};

/// Three letter questions for one procedural level.
pub fn build(level_num: u32, theme: Theme) -> Vec<Question> {
    let n = level_num as i64;

    // q1: which letter does this word start with?
    let &(letter, word, emoji) = seeded_pick(LETTER_WORDS, n * 7 + 1);
    let correct = letter.to_string();
    let (options, correct_index) = build_distractor_options(&correct, LETTERS, n * 31 + 2, 3);
    let q1 = question(
        level_num,
        0,
        QuestionKind::PickOne,
        format!("Which letter does {} {} start with?", emoji, word),
        options,
        correct_index,
        format!("{} starts with the letter {}!", word, letter),
        Some(emoji),
    );

    // q2: alphabet order. Index capped at 24 so a successor always exists.
    let idx = (n * 11 + 3).rem_euclid(25) as usize;
    let cur = LETTERS[idx];
    let next = LETTERS[idx + 1];
    let (options, correct_index) = build_distractor_options(next, LETTERS, n * 53 + 4, 3);
    let q2 = question(
        level_num,
        1,
        QuestionKind::PickOne,
        format!("Which letter comes after {}?", cur),
        options,
        correct_index,
        format!("{} comes right after {} in the ABC song!", next, cur),
        None,
    );

    // q3: first letter of a themed word.
    let ti = seeded_pick(theme_items(theme), n * 13 + 5);
    let first = ti
        .name
        .chars()
        .next()
        .expect("theme names are never empty")
        .to_ascii_uppercase()
        .to_string();
    let (options, correct_index) = build_distractor_options(&first, LETTERS, n * 97 + 6, 3);
    let q3 = question(
        level_num,
        2,
        QuestionKind::PickOne,
        format!("Which letter does {} {} start with?", ti.emoji, ti.name),
        options,
        correct_index,
        format!("{} starts with the letter {}!", ti.name, first),
        Some(ti.emoji),
    );

    vec![q1, q2, q3]
}
