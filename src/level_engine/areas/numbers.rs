use crate::level_engine::{
    content::{theme_items, NUMBER_WORDS},
    helpers::question,
    models::{Question, QuestionKind, Theme},
    select::{build_distractor_options, seeded_pick},
};

/// Digit strings 1–20 as an answer-option pool.
fn digit_pool(max: u32) -> Vec<String> {
    (1..=max).map(|v| v.to_string()).collect()
}

/// Three number questions for one procedural level.
pub fn build(level_num: u32, theme: Theme) -> Vec<Question> {
    let n = level_num as i64;

    // q1: count the themed pictures (2–8 of them).
    let count = ((n * 5 + 2).rem_euclid(7) + 2) as u32;
    let ti = seeded_pick(theme_items(theme), n * 11 + 1);
    let correct = count.to_string();
    let pool = digit_pool(9);
    let pool_refs: Vec<&str> = pool.iter().map(String::as_str).collect();
    let (options, correct_index) = build_distractor_options(&correct, &pool_refs, n * 31 + 2, 3);
    let q1 = question(
        level_num,
        0,
        QuestionKind::PickOne,
        format!("How many {} do you see? {}", ti.emoji, ti.emoji.repeat(count as usize)),
        options,
        correct_index,
        format!("Count them one by one — there are {}!", count),
        Some(ti.emoji),
    );

    // q2: what comes after?
    let k = ((n * 13 + 4).rem_euclid(19) + 1) as u32;
    let correct = (k + 1).to_string();
    let pool = digit_pool(20);
    let pool_refs: Vec<&str> = pool.iter().map(String::as_str).collect();
    let (options, correct_index) = build_distractor_options(&correct, &pool_refs, n * 53 + 5, 3);
    let q2 = question(
        level_num,
        1,
        QuestionKind::PickOne,
        format!("What number comes after {}?", k),
        options,
        correct_index,
        format!("{} comes right after {}!", k + 1, k),
        None,
    );

    // q3: number words.
    let v = ((n * 17 + 6).rem_euclid(10) + 1) as usize;
    let word = NUMBER_WORDS[v];
    let correct = v.to_string();
    let pool = digit_pool(12);
    let pool_refs: Vec<&str> = pool.iter().map(String::as_str).collect();
    let (options, correct_index) = build_distractor_options(&correct, &pool_refs, n * 97 + 7, 3);
    let q3 = question(
        level_num,
        2,
        QuestionKind::PickOne,
        format!("Which number is '{}'?", word),
        options,
        correct_index,
        format!("'{}' is the number {}!", word, v),
        None,
    );

    vec![q1, q2, q3]
}
