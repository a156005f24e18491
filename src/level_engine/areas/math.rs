use crate::level_engine::{
    content::theme_items,
    helpers::question,
    models::{Question, QuestionKind, Theme},
    select::{build_distractor_options, seeded_pick},
};

fn answer_pool(max: u32) -> Vec<String> {
    (0..=max).map(|v| v.to_string()).collect()
}

/// Three arithmetic questions for one procedural level.
pub fn build(level_num: u32, theme: Theme) -> Vec<Question> {
    let n = level_num as i64;

    // q1: addition within 10.
    let a = ((n * 7 + 1).rem_euclid(5) + 1) as u32;
    let b = ((n * 11 + 3).rem_euclid(4) + 1) as u32;
    let correct = (a + b).to_string();
    let pool = answer_pool(12);
    let pool_refs: Vec<&str> = pool.iter().map(String::as_str).collect();
    let (options, correct_index) = build_distractor_options(&correct, &pool_refs, n * 31 + 2, 3);
    let q1 = question(
        level_num,
        0,
        QuestionKind::PickOne,
        format!("{} + {} = ?", a, b),
        options,
        correct_index,
        format!("{} plus {} makes {}!", a, b, a + b),
        None,
    );

    // q2: subtraction, minuend always bigger than the subtrahend.
    let c = ((n * 13 + 2).rem_euclid(5) + 4) as u32;
    let d = ((n * 5 + 1).rem_euclid(3) + 1) as u32;
    let correct = (c - d).to_string();
    let pool = answer_pool(10);
    let pool_refs: Vec<&str> = pool.iter().map(String::as_str).collect();
    let (options, correct_index) = build_distractor_options(&correct, &pool_refs, n * 53 + 4, 3);
    let q2 = question(
        level_num,
        1,
        QuestionKind::PickOne,
        format!("{} - {} = ?", c, d),
        options,
        correct_index,
        format!("Take {} away from {} and {} are left!", d, c, c - d),
        None,
    );

    // q3: themed story sum.
    let ti = seeded_pick(theme_items(theme), n * 19 + 5);
    let x = ((n * 4 + 2).rem_euclid(3) + 1) as u32;
    let y = ((n * 7 + 5).rem_euclid(3) + 1) as u32;
    let correct = (x + y).to_string();
    let pool = answer_pool(8);
    let pool_refs: Vec<&str> = pool.iter().map(String::as_str).collect();
    let (options, correct_index) = build_distractor_options(&correct, &pool_refs, n * 97 + 6, 3);
    let q3 = question(
        level_num,
        2,
        QuestionKind::PickOne,
        format!(
            "There are {} {}. Then {} more come along. How many {} in all?",
            x, ti.emoji, y, ti.emoji
        ),
        options,
        correct_index,
        format!("{} and {} more make {} together!", x, y, x + y),
        Some(ti.emoji),
    );

    vec![q1, q2, q3]
}
