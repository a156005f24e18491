use crate::level_engine::{
    content::{theme_items, ThemeItem},
    helpers::question,
    models::{Question, QuestionKind, Theme},
    select::{build_distractor_options, seeded_pick},
};

/// A short statement connecting a themed thing to its `tag`.
fn statement(theme: Theme, item: &ThemeItem, tag: &str) -> String {
    match theme {
        Theme::Animals   => format!("A {} says {}.", item.name.to_lowercase(), tag),
        Theme::Shapes    => format!("A {} looks like a {}.", item.name.to_lowercase(), tag),
        Theme::Festivals => format!("{} is {}.", item.name, tag),
        Theme::Bengal    => format!("{} is {}.", item.name, tag),
    }
}

/// Three my-world questions for one procedural level.
pub fn build(level_num: u32, theme: Theme) -> Vec<Question> {
    let n = level_num as i64;
    let items = theme_items(theme);

    // q1: spot the picture.
    let ti = seeded_pick(items, n * 7 + 1);
    let emojis: Vec<&str> = items.iter().map(|t| t.emoji).collect();
    let (options, correct_index) = build_distractor_options(ti.emoji, &emojis, n * 31 + 2, 3);
    let q1 = question(
        level_num,
        0,
        QuestionKind::PickEmoji,
        format!("Which one is the {}?", ti.name.to_lowercase()),
        options,
        correct_index,
        format!("{} is the {}!", ti.emoji, ti.name.to_lowercase()),
        None,
    );

    // q2: match the thing to its tag (sound, shape, or story).
    let ti = seeded_pick(items, n * 11 + 3);
    let tags: Vec<&str> = items.iter().map(|t| t.tag).collect();
    let q2 = match theme {
        Theme::Animals => {
            let (options, correct_index) =
                build_distractor_options(ti.tag, &tags, n * 53 + 4, 3);
            question(
                level_num,
                1,
                QuestionKind::PickOne,
                format!("What sound does a {} make? {}", ti.name.to_lowercase(), ti.emoji),
                options,
                correct_index,
                format!("A {} says {}!", ti.name.to_lowercase(), ti.tag),
                Some(ti.emoji),
            )
        }
        Theme::Shapes => {
            let (options, correct_index) =
                build_distractor_options(ti.tag, &tags, n * 53 + 4, 3);
            question(
                level_num,
                1,
                QuestionKind::PickOne,
                format!("What shape is a {}? {}", ti.name.to_lowercase(), ti.emoji),
                options,
                correct_index,
                format!("A {} is shaped like a {}!", ti.name.to_lowercase(), ti.tag),
                Some(ti.emoji),
            )
        }
        Theme::Festivals | Theme::Bengal => {
            // Reverse lookup: the tag is in the prompt, the names are options.
            // No emoji on this one — it would give the answer away.
            let names: Vec<&str> = items.iter().map(|t| t.name).collect();
            let (options, correct_index) =
                build_distractor_options(ti.name, &names, n * 53 + 4, 3);
            question(
                level_num,
                1,
                QuestionKind::PickOne,
                format!("Which one is {}?", ti.tag),
                options,
                correct_index,
                format!("{} {} is {}!", ti.emoji, ti.name, ti.tag),
                None,
            )
        }
    };

    // q3: true or false. A false statement borrows the tag of a different item.
    let ti = seeded_pick(items, n * 13 + 5);
    let truthy = (n * 17 + 7).rem_euclid(2) == 0;
    let shown_tag = if truthy {
        ti.tag
    } else {
        let start = (n * 19 + 8).rem_euclid(items.len() as i64) as usize;
        (0..items.len())
            .map(|off| items[(start + off) % items.len()].tag)
            .find(|t| *t != ti.tag)
            .expect("theme tables carry more than one distinct tag")
    };
    let options = vec!["True".to_string(), "False".to_string()];
    let explanation = if truthy {
        format!("Yes! {}", statement(theme, ti, ti.tag))
    } else {
        format!("Not quite — {}", statement(theme, ti, ti.tag))
    };
    let q3 = question(
        level_num,
        2,
        QuestionKind::TrueFalse,
        format!("True or false? {}", statement(theme, ti, shown_tag)),
        options,
        usize::from(!truthy),
        explanation,
        Some(ti.emoji),
    );

    vec![q1, q2, q3]
}
