use crate::level_engine::{
    content::{COLORS, POLYGONS, SHAPES, SHAPE_OBJECTS},
    helpers::question,
    models::{Question, QuestionKind, Theme},
    select::{build_distractor_options, seeded_pick},
};

/// Three shape-and-color questions for one procedural level.
pub fn build(level_num: u32, theme: Theme) -> Vec<Question> {
    let n = level_num as i64;

    // q1: name the shape.
    let &(name, emoji, _) = seeded_pick(SHAPES, n * 7 + 1);
    let names: Vec<&str> = SHAPES.iter().map(|s| s.0).collect();
    let (options, correct_index) = build_distractor_options(name, &names, n * 31 + 2, 3);
    let q1 = question(
        level_num,
        0,
        QuestionKind::PickOne,
        format!("Which shape is this? {}", emoji),
        options,
        correct_index,
        format!("{} is a {}!", emoji, name.to_lowercase()),
        Some(emoji),
    );

    // q2: count the sides.
    let &(pname, pemoji, sides) = seeded_pick(POLYGONS, n * 11 + 3);
    let correct = sides.to_string();
    let side_pool = ["3", "4", "5", "6", "8"];
    let (options, correct_index) = build_distractor_options(&correct, &side_pool, n * 53 + 4, 3);
    let q2 = question(
        level_num,
        1,
        QuestionKind::PickOne,
        format!("How many sides does a {} have? {}", pname.to_lowercase(), pemoji),
        options,
        correct_index,
        format!("A {} has {} sides!", pname.to_lowercase(), sides),
        Some(pemoji),
    );

    // q3: shape-spotting in the shapes band, colors everywhere else.
    let q3 = if theme == Theme::Shapes {
        let obj = seeded_pick(SHAPE_OBJECTS, n * 13 + 5);
        let tags: Vec<&str> = SHAPE_OBJECTS.iter().map(|t| t.tag).collect();
        let (options, correct_index) = build_distractor_options(obj.tag, &tags, n * 97 + 6, 3);
        question(
            level_num,
            2,
            QuestionKind::PickOne,
            format!("What shape is a {}? {}", obj.name.to_lowercase(), obj.emoji),
            options,
            correct_index,
            format!("A {} is shaped like a {}!", obj.name.to_lowercase(), obj.tag),
            Some(obj.emoji),
        )
    } else {
        let &(cname, cemoji) = seeded_pick(COLORS, n * 13 + 5);
        let color_names: Vec<&str> = COLORS.iter().map(|c| c.0).collect();
        let (options, correct_index) =
            build_distractor_options(cname, &color_names, n * 97 + 6, 3);
        question(
            level_num,
            2,
            QuestionKind::PickOne,
            format!("Which color is this? {}", cemoji),
            options,
            correct_index,
            format!("{} is the color {}!", cemoji, cname.to_lowercase()),
            Some(cemoji),
        )
    };

    vec![q1, q2, q3]
}
