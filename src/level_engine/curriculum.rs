//! Hand-authored levels 1–75.
//!
//! The first stretch of the adventure map is fixed content, looked up
//! verbatim — no seeding involved. Levels rotate through all 11 subjects
//! so a child meets every area within each 11-level ring of the map.
//!
//! Terse local constructors keep each level definition down to a handful
//! of lines; `get` turns the raw specs into checked [`Level`] records.

use crate::level_engine::{
    helpers::{level, question},
    models::{Level, Question, QuestionKind, Subject},
};

struct Q {
    kind: QuestionKind,
    prompt: &'static str,
    options: &'static [&'static str],
    correct: usize,
    explain: &'static str,
    emoji: Option<&'static str>,
}

/// Plain pick-one question.
fn p(prompt: &'static str, options: &'static [&'static str], correct: usize, explain: &'static str) -> Q {
    Q { kind: QuestionKind::PickOne, prompt, options, correct, explain, emoji: None }
}

/// Pick-one with a decorative emoji.
fn pe(emoji: &'static str, prompt: &'static str, options: &'static [&'static str], correct: usize, explain: &'static str) -> Q {
    Q { kind: QuestionKind::PickOne, prompt, options, correct, explain, emoji: Some(emoji) }
}

/// Emoji answer options.
fn em(prompt: &'static str, options: &'static [&'static str], correct: usize, explain: &'static str) -> Q {
    Q { kind: QuestionKind::PickEmoji, prompt, options, correct, explain, emoji: None }
}

/// True/false question; `truthy` marks which option is correct.
fn tf(prompt: &'static str, truthy: bool, explain: &'static str) -> Q {
    Q {
        kind: QuestionKind::TrueFalse,
        prompt,
        options: &["True", "False"],
        correct: usize::from(!truthy),
        explain,
        emoji: None,
    }
}

/// Verbatim lookup of a hand-authored level.
pub fn get(level_num: u32) -> Option<Level> {
    let (title, emoji, area, specs) = defs(level_num)?;
    let questions: Vec<Question> = specs
        .into_iter()
        .enumerate()
        .map(|(i, q)| {
            question(
                level_num,
                i,
                q.kind,
                q.prompt,
                q.options.iter().map(|s| s.to_string()).collect(),
                q.correct,
                q.explain,
                q.emoji,
            )
        })
        .collect();
    Some(level(level_num, title, emoji, area, questions))
}

#[rustfmt::skip]
fn defs(level_num: u32) -> Option<(&'static str, &'static str, Subject, Vec<Q>)> {
    let def = match level_num {
        // ── ring 1 (levels 1–11): first steps ────────────────────────────────
        1 => ("Meet A B C", "🔤", Subject::Letters, vec![
            p("Which one is the letter A?", &["A", "C", "B"], 0, "That's A — the very first letter!"),
            pe("🍎", "Which letter does Apple start with?", &["B", "A", "D"], 1, "Apple starts with A!"),
            p("Which one is the letter B?", &["D", "B", "C"], 1, "That's the letter B!"),
        ]),
        2 => ("First Words", "📖", Subject::Reading, vec![
            p("Find the word 'the'.", &["the", "and", "you"], 0, "You read 'the'!"),
            p("Find the word 'we'.", &["me", "we", "be"], 1, "You read 'we'!"),
            pe("🐱", "Which word goes with this picture?", &["cat", "dog", "hen"], 0, "🐱 is a cat!"),
        ]),
        3 => ("1 2 3 Go!", "🔢", Subject::Numbers, vec![
            p("How many apples? 🍎🍎", &["2", "1", "3"], 0, "One, two — there are 2!"),
            p("Which one is the number 1?", &["1", "7", "4"], 0, "That's the number 1!"),
            p("How many stars? ⭐⭐⭐", &["4", "2", "3"], 2, "One, two, three — 3 stars!"),
        ]),
        4 => ("Add with 1", "➕", Subject::Math, vec![
            p("1 + 1 = ?", &["2", "3", "1"], 0, "1 plus 1 makes 2!"),
            p("2 + 1 = ?", &["3", "2", "4"], 0, "2 plus 1 makes 3!"),
            p("1 + 0 = ?", &["1", "0", "2"], 0, "Adding zero changes nothing — still 1!"),
        ]),
        5 => ("Round and Pointy", "🔷", Subject::Shapes, vec![
            pe("🔵", "Which shape is this?", &["Circle", "Square", "Triangle"], 0, "🔵 is a circle — perfectly round!"),
            pe("🔺", "Which shape is this?", &["Circle", "Triangle", "Star"], 1, "🔺 is a triangle — three sides!"),
            em("Which one is the square?", &["🟩", "🔵", "🔺"], 0, "🟩 is the square!"),
        ]),
        6 => ("Animal Sounds", "🌍", Subject::MyWorld, vec![
            pe("🐮", "What sound does a cow make?", &["moo", "meow", "woof"], 0, "A cow says moo!"),
            pe("🐶", "What sound does a dog make?", &["quack", "woof", "roar"], 1, "A dog says woof!"),
            pe("🐱", "What sound does a cat make?", &["meow", "moo", "baa"], 0, "A cat says meow!"),
        ]),
        7 => ("Story Time", "📚", Subject::Stories, vec![
            p("The cat sat on the mat. Who sat on the mat?", &["The cat", "The dog", "The hen"], 0, "The cat sat on the mat!"),
            p("Tom has a red ball. What color is the ball?", &["Red", "Blue", "Green"], 0, "Tom's ball is red!"),
            tf("Books have pictures and words.", true, "Yes! Books are full of pictures and words."),
        ]),
        8 => ("Twinkle Twinkle", "🎵", Subject::Rhymes, vec![
            p("Twinkle twinkle little ___?", &["star", "car", "jar"], 0, "Twinkle twinkle little star!"),
            p("Up above the world so ___?", &["high", "low", "big"], 0, "Up above the world so high!"),
            tf("Twinkle Twinkle is a song about a star.", true, "Yes! It is about a little star."),
        ]),
        9 => ("Color Magic", "🎨", Subject::Art, vec![
            p("Red and yellow mixed make?", &["orange", "green", "purple"], 0, "Red and yellow make orange!"),
            p("Blue and yellow mixed make?", &["green", "orange", "pink"], 0, "Blue and yellow make green!"),
            p("Which one do we draw with?", &["crayon", "spoon", "sock"], 0, "We draw with crayons!"),
        ]),
        10 => ("Think Think", "💡", Subject::SmartKids, vec![
            em("Which one is not a fruit?", &["🍎", "🍌", "🚗"], 2, "🚗 is a car — not a fruit!"),
            p("Which do we wear on our feet?", &["shoes", "hats", "gloves"], 0, "Shoes go on our feet!"),
            p("Which is heavier?", &["an elephant", "a mouse"], 0, "An elephant is much, much heavier!"),
        ]),
        11 => ("Happy Faces", "💛", Subject::Feelings, vec![
            em("Which face is happy?", &["😊", "😢", "😠"], 0, "😊 is a happy face!"),
            p("When we get a gift, we feel?", &["happy", "sad", "angry"], 0, "Gifts make us feel happy!"),
            tf("Hugs feel nice.", true, "Yes! Hugs are warm and nice."),
        ]),

        // ── ring 2 (levels 12–22) ────────────────────────────────────────────
        12 => ("Letter Sounds", "🔤", Subject::Letters, vec![
            pe("🐱", "Which letter does Cat start with?", &["C", "K", "S"], 0, "Cat starts with C!"),
            pe("🐶", "Which letter does Dog start with?", &["B", "P", "D"], 2, "Dog starts with D!"),
            p("Which one is the letter E?", &["E", "F", "L"], 0, "That's the letter E!"),
        ]),
        13 => ("Word Friends", "📖", Subject::Reading, vec![
            p("Find the word 'and'.", &["can", "and", "ant"], 1, "You read 'and'!"),
            pe("☀️", "Which word goes with this picture?", &["sun", "son", "fan"], 0, "☀️ is the sun!"),
            p("Find the word 'you'.", &["you", "your", "yes"], 0, "You read 'you'!"),
        ]),
        14 => ("Count to Five", "🔢", Subject::Numbers, vec![
            p("How many chicks? 🐥🐥🐥🐥", &["4", "5", "3"], 0, "Count them — 4 chicks!"),
            p("What number comes after 4?", &["5", "3", "6"], 0, "5 comes right after 4!"),
            p("Which one is the number 5?", &["2", "5", "6"], 1, "That's the number 5!"),
        ]),
        15 => ("Easy Sums", "➕", Subject::Math, vec![
            p("2 + 2 = ?", &["4", "3", "5"], 0, "2 plus 2 makes 4!"),
            p("3 + 1 = ?", &["5", "4", "2"], 1, "3 plus 1 makes 4!"),
            p("2 + 3 = ?", &["5", "6", "4"], 0, "2 plus 3 makes 5!"),
        ]),
        16 => ("Shape Hunt", "🔷", Subject::Shapes, vec![
            pe("🥚", "An egg is shaped like an ___?", &["oval", "square", "star"], 0, "An egg is an oval!"),
            pe("🚪", "A door is shaped like a ___?", &["rectangle", "circle", "triangle"], 0, "A door is a rectangle!"),
            p("How many sides does a triangle have?", &["3", "4", "2"], 0, "A triangle has 3 sides!"),
        ]),
        17 => ("Animal Homes", "🌍", Subject::MyWorld, vec![
            pe("🐟", "Where does a fish live?", &["in water", "in a tree", "in a nest"], 0, "Fish live in water!"),
            pe("🐦", "Where does a bird live?", &["in a nest", "in a den", "in water"], 0, "Birds live in nests!"),
            pe("🐝", "Where does a bee live?", &["in a hive", "in a cave", "in a pond"], 0, "Bees live in a hive!"),
        ]),
        18 => ("Little Tales", "📚", Subject::Stories, vec![
            p("Ria fed the fish. Who did Ria feed?", &["the fish", "the cat", "the cow"], 0, "Ria fed the fish!"),
            p("The sun woke the rooster. Who woke up?", &["the rooster", "the owl", "the bat"], 0, "The rooster woke up!"),
            p("First we wake up in the morning. What do we do first?", &["wake up", "eat dinner", "see stars"], 0, "First we wake up!"),
        ]),
        19 => ("Old MacDonald", "🎵", Subject::Rhymes, vec![
            p("Old MacDonald had a ___?", &["farm", "shop", "boat"], 0, "Old MacDonald had a farm!"),
            p("E-I-E-I-___?", &["O", "A", "U"], 0, "E-I-E-I-O!"),
            p("The cow on the farm says?", &["moo", "meow", "roar"], 0, "The cow says moo-moo here!"),
        ]),
        20 => ("Mix More Colors", "🎨", Subject::Art, vec![
            p("Red and blue mixed make?", &["purple", "green", "orange"], 0, "Red and blue make purple!"),
            p("What color is the sky on a sunny day?", &["blue", "red", "black"], 0, "The sky is blue!"),
            p("What color is the grass?", &["green", "pink", "white"], 0, "Grass is green!"),
        ]),
        21 => ("My Five Senses", "💡", Subject::SmartKids, vec![
            p("What do we use to see?", &["eyes", "ears", "nose"], 0, "We see with our eyes!"),
            p("What do we use to hear?", &["ears", "eyes", "hands"], 0, "We hear with our ears!"),
            p("What do we use to smell?", &["nose", "feet", "ears"], 0, "We smell with our nose!"),
        ]),
        22 => ("Sad and Mad", "💛", Subject::Feelings, vec![
            em("Which face is sad?", &["😢", "😊", "😠"], 0, "😢 is a sad face."),
            em("Which face is angry?", &["😠", "😊", "😴"], 0, "😠 is an angry face."),
            p("When a toy breaks, we may feel?", &["sad", "sleepy", "hungry"], 0, "It's okay to feel sad sometimes."),
        ]),

        // ── ring 3 (levels 23–33) ────────────────────────────────────────────
        23 => ("ABC Order", "🔤", Subject::Letters, vec![
            p("Which letter comes after A?", &["C", "B", "D"], 1, "B comes right after A!"),
            p("Which letter comes after B?", &["C", "A", "E"], 0, "C comes right after B!"),
            p("Which letter comes after C?", &["G", "E", "D"], 2, "D comes right after C!"),
        ]),
        24 => ("Rhyme Time", "📖", Subject::Reading, vec![
            p("Which word rhymes with 'cat'?", &["hat", "cup", "pen"], 0, "'Cat' and 'hat' rhyme!"),
            p("Which word rhymes with 'sun'?", &["sit", "fun", "sand"], 1, "'Sun' and 'fun' rhyme!"),
            p("Which word rhymes with 'dog'?", &["dig", "day", "log"], 2, "'Dog' and 'log' rhyme!"),
        ]),
        25 => ("Count to Ten", "🔢", Subject::Numbers, vec![
            p("How many balloons? 🎈🎈🎈🎈🎈🎈🎈", &["6", "7", "8"], 1, "Count slowly — 7 balloons!"),
            p("What number comes after 9?", &["10", "8", "11"], 0, "10 comes right after 9!"),
            p("Which one is the number 6?", &["6", "9", "4"], 0, "That's the number 6!"),
            p("How many fingers on one hand?", &["5", "4", "10"], 0, "One hand has 5 fingers!"),
        ]),
        26 => ("Take Away", "➕", Subject::Math, vec![
            p("3 - 1 = ?", &["2", "1", "3"], 0, "Take 1 away from 3 and 2 are left!"),
            p("4 - 2 = ?", &["2", "3", "1"], 0, "Take 2 away from 4 and 2 are left!"),
            p("5 - 1 = ?", &["4", "5", "3"], 0, "Take 1 away from 5 and 4 are left!"),
        ]),
        27 => ("Counting Sides", "🔷", Subject::Shapes, vec![
            p("How many sides does a square have?", &["4", "3", "5"], 0, "A square has 4 equal sides!"),
            p("How many sides does a rectangle have?", &["4", "6", "3"], 0, "A rectangle has 4 sides!"),
            p("Which shape has no corners?", &["circle", "square", "triangle"], 0, "A circle is round — no corners!"),
        ]),
        28 => ("Day and Night", "🌍", Subject::MyWorld, vec![
            p("What do we see in the sky at night?", &["the moon", "the sun", "a rainbow"], 0, "The moon comes out at night!"),
            p("When does the sun rise?", &["in the morning", "at night", "in the evening"], 0, "The sun rises in the morning!"),
            tf("We sleep at night.", true, "Yes! Night is for sleeping."),
        ]),
        29 => ("Seed to Flower", "📚", Subject::Stories, vec![
            p("What do we plant first to grow a flower?", &["a seed", "a leaf", "a fruit"], 0, "Every flower starts as a seed!"),
            p("What does a seed need to grow?", &["water", "candy", "toys"], 0, "Seeds need water to grow!"),
            p("What comes out of the seed last?", &["the flower", "the seed", "the soil"], 0, "At last the flower blooms!"),
        ]),
        30 => ("Baa Baa Black Sheep", "🎵", Subject::Rhymes, vec![
            p("Baa baa black ___?", &["sheep", "goat", "hen"], 0, "Baa baa black sheep!"),
            p("Have you any ___?", &["wool", "milk", "eggs"], 0, "Have you any wool!"),
            p("How many bags full?", &["three", "two", "five"], 0, "Yes sir, yes sir, three bags full!"),
        ]),
        31 => ("Drawing Time", "🎨", Subject::Art, vec![
            p("Which shape do we draw for the sun?", &["a circle", "a square", "a rectangle"], 0, "The sun is a big circle!"),
            p("What do we paint with?", &["a brush", "a fork", "a shoe"], 0, "We paint with a brush!"),
            tf("We can draw with crayons.", true, "Yes! Crayons are for drawing."),
        ]),
        32 => ("Odd One Out", "💡", Subject::SmartKids, vec![
            em("Which one is not an animal?", &["🐶", "🐱", "🍌"], 2, "🍌 is a banana — not an animal!"),
            em("Which one is not a shape?", &["🔵", "🔺", "🍎"], 2, "🍎 is an apple — not a shape!"),
            p("Which one is not a fruit?", &["apple", "mango", "potato"], 2, "A potato is a vegetable!"),
        ]),
        33 => ("Kind Words", "💛", Subject::Feelings, vec![
            p("What do we say when someone gives us something?", &["thank you", "go away", "hurry up"], 0, "We say thank you!"),
            p("What do we say when we bump into someone?", &["sorry", "hooray", "goodbye"], 0, "We say sorry!"),
            p("Sharing with friends is?", &["kind", "mean", "silly"], 0, "Sharing is kind and caring!"),
        ]),

        // ── ring 4 (levels 34–44) ────────────────────────────────────────────
        34 => ("Small Letters", "🔤", Subject::Letters, vec![
            p("Which is the small letter for A?", &["a", "e", "o"], 0, "Big A, small a!"),
            p("Which is the small letter for B?", &["d", "b", "p"], 1, "Big B, small b!"),
            p("Which is the small letter for D?", &["b", "d", "q"], 1, "Big D, small d!"),
        ]),
        35 => ("Picture Words", "📖", Subject::Reading, vec![
            pe("🐟", "Which word goes with this picture?", &["fish", "dish", "fist"], 0, "🐟 is a fish!"),
            pe("🌈", "Which word goes with this picture?", &["ribbon", "rainbow", "rain"], 1, "🌈 is a rainbow!"),
            pe("🎩", "Which word goes with this picture?", &["hut", "hot", "hat"], 2, "🎩 is a hat!"),
        ]),
        36 => ("Number Words", "🔢", Subject::Numbers, vec![
            p("Which number is 'three'?", &["3", "8", "5"], 0, "'Three' is the number 3!"),
            p("Which number is 'seven'?", &["2", "7", "9"], 1, "'Seven' is the number 7!"),
            p("Which number is 'ten'?", &["10", "1", "12"], 0, "'Ten' is the number 10!"),
        ]),
        37 => ("Sums to Ten", "➕", Subject::Math, vec![
            p("4 + 3 = ?", &["7", "6", "8"], 0, "4 plus 3 makes 7!"),
            p("5 + 5 = ?", &["10", "9", "11"], 0, "5 plus 5 makes 10!"),
            p("6 + 2 = ?", &["7", "8", "9"], 1, "6 plus 2 makes 8!"),
        ]),
        38 => ("Color Spotting", "🔷", Subject::Shapes, vec![
            pe("💙", "Which color is this?", &["Blue", "Red", "Green"], 0, "💙 is blue!"),
            pe("💛", "Which color is this?", &["Purple", "Yellow", "Pink"], 1, "💛 is yellow!"),
            pe("💚", "Which color is this?", &["Green", "Blue", "Brown"], 0, "💚 is green!"),
        ]),
        39 => ("Growing Plants", "🌍", Subject::MyWorld, vec![
            p("What do plants need to grow?", &["water and sunlight", "candy and toys", "shoes and socks"], 0, "Plants drink water and love sunlight!"),
            pe("🥭", "Which fruit grows on a tree?", &["mango", "potato", "carrot"], 0, "Mangoes grow on trees!"),
            tf("Trees give us shade.", true, "Yes! It is cool under a tree."),
        ]),
        40 => ("The Lost Kite", "📚", Subject::Stories, vec![
            p("Mina lost her kite in a tree. Where was the kite?", &["in a tree", "in a box", "in a pond"], 0, "The kite was stuck in a tree!"),
            p("Mina's brother helped her. Who helped Mina?", &["her brother", "her teacher", "a policeman"], 0, "Her brother helped her get it back!"),
            tf("Mina's kite was lost in a pond.", false, "Not quite — the kite was in a tree."),
        ]),
        41 => ("Humpty Dumpty", "🎵", Subject::Rhymes, vec![
            p("Humpty Dumpty sat on a ___?", &["wall", "chair", "hill"], 0, "Humpty Dumpty sat on a wall!"),
            p("Humpty Dumpty had a great ___?", &["fall", "nap", "meal"], 0, "Humpty Dumpty had a great fall!"),
            tf("Humpty Dumpty sat on a wall.", true, "Yes! He sat on a wall."),
        ]),
        42 => ("Rainbow Colors", "🎨", Subject::Art, vec![
            p("How many colors are in a rainbow?", &["seven", "three", "five"], 0, "A rainbow has seven colors!"),
            p("Which color is at the top of a rainbow?", &["red", "violet", "green"], 0, "Red is at the top!"),
            tf("A rainbow can come out after rain.", true, "Yes! Sun plus rain makes a rainbow."),
        ]),
        43 => ("What Goes Together", "💡", Subject::SmartKids, vec![
            p("A sock goes with a ___?", &["shoe", "plate", "book"], 0, "Socks and shoes go together!"),
            p("A lock opens with a ___?", &["key", "spoon", "leaf"], 0, "A key opens a lock!"),
            p("A pencil goes with ___?", &["paper", "soup", "a pillow"], 0, "We write with a pencil on paper!"),
        ]),
        44 => ("Calm and Brave", "💛", Subject::Feelings, vec![
            p("When we feel angry, we can?", &["take deep breaths", "hit", "shout"], 0, "Slow, deep breaths calm us down."),
            p("When we feel scared, we can tell?", &["a grown-up", "nobody", "the wall"], 0, "Grown-ups can help when we're scared."),
            tf("It is okay to cry sometimes.", true, "Yes — everyone cries sometimes, and that's okay."),
        ]),

        // ── ring 5 (levels 45–55) ────────────────────────────────────────────
        45 => ("Tricky Letters", "🔤", Subject::Letters, vec![
            p("Which one is the letter M?", &["M", "N", "W"], 0, "That's M — two mountains!"),
            p("Which one is the letter W?", &["V", "M", "W"], 2, "That's W — like two Vs!"),
            pe("🌙", "Which letter does Moon start with?", &["N", "M", "W"], 1, "Moon starts with M!"),
        ]),
        46 => ("Little Sentences", "📖", Subject::Reading, vec![
            p("I can ___ fast.", &["run", "red", "rug"], 0, "I can run fast!"),
            p("The elephant is ___.", &["bag", "big", "bug"], 1, "The elephant is big!"),
            p("We like to ___.", &["play", "plate", "plan"], 0, "We like to play!"),
        ]),
        47 => ("Bigger or Smaller", "🔢", Subject::Numbers, vec![
            p("Which number is bigger?", &["8", "5"], 0, "8 is bigger than 5!"),
            p("Which number is smaller?", &["9", "3"], 1, "3 is smaller than 9!"),
            p("Which is the biggest number?", &["4", "9", "6"], 1, "9 is the biggest of the three!"),
        ]),
        48 => ("Story Sums", "➕", Subject::Math, vec![
            p("2 birds sit on a tree. 2 more fly in. How many birds? 🐦", &["4", "3", "5"], 0, "2 and 2 more make 4 birds!"),
            p("You have 3 cookies and eat 1. How many are left? 🍪", &["2", "3", "1"], 0, "Eat 1 of 3 and 2 are left!"),
            p("1 balloon and 4 more balloons. How many? 🎈", &["5", "4", "6"], 0, "1 and 4 make 5 balloons!"),
        ]),
        49 => ("Shapes Around Us", "🔷", Subject::Shapes, vec![
            pe("🕐", "What shape is a clock?", &["circle", "triangle", "square"], 0, "A clock is a circle!"),
            pe("🍕", "What shape is a pizza slice?", &["triangle", "circle", "oval"], 0, "A pizza slice is a triangle!"),
            pe("🎲", "What shape is the face of a dice?", &["square", "star", "heart"], 0, "Each face of a dice is a square!"),
        ]),
        50 => ("Weather Watch", "🌍", Subject::MyWorld, vec![
            p("What do we carry in the rain?", &["an umbrella", "sunglasses", "a kite"], 0, "An umbrella keeps us dry!"),
            p("What makes the day warm and bright?", &["the sun", "the moon", "the stars"], 0, "The sun warms the day!"),
            tf("Snow is hot.", false, "Not quite — snow is very cold!"),
            pe("🌧️", "What falls from rain clouds?", &["water", "sand", "leaves"], 0, "Rain is water falling from clouds!"),
        ]),
        51 => ("The Big Turnip", "📚", Subject::Stories, vec![
            p("Grandpa could not pull the turnip alone. Who helped first?", &["Grandma", "the mouse", "the cat"], 0, "Grandma came to help first!"),
            p("Everyone pulled together. Did the turnip come out?", &["yes", "no"], 0, "Yes! Together they pulled it out!"),
            tf("The turnip came out because everyone helped together.", true, "Yes! Working together made it easy."),
        ]),
        52 => ("Itsy Bitsy Spider", "🎵", Subject::Rhymes, vec![
            p("The itsy bitsy spider climbed up the ___?", &["water spout", "tree", "stairs"], 0, "Up the water spout!"),
            p("Down came the ___?", &["rain", "snow", "leaves"], 0, "Down came the rain!"),
            p("What washed the spider out?", &["the rain", "the wind", "the sun"], 0, "The rain washed the spider out!"),
        ]),
        53 => ("Craft Corner", "🎨", Subject::Art, vec![
            p("What do we cut paper with?", &["scissors", "a spoon", "a comb"], 0, "Scissors cut paper — carefully!"),
            p("What do we stick paper with?", &["glue", "water", "milk"], 0, "Glue sticks paper together!"),
            p("What can we shape with our hands?", &["clay", "stones", "glass"], 0, "Clay is soft — we can shape it!"),
        ]),
        54 => ("Patterns", "💡", Subject::SmartKids, vec![
            em("What comes next: 🔵 🔺 🔵 🔺 ?", &["🔵", "🔺", "⭐"], 0, "The pattern repeats — 🔵 comes next!"),
            p("What day comes after Monday?", &["Tuesday", "Sunday", "Friday"], 0, "Tuesday comes after Monday!"),
            p("In which season do we feel most cold?", &["winter", "summer", "spring"], 0, "Winter is the cold season!"),
        ]),
        55 => ("Good Friends", "💛", Subject::Feelings, vec![
            p("A good friend ___?", &["shares", "grabs", "pushes"], 0, "Good friends share!"),
            p("When a friend is sad, we can?", &["help them", "laugh at them", "run away"], 0, "We help friends feel better!"),
            em("Which face is surprised?", &["😮", "😡", "😴"], 0, "😮 is a surprised face!"),
        ]),

        // ── ring 6 (levels 56–66) ────────────────────────────────────────────
        56 => ("Letter Detective", "🔤", Subject::Letters, vec![
            p("Which word starts with S?", &["Sun", "Ball", "Hat"], 0, "Sun starts with S!"),
            p("Which word starts with T?", &["Dog", "Tiger", "Fish"], 1, "Tiger starts with T!"),
            pe("👑", "Which letter does Queen start with?", &["Q", "K", "G"], 0, "Queen starts with Q!"),
        ]),
        57 => ("More Rhymes", "📖", Subject::Reading, vec![
            p("Which word rhymes with 'cake'?", &["lake", "cook", "kite"], 0, "'Cake' and 'lake' rhyme!"),
            p("Which word rhymes with 'king'?", &["rang", "ring", "rung"], 1, "'King' and 'ring' rhyme!"),
            p("Which word rhymes with 'ball'?", &["bell", "bill", "wall"], 2, "'Ball' and 'wall' rhyme!"),
        ]),
        58 => ("Teen Numbers", "🔢", Subject::Numbers, vec![
            p("What number comes after 12?", &["13", "11", "14"], 0, "13 comes after 12!"),
            p("Which number is 'fifteen'?", &["15", "5", "50"], 0, "'Fifteen' is 15!"),
            p("How many fingers on two hands?", &["10", "5", "20"], 0, "5 and 5 make 10 fingers!"),
        ]),
        59 => ("Bigger Take Away", "➕", Subject::Math, vec![
            p("8 - 3 = ?", &["5", "4", "6"], 0, "Take 3 from 8 and 5 are left!"),
            p("9 - 4 = ?", &["5", "6", "3"], 0, "Take 4 from 9 and 5 are left!"),
            p("7 - 2 = ?", &["4", "5", "6"], 1, "Take 2 from 7 and 5 are left!"),
        ]),
        60 => ("Five and Six Sides", "🔷", Subject::Shapes, vec![
            pe("⬠", "How many sides does a pentagon have?", &["5", "4", "6"], 0, "Pentagon — 5 sides!"),
            pe("⬡", "How many sides does a hexagon have?", &["6", "5", "8"], 0, "Hexagon — 6 sides!"),
            em("Which one is the diamond?", &["🔶", "🔵", "⭐"], 0, "🔶 is the diamond!"),
        ]),
        61 => ("People Who Help", "🌍", Subject::MyWorld, vec![
            p("Who helps us when we are sick?", &["a doctor", "a driver", "a baker"], 0, "Doctors help us get well!"),
            p("Who puts out fires?", &["a firefighter", "a teacher", "a cook"], 0, "Firefighters are so brave!"),
            p("Who helps us learn at school?", &["a teacher", "a pilot", "a farmer"], 0, "Teachers help us learn!"),
        ]),
        62 => ("The Busy Ant", "📚", Subject::Stories, vec![
            p("The little ant carried a big crumb home. What did the ant carry?", &["a crumb", "a leaf", "a stone"], 0, "The ant carried a crumb!"),
            p("The ant worked all day. Was the ant busy or lazy?", &["busy", "lazy"], 0, "The ant was very busy!"),
            tf("The ant carried the crumb to its home.", true, "Yes! All the way home."),
        ]),
        63 => ("Jack and Jill", "🎵", Subject::Rhymes, vec![
            p("Jack and Jill went up the ___?", &["hill", "wall", "road"], 0, "Jack and Jill went up the hill!"),
            p("They went to fetch a pail of ___?", &["water", "milk", "honey"], 0, "To fetch a pail of water!"),
            p("Who fell down first?", &["Jack", "Jill", "the dog"], 0, "Jack fell down and broke his crown!"),
        ]),
        64 => ("Colors Around Us", "🎨", Subject::Art, vec![
            pe("🍌", "What color is a banana?", &["yellow", "blue", "purple"], 0, "Bananas are yellow!"),
            pe("🍅", "What color is a tomato?", &["red", "green", "black"], 0, "A ripe tomato is red!"),
            pe("🍃", "What color are leaves?", &["green", "pink", "orange"], 0, "Leaves are green!"),
        ]),
        65 => ("Big Thinkers", "💡", Subject::SmartKids, vec![
            p("Which one melts in the sun?", &["ice", "a stone", "a coin"], 0, "Ice melts into water in the sun!"),
            p("What twinkles in the night sky?", &["stars", "kites", "balloons"], 0, "Stars twinkle at night!"),
            tf("Fire is cold.", false, "Not quite — fire is very hot. Stay safe!"),
        ]),
        66 => ("Feeling Strong", "💛", Subject::Feelings, vec![
            p("When something is hard, trying again makes us?", &["stronger", "smaller", "sleepy"], 0, "Every try makes us stronger!"),
            p("'I can do it!' are ___ words.", &["brave", "mean", "quiet"], 0, "Brave words help us try!"),
            tf("Everyone feels sad sometimes.", true, "Yes — all feelings are okay."),
        ]),

        // ── ring 7 (levels 67–75) ────────────────────────────────────────────
        67 => ("Alphabet Champs", "🔤", Subject::Letters, vec![
            p("Which letter comes after X?", &["Z", "Y", "W"], 1, "Y comes after X!"),
            p("Which is the small letter for G?", &["g", "q", "p"], 0, "Big G, small g!"),
            pe("🦓", "Which word starts with Z?", &["Zebra", "Lion", "Yak"], 0, "Zebra starts with Z!"),
        ]),
        68 => ("Story Words", "📖", Subject::Reading, vec![
            p("Find the word 'said'.", &["sand", "said", "sad"], 1, "You read 'said'!"),
            p("She ___ home after school.", &["want", "went", "wind"], 1, "She went home!"),
            pe("🦁", "Which word goes with this picture?", &["line", "lion", "loin"], 1, "🦁 is a lion!"),
        ]),
        69 => ("Count On", "🔢", Subject::Numbers, vec![
            p("What number comes after 17?", &["16", "18", "19"], 1, "18 comes after 17!"),
            p("Which number is 'twenty'?", &["20", "12", "2"], 0, "'Twenty' is 20!"),
            p("Which is the smallest number?", &["11", "7", "15"], 1, "7 is the smallest of the three!"),
        ]),
        70 => ("Math Stars", "➕", Subject::Math, vec![
            p("6 + 4 = ?", &["10", "9", "11"], 0, "6 plus 4 makes 10!"),
            p("10 - 5 = ?", &["5", "6", "4"], 0, "Take 5 from 10 and 5 are left!"),
            p("4 + 4 = ?", &["8", "7", "9"], 0, "4 plus 4 makes 8!"),
        ]),
        71 => ("Shape Masters", "🔷", Subject::Shapes, vec![
            em("Which one is the star?", &["⭐", "🔶", "🔵"], 0, "⭐ is the star!"),
            p("Which shape has exactly 3 sides?", &["a triangle", "a square", "a circle"], 0, "A triangle has 3 sides!"),
            pe("✉️", "What shape is an envelope?", &["rectangle", "circle", "star"], 0, "An envelope is a rectangle!"),
        ]),
        72 => ("Nature Walk", "🌍", Subject::MyWorld, vec![
            pe("🐝", "What do bees make?", &["honey", "milk", "bread"], 0, "Bees make sweet honey!"),
            pe("🕷️", "What does a spider spin?", &["a web", "a nest", "a net bag"], 0, "Spiders spin webs!"),
            tf("Fish can fly in the sky.", false, "Not quite — fish swim in water!"),
        ]),
        73 => ("The Shared Mango", "📚", Subject::Stories, vec![
            p("Ben shared his mango with Lila. What did Ben share?", &["a mango", "a toy", "a book"], 0, "Ben shared his mango!"),
            p("How did Lila feel after Ben shared?", &["happy", "angry", "scared"], 0, "Sharing made Lila happy!"),
            tf("Ben kept the whole mango for himself.", false, "Not quite — Ben shared it with Lila!"),
        ]),
        74 => ("Row Your Boat", "🎵", Subject::Rhymes, vec![
            p("Row, row, row your ___?", &["boat", "bike", "kite"], 0, "Row, row, row your boat!"),
            p("Gently down the ___?", &["stream", "street", "stairs"], 0, "Gently down the stream!"),
            p("Life is but a ___?", &["dream", "game", "song"], 0, "Merrily, merrily — life is but a dream!"),
        ]),
        75 => ("Little Artists", "🎨", Subject::Art, vec![
            p("Red and white mixed make?", &["pink", "brown", "gray"], 0, "Red and white make pink!"),
            p("Which is the darkest color?", &["black", "white", "pink"], 0, "Black is the darkest!"),
            tf("Mixing blue and yellow makes green.", true, "Yes! Blue and yellow make green."),
            em("Which one do we paint with?", &["🖌️", "🥄", "🧦"], 0, "🖌️ is a paintbrush!"),
        ]),

        _ => return None,
    };
    Some(def)
}
