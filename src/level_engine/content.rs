//! Static content tables.
//!
//! Pure reference data consumed by the question builders. Every table is
//! non-empty by construction — the selector utilities index into them
//! with modulo arithmetic and never range-check at runtime.

use crate::level_engine::models::Theme;

/// One themed content entry.
///
/// `tag` is the theme-specific attribute the my-world builder quizzes on:
/// the animal's sound, the object's shape, or the festival/culture blurb.
pub struct ThemeItem {
    pub name: &'static str,
    pub emoji: &'static str,
    pub tag: &'static str,
}

const fn item(name: &'static str, emoji: &'static str, tag: &'static str) -> ThemeItem {
    ThemeItem { name, emoji, tag }
}

pub const ANIMALS: &[ThemeItem] = &[
    item("Cow", "🐮", "moo"),
    item("Dog", "🐶", "woof"),
    item("Cat", "🐱", "meow"),
    item("Duck", "🦆", "quack"),
    item("Lion", "🦁", "roar"),
    item("Frog", "🐸", "croak"),
    item("Elephant", "🐘", "trumpet"),
    item("Horse", "🐴", "neigh"),
    item("Sheep", "🐑", "baa"),
    item("Bee", "🐝", "buzz"),
    item("Owl", "🦉", "hoot"),
    item("Pig", "🐷", "oink"),
    item("Monkey", "🐵", "chatter"),
    item("Tiger", "🐯", "growl"),
    item("Hen", "🐔", "cluck"),
    item("Snake", "🐍", "hiss"),
];

pub const SHAPE_OBJECTS: &[ThemeItem] = &[
    item("Clock", "🕐", "circle"),
    item("Ball", "⚽", "circle"),
    item("Orange", "🍊", "circle"),
    item("Pizza slice", "🍕", "triangle"),
    item("Samosa", "🥟", "triangle"),
    item("Window", "🪟", "square"),
    item("Dice", "🎲", "square"),
    item("Door", "🚪", "rectangle"),
    item("Book", "📕", "rectangle"),
    item("Envelope", "✉️", "rectangle"),
    item("Egg", "🥚", "oval"),
    item("Kite", "🪁", "diamond"),
];

pub const FESTIVALS: &[ThemeItem] = &[
    item("Diwali", "🪔", "the festival of lights"),
    item("Holi", "🌈", "the festival of colors"),
    item("Eid", "🌙", "the festival of sharing and feasting"),
    item("Durga Puja", "🙏", "the worship of Goddess Durga"),
    item("Christmas", "🎄", "the festival with Santa and gifts"),
    item("Pohela Boishakh", "🎉", "the Bengali New Year"),
    item("Raksha Bandhan", "🧵", "the festival of brothers and sisters"),
    item("Saraswati Puja", "📚", "the festival of learning"),
];

pub const BENGAL_ITEMS: &[ThemeItem] = &[
    item("Royal Bengal Tiger", "🐅", "the national animal of the Sundarbans"),
    item("Hilsa", "🐟", "the most loved fish of Bengal"),
    item("Rosogolla", "🍮", "a soft sweet made from chhena"),
    item("Sundarbans", "🌳", "the largest mangrove forest in the world"),
    item("Baul songs", "🎶", "the folk songs of wandering singers"),
    item("Rabindranath Tagore", "✍️", "the poet who wrote Gitanjali"),
    item("Howrah Bridge", "🌉", "the famous bridge over the Hooghly river"),
    item("Alpona", "🎨", "beautiful patterns drawn on the floor"),
    item("Terracotta temples", "🛕", "the clay temples of Bishnupur"),
    item("Kantha", "🪡", "soft quilts stitched from old cloth"),
];

/// The themed table for a given theme.
pub fn theme_items(theme: Theme) -> &'static [ThemeItem] {
    match theme {
        Theme::Animals   => ANIMALS,
        Theme::Shapes    => SHAPE_OBJECTS,
        Theme::Festivals => FESTIVALS,
        Theme::Bengal    => BENGAL_ITEMS,
    }
}

/// A–Z with an example word and picture for each letter.
pub const LETTER_WORDS: &[(char, &str, &str)] = &[
    ('A', "Apple", "🍎"),
    ('B', "Ball", "⚽"),
    ('C', "Cat", "🐱"),
    ('D', "Dog", "🐶"),
    ('E', "Elephant", "🐘"),
    ('F', "Fish", "🐟"),
    ('G', "Grapes", "🍇"),
    ('H', "Hat", "🎩"),
    ('I', "Ice cream", "🍦"),
    ('J', "Jam", "🍓"),
    ('K', "Kite", "🪁"),
    ('L', "Lion", "🦁"),
    ('M', "Moon", "🌙"),
    ('N', "Nest", "🪺"),
    ('O', "Orange", "🍊"),
    ('P', "Parrot", "🦜"),
    ('Q', "Queen", "👑"),
    ('R', "Rainbow", "🌈"),
    ('S', "Sun", "☀️"),
    ('T', "Tiger", "🐯"),
    ('U', "Umbrella", "☂️"),
    ('V', "Violin", "🎻"),
    ('W', "Watch", "⌚"),
    ('X', "Xylophone", "🎵"),
    ('Y', "Yak", "🐃"),
    ('Z', "Zebra", "🦓"),
];

/// The 26 letters as display strings, for answer-option pools.
pub const LETTERS: &[&str] = &[
    "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M",
    "N", "O", "P", "Q", "R", "S", "T", "U", "V", "W", "X", "Y", "Z",
];

/// Early sight words for the reading builders.
pub const SIGHT_WORDS: &[&str] = &[
    "the", "and", "you", "see", "can", "we", "like", "big", "little", "play",
    "run", "jump", "look", "here", "come", "said", "went", "day", "sun", "fun",
];

/// Rhyme families: a base word plus words that rhyme with it.
pub const RHYME_FAMILIES: &[(&str, &[&str])] = &[
    ("cat", &["hat", "mat", "rat", "bat"]),
    ("sun", &["fun", "run", "bun"]),
    ("dog", &["log", "frog", "fog"]),
    ("cake", &["lake", "rake", "snake"]),
    ("king", &["ring", "sing", "wing"]),
    ("ball", &["tall", "wall", "call"]),
];

pub const COLORS: &[(&str, &str)] = &[
    ("Red", "❤️"),
    ("Blue", "💙"),
    ("Green", "💚"),
    ("Yellow", "💛"),
    ("Orange", "🧡"),
    ("Purple", "💜"),
    ("Pink", "🌸"),
    ("Brown", "🤎"),
    ("Black", "🖤"),
    ("White", "🤍"),
];

/// Shapes: name, picture, side count (0 = curved, no countable sides).
pub const SHAPES: &[(&str, &str, u8)] = &[
    ("Circle", "🔵", 0),
    ("Triangle", "🔺", 3),
    ("Square", "🟩", 4),
    ("Rectangle", "🟦", 4),
    ("Pentagon", "⬠", 5),
    ("Hexagon", "⬡", 6),
    ("Oval", "🥚", 0),
    ("Diamond", "🔶", 4),
    ("Star", "⭐", 0),
    ("Heart", "❤️", 0),
];

/// Shapes with a countable, unique side count — used for "how many sides"
/// questions (square/rectangle share 4, so only one of them appears here).
pub const POLYGONS: &[(&str, &str, u8)] = &[
    ("Triangle", "🔺", 3),
    ("Square", "🟩", 4),
    ("Pentagon", "⬠", 5),
    ("Hexagon", "⬡", 6),
];

/// Number words 0–20, indexed by value.
pub const NUMBER_WORDS: &[&str] = &[
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight",
    "nine", "ten", "eleven", "twelve", "thirteen", "fourteen", "fifteen",
    "sixteen", "seventeen", "eighteen", "nineteen", "twenty",
];

/// Reward stickers, cycled across every-5th-level payouts.
pub const STICKERS: &[&str] = &[
    "🦄", "🚀", "🌟", "🐬", "🦋", "🌈", "🍭", "🐼", "⚽", "🎈", "🦖", "🎁",
];
