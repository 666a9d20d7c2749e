// Emotion lexicons: one word table per supported language.
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::{MoodError, Result};

/// Emotion category. Declaration order is the tie-break order used by the scorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Joy,
    Sadness,
    Anger,
    Fear,
    Disgust,
    Surprise,
}

impl Category {
    pub const COUNT: usize = 6;

    /// All categories in declaration order.
    pub const ALL: [Category; Category::COUNT] = [
        Category::Joy,
        Category::Sadness,
        Category::Anger,
        Category::Fear,
        Category::Disgust,
        Category::Surprise,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::Joy => "joy",
            Category::Sadness => "sadness",
            Category::Anger => "anger",
            Category::Fear => "fear",
            Category::Disgust => "disgust",
            Category::Surprise => "surprise",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = MoodError;

    fn from_str(s: &str) -> Result<Self> {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.name() == s)
            .ok_or_else(|| MoodError::invalid_argument(format!("unknown emotion category: {:?}", s)))
    }
}

/// Language selector for picking a lexicon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Pt,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Pt => "pt",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = MoodError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Language::En),
            "pt" => Ok(Language::Pt),
            "" => Err(MoodError::invalid_argument("missing language selector")),
            other => Err(MoodError::invalid_argument(format!(
                "unsupported language: {:?} (expected \"en\" or \"pt\")",
                other
            ))),
        }
    }
}

/// Trigger words per category, indexed by `Category::index()`.
#[derive(Debug)]
pub struct Lexicon {
    language: Language,
    words: [HashSet<&'static str>; Category::COUNT],
}

impl Lexicon {
    /// Build a lexicon from word lists given in category declaration order.
    /// Words are expected to be lowercase already.
    pub fn new(language: Language, lists: [&[&'static str]; Category::COUNT]) -> Self {
        Lexicon {
            language,
            words: lists.map(|list| list.iter().copied().collect()),
        }
    }

    /// The shared, immutable lexicon for `language`.
    pub fn for_language(language: Language) -> &'static Lexicon {
        match language {
            Language::En => &EMOTION_WORDS_EN,
            Language::Pt => &EMOTION_WORDS_PT,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn words(&self, category: Category) -> &HashSet<&'static str> {
        &self.words[category.index()]
    }

    /// Iterate categories and their word sets in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = (Category, &HashSet<&'static str>)> {
        Category::ALL.iter().map(move |&c| (c, &self.words[c.index()]))
    }
}

static EMOTION_WORDS_EN: Lazy<Lexicon> = Lazy::new(|| {
    Lexicon::new(
        Language::En,
        [
            &["happy", "joy", "glad", "delighted", "hope", "triumphant", "laugh"],
            &[
                "sad", "down", "tear", "cry", "cried", "cries", "crying", "sorrow", "melancholy",
                "depressed",
            ],
            &["angry", "rage", "furious", "irritated", "mad", "hate"],
            &["fear", "scared", "terrified", "afraid", "nervous", "panic"],
            &["disgust", "nausea", "revulsion", "repelled", "sick"],
            &["surprised", "shocked", "astonished", "amazed"],
        ],
    )
});

// Portuguese words are stored without diacritics ("esperanca", "lagrima").
static EMOTION_WORDS_PT: Lazy<Lexicon> = Lazy::new(|| {
    Lexicon::new(
        Language::Pt,
        [
            &["feliz", "alegria", "contente", "animado", "esperanca", "riso"],
            &["triste", "desanimo", "lagrima", "chorar", "melancolia", "deprimido"],
            &["raiva", "furioso", "irritado", "odio"],
            &["medo", "assustado", "apavorado", "nervoso", "panico"],
            &["nojo", "repulsa", "enojado"],
            &["surpreso", "chocado", "espantado", "admirado"],
        ],
    )
});
