// Per-sentence emotion scoring against a lexicon.
use std::collections::HashMap;

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::nlp::lexicon::{Category, Lexicon};
use crate::nlp::presentation;

static WORD_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").unwrap());

/// Trigger-word counts, one slot per category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Scores([u32; Category::COUNT]);

impl Scores {
    pub fn get(&self, category: Category) -> u32 {
        self.0[category.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, u32)> + '_ {
        Category::ALL.iter().map(move |&c| (c, self.0[c.index()]))
    }

    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }

    /// Highest-scoring category, first in declaration order on ties.
    /// `None` when every score is zero.
    pub fn dominant(&self) -> Option<Category> {
        let mut best: Option<(Category, u32)> = None;
        for (category, score) in self.iter() {
            if score == 0 {
                continue;
            }
            match best {
                Some((_, top)) if top >= score => {}
                _ => best = Some((category, score)),
            }
        }
        best.map(|(c, _)| c)
    }
}

impl Serialize for Scores {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Category::COUNT))?;
        for (category, score) in self.iter() {
            map.serialize_entry(category.name(), &score)?;
        }
        map.end()
    }
}

/// Scoring outcome for one sentence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentenceResult {
    pub sentence: String,
    pub scores: Scores,
    pub dominant: Option<Category>,
    pub color: Option<&'static str>,
    pub music: Option<&'static str>,
}

/// Lowercase word tokens; punctuation never forms a token.
pub fn tokenize(s: &str) -> Vec<String> {
    let lowered = s.to_lowercase();
    WORD_PATTERN
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

pub fn score_sentence(sentence: &str, lexicon: &Lexicon) -> SentenceResult {
    let mut word_counts: HashMap<String, u32> = HashMap::new();
    for token in tokenize(sentence) {
        *word_counts.entry(token).or_insert(0) += 1;
    }

    let mut scores = Scores::default();
    for (category, words) in lexicon.entries() {
        scores.0[category.index()] = words
            .iter()
            .map(|w| word_counts.get(*w).copied().unwrap_or(0))
            .sum();
    }

    let dominant = scores.dominant();
    let look = dominant.map(presentation::for_category);
    debug!("scored {:?}: {:?} -> {:?}", sentence, scores.0, dominant);

    SentenceResult {
        sentence: sentence.to_string(),
        scores,
        dominant,
        color: look.map(|p| p.color),
        music: look.map(|p| p.music),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::lexicon::Language;

    fn en() -> &'static Lexicon {
        Lexicon::for_language(Language::En)
    }

    #[test]
    fn test_tokenize_lowercases_and_strips_punctuation() {
        assert_eq!(tokenize("I'm SO happy, really!"), vec!["i", "m", "so", "happy", "really"]);
        assert_eq!(tokenize("snake_case 42"), vec!["snake_case", "42"]);
        assert!(tokenize("...!?").is_empty());
    }

    #[test]
    fn test_tokenize_unicode_words() {
        assert_eq!(tokenize("Está ÓTIMO"), vec!["está", "ótimo"]);
    }

    #[test]
    fn test_score_sadness_sentence() {
        let result = score_sentence("I am so sad.", en());
        assert_eq!(result.scores.get(Category::Sadness), 1);
        assert_eq!(result.dominant, Some(Category::Sadness));
        assert_eq!(result.color, Some("blue"));
        assert_eq!(result.music, Some("slow, calm music"));
    }

    #[test]
    fn test_repeated_words_are_counted() {
        let result = score_sentence("Happy happy joy, but I hate mondays.", en());
        assert_eq!(result.scores.get(Category::Joy), 3);
        assert_eq!(result.scores.get(Category::Anger), 1);
        assert_eq!(result.dominant, Some(Category::Joy));
    }

    #[test]
    fn test_no_matches_gives_no_dominant() {
        let result = score_sentence("The sky is blue.", en());
        assert_eq!(result.scores.total(), 0);
        assert_eq!(result.scores.iter().count(), Category::COUNT);
        assert_eq!(result.dominant, None);
        assert_eq!(result.color, None);
        assert_eq!(result.music, None);
    }

    #[test]
    fn test_tie_breaks_on_declaration_order() {
        let result = score_sentence("I was glad but furious.", en());
        assert_eq!(result.scores.get(Category::Joy), 1);
        assert_eq!(result.scores.get(Category::Anger), 1);
        assert_eq!(result.dominant, Some(Category::Joy));

        let result = score_sentence("Furious and scared.", en());
        assert_eq!(result.dominant, Some(Category::Anger));
    }

    #[test]
    fn test_partial_words_do_not_match() {
        let result = score_sentence("Sadly, the madness continued.", en());
        assert_eq!(result.dominant, None);
    }

    #[test]
    fn test_scoring_is_idempotent() {
        let a = score_sentence("Shocked and amazed, then afraid.", en());
        let b = score_sentence("Shocked and amazed, then afraid.", en());
        assert_eq!(a, b);
        assert_eq!(a.dominant, Some(Category::Surprise));
    }

    #[test]
    fn test_scores_serialize_in_declaration_order() {
        let result = score_sentence("I feel sick.", en());
        let json = serde_json::to_string(&result.scores).unwrap();
        assert_eq!(
            json,
            r#"{"joy":0,"sadness":0,"anger":0,"fear":0,"disgust":1,"surprise":0}"#
        );
    }

    #[test]
    fn test_sentence_result_serializes_dominant_as_name() {
        let result = score_sentence("So happy.", en());
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["sentence"], "So happy.");
        assert_eq!(value["dominant"], "joy");
        assert_eq!(value["color"], "yellow");

        let neutral = serde_json::to_value(score_sentence("Nothing here.", en())).unwrap();
        assert!(neutral["dominant"].is_null());
        assert!(neutral["music"].is_null());
    }
}
