// Majority vote over per-sentence dominant categories.
use serde::Serialize;

use crate::nlp::lexicon::Category;
use crate::nlp::presentation;
use crate::nlp::scorer::SentenceResult;

pub const NEUTRAL_LABEL: &str = "Texto neutro";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub label: String,
    pub category: Option<Category>,
    pub color: Option<&'static str>,
    pub music: Option<&'static str>,
}

impl Summary {
    pub fn neutral() -> Self {
        Summary {
            label: NEUTRAL_LABEL.to_string(),
            category: None,
            color: None,
            music: None,
        }
    }

    fn of(category: Category) -> Self {
        let look = presentation::for_category(category);
        Summary {
            label: format!("Texto majoritariamente {}.", category),
            category: Some(category),
            color: Some(look.color),
            music: Some(look.music),
        }
    }
}

pub fn summarize(results: &[SentenceResult]) -> Summary {
    // Kept in first-seen order so equal counts resolve to the earliest category.
    let mut tally: Vec<(Category, usize)> = Vec::with_capacity(Category::COUNT);
    for category in results.iter().filter_map(|r| r.dominant) {
        match tally.iter_mut().find(|(c, _)| *c == category) {
            Some((_, n)) => *n += 1,
            None => tally.push((category, 1)),
        }
    }

    let mut winner: Option<(Category, usize)> = None;
    for &(category, count) in &tally {
        match winner {
            Some((_, best)) if best >= count => {}
            _ => winner = Some((category, count)),
        }
    }

    match winner {
        Some((category, _)) => Summary::of(category),
        None => Summary::neutral(),
    }
}
