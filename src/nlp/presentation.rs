// Color and music suggestions for categories and polarities.
use serde::Serialize;

use crate::error::{MoodError, Result};
use crate::nlp::lexicon::Category;
use crate::nlp::sentiment::Polarity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Presentation {
    pub color: &'static str,
    pub music: &'static str,
}

/// Presentation for an emotion category. Total over the closed set.
pub fn for_category(category: Category) -> Presentation {
    let (color, music) = match category {
        Category::Joy => ("yellow", "upbeat music"),
        Category::Sadness => ("blue", "slow, calm music"),
        Category::Anger => ("red", "intense, fast-paced music"),
        Category::Fear => ("purple", "suspenseful music"),
        Category::Disgust => ("green", "dissonant tones"),
        Category::Surprise => ("orange", "dynamic crescendos"),
    };
    Presentation { color, music }
}

pub fn for_polarity(polarity: Polarity) -> Presentation {
    match polarity {
        Polarity::Positive => Presentation { color: "green", music: "Upbeat tunes" },
        Polarity::Negative => Presentation { color: "red", music: "Relaxing melodies" },
    }
}

/// Look up a presentation by label, accepting category names (`"joy"`) and
/// polarity labels (`"POSITIVE"`). Unknown labels are rejected.
pub fn presentation_for_label(label: &str) -> Result<Presentation> {
    if let Ok(category) = label.parse::<Category>() {
        return Ok(for_category(category));
    }
    if let Ok(polarity) = label.parse::<Polarity>() {
        return Ok(for_polarity(polarity));
    }
    Err(MoodError::invalid_argument(format!("no presentation for label {:?}", label)))
}
