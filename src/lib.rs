//! MoodMapper: lexicon-based emotion tagging for short texts.
//!
//! Text is split into sentences, each sentence is scored against an emotion
//! lexicon, and the dominant emotions are reduced to a single summary with a
//! color and music suggestion.
//!
//! ```
//! use moodmapper::nlp::{analyze_text, Category, Language};
//!
//! let analysis = analyze_text("I am so sad. I cried all night.", Language::En);
//! assert_eq!(analysis.summary.category, Some(Category::Sadness));
//! ```

pub mod error;
pub mod export;
pub mod input;
pub mod nlp;

pub use error::{MoodError, Result};
