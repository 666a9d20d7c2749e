// NLP module for MoodMapper
pub mod aggregate;
pub mod lexicon;
pub mod mood;
pub mod presentation;
pub mod scorer;
pub mod segment;
pub mod sentiment;

pub use aggregate::{summarize, Summary};
pub use lexicon::{Category, Language, Lexicon};
pub use mood::{analyze_file, analyze_text, analyze_text_with, Analysis};
pub use scorer::{score_sentence, SentenceResult};
pub use segment::segment;
pub use sentiment::{analyze_lines, overall_music, CommandClassifier, LexiconClassifier, SentimentClassifier};
