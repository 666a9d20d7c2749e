// Sentence-level emotion analysis: segment, score, summarize.
use std::path::Path;

use log::info;
use serde::Serialize;

use crate::error::Result;
use crate::input::read_file;
use crate::nlp::aggregate::{summarize, Summary};
use crate::nlp::lexicon::{Language, Lexicon};
use crate::nlp::scorer::{score_sentence, SentenceResult};
use crate::nlp::segment::segment;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub sentences: Vec<SentenceResult>,
    pub summary: Summary,
}

pub fn analyze_file(path: &Path, language: Language) -> Result<Analysis> {
    let text = read_file(path)?;
    Ok(analyze_text(&text, language))
}

/// Analyze `text` with the built-in lexicon for `language`.
pub fn analyze_text(text: &str, language: Language) -> Analysis {
    analyze_text_with(text, Lexicon::for_language(language))
}

pub fn analyze_text_with(text: &str, lexicon: &Lexicon) -> Analysis {
    let sentences: Vec<SentenceResult> = segment(text)
        .map(|s| score_sentence(s, lexicon))
        .collect();
    let summary = summarize(&sentences);
    info!(
        "analyzed {} sentence(s) with the {} lexicon: {}",
        sentences.len(),
        lexicon.language(),
        summary.label
    );
    Analysis { sentences, summary }
}
