// Line-based sentiment analysis over a pluggable binary classifier.
// The built-in classifier is lexicon based; an external model can be wired in
// through `CommandClassifier` or any other `SentimentClassifier` impl.
use std::collections::HashSet;
use std::fmt;
use std::process::Command;
use std::str::FromStr;

use log::{debug, info, warn};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::{MoodError, Result};
use crate::nlp::presentation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Polarity {
    Positive,
    Negative,
}

impl Polarity {
    pub fn label(self) -> &'static str {
        match self {
            Polarity::Positive => "POSITIVE",
            Polarity::Negative => "NEGATIVE",
        }
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Polarity {
    type Err = MoodError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "POSITIVE" => Ok(Polarity::Positive),
            "NEGATIVE" => Ok(Polarity::Negative),
            other => Err(MoodError::invalid_argument(format!("unknown sentiment label: {:?}", other))),
        }
    }
}

/// Classifier verdict for one line of text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub label: Polarity,
    pub confidence: f32,
}

impl Classification {
    pub fn new(label: Polarity, confidence: f32) -> Result<Self> {
        if !(0.0..=1.0).contains(&confidence) {
            return Err(MoodError::invalid_argument(format!(
                "confidence {} is outside [0, 1]",
                confidence
            )));
        }
        Ok(Classification { label, confidence })
    }

    /// Confidence signed by polarity.
    pub fn signed_score(&self) -> f32 {
        match self.label {
            Polarity::Positive => self.confidence,
            Polarity::Negative => -self.confidence,
        }
    }
}

pub trait SentimentClassifier {
    fn classify(&self, line: &str) -> Result<Classification>;
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineResult {
    pub line: String,
    pub label: Polarity,
    pub score: f32,
    pub color: &'static str,
}

/// Classify every non-blank line of `text`.
pub fn analyze_lines<C: SentimentClassifier + ?Sized>(text: &str, classifier: &C) -> Result<Vec<LineResult>> {
    let mut results = Vec::new();
    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let verdict = classifier.classify(line)?;
        debug!("classified {:?}: {} ({:.3})", line, verdict.label, verdict.confidence);
        results.push(LineResult {
            line: line.to_string(),
            label: verdict.label,
            score: verdict.signed_score(),
            color: presentation::for_polarity(verdict.label).color,
        });
    }
    info!("classified {} line(s)", results.len());
    Ok(results)
}

/// Music for the mean signed score; `None` for no lines.
pub fn overall_music(results: &[LineResult]) -> Option<&'static str> {
    if results.is_empty() {
        return None;
    }
    let avg = results.iter().map(|r| r.score).sum::<f32>() / results.len() as f32;
    let polarity = if avg >= 0.0 { Polarity::Positive } else { Polarity::Negative };
    Some(presentation::for_polarity(polarity).music)
}

// Positive words lexicon
static POSITIVE_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "good", "great", "excellent", "wonderful", "fantastic", "amazing", "awesome",
        "love", "happy", "joy", "pleased", "delighted", "satisfied", "perfect",
        "beautiful", "brilliant", "glad", "hope", "calm", "peaceful", "proud",
        "grateful", "thankful", "laugh", "smile", "fun", "best", "better",
        "success", "win", "triumph", "enjoy", "pleasant", "excited", "thrilled",
        "like", "liked", "favorite",
    ]
    .iter()
    .copied()
    .collect()
});

// Negative words lexicon
static NEGATIVE_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "bad", "terrible", "awful", "horrible", "poor", "worst", "worse",
        "hate", "angry", "sad", "upset", "disappointed", "unhappy", "cry", "cried",
        "tears", "lonely", "afraid", "scared", "fear", "furious", "sick",
        "fail", "failure", "failed", "wrong", "hurt", "pain", "painful",
        "loss", "lost", "dislike", "frustrated", "miserable", "depressed",
    ]
    .iter()
    .copied()
    .collect()
});

static INTENSIFIERS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    ["very", "extremely", "absolutely", "really", "incredibly", "highly", "totally", "so"]
        .iter()
        .copied()
        .collect()
});

static NEGATIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    ["not", "no", "never", "nothing", "nobody", "neither", "nor", "none", "don't", "isn't", "wasn't"]
        .iter()
        .copied()
        .collect()
});

/// Word-list classifier. Intensifiers weight the next word by 1.5; a negation
/// in the two preceding words flips the word's polarity.
#[derive(Debug, Default, Clone, Copy)]
pub struct LexiconClassifier;

impl SentimentClassifier for LexiconClassifier {
    fn classify(&self, line: &str) -> Result<Classification> {
        let words: Vec<String> = line
            .to_lowercase()
            .split(|c: char| !c.is_alphanumeric() && c != '\'')
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();

        let mut positive_score = 0.0f32;
        let mut negative_score = 0.0f32;

        for (i, word) in words.iter().enumerate() {
            let multiplier = if i > 0 && INTENSIFIERS.contains(words[i - 1].as_str()) {
                1.5
            } else {
                1.0
            };
            let is_negated = (i > 0 && NEGATIONS.contains(words[i - 1].as_str()))
                || (i > 1 && NEGATIONS.contains(words[i - 2].as_str()));

            let positive = if POSITIVE_WORDS.contains(word.as_str()) {
                true
            } else if NEGATIVE_WORDS.contains(word.as_str()) {
                false
            } else {
                continue;
            };

            if positive != is_negated {
                positive_score += multiplier;
            } else {
                negative_score += multiplier;
            }
        }

        let total = positive_score + negative_score;
        if total == 0.0 {
            return Classification::new(Polarity::Positive, 0.5);
        }
        if negative_score > positive_score {
            Classification::new(Polarity::Negative, negative_score / total)
        } else {
            Classification::new(Polarity::Positive, positive_score / total)
        }
    }
}

#[derive(Debug, Deserialize)]
struct CommandVerdict {
    label: String,
    score: f32,
}

/// Runs an external sentiment model once per line. The line is passed as the
/// last argument; stdout must be `{"label": "POSITIVE"|"NEGATIVE", "score": f}`.
#[derive(Debug, Clone)]
pub struct CommandClassifier {
    program: String,
    args: Vec<String>,
}

impl CommandClassifier {
    pub fn new<S: Into<String>>(program: S) -> Self {
        CommandClassifier {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Parse a shell-like command line (whitespace separated, no quoting).
    pub fn from_command_line(command_line: &str) -> Result<Self> {
        let mut parts = command_line.split_whitespace();
        let program = parts
            .next()
            .ok_or_else(|| MoodError::invalid_argument("empty classifier command"))?;
        Ok(CommandClassifier {
            program: program.to_string(),
            args: parts.map(String::from).collect(),
        })
    }

    pub fn arg<S: Into<String>>(mut self, arg: S) -> Self {
        self.args.push(arg.into());
        self
    }
}

impl SentimentClassifier for CommandClassifier {
    fn classify(&self, line: &str) -> Result<Classification> {
        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(line)
            .output()
            .map_err(|e| MoodError::classifier(format!("failed to invoke {}: {}", self.program, e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(MoodError::classifier(format!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                stderr.trim()
            )));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let verdict: CommandVerdict = serde_json::from_str(stdout.trim()).map_err(|e| {
            warn!("unparsable classifier output from {}: {:?}", self.program, stdout.trim());
            MoodError::classifier(format!("invalid classifier output: {}", e))
        })?;

        let label: Polarity = verdict.label.parse()?;
        Classification::new(label, verdict.score)
    }
}
