// Sentence segmentation on `.`, `!` and `?` boundaries.
use once_cell::sync::Lazy;
use regex::Regex;

// A run of non-boundary characters plus at most one trailing boundary.
static SENTENCE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^.!?]+[.!?]?").unwrap());

/// Lazy iterator over the trimmed, non-empty sentences of a text.
///
/// A clone resumes from the same position. Clone before iterating, or call
/// `segment` again, to walk the text a second time.
#[derive(Debug, Clone)]
pub struct Sentences<'a> {
    text: &'a str,
    pos: usize,
}

/// Split `text` into sentence spans, keeping each boundary character at the
/// end of its span and dropping whitespace-only spans.
pub fn segment(text: &str) -> Sentences<'_> {
    Sentences { text, pos: 0 }
}

impl<'a> Iterator for Sentences<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        while self.pos < self.text.len() {
            let m = SENTENCE_PATTERN.find_at(self.text, self.pos)?;
            self.pos = m.end();
            let span = m.as_str().trim();
            if !span.is_empty() {
                return Some(span);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_keeps_boundaries() {
        let sentences: Vec<&str> = segment("I am so sad. I cried all night! Why?").collect();
        assert_eq!(sentences, vec!["I am so sad.", "I cried all night!", "Why?"]);
    }

    #[test]
    fn test_segment_without_boundaries() {
        let sentences: Vec<&str> = segment("  just one line of text  ").collect();
        assert_eq!(sentences, vec!["just one line of text"]);
    }

    #[test]
    fn test_segment_empty_and_blank() {
        assert_eq!(segment("").count(), 0);
        assert_eq!(segment("   \n\t ").count(), 0);
    }

    #[test]
    fn test_segment_drops_whitespace_spans() {
        let sentences: Vec<&str> = segment("First.   \n  Second.   ").collect();
        assert_eq!(sentences, vec!["First.", "Second."]);
    }

    #[test]
    fn test_segment_skips_repeated_boundaries() {
        let sentences: Vec<&str> = segment("...Wow!! Really?!").collect();
        assert_eq!(sentences, vec!["Wow!", "Really?"]);
    }

    #[test]
    fn test_segment_is_restartable() {
        let text = "One. Two. Three.";
        let mut first = segment(text);
        assert_eq!(first.next(), Some("One."));
        let rest: Vec<&str> = first.clone().collect();
        assert_eq!(rest, vec!["Two.", "Three."]);
        assert_eq!(first.count(), 2);
        assert_eq!(segment(text).count(), 3);
    }

    #[test]
    fn test_segment_handles_multibyte_text() {
        let sentences: Vec<&str> = segment("Não sei. Você está bem?").collect();
        assert_eq!(sentences, vec!["Não sei.", "Você está bem?"]);
    }
}
