//! Extractive summarization
//!
//! The [`Summarizer`] trait is the seam between the processing pipeline and
//! the statistical ranking, so the ranking implementation stays swappable
//! without touching the processor or batch orchestrator.

use nalgebra::DMatrix;
use once_cell::sync::Lazy;
use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};
use std::collections::{HashMap, HashSet};
use tracing::debug;

static SENTENCE_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]+(?:\s+|$)").expect("sentence boundary pattern is valid"));

static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Za-z']+").expect("word pattern is valid"));

/// Fallback output length when the text cannot be ranked
const FALLBACK_CHAR_LIMIT: usize = 200;

/// Extractive summarizer contract
///
/// Selects up to `sentence_count` representative sentences, returned joined
/// with single spaces in their original order of appearance. Must never
/// panic; any failure ends in the truncation fallback.
pub trait Summarizer: Send + Sync {
    fn summarize(&self, text: &str, sentence_count: usize) -> String;
}

/// LSA-based summarizer for English text
///
/// Holds the stemmer and stopword list as immutable configuration built once
/// at startup and shared read-only across requests.
pub struct LsaSummarizer {
    stemmer: Stemmer,
    stopwords: HashSet<String>,
}

impl LsaSummarizer {
    pub fn new() -> Self {
        let stopwords = stop_words::get(stop_words::LANGUAGE::English)
            .into_iter()
            .collect();
        Self {
            stemmer: Stemmer::create(Algorithm::English),
            stopwords,
        }
    }

    /// Lowercased, stopword-filtered, stemmed terms of a sentence
    fn terms(&self, sentence: &str) -> Vec<String> {
        WORD.find_iter(sentence)
            .map(|m| m.as_str().to_lowercase())
            .filter(|w| !self.stopwords.contains(w))
            .map(|w| self.stemmer.stem(&w).to_string())
            .collect()
    }

    /// Rank sentences via SVD of the term-sentence matrix
    ///
    /// Scores follow Steinberger-Ježek: each sentence's weight is the norm of
    /// its singular-value-scaled row in V^T across the leading topics.
    /// Returns the selected indices in ascending (document) order, or None
    /// when the text yields no usable terms.
    fn rank(&self, sentences: &[&str], sentence_count: usize) -> Option<Vec<usize>> {
        let term_lists: Vec<Vec<String>> = sentences.iter().map(|s| self.terms(s)).collect();

        let mut vocabulary: HashMap<&str, usize> = HashMap::new();
        for terms in &term_lists {
            for term in terms {
                let next = vocabulary.len();
                vocabulary.entry(term.as_str()).or_insert(next);
            }
        }
        if vocabulary.is_empty() {
            return None;
        }

        let mut matrix = DMatrix::<f64>::zeros(vocabulary.len(), sentences.len());
        for (col, terms) in term_lists.iter().enumerate() {
            for term in terms {
                let row = vocabulary[term.as_str()];
                matrix[(row, col)] += 1.0;
            }
        }

        let svd = matrix.svd(false, true);
        let v_t = svd.v_t?;
        let singular = &svd.singular_values;
        let topics = singular.len().min(sentence_count);

        let mut scores: Vec<(usize, f64)> = (0..sentences.len())
            .map(|col| {
                let mut score = 0.0;
                for topic in 0..topics {
                    let weight = singular[topic] * v_t[(topic, col)];
                    score += weight * weight;
                }
                (col, score.sqrt())
            })
            .collect();

        scores.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        let mut selected: Vec<usize> = scores
            .into_iter()
            .take(sentence_count)
            .map(|(col, _)| col)
            .collect();
        // User-visible contract: output keeps document order, not rank order
        selected.sort_unstable();
        Some(selected)
    }
}

impl Default for LsaSummarizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Summarizer for LsaSummarizer {
    fn summarize(&self, text: &str, sentence_count: usize) -> String {
        let count = sentence_count.max(1);
        let sentences = split_sentences(text);

        if sentences.is_empty() {
            return truncate_fallback(text);
        }
        if sentences.len() <= count {
            // Fewer sentences than requested: return all, no padding
            return sentences.join(" ");
        }

        match self.rank(&sentences, count) {
            Some(selected) => selected
                .iter()
                .map(|&col| sentences[col])
                .collect::<Vec<_>>()
                .join(" "),
            None => {
                debug!("no rankable terms in input, using truncation fallback");
                truncate_fallback(text)
            }
        }
    }
}

/// Split text into trimmed sentences at `.`, `!`, `?` boundaries
fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    for boundary in SENTENCE_BOUNDARY.find_iter(text) {
        let sentence = text[start..boundary.end()].trim();
        if !sentence.is_empty() {
            sentences.push(sentence);
        }
        start = boundary.end();
    }
    let tail = text[start..].trim();
    if !tail.is_empty() {
        sentences.push(tail);
    }
    sentences
}

/// Terminal recovery path: first 200 characters plus an ellipsis marker
fn truncate_fallback(text: &str) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(FALLBACK_CHAR_LIMIT).collect();
    if chars.next().is_some() {
        format!("{}...", head)
    } else {
        head
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summarizer() -> LsaSummarizer {
        LsaSummarizer::new()
    }

    #[test]
    fn test_split_sentences() {
        let sentences = split_sentences("Great news! Sales grew. Costs fell. Staff happy.");
        assert_eq!(
            sentences,
            vec!["Great news!", "Sales grew.", "Costs fell.", "Staff happy."]
        );
    }

    #[test]
    fn test_split_sentences_without_terminal_punctuation() {
        assert_eq!(split_sentences("no punctuation"), vec!["no punctuation"]);
        assert!(split_sentences("").is_empty());
    }

    #[test]
    fn test_returns_all_when_count_exceeds_sentences() {
        let text = "Sales grew strongly. Costs fell sharply.";
        assert_eq!(summarizer().summarize(text, 10), text);
    }

    #[test]
    fn test_selects_requested_count_in_document_order() {
        let text = "Revenue doubled this quarter. Marketing spend shrank considerably. \
                    Engineering shipped the flagship product. Customers praised the release. \
                    Retention improved across every cohort.";
        let sentences = split_sentences(text);
        let summary = summarizer().summarize(text, 2);

        let picked: Vec<&&str> = sentences.iter().filter(|s| summary.contains(**s)).collect();
        assert_eq!(picked.len(), 2);

        // Document order: the summary is the picked sentences joined in order
        let expected = picked
            .iter()
            .map(|s| **s)
            .collect::<Vec<_>>()
            .join(" ");
        assert_eq!(summary, expected);
    }

    #[test]
    fn test_never_panics_on_arbitrary_input() {
        let s = summarizer();
        for input in ["", " ", "...", "!!!", "a", "🙂", "1 2 3"] {
            let _ = s.summarize(input, 3);
        }
    }

    #[test]
    fn test_empty_input_gives_empty_summary() {
        assert_eq!(summarizer().summarize("", 3), "");
    }

    #[test]
    fn test_fallback_truncation_at_200_chars() {
        // Digit-only sentences survive sentence splitting but produce no
        // rankable terms, which forces the fallback path.
        let mut text = String::new();
        while text.chars().count() < 250 {
            text.push_str("12345 67890. ");
        }
        let text: String = text.chars().take(250).collect();
        assert_eq!(text.chars().count(), 250);

        let summary = summarizer().summarize(&text, 2);
        let expected: String = text.chars().take(200).collect();
        assert_eq!(summary, format!("{}...", expected));
    }

    #[test]
    fn test_truncate_fallback_short_input_unchanged() {
        assert_eq!(truncate_fallback("short"), "short");
        let exactly_200: String = "x".repeat(200);
        assert_eq!(truncate_fallback(&exactly_200), exactly_200);
    }

    #[test]
    fn test_terms_filters_stopwords_and_stems() {
        let s = summarizer();
        let terms = s.terms("The running dogs are faster");
        assert!(!terms.iter().any(|t| t == "the" || t == "are"));
        assert!(terms.iter().any(|t| t == "run"));
    }
}
