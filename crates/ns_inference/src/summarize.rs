//! Extractive summarization.
//!
//! Sentences are ranked by how well they cover the article's keywords, how
//! much they share with the title, how close they are to an ideal length
//! and where they sit in the text. The best ones are returned in reading
//! order.

use std::collections::{HashMap, HashSet};
use once_cell::sync::Lazy;

pub const DEFAULT_MAX_SENTENCES: usize = 5;

const NUM_KEYWORDS: usize = 10;
const IDEAL_SENTENCE_WORDS: f64 = 20.0;
const MIN_SENTENCE_CHARS: usize = 10;

static STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "a", "about", "above", "after", "again", "against", "all", "also", "am", "an", "and",
        "any", "are", "as", "at", "be", "because", "been", "before", "being", "below",
        "between", "both", "but", "by", "can", "could", "did", "do", "does", "doing", "down",
        "during", "each", "even", "few", "for", "from", "further", "had", "has", "have",
        "having", "he", "her", "here", "hers", "herself", "him", "himself", "his", "how", "i",
        "if", "in", "into", "is", "it", "its", "itself", "just", "like", "many", "may", "me",
        "more", "most", "much", "must", "my", "myself", "new", "no", "nor", "not", "now", "of",
        "off", "on", "once", "one", "only", "or", "other", "our", "ours", "ourselves", "out",
        "over", "own", "said", "same", "say", "says", "she", "should", "so", "some", "such",
        "than", "that", "the", "their", "theirs", "them", "themselves", "then", "there",
        "these", "they", "this", "those", "through", "to", "too", "two", "under", "until", "up",
        "us", "very", "was", "we", "were", "what", "when", "where", "which", "while", "who",
        "whom", "why", "will", "with", "would", "year", "years", "you", "your", "yours",
        "yourself", "yourselves",
    ]
    .into_iter()
    .collect()
});

/// Words that end in a period without ending the sentence.
static ABBREVIATIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "mr", "mrs", "ms", "dr", "prof", "st", "jr", "sr", "gen", "gov", "sen", "rep", "lt",
        "col", "sgt", "capt", "rev", "hon", "mt", "ft", "vs", "approx", "dept", "jan", "feb",
        "mar", "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec",
    ]
    .into_iter()
    .collect()
});

/// Picks up to `max_sentences` sentences from `text`, in document order.
pub fn summarize(title: &str, text: &str, max_sentences: usize) -> Vec<String> {
    if text.trim().is_empty() || max_sentences == 0 {
        return Vec::new();
    }

    let sentences = split_sentences(text);
    let keywords = keywords(text);
    let title_words = split_words(title);

    let mut ranked: Vec<(usize, f64)> = sentences
        .iter()
        .enumerate()
        .map(|(i, sentence)| {
            let words = split_words(sentence);
            let title_feature = title_score(&title_words, &words);
            let length_feature = length_score(words.len());
            let position_feature = sentence_position(i + 1, sentences.len());
            let frequency = (sbs(&words, &keywords) + dbs(&words, &keywords)) / 2.0 * 10.0;
            let total =
                (title_feature * 1.5 + frequency * 2.0 + length_feature + position_feature) / 4.0;
            (i, total)
        })
        .collect();

    // Stable sort keeps earlier sentences ahead on ties
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    ranked.truncate(max_sentences);
    ranked.sort_by_key(|(i, _)| *i);

    ranked.into_iter().map(|(i, _)| sentences[i].clone()).collect()
}

/// Splits on `.`, `!` or `?` followed by whitespace, and on line breaks.
///
/// A period after a title such as "Mr.", a single initial or a dotted
/// initialism such as "U.S." does not end a sentence.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    for line in text.lines() {
        let mut current = String::new();
        let mut chars = line.chars().peekable();
        while let Some(c) = chars.next() {
            current.push(c);
            let at_boundary = matches!(c, '.' | '!' | '?')
                && chars.peek().map_or(true, |next| next.is_whitespace())
                && !(c == '.' && current.split_whitespace().last().is_some_and(is_abbreviation));
            if at_boundary {
                push_sentence(&mut sentences, &current);
                current.clear();
            }
        }
        push_sentence(&mut sentences, &current);
    }
    sentences
}

fn is_abbreviation(word: &str) -> bool {
    let word = word
        .trim_start_matches(|c: char| !c.is_alphanumeric())
        .trim_end_matches('.');
    if word.is_empty() {
        return false;
    }

    let mut chars = word.chars();
    if let (Some(first), None) = (chars.next(), chars.next()) {
        return first.is_uppercase();
    }
    if word.contains('.') {
        return word
            .split('.')
            .all(|part| part.chars().count() == 1 && part.chars().all(char::is_alphabetic));
    }
    ABBREVIATIONS.contains(word.to_lowercase().as_str())
}

fn push_sentence(sentences: &mut Vec<String>, candidate: &str) {
    let trimmed = candidate.trim();
    if trimmed.chars().count() > MIN_SENTENCE_CHARS {
        sentences.push(trimmed.to_string());
    }
}

/// Lowercased words with punctuation stripped.
pub fn split_words(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|token| {
            token
                .chars()
                .filter(|c| c.is_alphanumeric() || *c == '_')
                .flat_map(char::to_lowercase)
                .collect::<String>()
        })
        .filter(|word| !word.is_empty())
        .collect()
}

/// Top keywords of `text` mapped to a weight slightly above one.
pub fn keywords(text: &str) -> HashMap<String, f64> {
    let words = split_words(text);
    if words.is_empty() {
        return HashMap::new();
    }
    let num_words = words.len() as f64;

    let mut freq: HashMap<&str, usize> = HashMap::new();
    for word in words.iter().filter(|w| !STOPWORDS.contains(w.as_str())) {
        *freq.entry(word.as_str()).or_insert(0) += 1;
    }

    let mut ordered: Vec<(&str, usize)> = freq.into_iter().collect();
    ordered.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| b.0.cmp(a.0)));
    ordered.truncate(NUM_KEYWORDS);

    ordered
        .into_iter()
        .map(|(word, count)| (word.to_string(), count as f64 / num_words * 1.5 + 1.0))
        .collect()
}

fn title_score(title: &[String], sentence: &[String]) -> f64 {
    let title: Vec<&String> = title.iter().filter(|w| !STOPWORDS.contains(w.as_str())).collect();
    if title.is_empty() {
        return 0.0;
    }
    let hits = sentence
        .iter()
        .filter(|w| !STOPWORDS.contains(w.as_str()) && title.contains(w))
        .count();
    hits as f64 / title.len() as f64
}

fn length_score(words: usize) -> f64 {
    1.0 - (IDEAL_SENTENCE_WORDS - words as f64).abs() / IDEAL_SENTENCE_WORDS
}

/// Weight for the sentence at 1-based position `i` out of `size`.
fn sentence_position(i: usize, size: usize) -> f64 {
    if size == 0 {
        return 0.0;
    }
    let normalized = i as f64 / size as f64;
    match normalized {
        n if n > 1.0 => 0.0,
        n if n > 0.9 => 0.15,
        n if n > 0.8 => 0.04,
        n if n > 0.7 => 0.04,
        n if n > 0.6 => 0.06,
        n if n > 0.5 => 0.04,
        n if n > 0.4 => 0.05,
        n if n > 0.3 => 0.08,
        n if n > 0.2 => 0.14,
        n if n > 0.1 => 0.23,
        n if n > 0.0 => 0.17,
        _ => 0.0,
    }
}

/// Summation-based keyword density.
fn sbs(words: &[String], keywords: &HashMap<String, f64>) -> f64 {
    if words.is_empty() {
        return 0.0;
    }
    let score: f64 = words.iter().filter_map(|w| keywords.get(w)).sum();
    (score / words.len() as f64) / 10.0
}

/// Density-based score: rewards keywords that sit close to each other.
fn dbs(words: &[String], keywords: &HashMap<String, f64>) -> f64 {
    if words.is_empty() {
        return 0.0;
    }

    let mut sum = 0.0;
    let mut previous: Option<(usize, f64)> = None;
    for (i, word) in words.iter().enumerate() {
        if let Some(&score) = keywords.get(word) {
            if let Some((prev_i, prev_score)) = previous {
                let distance = (i - prev_i) as f64;
                sum += (score * prev_score) / (distance * distance);
            }
            previous = Some((i, score));
        }
    }

    let distinct: HashSet<&String> = words.iter().filter(|w| keywords.contains_key(*w)).collect();
    let k = distinct.len() as f64 + 1.0;
    sum / (k * (k + 1.0))
}
