use std::collections::HashMap;
use once_cell::sync::Lazy;
use ns_core::{Result, SentimentScorer};

static LEXICON: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    [
        // positive
        ("good", 0.7), ("great", 0.8), ("excellent", 1.0), ("amazing", 0.6),
        ("wonderful", 1.0), ("best", 1.0), ("better", 0.5), ("positive", 0.23),
        ("happy", 0.8), ("glad", 0.5), ("success", 0.3), ("successful", 0.75),
        ("win", 0.8), ("wins", 0.8), ("won", 0.5), ("gain", 0.4), ("gains", 0.4),
        ("improve", 0.4), ("improved", 0.4), ("improvement", 0.4), ("strong", 0.43),
        ("growth", 0.3), ("hope", 0.3), ("hopeful", 0.5), ("love", 0.5),
        ("beautiful", 0.85), ("nice", 0.6), ("safe", 0.5), ("welcome", 0.8),
        ("welcomed", 0.5), ("benefit", 0.4), ("benefits", 0.4), ("easy", 0.43),
        ("fair", 0.7), ("fine", 0.42), ("free", 0.4), ("fresh", 0.3), ("impressive", 1.0),
        ("innovative", 0.5), ("perfect", 1.0), ("popular", 0.6), ("praise", 0.5),
        ("progress", 0.3), ("record", 0.2), ("recovery", 0.3), ("remarkable", 0.75),
        ("robust", 0.5), ("celebrate", 0.6), ("celebrated", 0.5), ("support", 0.2),
        ("thrilled", 0.8), ("useful", 0.3), ("valuable", 0.5), ("boost", 0.4),
        // negative
        ("bad", -0.7), ("worse", -0.4), ("worst", -1.0), ("terrible", -1.0),
        ("awful", -1.0), ("horrible", -1.0), ("poor", -0.4), ("negative", -0.3),
        ("sad", -0.5), ("angry", -0.5), ("fear", -0.6), ("fears", -0.6), ("afraid", -0.6),
        ("crisis", -0.5), ("disaster", -0.8), ("fail", -0.5), ("failed", -0.5),
        ("failure", -0.6), ("loss", -0.4), ("losses", -0.4), ("lose", -0.4), ("lost", -0.3),
        ("weak", -0.38), ("decline", -0.3), ("declined", -0.3), ("drop", -0.2),
        ("dangerous", -0.6), ("danger", -0.5), ("death", -0.6), ("dead", -0.2),
        ("killed", -0.6), ("violence", -0.7), ("violent", -0.8), ("war", -0.5),
        ("attack", -0.5), ("threat", -0.4), ("risk", -0.3), ("problem", -0.3),
        ("problems", -0.3), ("difficult", -0.5), ("hard", -0.29), ("wrong", -0.5),
        ("corrupt", -0.5), ("scandal", -0.6), ("criticized", -0.4), ("critics", -0.2),
        ("damage", -0.5), ("delay", -0.2), ("delays", -0.2), ("ugly", -0.7),
        ("hate", -0.8), ("stupid", -0.8), ("broken", -0.4), ("unfortunately", -0.5),
        ("collapse", -0.6), ("worried", -0.5), ("concern", -0.2), ("concerns", -0.2),
    ]
    .into_iter()
    .collect()
});

static INTENSIFIERS: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    [
        ("very", 1.3), ("really", 1.3), ("extremely", 1.5), ("incredibly", 1.4),
        ("highly", 1.3), ("so", 1.2), ("too", 1.2), ("quite", 1.1), ("most", 1.2),
        ("slightly", 0.7), ("somewhat", 0.8), ("fairly", 0.9),
    ]
    .into_iter()
    .collect()
});

const NEGATIONS: &[&str] = &["not", "no", "never", "neither", "nor", "hardly", "without"];

/// Flips and dampens the polarity of a negated word.
const NEGATION_FACTOR: f64 = -0.5;

/// Averages word polarities from a built-in lexicon.
///
/// A word preceded by an intensifier is scaled by it, and a negation in the
/// two tokens before a word flips it. Text with no known words scores 0.0.
#[derive(Debug, Default, Clone)]
pub struct LexiconScorer;

impl LexiconScorer {
    pub fn new() -> Self {
        Self
    }

    pub fn score(&self, text: &str) -> f64 {
        let tokens = tokenize(text);
        let mut contributions = Vec::new();

        for (i, token) in tokens.iter().enumerate() {
            let Some(&base) = LEXICON.get(token.as_str()) else {
                continue;
            };

            let mut value = base;
            if i > 0 {
                if let Some(&factor) = INTENSIFIERS.get(tokens[i - 1].as_str()) {
                    value *= factor;
                }
            }
            if tokens[i.saturating_sub(2)..i].iter().any(|t| is_negation(t)) {
                value *= NEGATION_FACTOR;
            }
            contributions.push(value);
        }

        if contributions.is_empty() {
            return 0.0;
        }
        let mean = contributions.iter().sum::<f64>() / contributions.len() as f64;
        mean.clamp(-1.0, 1.0)
    }
}

impl SentimentScorer for LexiconScorer {
    fn name(&self) -> &str {
        "lexicon"
    }

    fn polarity(&self, text: &str) -> Result<f64> {
        Ok(self.score(text))
    }
}

fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '\'' || c == '\u{2019}'))
        .map(|t| {
            t.trim_matches(|c: char| c == '\'' || c == '\u{2019}')
                .replace('\u{2019}', "'")
                .to_lowercase()
        })
        .filter(|t| !t.is_empty())
        .collect()
}

fn is_negation(token: &str) -> bool {
    NEGATIONS.contains(&token) || token.ends_with("n't")
}
