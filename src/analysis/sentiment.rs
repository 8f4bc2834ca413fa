//! Lexicon-based sentiment polarity
//!
//! Each word found in the lexicon contributes its polarity. An intensifier
//! directly before it scales the value, and a negator among the three
//! preceding words flips and halves it. The text's polarity is the mean
//! contribution, clamped to [-1, 1].

use rustc_hash::{FxHashMap, FxHashSet};
use unicode_segmentation::UnicodeSegmentation;

/// How far back a negator still applies
const NEGATION_WINDOW: usize = 3;

/// Applied to a negated polarity
const NEGATION_FACTOR: f64 = -0.5;

const POLARITIES: &[(&str, f64)] = &[
    // positive
    ("good", 0.7),
    ("great", 0.8),
    ("excellent", 1.0),
    ("amazing", 0.6),
    ("awesome", 1.0),
    ("wonderful", 1.0),
    ("fantastic", 0.4),
    ("outstanding", 0.5),
    ("superb", 1.0),
    ("brilliant", 0.9),
    ("perfect", 1.0),
    ("best", 1.0),
    ("better", 0.5),
    ("nice", 0.6),
    ("pleasant", 0.7),
    ("happy", 0.8),
    ("glad", 0.5),
    ("love", 0.5),
    ("loved", 0.7),
    ("like", 0.2),
    ("enjoy", 0.4),
    ("enjoyed", 0.4),
    ("beautiful", 0.85),
    ("impressive", 1.0),
    ("positive", 0.23),
    ("success", 0.3),
    ("successful", 0.75),
    ("effective", 0.6),
    ("efficient", 0.5),
    ("helpful", 0.5),
    ("useful", 0.3),
    ("valuable", 0.5),
    ("reliable", 0.5),
    ("innovative", 0.5),
    ("remarkable", 0.75),
    ("favorable", 0.5),
    ("improve", 0.3),
    ("improved", 0.3),
    ("benefit", 0.3),
    ("beneficial", 0.5),
    ("strong", 0.43),
    ("easy", 0.43),
    ("clean", 0.37),
    ("safe", 0.5),
    ("fun", 0.3),
    ("exciting", 0.3),
    ("interesting", 0.5),
    ("important", 0.4),
    ("fine", 0.42),
    ("correct", 0.3),
    ("right", 0.29),
    ("win", 0.8),
    ("fast", 0.2),
    ("lucky", 0.33),
    ("hope", 0.2),
    ("calm", 0.3),
    // negative
    ("bad", -0.7),
    ("worse", -0.4),
    ("worst", -1.0),
    ("terrible", -1.0),
    ("horrible", -1.0),
    ("awful", -1.0),
    ("poor", -0.4),
    ("sad", -0.5),
    ("angry", -0.5),
    ("hate", -0.8),
    ("hated", -0.9),
    ("dislike", -0.5),
    ("ugly", -0.7),
    ("boring", -1.0),
    ("disappointing", -0.6),
    ("disappointed", -0.75),
    ("negative", -0.3),
    ("failure", -0.32),
    ("fail", -0.5),
    ("failed", -0.5),
    ("wrong", -0.5),
    ("problem", -0.3),
    ("difficult", -0.5),
    ("hard", -0.29),
    ("weak", -0.38),
    ("slow", -0.3),
    ("dangerous", -0.6),
    ("harmful", -0.6),
    ("painful", -0.7),
    ("useless", -0.5),
    ("broken", -0.4),
    ("annoying", -0.8),
    ("stupid", -0.8),
    ("dirty", -0.6),
    ("crisis", -0.5),
    ("decline", -0.3),
    ("damage", -0.4),
    ("loss", -0.4),
    ("lose", -0.4),
    ("risk", -0.2),
    ("fear", -0.4),
    ("worried", -0.4),
    ("unfortunately", -0.5),
    ("expensive", -0.5),
    ("sick", -0.71),
    ("dead", -0.2),
];

const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("really", 1.2),
    ("extremely", 1.5),
    ("incredibly", 1.5),
    ("absolutely", 1.4),
    ("highly", 1.3),
    ("totally", 1.3),
    ("truly", 1.2),
    ("so", 1.2),
    ("too", 1.2),
    ("quite", 1.1),
    ("most", 1.3),
];

// Apostrophes are removed by the normalizer, hence the fused forms
const NEGATORS: &[&str] = &[
    "not", "no", "never", "nor", "neither", "nothing", "none", "nobody", "without", "cannot",
    "can't", "cant", "don't", "dont", "doesn't", "doesnt", "didn't", "didnt", "isn't", "isnt",
    "wasn't", "wasnt", "aren't", "arent", "weren't", "werent", "won't", "wont", "wouldn't",
    "wouldnt", "shouldn't", "shouldnt", "couldn't", "couldnt", "hardly",
];

/// Lexicon and modifier tables, built once per engine
#[derive(Debug, Clone)]
pub struct SentimentAnalyzer {
    lexicon: FxHashMap<&'static str, f64>,
    intensifiers: FxHashMap<&'static str, f64>,
    negators: FxHashSet<&'static str>,
}

impl Default for SentimentAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentAnalyzer {
    pub fn new() -> Self {
        Self {
            lexicon: POLARITIES.iter().copied().collect(),
            intensifiers: INTENSIFIERS.iter().copied().collect(),
            negators: NEGATORS.iter().copied().collect(),
        }
    }

    /// Polarity of a single word, if it is in the lexicon
    pub fn word_polarity(&self, word: &str) -> Option<f64> {
        self.lexicon.get(word.to_lowercase().as_str()).copied()
    }

    /// Signed polarity of `text` in [-1, 1]; 0.0 when no polar word occurs
    pub fn polarity(&self, text: &str) -> f64 {
        let words: Vec<String> = text.unicode_words().map(str::to_lowercase).collect();

        let mut total = 0.0;
        let mut count = 0usize;
        for (i, word) in words.iter().enumerate() {
            let Some(&base) = self.lexicon.get(word.as_str()) else {
                continue;
            };

            let mut score = base;
            if let Some(previous) = i.checked_sub(1).map(|p| words[p].as_str()) {
                if let Some(&factor) = self.intensifiers.get(previous) {
                    score *= factor;
                }
            }
            let window = &words[i.saturating_sub(NEGATION_WINDOW)..i];
            if window.iter().any(|w| self.negators.contains(w.as_str())) {
                score *= NEGATION_FACTOR;
            }

            total += score.clamp(-1.0, 1.0);
            count += 1;
        }

        if count == 0 {
            return 0.0;
        }
        (total / count as f64).clamp(-1.0, 1.0)
    }
}
