//! The summarization engine
//!
//! [`TextSummarizer`] owns the immutable registry built at startup: one
//! [`TextProcessor`] per supported language and one [`Scorer`] per method.
//! A call normalizes the text, segments it, scores sentences with the chosen
//! method and assembles the summary in document order. Short inputs are
//! passed through unchanged; any scoring failure degrades to the leading
//! sentences instead of surfacing an error.

use crate::analysis::{text_stats, SentimentAnalyzer};
use crate::errors::Result;
use crate::nlp::language::Language;
use crate::nlp::normalizer::{normalize, word_count};
use crate::nlp::processor::TextProcessor;
use crate::pagerank::CancelToken;
use crate::request::{round_to, SummaryReport, SummaryRequest};
use crate::summarizer::selector::SentenceSelector;
use crate::summarizer::{Scorer, ScoringContext, SentenceScorer};
use crate::types::{SummarizerConfig, SummaryMethod, SummaryOutcome, SummaryResult, TextStats};

/// Extractive summarization engine, safe to share across threads
#[derive(Debug)]
pub struct TextSummarizer {
    config: SummarizerConfig,
    /// Indexed by `Language as usize`
    processors: Vec<TextProcessor>,
    /// Indexed by `SummaryMethod as usize`
    scorers: Vec<Scorer>,
    sentiment: SentimentAnalyzer,
}

impl Default for TextSummarizer {
    fn default() -> Self {
        Self::build(SummarizerConfig::default())
    }
}

impl TextSummarizer {
    /// Validate `config` and build the registry
    pub fn new(config: SummarizerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: SummarizerConfig) -> Self {
        let processors = Language::ALL.iter().map(|&l| TextProcessor::new(l)).collect();
        let scorers = SummaryMethod::ALL
            .iter()
            .map(|&m| Scorer::from_config(m, &config))
            .collect();

        tracing::debug!(
            languages = Language::ALL.len(),
            methods = SummaryMethod::ALL.len(),
            "summarizer registry built"
        );

        Self {
            config,
            processors,
            scorers,
            sentiment: SentimentAnalyzer::new(),
        }
    }

    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    /// Methods accepted by [`TextSummarizer::summarize`]
    pub fn available_methods(&self) -> &'static [SummaryMethod] {
        &SummaryMethod::ALL
    }

    fn processor(&self, language: Language) -> &TextProcessor {
        &self.processors[language as usize]
    }

    fn scorer(&self, method: SummaryMethod) -> &Scorer {
        &self.scorers[method as usize]
    }

    /// Number of sentences to extract.
    ///
    /// An explicit request is clamped to `[1, max_sentences]`. Otherwise
    /// `round(default_ratio × sentence_count)` clamped to
    /// `[default_min_sentences, default_max_sentences]`.
    pub fn target_sentence_count(&self, sentence_count: usize, requested: Option<i64>) -> usize {
        let cfg = &self.config;
        match requested {
            Some(n) if n < 1 => 1,
            Some(n) => usize::try_from(n).map_or(cfg.max_sentences, |n| n.min(cfg.max_sentences)),
            None => {
                let scaled = (cfg.default_ratio * sentence_count as f64).round() as usize;
                scaled.clamp(cfg.default_min_sentences, cfg.default_max_sentences)
            }
        }
    }

    /// Summarize `text` with `method`.
    ///
    /// Never fails: unsupported languages and scorer failures produce a
    /// [`SummaryOutcome::Fallback`] result.
    pub fn summarize(
        &self,
        text: &str,
        method: SummaryMethod,
        sentence_count: Option<i64>,
        language: &str,
    ) -> SummaryResult {
        self.run(text, method, sentence_count, language, None)
    }

    /// Like [`TextSummarizer::summarize`], stopping the random walk when
    /// `cancel` fires
    pub fn summarize_with_cancel(
        &self,
        text: &str,
        method: SummaryMethod,
        sentence_count: Option<i64>,
        language: &str,
        cancel: &CancelToken,
    ) -> SummaryResult {
        self.run(text, method, sentence_count, language, Some(cancel.clone()))
    }

    fn run(
        &self,
        text: &str,
        method: SummaryMethod,
        sentence_count: Option<i64>,
        language: &str,
        cancel: Option<CancelToken>,
    ) -> SummaryResult {
        let cleaned = normalize(text);
        let original_words = word_count(&cleaned);

        let parsed = Language::parse_or_default(language);

        if original_words < self.config.min_words_for_ranking {
            tracing::debug!(words = original_words, "input too short to rank, passing through");
            let tokenizer = &self.processor(parsed.as_ref().copied().unwrap_or_default()).tokenizer;
            return SummaryResult {
                summary_sentence_count: tokenizer.sentences(&cleaned).len(),
                summary_word_count: original_words,
                original_word_count: original_words,
                compression_ratio: 1.0,
                summary_text: cleaned,
                method,
                outcome: SummaryOutcome::PassThrough,
            };
        }

        let language = match parsed {
            Ok(language) => language,
            Err(err) => {
                return self.fallback(
                    &cleaned,
                    Language::English,
                    method,
                    sentence_count,
                    err.to_string(),
                )
            }
        };

        let document = self.processor(language).parse(&cleaned);
        let target = self.target_sentence_count(document.len(), sentence_count);
        tracing::debug!(
            %method,
            %language,
            sentences = document.len(),
            target,
            "ranking sentences"
        );

        let ctx = ScoringContext::new(self.config.deadline(), cancel);
        match self.scorer(method).score(&document, &ctx) {
            Ok(scores) => {
                let texts = SentenceSelector::new(target).select_texts(&document, &scores);
                SummaryResult::from_sentences(texts, original_words, method, SummaryOutcome::Ranked)
            }
            Err(failure) => {
                self.fallback(&cleaned, language, method, sentence_count, failure.to_string())
            }
        }
    }

    /// The leading sentences of `cleaned`, at most `fallback_sentences` and
    /// never more than an explicit request allows
    fn fallback(
        &self,
        cleaned: &str,
        language: Language,
        method: SummaryMethod,
        sentence_count: Option<i64>,
        reason: String,
    ) -> SummaryResult {
        tracing::warn!(%method, %reason, "summarization failed, using leading sentences");

        let sentences = self.processor(language).tokenizer.sentences(cleaned);
        let mut take = self.config.fallback_sentences.min(sentences.len());
        if sentence_count.is_some() {
            take = take.min(self.target_sentence_count(sentences.len(), sentence_count));
        }

        SummaryResult::from_sentences(
            sentences.iter().take(take).map(String::as_str),
            word_count(cleaned),
            method,
            SummaryOutcome::Fallback { reason },
        )
    }

    /// Sentiment polarity of the normalized `text`, in [-1, 1]
    pub fn analyze_sentiment(&self, text: &str) -> f64 {
        self.sentiment.polarity(&normalize(text))
    }

    /// Word/sentence counts and averages of the normalized `text`, split
    /// into sentences with English rules
    pub fn text_stats(&self, text: &str) -> TextStats {
        self.stats_of(&normalize(text), Language::English)
    }

    fn stats_of(&self, cleaned: &str, language: Language) -> TextStats {
        text_stats(cleaned, &self.processor(language).tokenizer)
    }

    /// Validate a request, summarize it and attach sentiment and statistics.
    ///
    /// Every figure in the report is computed from the same normalized text,
    /// so `text_stats.word_count` equals `summary.original_word_count`.
    pub fn process(&self, request: &SummaryRequest) -> Result<SummaryReport> {
        request.validate()?;

        let cleaned = normalize(&request.text);
        let language = Language::parse_or_default(&request.language).unwrap_or_default();
        let summary = self.summarize(
            &cleaned,
            request.method(),
            request.sentences_count,
            &request.language,
        );

        Ok(SummaryReport {
            title: request.title(),
            language: request.language.clone(),
            compression_ratio: round_to(summary.compression_ratio, 2),
            summary,
            sentiment: round_to(self.sentiment.polarity(&cleaned), 3),
            text_stats: self.stats_of(&cleaned, language),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{RequestError, SummarizerError};

    const ARTICLE: &str = "The city council approved a new plan for public transport on Monday. \
        The plan adds twelve electric bus routes across the northern districts. \
        Council members said electric buses will cut noise and pollution in busy streets. \
        Critics argued that the plan ignores the southern districts entirely. \
        The mayor promised a second phase of electric bus routes for the south next year. \
        Funding for the electric buses comes from a regional climate grant. \
        Construction of new charging depots begins in the spring. \
        Residents can comment on the proposed routes until the end of the month.";

    #[test]
    fn test_registry_lookup_matches_variant() {
        let engine = TextSummarizer::default();
        for language in Language::ALL {
            assert_eq!(engine.processor(language).language(), language);
        }
        for method in SummaryMethod::ALL {
            assert_eq!(engine.scorer(method).method(), method);
        }
        assert_eq!(engine.available_methods().len(), 4);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let err = TextSummarizer::new(SummarizerConfig::default().with_damping(2.0)).unwrap_err();
        assert!(matches!(err, SummarizerError::InvalidConfig(_)));
    }

    #[test]
    fn test_target_sentence_count() {
        let engine = TextSummarizer::default();

        assert_eq!(engine.target_sentence_count(40, Some(1000)), 20);
        assert_eq!(engine.target_sentence_count(40, Some(0)), 1);
        assert_eq!(engine.target_sentence_count(40, Some(-3)), 1);
        assert_eq!(engine.target_sentence_count(40, Some(7)), 7);

        assert_eq!(engine.target_sentence_count(2, None), 3);
        assert_eq!(engine.target_sentence_count(15, None), 5); // round(4.5)
        assert_eq!(engine.target_sentence_count(20, None), 6);
        assert_eq!(engine.target_sentence_count(200, None), 10);
    }

    #[test]
    fn test_ranked_summary() {
        let engine = TextSummarizer::default();
        let result = engine.summarize(ARTICLE, SummaryMethod::TextRank, Some(2), "english");

        assert_eq!(result.outcome, SummaryOutcome::Ranked);
        assert_eq!(result.summary_sentence_count, 2);
        assert!(result.summary_word_count < result.original_word_count);
        assert!(result.compression_ratio > 1.0);
    }

    #[test]
    fn test_short_input_passes_through() {
        let engine = TextSummarizer::default();
        let text = "Short  input @with noise.   Two sentences!";
        let result = engine.summarize(text, SummaryMethod::Luhn, None, "english");

        assert_eq!(result.outcome, SummaryOutcome::PassThrough);
        assert_eq!(result.summary_text, "Short input with noise. Two sentences!");
        assert_eq!(result.summary_sentence_count, 2);
        assert_eq!(result.summary_word_count, result.original_word_count);
        assert_eq!(result.compression_ratio, 1.0);
    }

    #[test]
    fn test_short_input_ignores_language() {
        let engine = TextSummarizer::default();
        let result = engine.summarize("Tiny text.", SummaryMethod::Lsa, None, "klingon");
        assert_eq!(result.outcome, SummaryOutcome::PassThrough);
    }

    #[test]
    fn test_unsupported_language_falls_back() {
        let engine = TextSummarizer::default();
        let result = engine.summarize(ARTICLE, SummaryMethod::Lsa, None, "klingon");

        assert!(result.outcome.is_fallback());
        assert_eq!(result.summary_sentence_count, 5);
        assert!(result
            .summary_text
            .starts_with("The city council approved a new plan"));
    }

    #[test]
    fn test_blank_language_uses_english() {
        let engine = TextSummarizer::default();

        for language in ["", "   "] {
            let result = engine.summarize(ARTICLE, SummaryMethod::Lsa, Some(2), language);
            assert_eq!(result.outcome, SummaryOutcome::Ranked);
            assert_eq!(
                result,
                engine.summarize(ARTICLE, SummaryMethod::Lsa, Some(2), "english")
            );
        }
    }

    #[test]
    fn test_truncated_lsa_past_deadline_falls_back() {
        let config = SummarizerConfig::default()
            .with_timeout_ms(0)
            .with_lsa_dimensions(2);
        let engine = TextSummarizer::new(config).unwrap();
        let result = engine.summarize(ARTICLE, SummaryMethod::Lsa, Some(3), "english");

        assert!(matches!(
            result.outcome,
            SummaryOutcome::Fallback { ref reason } if reason.contains("deadline")
        ));
        assert_eq!(result.summary_sentence_count, 3);
    }

    #[test]
    fn test_cancelled_graph_ranking_falls_back() {
        let engine = TextSummarizer::default();
        let token = CancelToken::new();
        token.cancel();

        let result =
            engine.summarize_with_cancel(ARTICLE, SummaryMethod::LexRank, Some(2), "english", &token);

        assert!(matches!(
            result.outcome,
            SummaryOutcome::Fallback { ref reason } if reason.contains("cancelled")
        ));
        // Explicit count caps the fallback too
        assert_eq!(result.summary_sentence_count, 2);
    }

    #[test]
    fn test_cancel_does_not_affect_non_graph_methods() {
        let engine = TextSummarizer::default();
        let token = CancelToken::new();
        token.cancel();

        let result =
            engine.summarize_with_cancel(ARTICLE, SummaryMethod::Luhn, Some(2), "english", &token);
        assert_eq!(result.outcome, SummaryOutcome::Ranked);
    }

    #[test]
    fn test_process_request() {
        let engine = TextSummarizer::default();
        let request = SummaryRequest::new(ARTICLE)
            .with_method(SummaryMethod::Luhn)
            .with_sentences_count(3);
        let report = engine.process(&request).unwrap();

        assert_eq!(report.summary.method, SummaryMethod::Luhn);
        assert_eq!(report.summary.summary_sentence_count, 3);
        assert!(report.title.ends_with("..."));
        assert_eq!(report.text_stats.sentence_count, 8);
        assert!((-1.0..=1.0).contains(&report.sentiment));
        assert_eq!(report.compression_ratio, round_to(report.compression_ratio, 2));
    }

    #[test]
    fn test_report_counts_words_of_normalized_text() {
        let engine = TextSummarizer::default();
        let text = (0..12)
            .map(|i| format!("Topic {i} - the river feeds -- local farmers (and) towns every season."))
            .collect::<Vec<_>>()
            .join(" ");
        let report = engine.process(&SummaryRequest::new(text)).unwrap();

        assert_eq!(report.text_stats.word_count, report.summary.original_word_count);
        assert_eq!(report.text_stats.word_count, 12 * 11);
        assert_eq!(report.text_stats.sentence_count, 12);
    }

    #[test]
    fn test_analyzers_normalize_their_input() {
        let engine = TextSummarizer::default();

        assert_eq!(
            engine.text_stats("A  good -- day. (Really.)"),
            engine.text_stats("A good day. Really.")
        );
        assert_eq!(
            engine.analyze_sentiment("It wasn't good."),
            engine.analyze_sentiment("It wasnt good.")
        );
    }

    #[test]
    fn test_process_rejects_short_text() {
        let engine = TextSummarizer::default();
        let err = engine.process(&SummaryRequest::new("Too short.")).unwrap_err();

        assert!(matches!(
            err,
            SummarizerError::InvalidRequest(RequestError::TooShort { words: 2, .. })
        ));
    }

    #[test]
    fn test_engine_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TextSummarizer>();
    }
}
