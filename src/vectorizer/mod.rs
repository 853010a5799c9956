pub mod corpus;
pub mod evaluate;
pub mod term;
pub mod tfidf;
pub mod tokenizer;

use std::marker::PhantomData;
use std::sync::Arc;

use num::Float;
use serde::{Deserialize, Serialize};

use crate::{
    error::TfIdfError,
    vectorizer::{
        corpus::Corpus,
        tfidf::{DefaultTfIdfEngine, TfIdfEngine},
        tokenizer::{Tokenizer, TokenizerConfig},
    },
};

/// Scorer settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScorerConfig {
    pub tokenizer: TokenizerConfig,
}

#[derive(Debug)]
pub struct TfIdfScorer<N = f64, E = DefaultTfIdfEngine>
where
    N: Float,
    E: TfIdfEngine<N>,
{
    /// Corpus reference
    corpus_ref: Arc<Corpus>,
    _marker: PhantomData<E>,
    _num_marker: PhantomData<N>,
}

impl<N, E> Default for TfIdfScorer<N, E>
where
    N: Float + Send + Sync,
    E: TfIdfEngine<N>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N, E> TfIdfScorer<N, E>
where
    N: Float + Send + Sync,
    E: TfIdfEngine<N>,
{
    /// Create a scorer that owns a fresh, empty corpus
    pub fn new() -> Self {
        Self::with_config(ScorerConfig::default())
    }

    /// Create a scorer with a fresh, empty corpus tokenized per `config`
    pub fn with_config(config: ScorerConfig) -> Self {
        let corpus = Corpus::with_tokenizer(Tokenizer::new(config.tokenizer));
        Self::with_corpus(Arc::new(corpus))
    }

    /// Create a scorer over an existing corpus
    ///
    /// Scorers built from clones of the same `Arc` share one corpus: an
    /// append through any of them is seen by all.
    pub fn with_corpus(corpus_ref: Arc<Corpus>) -> Self {
        Self {
            corpus_ref,
            _marker: PhantomData,
            _num_marker: PhantomData,
        }
    }

    pub fn corpus(&self) -> &Arc<Corpus> {
        &self.corpus_ref
    }

    /// Add a document to the corpus
    ///
    /// # Errors
    /// `InvalidArgument` when `text` is `None`. Any present text, including
    /// the empty string, is accepted.
    pub fn add_document_to_corpus(&self, text: Option<&str>) -> Result<(), TfIdfError> {
        let text = TfIdfError::require_text(text, "add_document_to_corpus requires text")?;
        self.add_doc(text);
        Ok(())
    }

    /// Score a document against the current corpus
    ///
    /// # Errors
    /// `InvalidArgument` when `text` is `None`. Present text always scores.
    pub fn calculate_document_tf_idf(&self, text: Option<&str>) -> Result<N, TfIdfError> {
        let text = TfIdfError::require_text(text, "calculate_document_tf_idf requires text")?;
        Ok(self.score(text))
    }

    /// Add a document
    /// The referenced Corpus is updated immediately
    pub fn add_doc(&self, text: &str) {
        self.corpus_ref.add_document(text);
    }

    /// Add documents in order, tokenizing them in parallel
    pub fn add_docs<T>(&self, texts: &[T])
    where
        T: AsRef<str> + Sync,
    {
        self.corpus_ref.add_documents(texts);
    }

    /// Relevance of `text` against the current corpus
    ///
    /// Finite and non-negative with the default engine; 0.0 when `text`
    /// has no tokens or the corpus is empty.
    pub fn score(&self, text: &str) -> N {
        self.score_breakdown(text).score
    }

    pub fn doc_num(&self) -> u64 {
        self.corpus_ref.document_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_corpus_is_visible_to_every_scorer() {
        let corpus = Arc::new(Corpus::new());
        let a: TfIdfScorer = TfIdfScorer::with_corpus(Arc::clone(&corpus));
        let b: TfIdfScorer<f32> = TfIdfScorer::with_corpus(Arc::clone(&corpus));
        a.add_doc("كتاب");
        b.add_doc("قلم");
        a.add_doc("دفتر");
        assert_eq!(a.doc_num(), 3);
        assert_eq!(b.doc_num(), 3);
        assert!((a.score("كتاب") - b.score("كتاب") as f64).abs() < 1e-6);
    }

    #[test]
    fn separately_built_scorers_do_not_share_state() {
        let a: TfIdfScorer = TfIdfScorer::new();
        let b: TfIdfScorer = TfIdfScorer::new();
        a.add_doc("كتاب");
        assert_eq!(a.doc_num(), 1);
        assert_eq!(b.doc_num(), 0);
    }

    #[test]
    fn config_reaches_the_tokenizer() {
        let scorer: TfIdfScorer = TfIdfScorer::with_config(ScorerConfig {
            tokenizer: TokenizerConfig {
                fold_letter_variants: true,
                ..Default::default()
            },
        });
        scorer.add_docs(&["أحمد", "قلم", "دفتر"]);
        assert_eq!(scorer.corpus().document_frequency("احمد"), 1);
        assert!(scorer.score("احمد") > 0.0);
    }

    #[test]
    fn config_deserializes_with_defaults() {
        let config: ScorerConfig =
            serde_json::from_str(r#"{"tokenizer":{"lowercase":false}}"#).unwrap();
        assert!(!config.tokenizer.lowercase);
        assert!(config.tokenizer.strip_diacritics);
        assert!(config.tokenizer.unicode_nfkc);
        assert!(!config.tokenizer.fold_letter_variants);

        let empty: ScorerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, ScorerConfig::default());
    }
}
