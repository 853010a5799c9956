//! This crate is a relevance scorer for Arabic text using TF-IDF.

pub mod error;
pub mod utils;
pub mod vectorizer;

/// TF-IDF Scorer
/// The top-level struct of this crate.
/// It accumulates documents into a corpus and scores a query document
/// against the corpus as it stands at call time.
///
/// `TfIdfScorer<N, E>` has the following generic parameters:
/// - `N`: Score type (f32 or f64)
/// - `E`: TF-IDF calculation engine type (e.g., DefaultTfIdfEngine)
///
/// Each scorer built with `new` or `with_config` owns its own corpus.
/// Use `with_corpus` to share one `Arc<Corpus>` between scorers on purpose.
///
/// # Examples
/// ```
/// use ar_tf_idf::TfIdfScorer;
///
/// let scorer: TfIdfScorer = TfIdfScorer::new();
/// scorer.add_doc("كتاب");
/// scorer.add_doc("قلم");
/// scorer.add_doc("دفتر");
///
/// let score = scorer.score("كتاب");
/// assert!((score - 0.405).abs() < 0.01);
/// ```
pub use vectorizer::TfIdfScorer;

/// Scorer configuration
/// Serializable; every field has a default.
pub use vectorizer::ScorerConfig;

/// Corpus for the TF-IDF Scorer
/// An ordered, append-only list of tokenized documents plus the number of
/// documents each term appears in.
///
/// # Thread Safety
/// `Corpus` is thread-safe. Appends and score reads are serialized by a
/// read-write lock, so a score always sees whole documents.
pub use vectorizer::corpus::{Corpus, CorpusSnapshot, Document};

/// Term Frequency structure
/// Counts term occurrences within one document.
pub use vectorizer::term::TermFrequency;

/// Tokenizer
/// Splits text into letter runs (Arabic, Latin or any other script) with
/// configurable diacritic stripping and letter-variant folding.
pub use vectorizer::tokenizer::{Tokenizer, TokenizerConfig};

/// TF IDF Calculation Engine Trait
/// Implement it to plug a different weighting scheme into `TfIdfScorer<N, E>`.
/// `DefaultTfIdfEngine` implements it for every float type.
pub use vectorizer::tfidf::{DefaultTfIdfEngine, TfIdfEngine};

/// Per-term score breakdown
pub use vectorizer::evaluate::scoring::{ScoreBreakdown, TermScore};

pub use error::TfIdfError;
