use std::collections::HashMap;
use std::sync::Arc;

use ahash::RandomState;
use parking_lot::{RwLock, RwLockReadGuard};
use rayon::prelude::*;
use tracing::debug;

use crate::vectorizer::{term::TermFrequency, tokenizer::Tokenizer};

/// One ingested document: its normalized tokens in text order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    tokens: Vec<String>,
}

impl Document {
    pub fn from_tokens(tokens: Vec<String>) -> Self {
        Self { tokens }
    }

    #[inline]
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Term counts of this document
    pub fn term_frequency(&self) -> TermFrequency {
        TermFrequency::from(self.tokens.as_slice())
    }
}

#[derive(Debug, Default)]
struct CorpusState {
    documents: Vec<Arc<Document>>,
    /// number of documents each term appears in
    doc_freq: HashMap<Box<str>, u64, RandomState>,
}

impl CorpusState {
    fn push(&mut self, doc: Document) {
        let freq = doc.term_frequency();
        for term in freq.term_set_iter() {
            if let Some(count) = self.doc_freq.get_mut(term) {
                *count += 1;
            } else {
                self.doc_freq.insert(term.into(), 1);
            }
        }
        self.documents.push(Arc::new(doc));
    }
}

/// Append-only document store with document-frequency bookkeeping
///
/// Documents and the document-frequency table sit behind one lock: an
/// append is visible all at once or not at all, and readers working from a
/// [`CorpusSnapshot`] see document count and frequencies that agree.
///
/// # Thread Safety
/// `Corpus` is `Send + Sync` and may be shared through `Arc`.
#[derive(Debug, Default)]
pub struct Corpus {
    tokenizer: Tokenizer,
    state: RwLock<CorpusState>,
}

impl Corpus {
    /// Create an empty corpus with the default tokenizer
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty corpus that tokenizes with `tokenizer`
    pub fn with_tokenizer(tokenizer: Tokenizer) -> Self {
        Self {
            tokenizer,
            state: RwLock::new(CorpusState::default()),
        }
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    /// Tokenize `text` and append it, even when it yields no tokens
    pub fn add_document(&self, text: &str) {
        let doc = Document::from_tokens(self.tokenizer.tokenize(text));
        let token_num = doc.len();
        let mut state = self.state.write();
        state.push(doc);
        debug!(doc_num = state.documents.len(), token_num, "document added to corpus");
    }

    /// Append many documents in input order
    ///
    /// Tokenization runs in parallel; the append happens under a single
    /// write lock, so the result equals appending one by one.
    pub fn add_documents<T>(&self, texts: &[T])
    where
        T: AsRef<str> + Sync,
    {
        let docs: Vec<Document> = texts
            .par_iter()
            .map(|text| Document::from_tokens(self.tokenizer.tokenize(text.as_ref())))
            .collect();
        let added = docs.len();
        let mut state = self.state.write();
        state.documents.reserve(added);
        for doc in docs {
            state.push(doc);
        }
        debug!(doc_num = state.documents.len(), added, "documents added to corpus");
    }

    /// Get the number of documents in the corpus
    pub fn document_count(&self) -> u64 {
        self.state.read().documents.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.state.read().documents.is_empty()
    }

    /// Number of documents containing `term` at least once
    ///
    /// `term` is normalized like document text first; a term that normalizes
    /// to nothing (or to several tokens) is in no document.
    pub fn document_frequency(&self, term: &str) -> u64 {
        match self.tokenizer.normalize_term(term) {
            Some(term) => self.snapshot().doc_freq(&term),
            None => 0,
        }
    }

    /// Get the current vocabulary size (number of distinct terms)
    pub fn vocab_size(&self) -> usize {
        self.state.read().doc_freq.len()
    }

    /// Get a document by insertion index
    pub fn document(&self, index: usize) -> Option<Arc<Document>> {
        self.state.read().documents.get(index).cloned()
    }

    /// All documents in insertion order
    pub fn documents(&self) -> Vec<Arc<Document>> {
        self.state.read().documents.clone()
    }

    /// Lock the corpus for reading
    ///
    /// Appends wait until the snapshot is dropped, so keep it short-lived.
    pub fn snapshot(&self) -> CorpusSnapshot<'_> {
        CorpusSnapshot {
            state: self.state.read(),
        }
    }
}

/// Consistent read view of a [`Corpus`]
pub struct CorpusSnapshot<'a> {
    state: RwLockReadGuard<'a, CorpusState>,
}

impl CorpusSnapshot<'_> {
    #[inline]
    pub fn doc_num(&self) -> u64 {
        self.state.documents.len() as u64
    }

    /// Document frequency of an already normalized term
    #[inline]
    pub fn doc_freq(&self, term: &str) -> u64 {
        self.state.doc_freq.get(term).copied().unwrap_or(0)
    }
}
