use ahash::RandomState;
use indexmap::IndexMap;

/// TermFrequency struct
/// Counts how often each term occurs in one document.
///
/// Terms are kept in first-occurrence order, so iterating the distinct
/// terms of the same token sequence always visits them in the same order.
///
/// # Examples
/// ```
/// use ar_tf_idf::TermFrequency;
/// let mut term_freq = TermFrequency::new();
/// term_freq.add_terms(&["القطة", "تجلس", "القطة"]);
///
/// assert_eq!(term_freq.term_count("القطة"), 2);
/// assert_eq!(term_freq.term_sum(), 3);
/// assert_eq!(term_freq.term_num(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermFrequency {
    term_count: IndexMap<String, u64, RandomState>,
    total_term_count: u64,
}

/// Implementation for adding terms
impl TermFrequency {
    /// Create a new TermFrequency
    pub fn new() -> Self {
        TermFrequency {
            term_count: IndexMap::with_hasher(RandomState::new()),
            total_term_count: 0,
        }
    }

    /// Add a term
    ///
    /// # Arguments
    /// * `term` - term to add
    #[inline]
    pub fn add_term(&mut self, term: &str) -> &mut Self {
        if let Some(count) = self.term_count.get_mut(term) {
            *count += 1;
        } else {
            self.term_count.insert(term.to_string(), 1);
        }
        self.total_term_count += 1;
        self
    }

    /// Add multiple terms
    ///
    /// # Arguments
    /// * `terms` - Slice of terms to add
    #[inline]
    pub fn add_terms<T>(&mut self, terms: &[T]) -> &mut Self
    where
        T: AsRef<str>,
    {
        for term in terms {
            self.add_term(term.as_ref());
        }
        self
    }
}

impl<T> From<&[T]> for TermFrequency
where
    T: AsRef<str>,
{
    fn from(terms: &[T]) -> Self {
        let mut tf = TermFrequency::new();
        tf.add_terms(terms);
        tf
    }
}

/// Implementation for retrieving information from TermFrequency
impl TermFrequency {
    /// Iterate distinct terms and their counts in first-occurrence order
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.term_count.iter().map(|(term, &count)| (term.as_str(), count))
    }

    /// Get the total count of all terms
    ///
    /// # Returns
    /// * `u64` - Total term count, duplicates included
    #[inline]
    pub fn term_sum(&self) -> u64 {
        self.total_term_count
    }

    /// Get the occurrence count for a specific term
    ///
    /// # Arguments
    /// * `term` - term
    ///
    /// # Returns
    /// * `u64` - Occurrence count, 0 when absent
    #[inline]
    pub fn term_count(&self, term: &str) -> u64 {
        self.term_count.get(term).copied().unwrap_or(0)
    }

    /// Iterate distinct terms in first-occurrence order
    #[inline]
    pub fn term_set_iter(&self) -> impl Iterator<Item = &str> {
        self.term_count.keys().map(|s| s.as_str())
    }

    /// Get the number of distinct terms
    #[inline]
    pub fn term_num(&self) -> usize {
        self.term_count.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.total_term_count == 0
    }
}
