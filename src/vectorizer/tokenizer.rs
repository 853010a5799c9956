use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

use crate::utils::normalizer::{fold_letter_variant, ArabicCharExt};

/// Tokenizer settings
///
/// Every field changes which strings count as the same term, and therefore
/// changes document frequencies. A corpus must be scored with the same
/// settings it was built with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenizerConfig {
    /// Apply NFKC before segmentation (folds Arabic presentation forms and ligatures)
    pub unicode_nfkc: bool,
    /// Drop tashkil marks and tatweel instead of keeping them inside the token
    pub strip_diacritics: bool,
    /// Fold alef/yeh/teh-marbuta/hamza-carrier variants to one letter
    pub fold_letter_variants: bool,
    /// Unicode lowercase (only Latin and other cased scripts are affected)
    pub lowercase: bool,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            unicode_nfkc: true,
            strip_diacritics: true,
            fold_letter_variants: false,
            lowercase: true,
        }
    }
}

/// Splits raw text into normalized letter-run tokens
///
/// A token is a maximal run of letters. Whitespace, digits of any script,
/// punctuation and symbols separate tokens and are discarded.
///
/// # Examples
/// ```
/// use ar_tf_idf::Tokenizer;
/// let tokenizer = Tokenizer::default();
/// assert_eq!(tokenizer.tokenize("!!!الطقس@@@ ###جميل$$$"), vec!["الطقس", "جميل"]);
/// assert!(tokenizer.tokenize("123 456 789").is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tokenizer {
    config: TokenizerConfig,
}

impl Tokenizer {
    pub fn new(config: TokenizerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TokenizerConfig {
        &self.config
    }

    /// Tokenize text
    ///
    /// # Arguments
    /// * `text` - raw text, may be empty
    ///
    /// # Returns
    /// * `Vec<String>` - tokens in text order, duplicates kept
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let normalized: Cow<str> = if self.config.unicode_nfkc {
            Cow::Owned(text.nfkc().collect::<String>())
        } else {
            Cow::Borrowed(text)
        };

        let mut tokens = Vec::new();
        let mut current = String::new();
        for c in normalized.chars() {
            if c.is_word_char() {
                if c.is_filler() && self.config.strip_diacritics {
                    continue;
                }
                self.push_char(&mut current, c);
            } else if c.is_diacritic() {
                // marks join the surrounding word; they never split it
                if !self.config.strip_diacritics && !current.is_empty() {
                    current.push(c);
                }
            } else if !current.is_empty() {
                tokens.push(std::mem::take(&mut current));
            }
        }
        if !current.is_empty() {
            tokens.push(current);
        }
        tokens
    }

    /// Normalize a single term the way `tokenize` would normalize it
    ///
    /// Used for lookups such as document frequency, where the caller passes a
    /// bare term instead of a document. Returns `None` when nothing of the
    /// term survives normalization.
    pub fn normalize_term(&self, term: &str) -> Option<String> {
        let mut tokens = self.tokenize(term);
        if tokens.len() == 1 {
            tokens.pop()
        } else {
            None
        }
    }

    #[inline]
    fn push_char(&self, buf: &mut String, c: char) {
        let c = if self.config.fold_letter_variants {
            fold_letter_variant(c)
        } else {
            c
        };
        if self.config.lowercase {
            buf.extend(c.to_lowercase());
        } else {
            buf.push(c);
        }
    }
}
