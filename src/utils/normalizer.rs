use unicode_categories::UnicodeCategories;

/// Arabic tatweel (kashida), a purely typographic elongation
pub const TATWEEL: char = '\u{0640}';

/// Character classes used by the tokenizer
pub trait ArabicCharExt {
    /// Letter of any script (Unicode category L*)
    fn is_word_char(self) -> bool;
    /// Non-spacing combining mark, e.g. fatha, shadda, tanwin
    fn is_diacritic(self) -> bool;
    /// Typographic filler that carries no meaning inside a word
    fn is_filler(self) -> bool;
}

impl ArabicCharExt for char {
    #[inline]
    fn is_word_char(self) -> bool {
        self.is_letter()
    }

    #[inline]
    fn is_diacritic(self) -> bool {
        self.is_mark_nonspacing()
    }

    #[inline]
    fn is_filler(self) -> bool {
        self == TATWEEL
    }
}

/// Fold Arabic letter-shape variants to one representative
///
/// # Arguments
/// * `c` - character to fold
///
/// # Returns
/// * `char` - folded character, or `c` itself when it has no variant
#[inline]
pub fn fold_letter_variant(c: char) -> char {
    match c {
        // hamza forms of alef, madda, wasla
        '\u{0623}' | '\u{0625}' | '\u{0622}' | '\u{0671}' => '\u{0627}',
        // alef maqsura
        '\u{0649}' => '\u{064A}',
        // ta marbuta
        '\u{0629}' => '\u{0647}',
        // waw with hamza
        '\u{0624}' => '\u{0648}',
        // yeh with hamza
        '\u{0626}' => '\u{064A}',
        _ => c,
    }
}
