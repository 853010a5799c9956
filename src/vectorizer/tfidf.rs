use num::{Float, NumCast};

/// TF-IDF calculation engine
///
/// Plugs a weighting scheme into [`TfIdfScorer`](crate::TfIdfScorer).
/// Implementations must be pure: the same arguments always give the same
/// value, and no value may be infinite or NaN.
pub trait TfIdfEngine<N>
where
    N: Float,
{
    /// Term frequency of a term inside the query
    /// # Arguments
    /// * `count` - occurrences of the term in the query
    /// * `total` - number of tokens in the query
    fn tf(count: u64, total: u64) -> N;

    /// Inverse document frequency of a term
    /// # Arguments
    /// * `doc_num` - number of documents in the corpus
    /// * `doc_freq` - number of documents containing the term
    fn idf(doc_num: u64, doc_freq: u64) -> N;

    /// Combine per-term contributions (tf * idf) into one score
    /// # Arguments
    /// * `contributions` - one value per distinct query term
    /// * `token_num` - number of tokens in the query, duplicates included
    fn aggregate(contributions: &[N], token_num: u64) -> N;
}

/// Default TF-IDF engine
///
/// - tf = count / total
/// - idf = max(0, ln(N / (df + 1))), and 0 when N = 0 or df = 0
/// - score = sum of tf * idf over distinct query terms, divided by the
///   query token count
///
/// The `+ 1` smoothing makes a term found in every document weigh exactly
/// zero, and a term found in one of three documents weigh ln(1.5).
/// For a fixed query length the score is proportional to the sum of idf
/// over every query token.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTfIdfEngine;

#[inline]
fn cast<N: Float>(value: f64) -> N {
    if value.is_finite() {
        <N as NumCast>::from(value).unwrap_or_else(N::zero)
    } else {
        N::zero()
    }
}

impl<N> TfIdfEngine<N> for DefaultTfIdfEngine
where
    N: Float,
{
    fn tf(count: u64, total: u64) -> N {
        if total == 0 {
            return N::zero();
        }
        cast(count as f64 / total as f64)
    }

    fn idf(doc_num: u64, doc_freq: u64) -> N {
        if doc_num == 0 || doc_freq == 0 {
            return N::zero();
        }
        let idf = (doc_num as f64 / (doc_freq as f64 + 1.0)).ln();
        cast(idf.max(0.0))
    }

    fn aggregate(contributions: &[N], token_num: u64) -> N {
        if contributions.is_empty() || token_num == 0 {
            return N::zero();
        }
        let sum = contributions.iter().fold(N::zero(), |acc, &c| acc + c);
        let score = sum / cast(token_num as f64);
        if score.is_finite() {
            score
        } else {
            N::zero()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn idf(doc_num: u64, doc_freq: u64) -> f64 {
        <DefaultTfIdfEngine as TfIdfEngine<f64>>::idf(doc_num, doc_freq)
    }

    #[test]
    fn idf_is_zero_without_evidence() {
        assert_eq!(idf(0, 0), 0.0);
        assert_eq!(idf(0, 3), 0.0);
        assert_eq!(idf(5, 0), 0.0);
    }

    #[test]
    fn idf_is_zero_for_terms_in_every_document() {
        for n in 1..50 {
            assert_eq!(idf(n, n), 0.0, "N = {n}");
        }
        // df + 1 == N
        assert_eq!(idf(2, 1), 0.0);
    }

    #[test]
    fn idf_decreases_with_document_frequency() {
        let n = 100;
        let mut last = f64::INFINITY;
        for df in 1..=n {
            let value = idf(n, df);
            assert!(value >= 0.0 && value.is_finite());
            assert!(value <= last, "df = {df}");
            last = value;
        }
        assert!((idf(3, 1) - 1.5f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn tf_guards_empty_documents() {
        assert_eq!(<DefaultTfIdfEngine as TfIdfEngine<f64>>::tf(3, 0), 0.0);
        assert_eq!(<DefaultTfIdfEngine as TfIdfEngine<f64>>::tf(1, 4), 0.25);
    }

    fn aggregate(contributions: &[f64], token_num: u64) -> f64 {
        <DefaultTfIdfEngine as TfIdfEngine<f64>>::aggregate(contributions, token_num)
    }

    #[test]
    fn aggregate_divides_by_token_count() {
        assert_eq!(aggregate(&[], 0), 0.0);
        assert_eq!(aggregate(&[], 3), 0.0);
        assert_eq!(aggregate(&[0.5], 0), 0.0);
        assert_eq!(aggregate(&[0.2, 0.0], 2), 0.1);
        // two distinct terms out of four tokens
        assert_eq!(aggregate(&[1.0, 3.0], 4), 1.0);
        let single: f32 = <DefaultTfIdfEngine as TfIdfEngine<f32>>::aggregate(&[1.0, 2.0, 3.0], 3);
        assert_eq!(single, 2.0);
    }

    #[test]
    fn repeating_a_common_term_never_beats_rarer_terms() {
        // N = 10: one term in 2 documents, two terms in 1 document each
        let common = idf(10, 2);
        let rare = idf(10, 1);
        let tf = |count| <DefaultTfIdfEngine as TfIdfEngine<f64>>::tf(count, 2);
        let repeated: f64 = aggregate(&[tf(2) * common], 2);
        let distinct: f64 = aggregate(&[tf(1) * rare, tf(1) * rare], 2);
        assert!(distinct >= repeated, "distinct {distinct} < repeated {repeated}");
    }

    #[test]
    fn f32_engine_agrees_with_f64() {
        let a = <DefaultTfIdfEngine as TfIdfEngine<f32>>::idf(3, 1);
        let b = <DefaultTfIdfEngine as TfIdfEngine<f64>>::idf(3, 1);
        assert!((a as f64 - b).abs() < 1e-6);
    }
}
