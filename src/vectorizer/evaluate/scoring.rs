use std::fmt::Debug;

use num::Float;
use tracing::trace;

use crate::vectorizer::{term::TermFrequency, tfidf::TfIdfEngine, TfIdfScorer};

/// Weight of one distinct query term
#[derive(Debug, Clone, PartialEq)]
pub struct TermScore<N> {
    pub term: String,
    /// occurrences in the query
    pub count: u64,
    pub tf: N,
    /// documents containing the term when the score was taken
    pub df: u64,
    pub idf: N,
    /// tf * idf
    pub contribution: N,
}

/// Aggregate score with the per-term rows it was built from
///
/// Rows follow the first occurrence of each term in the query.
#[derive(Clone, PartialEq)]
pub struct ScoreBreakdown<N> {
    pub score: N,
    /// number of tokens in the query, duplicates included
    pub token_num: u64,
    /// corpus size the score was computed against
    pub doc_num: u64,
    pub terms: Vec<TermScore<N>>,
}

impl<N> ScoreBreakdown<N>
where
    N: Float,
{
    fn empty(doc_num: u64) -> Self {
        Self {
            score: N::zero(),
            token_num: 0,
            doc_num,
            terms: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Look up the row of a normalized term
    pub fn term(&self, term: &str) -> Option<&TermScore<N>> {
        self.terms.iter().find(|row| row.term == term)
    }
}

impl<N> Debug for ScoreBreakdown<N>
where
    N: Float + Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if f.alternate() {
            // one row per term
            writeln!(
                f,
                "ScoreBreakdown {:?} (tokens: {}, docs: {}) [",
                self.score, self.token_num, self.doc_num
            )?;
            for row in &self.terms {
                writeln!(
                    f,
                    "    {:?}: tf {:?} x idf {:?} = {:?} (count: {}, df: {})",
                    row.term, row.tf, row.idf, row.contribution, row.count, row.df
                )?;
            }
            write!(f, "]")
        } else {
            f.debug_struct("ScoreBreakdown")
                .field("score", &self.score)
                .field("token_num", &self.token_num)
                .field("doc_num", &self.doc_num)
                .field("terms", &self.terms)
                .finish()
        }
    }
}

impl<N, E> TfIdfScorer<N, E>
where
    N: Float + Send + Sync,
    E: TfIdfEngine<N>,
{
    /// Score a query with the per-term breakdown
    ///
    /// Reads the corpus through one snapshot, so document count and
    /// document frequencies always belong to the same corpus state.
    /// Never mutates the corpus.
    pub fn score_breakdown(&self, text: &str) -> ScoreBreakdown<N> {
        let tokens = self.corpus_ref.tokenizer().tokenize(text);
        let freq = TermFrequency::from(tokens.as_slice());

        let snapshot = self.corpus_ref.snapshot();
        let doc_num = snapshot.doc_num();
        if freq.is_empty() {
            trace!(doc_num, "query has no tokens");
            return ScoreBreakdown::empty(doc_num);
        }

        let total = freq.term_sum();
        let terms: Vec<TermScore<N>> = freq
            .iter()
            .map(|(term, count)| {
                let df = snapshot.doc_freq(term);
                let tf = E::tf(count, total);
                let idf = E::idf(doc_num, df);
                TermScore {
                    term: term.to_string(),
                    count,
                    tf,
                    df,
                    idf,
                    contribution: tf * idf,
                }
            })
            .collect();
        drop(snapshot);

        let contributions: Vec<N> = terms.iter().map(|row| row.contribution).collect();
        let score = E::aggregate(&contributions, total);
        let score = if score.is_finite() { score } else { N::zero() };
        trace!(
            doc_num,
            token_num = total,
            term_num = freq.term_num(),
            score = score.to_f64().unwrap_or(0.0),
            "query scored"
        );
        ScoreBreakdown {
            score,
            token_num: total,
            doc_num,
            terms,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::TfIdfScorer;

    #[test]
    fn breakdown_rows_follow_query_order() {
        let scorer: TfIdfScorer = TfIdfScorer::new();
        scorer.add_docs(&[
            "القطة تجلس على السجادة",
            "الكلب يلعب في الحديقة",
            "القطة والكلب أصدقاء",
        ]);

        let breakdown = scorer.score_breakdown("تجلس القطة تجلس");
        assert_eq!(breakdown.doc_num, 3);
        assert_eq!(breakdown.token_num, 3);
        let terms: Vec<&str> = breakdown.terms.iter().map(|row| row.term.as_str()).collect();
        assert_eq!(terms, vec!["تجلس", "القطة"]);

        let sits = breakdown.term("تجلس").unwrap();
        assert_eq!(sits.count, 2);
        assert_eq!(sits.df, 1);
        assert!((sits.tf - 2.0 / 3.0).abs() < 1e-12);
        assert!((sits.idf - 1.5f64.ln()).abs() < 1e-12);

        let cat = breakdown.term("القطة").unwrap();
        assert_eq!(cat.df, 2);
        assert_eq!(cat.idf, 0.0);
        assert_eq!(cat.contribution, 0.0);

        // summed contributions over the three query tokens
        let expected = (sits.contribution + cat.contribution) / 3.0;
        assert!((breakdown.score - expected).abs() < 1e-12);
    }

    #[test]
    fn empty_query_breakdown_has_no_rows() {
        let scorer: TfIdfScorer = TfIdfScorer::new();
        scorer.add_doc("نص عربي");
        let breakdown = scorer.score_breakdown("... 42 ...");
        assert!(breakdown.is_empty());
        assert_eq!(breakdown.score, 0.0);
        assert_eq!(breakdown.token_num, 0);
        assert_eq!(breakdown.doc_num, 1);
    }

    #[test]
    fn alternate_debug_lists_each_term() {
        let scorer: TfIdfScorer = TfIdfScorer::new();
        scorer.add_docs(&["كتاب", "قلم", "دفتر"]);
        let rendered = format!("{:#?}", scorer.score_breakdown("كتاب قلم"));
        assert!(rendered.starts_with("ScoreBreakdown"));
        assert!(rendered.contains("\"كتاب\""));
        assert!(rendered.contains("\"قلم\""));
    }
}
