use crate::vectorizer::DocVector;
use std::cmp::Ordering;

/// Cosine similarity. A zero vector on either side scores 0.0, never an error.
pub fn cosine(a: &DocVector, b: &DocVector) -> f32 {
    let norms = a.norm() * b.norm();
    if norms == 0.0 {
        return 0.0;
    }
    a.dot(b) / norms
}

/// Score every corpus vector against the query and keep the `top_n` best,
/// descending by score. The sort is stable, so equal scores keep their
/// original corpus order. Returned pairs are (corpus index, score).
pub fn rank(query: &DocVector, corpus: &[DocVector], top_n: usize) -> Vec<(usize, f32)> {
    let mut scored: Vec<(usize, f32)> = corpus
        .iter()
        .enumerate()
        .map(|(index, vector)| (index, cosine(query, vector)))
        .collect();
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    scored.truncate(top_n);
    scored
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::stopwords;
    use crate::vectorizer::fit_transform;

    fn vectors(docs: &[&str], query: &str) -> (Vec<DocVector>, DocVector) {
        let sw = stopwords("english").unwrap();
        fit_transform(docs, query, sw)
    }

    #[test]
    fn zero_vector_scores_zero() {
        let (corpus, query) = vectors(&["dragon fight"], "the and of");
        assert!(query.is_zero());
        assert_eq!(cosine(&query, &corpus[0]), 0.0);
        let ranked = rank(&query, &corpus, 5);
        assert_eq!(ranked, vec![(0, 0.0)]);
    }

    #[test]
    fn scores_stay_within_bounds() {
        let (corpus, query) = vectors(
            &["dragon fight evil", "magic sword girl", "dragon magic"],
            "dragon fight magic",
        );
        for (_, score) in rank(&query, &corpus, 10) {
            assert!((-1.0..=1.0 + 1e-6).contains(&score));
        }
    }

    #[test]
    fn self_similarity_is_one() {
        let (corpus, query) = vectors(&["a boy and his dragon"], "a boy and his dragon");
        assert!((cosine(&query, &corpus[0]) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn equal_scores_keep_corpus_order() {
        // both documents reduce to the same token, so their scores tie exactly
        let (corpus, query) = vectors(&["dragon", "dragon!"], "dragon");
        let ranked = rank(&query, &corpus, 2);
        assert_eq!(ranked[0].0, 0);
        assert_eq!(ranked[1].0, 1);
        assert!((ranked[0].1 - ranked[1].1).abs() < 1e-6);
    }

    #[test]
    fn top_n_larger_than_corpus_returns_all() {
        let (corpus, query) = vectors(&["dragon", "sword"], "dragon");
        assert_eq!(rank(&query, &corpus, 100).len(), 2);
    }

    #[test]
    fn empty_corpus_ranks_empty() {
        let (corpus, query) = vectors(&[], "dragon");
        assert!(rank(&query, &corpus, 10).is_empty());
    }
}
