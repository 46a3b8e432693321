use crate::tokenizer::normalize;
use std::collections::{HashMap, HashSet};

/// Sparse TF-IDF vector: (feature id, weight) pairs sorted by feature id.
/// Vectors produced by [`fit_transform`] are L2-normalized.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocVector {
    terms: Vec<(usize, f32)>,
}

impl DocVector {
    pub fn from_weights(mut terms: Vec<(usize, f32)>) -> Self {
        terms.sort_by_key(|(feature, _)| *feature);
        Self { terms }
    }

    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn norm(&self) -> f32 {
        self.terms
            .iter()
            .map(|(_, w)| w * w)
            .sum::<f32>()
            .sqrt()
    }

    /// Sparse dot product by merge walk over the sorted term lists.
    pub fn dot(&self, other: &DocVector) -> f32 {
        let mut acc = 0.0f32;
        let (mut i, mut j) = (0usize, 0usize);
        while i < self.terms.len() && j < other.terms.len() {
            let (fa, wa) = self.terms[i];
            let (fb, wb) = other.terms[j];
            match fa.cmp(&fb) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    acc += wa * wb;
                    i += 1;
                    j += 1;
                }
            }
        }
        acc
    }

    fn l2_normalized(self) -> Self {
        let norm = self.norm();
        if norm == 0.0 {
            return self;
        }
        Self {
            terms: self
                .terms
                .into_iter()
                .map(|(feature, w)| (feature, w / norm))
                .collect(),
        }
    }
}

/// Fit one TF-IDF model over `documents` plus `query` (the query counts as
/// the last document, so document frequencies reflect its terms too) and
/// transform every text into an L2-normalized sparse vector.
///
/// Scheme, held fixed: raw term counts times smoothed inverse document
/// frequency `ln((1 + n) / (1 + df)) + 1`, then L2 normalization per vector.
/// Feature ids are assigned in first-encountered order across the combined
/// set, so corpus and query vectors share one consistent feature space and
/// the output is identical across runs.
pub fn fit_transform(
    documents: &[&str],
    query: &str,
    stopwords: &HashSet<&str>,
) -> (Vec<DocVector>, DocVector) {
    let tokenized: Vec<Vec<String>> = documents
        .iter()
        .map(|text| normalize(text, stopwords))
        .chain(std::iter::once(normalize(query, stopwords)))
        .collect();

    let mut feature_ids: HashMap<&str, usize> = HashMap::new();
    let mut df: Vec<u32> = Vec::new();
    for tokens in &tokenized {
        let mut seen: HashSet<usize> = HashSet::new();
        for token in tokens {
            let next = feature_ids.len();
            let feature = *feature_ids.entry(token.as_str()).or_insert(next);
            if feature == df.len() {
                df.push(0);
            }
            if seen.insert(feature) {
                df[feature] += 1;
            }
        }
    }

    let n = tokenized.len() as f32;
    let idf: Vec<f32> = df
        .iter()
        .map(|&df_t| ((1.0 + n) / (1.0 + df_t as f32)).ln() + 1.0)
        .collect();

    let mut vectors: Vec<DocVector> = tokenized
        .iter()
        .map(|tokens| {
            let mut tf: HashMap<usize, u32> = HashMap::new();
            for token in tokens {
                *tf.entry(feature_ids[token.as_str()]).or_insert(0) += 1;
            }
            let weights = tf
                .into_iter()
                .map(|(feature, count)| (feature, count as f32 * idf[feature]))
                .collect();
            DocVector::from_weights(weights).l2_normalized()
        })
        .collect();

    let query_vector = vectors.pop().unwrap_or_default();
    (vectors, query_vector)
}
