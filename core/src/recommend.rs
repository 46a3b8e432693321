use crate::rank::rank;
use crate::tokenizer::{normalize, stopwords};
use crate::vectorizer::fit_transform;
use crate::vocab::Vocabulary;
use anyhow::{bail, ensure, Result};
use serde::{Deserialize, Serialize};

/// One corpus entry. Only documents whose synopsis is non-empty after
/// trimming take part in vectorization and ranking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: u32,
    pub title: String,
    pub synopsis: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub id: u32,
    pub title: String,
    pub score: f32,
}

#[derive(Debug, Clone)]
pub struct RecommendConfig {
    pub vocab_size: usize,
    pub top_n: usize,
    pub stopword_language: String,
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self {
            vocab_size: 10_000,
            top_n: 10,
            stopword_language: "english".to_string(),
        }
    }
}

impl RecommendConfig {
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.vocab_size >= 2,
            "vocab_size must be at least 2, got {}",
            self.vocab_size
        );
        ensure!(self.top_n >= 1, "top_n must be at least 1, got {}", self.top_n);
        stopwords(&self.stopword_language)?;
        Ok(())
    }
}

/// Rank the corpus against a query and return the `top_n` closest documents.
///
/// The query is resolved first: an exact title match substitutes that
/// document's synopsis, anything else is used verbatim. A query that is
/// empty after trimming is rejected; an empty corpus (after dropping
/// blank synopses) yields an empty result. Each call refits the TF-IDF
/// model over corpus plus query, so the output depends only on the inputs.
pub fn recommend(
    corpus: &[Document],
    query: &str,
    config: &RecommendConfig,
) -> Result<Vec<Recommendation>> {
    config.validate()?;

    let query_text = resolve_query(corpus, query);
    let query_text = query_text.trim();
    if query_text.is_empty() {
        bail!("query is empty after trimming");
    }

    let eligible: Vec<&Document> = corpus
        .iter()
        .filter(|doc| !doc.synopsis.trim().is_empty())
        .collect();
    if eligible.is_empty() {
        return Ok(Vec::new());
    }

    let sw = stopwords(&config.stopword_language)?;
    let texts: Vec<&str> = eligible.iter().map(|doc| doc.synopsis.as_str()).collect();
    let (corpus_vectors, query_vector) = fit_transform(&texts, query_text, sw);
    tracing::debug!(
        documents = eligible.len(),
        query_has_terms = !query_vector.is_zero(),
        "fitted tf-idf model"
    );

    let ranked = rank(&query_vector, &corpus_vectors, config.top_n);
    Ok(ranked
        .into_iter()
        .map(|(index, score)| {
            let doc = eligible[index];
            Recommendation { id: doc.id, title: doc.title.clone(), score }
        })
        .collect())
}

/// Side-artifact vocabulary over the normalized corpus synopses. Not used by
/// the ranking itself; exposed for corpus diagnostics.
pub fn corpus_vocabulary(corpus: &[Document], config: &RecommendConfig) -> Result<Vocabulary> {
    config.validate()?;
    let sw = stopwords(&config.stopword_language)?;
    let sequences: Vec<Vec<String>> = corpus
        .iter()
        .filter(|doc| !doc.synopsis.trim().is_empty())
        .map(|doc| normalize(&doc.synopsis, sw))
        .collect();
    Vocabulary::build(&sequences, config.vocab_size)
}

fn resolve_query<'a>(corpus: &'a [Document], query: &'a str) -> &'a str {
    match corpus.iter().find(|doc| doc.title == query) {
        Some(doc) => &doc.synopsis,
        None => query,
    }
}
