use core::{recommend, Document, RecommendConfig};

fn doc(id: u32, title: &str, synopsis: &str) -> Document {
    Document { id, title: title.to_string(), synopsis: synopsis.to_string() }
}

fn sample_corpus() -> Vec<Document> {
    vec![
        doc(1, "A", "a boy and his dragon fight evil"),
        doc(2, "B", "a girl finds a magic sword"),
        doc(3, "C", "cooking competition in a small town"),
    ]
}

#[test]
fn ranks_by_shared_terms() {
    let config = RecommendConfig { top_n: 2, ..Default::default() };
    let results = recommend(&sample_corpus(), "dragon fight magic", &config).unwrap();

    // A shares dragon+fight, B shares magic, C shares nothing and is cut
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].title, "A");
    assert_eq!(results[1].title, "B");
    assert!(results[0].score > results[1].score);
    assert!(results[1].score > 0.0);
}

#[test]
fn unrelated_document_scores_zero() {
    let config = RecommendConfig { top_n: 10, ..Default::default() };
    let results = recommend(&sample_corpus(), "dragon fight magic", &config).unwrap();
    assert_eq!(results.len(), 3);
    assert_eq!(results[2].title, "C");
    assert!(results[2].score.abs() < 1e-6);
}

#[test]
fn exact_synopsis_query_ranks_first_with_unit_score() {
    let results = recommend(
        &sample_corpus(),
        "a girl finds a magic sword",
        &RecommendConfig::default(),
    )
    .unwrap();
    assert_eq!(results[0].title, "B");
    assert!((results[0].score - 1.0).abs() < 1e-6);
}

#[test]
fn repeated_invocations_are_identical() {
    let corpus = sample_corpus();
    let config = RecommendConfig::default();
    let first = recommend(&corpus, "dragon fight magic", &config).unwrap();
    let second = recommend(&corpus, "dragon fight magic", &config).unwrap();
    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(second.iter()) {
        assert_eq!(a.id, b.id);
        assert_eq!(a.score, b.score);
    }
}

#[test]
fn corpus_of_blank_synopses_yields_empty_result() {
    let corpus = vec![doc(1, "A", ""), doc(2, "B", "   ")];
    let results = recommend(&corpus, "dragon", &RecommendConfig::default()).unwrap();
    assert!(results.is_empty());
}

#[test]
fn top_n_beyond_corpus_returns_everything() {
    let config = RecommendConfig { top_n: 50, ..Default::default() };
    let results = recommend(&sample_corpus(), "dragon", &config).unwrap();
    assert_eq!(results.len(), 3);
}
