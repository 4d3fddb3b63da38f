//! Tests for the in-memory vector index and cosine similarity

use birdsearch_application::domain_services::{VectorIndex, cosine_similarity};
use birdsearch_domain::{BirdRecord, Embedding, Error};

fn record(name: &str) -> BirdRecord {
    BirdRecord::new(name, format!("{name} scientificus"), "R", "Passeriformes", "Testidae")
}

fn embedding(vector: Vec<f32>) -> Embedding {
    Embedding::new(vector, "test")
}

fn index_of(entries: &[(&str, Vec<f32>)]) -> VectorIndex {
    let records = entries.iter().map(|(name, _)| record(name)).collect();
    let embeddings = entries.iter().map(|(_, v)| embedding(v.clone())).collect();
    VectorIndex::build(records, embeddings).expect("index should build")
}

fn names(index: &VectorIndex, query: &[f32], top_k: usize) -> Vec<String> {
    index
        .rank(query, top_k)
        .expect("rank should succeed")
        .iter()
        .map(|r| r.record.name.clone())
        .collect()
}

#[test]
fn test_cosine_identical_vectors_is_one() {
    let v = [0.3_f32, -1.2, 4.5, 0.01];
    let score = cosine_similarity(&v, &v).unwrap();
    assert!((score - 1.0).abs() < 1e-9, "got {score}");
}

#[test]
fn test_cosine_is_symmetric() {
    let a = [1.0_f32, 2.0, 3.0];
    let b = [-2.0_f32, 0.5, 1.0];
    assert_eq!(
        cosine_similarity(&a, &b).unwrap(),
        cosine_similarity(&b, &a).unwrap()
    );
}

#[test]
fn test_cosine_orthogonal_and_opposite() {
    assert_eq!(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]).unwrap(), 0.0);
    let opposite = cosine_similarity(&[1.0, 1.0], &[-1.0, -1.0]).unwrap();
    assert!((opposite + 1.0).abs() < 1e-9);
}

#[test]
fn test_cosine_zero_vector_scores_zero() {
    assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 2.0]).unwrap(), 0.0);
    assert_eq!(cosine_similarity(&[1.0, 2.0], &[0.0, 0.0]).unwrap(), 0.0);
    assert_eq!(cosine_similarity(&[0.0, 0.0], &[0.0, 0.0]).unwrap(), 0.0);
}

#[test]
fn test_cosine_length_mismatch() {
    let err = cosine_similarity(&[1.0, 0.0], &[1.0, 0.0, 0.0]).unwrap_err();
    assert!(matches!(
        err,
        Error::DimensionMismatch {
            expected: 2,
            actual: 3
        }
    ));
}

#[test]
fn test_rank_orders_by_descending_score() {
    let index = index_of(&[
        ("A", vec![1.0, 0.0]),
        ("B", vec![0.0, 1.0]),
        ("C", vec![1.0, 1.0]),
    ]);

    let ranked = index.rank(&[1.0, 0.0], 2).unwrap();

    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[0].record.name, "A");
    assert!((ranked[0].score - 1.0).abs() < 1e-9);
    assert_eq!(ranked[1].record.name, "C");
    assert!((ranked[1].score - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-6);
}

#[test]
fn test_rank_returns_whole_corpus_when_top_k_exceeds_size() {
    let index = index_of(&[
        ("A", vec![1.0, 0.0]),
        ("B", vec![0.0, 1.0]),
        ("C", vec![1.0, 1.0]),
    ]);

    assert_eq!(names(&index, &[1.0, 0.0], 50), vec!["A", "C", "B"]);
}

#[test]
fn test_rank_ties_keep_corpus_order() {
    let index = index_of(&[
        ("First", vec![1.0, 0.0]),
        ("Other", vec![0.0, 1.0]),
        ("Second", vec![2.0, 0.0]),
        ("Third", vec![0.5, 0.0]),
    ]);

    assert_eq!(
        names(&index, &[1.0, 0.0], 4),
        vec!["First", "Second", "Third", "Other"]
    );
    // Truncation keeps the earliest of the tied records
    assert_eq!(names(&index, &[1.0, 0.0], 2), vec!["First", "Second"]);
}

#[test]
fn test_rank_scores_are_non_increasing() {
    let index = index_of(&[
        ("a", vec![0.1, 0.9, 0.0]),
        ("b", vec![0.8, 0.1, 0.3]),
        ("c", vec![0.4, 0.4, 0.4]),
        ("d", vec![-0.5, 0.2, 0.9]),
        ("e", vec![0.0, 0.0, 0.0]),
    ]);

    let ranked = index.rank(&[0.7, 0.2, 0.1], 5).unwrap();

    assert_eq!(ranked.len(), 5);
    for pair in ranked.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
    for r in &ranked {
        assert!((-1.0..=1.0).contains(&r.score));
    }
}

#[test]
fn test_rank_zero_magnitude_query_scores_all_zero() {
    let index = index_of(&[("A", vec![1.0, 0.0]), ("B", vec![0.0, 1.0])]);

    let ranked = index.rank(&[0.0, 0.0], 2).unwrap();

    assert_eq!(ranked.len(), 2);
    assert!(ranked.iter().all(|r| r.score == 0.0));
    assert_eq!(ranked[0].record.name, "A");
}

#[test]
fn test_rank_top_k_zero_is_empty() {
    let index = index_of(&[("A", vec![1.0, 0.0])]);
    assert!(index.rank(&[1.0, 0.0], 0).unwrap().is_empty());
}

#[test]
fn test_rank_query_dimension_mismatch() {
    let index = index_of(&[("A", vec![1.0, 0.0])]);

    let err = index.rank(&[1.0, 0.0, 0.0], 1).unwrap_err();

    assert!(matches!(
        err,
        Error::DimensionMismatch {
            expected: 2,
            actual: 3
        }
    ));
}

#[test]
fn test_empty_index_ranks_to_nothing() {
    let index = VectorIndex::build(Vec::new(), Vec::new()).unwrap();

    assert!(index.is_empty());
    assert!(index.rank(&[1.0, 2.0, 3.0], 5).unwrap().is_empty());
}

#[test]
fn test_build_rejects_count_mismatch() {
    let err = VectorIndex::build(
        vec![record("A"), record("B")],
        vec![embedding(vec![1.0, 0.0])],
    )
    .unwrap_err();

    assert!(matches!(err, Error::InvalidArgument { .. }));
}

#[test]
fn test_build_rejects_inconsistent_dimensions() {
    let err = VectorIndex::build(
        vec![record("A"), record("B")],
        vec![embedding(vec![1.0, 0.0]), embedding(vec![1.0, 0.0, 0.0])],
    )
    .unwrap_err();

    assert!(matches!(
        err,
        Error::DimensionMismatch {
            expected: 2,
            actual: 3
        }
    ));
}

#[test]
fn test_build_keeps_records_in_order() {
    let index = index_of(&[("A", vec![1.0]), ("B", vec![2.0]), ("C", vec![3.0])]);

    assert_eq!(index.len(), 3);
    assert!(!index.is_empty());
    // Equal scores fall back to corpus order
    assert_eq!(names(&index, &[1.0], 3), vec!["A", "B", "C"]);
}

#[test]
fn test_build_rejects_non_finite_components() {
    let err = VectorIndex::build(
        vec![record("A"), record("B")],
        vec![embedding(vec![1.0, 0.0]), embedding(vec![f32::NAN, 0.0])],
    )
    .unwrap_err();

    assert!(matches!(err, Error::Embedding { .. }), "got {err:?}");
    assert!(err.to_string().contains("Embedding 1"), "{err}");
}

#[test]
fn test_rank_rejects_non_finite_query() {
    let index = index_of(&[("A", vec![1.0, 0.0])]);

    let err = index.rank(&[f32::INFINITY, 0.0], 1).unwrap_err();

    assert!(matches!(err, Error::Embedding { .. }));
}
