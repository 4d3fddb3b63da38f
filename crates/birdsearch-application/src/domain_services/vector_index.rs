//! In-memory vector index
//!
//! Holds the corpus and its embeddings as parallel vectors joined by
//! position (`records[i]` ↔ `embeddings[i]`). The index is built once and
//! never mutated afterwards, so concurrent readers need no locking.
//!
//! Ranking is exhaustive: every query is compared against every stored
//! vector, which is O(N·D). This is only appropriate for corpora of tens to
//! low hundreds of records.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use birdsearch_domain::entities::BirdRecord;
use birdsearch_domain::error::{Error, Result};
use birdsearch_domain::value_objects::Embedding;

/// A record paired with its similarity to a query
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedRecord<'a> {
    /// The matched record
    pub record: &'a BirdRecord,
    /// Cosine similarity in `[-1, 1]`
    pub score: f64,
}

/// Immutable index of records and their embeddings
#[derive(Debug, Default)]
pub struct VectorIndex {
    records: Vec<BirdRecord>,
    vectors: Vec<Vec<f32>>,
    norms: Vec<f64>,
    dimensions: Option<usize>,
}

impl VectorIndex {
    /// Build an index from records and embeddings in the same order
    ///
    /// Either every pair is accepted or no index is produced. The dimension
    /// is taken from the first embedding; any other length is rejected, as
    /// is any NaN or infinite component.
    pub fn build(records: Vec<BirdRecord>, embeddings: Vec<Embedding>) -> Result<Self> {
        if records.len() != embeddings.len() {
            return Err(Error::invalid_argument(format!(
                "Record count ({}) does not match embedding count ({})",
                records.len(),
                embeddings.len()
            )));
        }

        let dimensions = embeddings.first().map(|e| e.vector.len());
        let mut vectors = Vec::with_capacity(embeddings.len());
        let mut norms = Vec::with_capacity(embeddings.len());

        for (position, embedding) in embeddings.into_iter().enumerate() {
            let expected = dimensions.unwrap_or_default();
            if embedding.vector.len() != expected {
                return Err(Error::dimension_mismatch(expected, embedding.vector.len()));
            }
            if !all_finite(&embedding.vector) {
                return Err(Error::embedding(format!(
                    "Embedding {position} has non-finite components"
                )));
            }
            norms.push(norm(&embedding.vector));
            vectors.push(embedding.vector);
        }

        Ok(Self {
            records,
            vectors,
            norms,
            dimensions,
        })
    }

    /// Number of indexed records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the index holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Rank the corpus against a query vector
    ///
    /// Returns up to `top_k` records in descending score order. Equal scores
    /// keep corpus order. Range validation of `top_k` is the caller's job.
    pub fn rank(&self, query: &[f32], top_k: usize) -> Result<Vec<RankedRecord<'_>>> {
        let Some(dimensions) = self.dimensions else {
            return Ok(Vec::new());
        };
        if query.len() != dimensions {
            return Err(Error::dimension_mismatch(dimensions, query.len()));
        }
        if !all_finite(query) {
            return Err(Error::embedding("Query embedding has non-finite components"));
        }
        if top_k == 0 {
            return Ok(Vec::new());
        }

        let query_norm = norm(query);

        // Bounded heap whose top is the weakest kept candidate: O(N log K)
        let mut heap: BinaryHeap<ScoredItem> = BinaryHeap::with_capacity(top_k + 1);

        for (index, (vector, vector_norm)) in self.vectors.iter().zip(&self.norms).enumerate() {
            let item = ScoredItem {
                score: cosine_with_norms(query, vector, query_norm, *vector_norm),
                index,
            };

            if heap.len() < top_k {
                heap.push(item);
            } else if let Some(weakest) = heap.peek() {
                if item.cmp(weakest) == Ordering::Less {
                    heap.pop();
                    heap.push(item);
                }
            }
        }

        Ok(heap
            .into_sorted_vec()
            .into_iter()
            .map(|item| RankedRecord {
                record: &self.records[item.index],
                score: item.score,
            })
            .collect())
    }
}

fn all_finite(vector: &[f32]) -> bool {
    vector.iter().all(|v| v.is_finite())
}

/// Cosine similarity between two vectors of equal length
///
/// Returns `0.0` when either vector has zero magnitude.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f64> {
    if a.len() != b.len() {
        return Err(Error::dimension_mismatch(a.len(), b.len()));
    }
    Ok(cosine_with_norms(a, b, norm(a), norm(b)))
}

/// Candidate ordered so that "greater" means "ranks worse"
///
/// Lower score is worse; among equal scores the later corpus position is
/// worse. `BinaryHeap` therefore keeps the weakest candidate on top and
/// `into_sorted_vec` yields best first.
#[derive(Debug)]
struct ScoredItem {
    score: f64,
    index: usize,
}

impl PartialEq for ScoredItem {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ScoredItem {}

impl Ord for ScoredItem {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .total_cmp(&self.score)
            .then_with(|| self.index.cmp(&other.index))
    }
}

impl PartialOrd for ScoredItem {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// L2 norm, accumulated in f64
fn norm(v: &[f32]) -> f64 {
    v.iter()
        .map(|x| f64::from(*x) * f64::from(*x))
        .sum::<f64>()
        .sqrt()
}

fn cosine_with_norms(a: &[f32], b: &[f32], norm_a: f64, norm_b: f64) -> f64 {
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    let dot: f64 = a
        .iter()
        .zip(b)
        .map(|(x, y)| f64::from(*x) * f64::from(*y))
        .sum();
    dot / (norm_a * norm_b)
}
