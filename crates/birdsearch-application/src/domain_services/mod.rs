//! Domain Services
//!
//! | Service | Description |
//! |---------|-------------|
//! | [`VectorIndex`] | Records and embeddings held side by side, ranked by cosine similarity |

/// In-memory vector index
pub mod vector_index;

pub use vector_index::{RankedRecord, VectorIndex, cosine_similarity};
