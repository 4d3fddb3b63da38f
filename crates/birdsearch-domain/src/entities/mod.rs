//! Domain Entities
//!
//! Entities that make up the searchable corpus.

/// Bird species record
pub mod bird_record;

pub use bird_record::{BirdRecord, Presence};
