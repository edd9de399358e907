//! Word and clue corpus: parsing, cached loading and pool sampling

/// Word entries, length buckets and corpus file parsing
pub mod entry;
/// Stratified candidate pool sampling
pub mod sampler;
/// Cached corpus loading with fallback data
pub mod store;

pub use entry::{CorpusBucket, WordEntry};
pub use sampler::{PoolEntry, PoolSampler};
pub use store::WordClueStore;
