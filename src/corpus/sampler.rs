//! Length-stratified random sampling of (word, clue) pairs

use std::collections::HashSet;

use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use serde::{Deserialize, Serialize};

use crate::corpus::entry::{CorpusBucket, WordEntry};
use crate::io::configuration::distribution_weight;

/// One candidate word with the clue drawn for it
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PoolEntry {
    /// Answer word
    pub word: String,
    /// Clue chosen for this draw
    pub clue: String,
}

impl PoolEntry {
    /// Create a pool entry
    pub fn new(word: impl Into<String>, clue: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            clue: clue.into(),
        }
    }
}

/// Draws candidate pools from a corpus
#[derive(Debug, Clone, Copy)]
pub struct PoolSampler<'a> {
    corpus: &'a CorpusBucket,
}

impl<'a> PoolSampler<'a> {
    /// Create a sampler over `corpus`
    pub const fn new(corpus: &'a CorpusBucket) -> Self {
        Self { corpus }
    }

    /// Draw up to `count` entries with word lengths in `[min_length, max_length]`
    ///
    /// Each length gets `floor(count * weight / 100)` entries from its shuffled
    /// bucket, longest words first. Words are unique within the result and one
    /// clue is picked at random per word. Fewer than `count` entries come back
    /// when the corpus runs short.
    pub fn sample<R: Rng + ?Sized>(
        &self,
        min_length: usize,
        max_length: usize,
        count: usize,
        rng: &mut R,
    ) -> Vec<PoolEntry> {
        let mut pool = Vec::with_capacity(count);
        let mut used_words = HashSet::new();

        for length in (min_length..=max_length).rev() {
            let mut entries: Vec<&WordEntry> = self.corpus.words_of_length(length).iter().collect();
            entries.shuffle(rng);

            let target = count * distribution_weight(length) / 100;
            let mut added = 0;

            for entry in entries {
                if added >= target || pool.len() >= count {
                    break;
                }
                if used_words.contains(&entry.word) {
                    continue;
                }
                let Some(clue) = entry.clues.choose(rng) else {
                    continue;
                };
                used_words.insert(entry.word.clone());
                pool.push(PoolEntry::new(entry.word.clone(), clue.clone()));
                added += 1;
            }
        }

        pool
    }
}
