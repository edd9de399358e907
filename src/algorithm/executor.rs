use std::cmp::Reverse;

use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::{
    algorithm::placement::PlacementState,
    corpus::sampler::PoolEntry,
    io::configuration::{MAX_PLACEMENT_ROUNDS, MIN_CLUE_COUNT, RESHUFFLE_INTERVAL},
    io::error::{CrosswordError, Result, invalid_parameter},
    puzzle::data::PuzzleData,
    spatial::span::{Direction, Placement},
};

/// Budgets controlling a single placement run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlacementConfig {
    /// Clues needed before the run stops successfully
    pub min_clues: usize,
    /// Maximum passes over the unused candidates
    pub max_rounds: usize,
    /// Rounds between reshuffles of the unused candidates
    pub reshuffle_interval: usize,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            min_clues: MIN_CLUE_COUNT,
            max_rounds: MAX_PLACEMENT_ROUNDS,
            reshuffle_interval: RESHUFFLE_INTERVAL,
        }
    }
}

impl PlacementConfig {
    /// Check that every budget is usable
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if any budget is zero
    pub fn validate(&self) -> Result<()> {
        if self.min_clues == 0 {
            return Err(invalid_parameter(
                "min_clues",
                &self.min_clues,
                &"must be at least 1",
            ));
        }
        if self.max_rounds == 0 {
            return Err(invalid_parameter(
                "max_rounds",
                &self.max_rounds,
                &"must be at least 1",
            ));
        }
        if self.reshuffle_interval == 0 {
            return Err(invalid_parameter(
                "reshuffle_interval",
                &self.reshuffle_interval,
                &"must be at least 1",
            ));
        }
        Ok(())
    }
}

/// Greedy crossword filler for one grid size
///
/// Each call to [`generate`](Self::generate) builds a fresh [`PlacementState`],
/// so an engine can be reused for any number of independent attempts.
#[derive(Clone, Copy, Debug)]
pub struct GridPlacementEngine {
    size: usize,
    config: PlacementConfig,
}

impl GridPlacementEngine {
    /// Create an engine for `size`x`size` grids with default budgets
    pub fn new(size: usize) -> Self {
        Self::with_config(size, PlacementConfig::default())
    }

    /// Create an engine with custom budgets
    pub const fn with_config(size: usize, config: PlacementConfig) -> Self {
        Self { size, config }
    }

    /// Grid side length
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Placement budgets
    pub const fn config(&self) -> &PlacementConfig {
        &self.config
    }

    /// Fill a grid from `candidates` until the minimum clue count is reached
    ///
    /// Candidate words are trimmed and uppercased; words that are not plain
    /// ASCII letters or do not fit the grid are dropped.
    /// Candidates are ordered longest first and the first one is centred in
    /// the middle row. Each round offers every unused candidate its best
    /// placement; the unused candidates are reshuffled every
    /// `reshuffle_interval` rounds. Remaining empty cells become black.
    ///
    /// # Errors
    ///
    /// Returns `PlacementExhausted` if the minimum clue count is not reached
    /// within the round budget, or if a round places nothing (no later round
    /// could then make progress). Returns `InvalidParameter` for an unusable
    /// configuration.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        candidates: Vec<PoolEntry>,
        rng: &mut R,
    ) -> Result<PuzzleData> {
        self.config.validate()?;
        let required = self.config.min_clues;

        let mut words: Vec<PoolEntry> = candidates
            .into_iter()
            .filter_map(|entry| {
                let word = entry.word.trim().to_ascii_uppercase();
                let placeable = !word.is_empty()
                    && word.len() <= self.size
                    && word.bytes().all(|b| b.is_ascii_uppercase());
                placeable.then(|| PoolEntry::new(word, entry.clue))
            })
            .collect();
        words.sort_by_key(|entry| Reverse(entry.word.len()));

        let Some(first) = words.first() else {
            return Err(CrosswordError::PlacementExhausted {
                rounds: 0,
                placed: 0,
                required,
            });
        };

        let middle_row = self.size / 2;
        let start_col = (self.size - first.word.len()) / 2;
        let mut state = PlacementState::new(self.size).commit(
            &first.word,
            &first.clue,
            Placement::new(middle_row, start_col, Direction::Across),
        )?;

        let mut rounds = 0;
        while state.clue_count() < required && rounds < self.config.max_rounds {
            rounds += 1;
            let placed_before = state.clue_count();

            for entry in &words {
                if state.is_used(&entry.word) {
                    continue;
                }
                if let Some(placement) = state.find_best_placement(&entry.word) {
                    state = state.commit(&entry.word, &entry.clue, placement)?;
                    if state.clue_count() >= required {
                        break;
                    }
                }
            }

            if state.clue_count() == placed_before {
                debug!("Round {rounds} placed no word, stopping at {placed_before} clues");
                break;
            }

            if rounds % self.config.reshuffle_interval == 0 {
                words.retain(|entry| !state.is_used(&entry.word));
                words.shuffle(rng);
            }
        }

        if state.clue_count() < required {
            return Err(CrosswordError::PlacementExhausted {
                rounds,
                placed: state.clue_count(),
                required,
            });
        }

        debug!(
            "Placed {} words in {rounds} rounds on a {}x{} grid",
            state.clue_count(),
            self.size,
            self.size
        );
        Ok(state.into_puzzle())
    }
}
