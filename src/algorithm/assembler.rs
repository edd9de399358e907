//! Top-level puzzle generation with bounded retries

use log::{info, warn};
use rand::Rng;
use rand::seq::SliceRandom;

use crate::{
    algorithm::executor::{GridPlacementEngine, PlacementConfig},
    corpus::{sampler::PoolSampler, store::WordClueStore},
    io::configuration::{
        DEFAULT_POOL_SIZE, MAX_GRID_SIZE, MAX_PUZZLE_ATTEMPTS, MAX_WORD_LENGTH, MIN_WORD_LENGTH,
    },
    io::error::{CrosswordError, Result, invalid_parameter},
    puzzle::data::PuzzleData,
};

/// Parameters for a full puzzle generation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AssemblerConfig {
    /// Maximum top-level attempts
    pub max_attempts: usize,
    /// Number of pool entries requested from the sampler
    pub pool_size: usize,
    /// Shortest word length drawn into the pool
    pub min_word_length: usize,
    /// Longest word length drawn into the pool
    pub max_word_length: usize,
    /// Budgets for each placement run
    pub placement: PlacementConfig,
}

impl Default for AssemblerConfig {
    fn default() -> Self {
        Self {
            max_attempts: MAX_PUZZLE_ATTEMPTS,
            pool_size: DEFAULT_POOL_SIZE,
            min_word_length: MIN_WORD_LENGTH,
            max_word_length: MAX_WORD_LENGTH,
            placement: PlacementConfig::default(),
        }
    }
}

impl AssemblerConfig {
    /// Check the configuration against a requested grid size
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the grid size is outside
    /// `2..=MAX_GRID_SIZE`, the word length range is empty or outside the
    /// corpus range, or any budget is zero
    pub fn validate(&self, size: usize) -> Result<()> {
        if !(2..=MAX_GRID_SIZE).contains(&size) {
            return Err(invalid_parameter(
                "size",
                &size,
                &format!("must be between 2 and {MAX_GRID_SIZE}"),
            ));
        }
        if self.min_word_length < MIN_WORD_LENGTH
            || self.max_word_length > MAX_WORD_LENGTH
            || self.min_word_length > self.max_word_length
        {
            return Err(invalid_parameter(
                "word_length",
                &format!("{}..={}", self.min_word_length, self.max_word_length),
                &format!(
                    "must be a non-empty range within {MIN_WORD_LENGTH}..={MAX_WORD_LENGTH}"
                ),
            ));
        }
        if self.max_attempts == 0 {
            return Err(invalid_parameter(
                "max_attempts",
                &self.max_attempts,
                &"must be at least 1",
            ));
        }
        if self.pool_size == 0 {
            return Err(invalid_parameter(
                "pool_size",
                &self.pool_size,
                &"must be at least 1",
            ));
        }
        self.placement.validate()
    }
}

/// Outcome of a successful generation
#[derive(Debug, Clone)]
pub struct GenerationReport {
    /// The generated puzzle
    pub puzzle: PuzzleData,
    /// Attempt number that succeeded, starting at 1
    pub attempts: usize,
    /// Reasons the earlier attempts failed
    pub failures: Vec<String>,
}

/// Drives placement attempts over a sampled pool until one succeeds
#[derive(Debug, Clone, Copy)]
pub struct PuzzleAssembler<'a> {
    store: &'a WordClueStore,
    config: AssemblerConfig,
}

impl<'a> PuzzleAssembler<'a> {
    /// Create an assembler over `store` with default parameters
    pub fn new(store: &'a WordClueStore) -> Self {
        Self::with_config(store, AssemblerConfig::default())
    }

    /// Create an assembler with custom parameters
    pub const fn with_config(store: &'a WordClueStore, config: AssemblerConfig) -> Self {
        Self { store, config }
    }

    /// Generation parameters
    pub const fn config(&self) -> &AssemblerConfig {
        &self.config
    }

    /// Generate a `size`x`size` puzzle
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` for an unusable size or configuration, or
    /// `GenerationFailed` once every attempt has failed
    pub fn generate_puzzle<R: Rng + ?Sized>(&self, size: usize, rng: &mut R) -> Result<PuzzleData> {
        self.generate_report(size, rng).map(|report| report.puzzle)
    }

    /// Generate a puzzle and report the attempts it took
    ///
    /// The pool is sampled once; every attempt shuffles its own copy and runs
    /// a fresh engine. A puzzle that fails structural validation counts as a
    /// failed attempt.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` for an unusable size or configuration, or
    /// `GenerationFailed` once every attempt has failed
    pub fn generate_report<R: Rng + ?Sized>(
        &self,
        size: usize,
        rng: &mut R,
    ) -> Result<GenerationReport> {
        self.config.validate(size)?;

        let corpus = self.store.load();
        let pool = PoolSampler::new(corpus).sample(
            self.config.min_word_length,
            self.config.max_word_length,
            self.config.pool_size,
            rng,
        );
        let engine = GridPlacementEngine::with_config(size, self.config.placement);
        let max_attempts = self.config.max_attempts;
        let mut failures = Vec::new();

        for attempt in 1..=max_attempts {
            info!("Attempt {attempt} of {max_attempts}");

            let mut shuffled = pool.clone();
            shuffled.shuffle(rng);

            let failure = match engine.generate(shuffled, rng) {
                Ok(puzzle) => {
                    let violations = puzzle.violations(self.config.placement.min_clues);
                    if violations.is_empty() {
                        info!(
                            "Generated {size}x{size} puzzle with {} clues on attempt {attempt}",
                            puzzle.clues.len()
                        );
                        return Ok(GenerationReport {
                            puzzle,
                            attempts: attempt,
                            failures,
                        });
                    }
                    violations
                        .iter()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>()
                        .join("; ")
                }
                Err(error) if error.is_retryable() => error.to_string(),
                Err(error) => return Err(error),
            };

            warn!("Failed attempt {attempt}: {failure}");
            failures.push(failure);
        }

        Err(CrosswordError::GenerationFailed {
            attempts: max_attempts,
            failures,
        })
    }
}

/// Generate a `size`x`size` puzzle from `store` with default parameters
///
/// # Errors
///
/// Returns `InvalidParameter` for an unusable size, or `GenerationFailed` once
/// every attempt has failed
pub fn generate_puzzle<R: Rng + ?Sized>(
    store: &WordClueStore,
    size: usize,
    rng: &mut R,
) -> Result<PuzzleData> {
    PuzzleAssembler::new(store).generate_puzzle(size, rng)
}
