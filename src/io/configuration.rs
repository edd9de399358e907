//! Generation constants and runtime configuration defaults

// Grid settings
/// Default side length of a generated puzzle
pub const DEFAULT_GRID_SIZE: usize = 5;

// Keeps placement enumeration cheap and the text rendering readable
/// Maximum allowed grid side length
pub const MAX_GRID_SIZE: usize = 15;

// Placement engine budgets
/// Minimum number of placed clues for a puzzle to be accepted
pub const MIN_CLUE_COUNT: usize = 8;

/// Maximum placement rounds per generation attempt
pub const MAX_PLACEMENT_ROUNDS: usize = 2000;

/// Rounds between reshuffles of the unused candidate words
pub const RESHUFFLE_INTERVAL: usize = 100;

/// Points awarded for each letter shared with an existing word
pub const INTERSECTION_SCORE: f64 = 2.0;

/// Points awarded for each empty perpendicular neighbour of a placed letter
pub const OPEN_NEIGHBOUR_SCORE: f64 = 0.5;

// Assembler settings
/// Maximum top-level attempts before giving up on a puzzle
pub const MAX_PUZZLE_ATTEMPTS: usize = 10;

/// Number of (word, clue) pairs requested from the sampler
pub const DEFAULT_POOL_SIZE: usize = 2000;

/// Shortest word length in the corpus
pub const MIN_WORD_LENGTH: usize = 2;

/// Longest word length in the corpus
pub const MAX_WORD_LENGTH: usize = 5;

/// Share of the pool reserved for each word length, in percent
pub const LENGTH_DISTRIBUTION: [(usize, usize); 4] = [(5, 40), (4, 30), (3, 20), (2, 10)];

// Corpus files
/// Directory searched for corpus files when none is given
pub const DEFAULT_CORPUS_DIR: &str = "data/crosswords";

/// Corpus file name for each word length
pub const CORPUS_FILES: [(usize, &str); 4] = [
    (2, "two-letters.json"),
    (3, "three-letters.json"),
    (4, "four-letters.json"),
    (5, "five-letters.json"),
];

/// Percentage of the pool targeted at words of `length`
pub fn distribution_weight(length: usize) -> usize {
    LENGTH_DISTRIBUTION
        .iter()
        .find(|(len, _)| *len == length)
        .map_or(0, |(_, weight)| *weight)
}

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
