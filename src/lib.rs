//! Mini crossword generation from a stratified word and clue corpus
//!
//! Corpus files are loaded once and cached, a length-distributed pool of
//! (word, clue) pairs is sampled from them, and a greedy placement engine
//! interlocks the words on a small square grid, retrying with reshuffled pools
//! until a puzzle reaches the minimum clue count.

#![forbid(unsafe_code)]

/// Placement engine, generation runs and retrying assembly
pub mod algorithm;
/// Corpus parsing, caching and pool sampling
pub mod corpus;
/// Input/output operations, configuration and error handling
pub mod io;
/// Generated puzzle data and validation
pub mod puzzle;
/// Letter grid and placement spans
pub mod spatial;

pub use algorithm::assembler::{PuzzleAssembler, generate_puzzle};
pub use io::error::{CrosswordError, Result};
pub use puzzle::data::PuzzleData;
