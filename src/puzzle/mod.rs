//! Puzzle data model and consistency checks

/// Clue and puzzle data types
pub mod data;
/// Structural validation of finished puzzles
pub mod validation;

pub use data::{ClueEntry, Clues, PuzzleData};
pub use validation::Violation;
