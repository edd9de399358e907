//! Spatial data structures for the crossword grid
//!
//! This module contains:
//! - The letter grid owned by a generation attempt
//! - Word orientation and covered-cell spans

/// Letter grid state
pub mod grid;
/// Placement spans and perpendicular neighbourhoods
pub mod span;

pub use grid::LetterGrid;
pub use span::{Direction, Placement};
