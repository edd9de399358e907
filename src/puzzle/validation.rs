//! Structural checks on a finished puzzle

use std::collections::HashSet;
use std::fmt;

use crate::puzzle::data::PuzzleData;
use crate::spatial::span::Direction;

/// A way in which a puzzle layout is inconsistent
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// Fewer clues than the minimum were placed
    TooFewClues {
        /// Clues present
        found: usize,
        /// Clues required
        required: usize,
    },
    /// An answer runs past the grid edge
    ClueOutOfBounds {
        /// Clue number
        number: u32,
        /// Orientation
        direction: Direction,
    },
    /// The answer text does not have the declared length
    AnswerLengthMismatch {
        /// Clue number
        number: u32,
        /// Orientation
        direction: Direction,
    },
    /// Two answers put different letters in the same cell
    CrossingMismatch {
        /// Row of the cell
        row: usize,
        /// Column of the cell
        col: usize,
    },
    /// A black cell is covered by an answer
    BlackCellCovered {
        /// Row of the cell
        row: usize,
        /// Column of the cell
        col: usize,
    },
    /// A black cell lies outside the grid
    BlackCellOutOfBounds {
        /// Row of the cell
        row: usize,
        /// Column of the cell
        col: usize,
    },
    /// A cell is neither black nor covered by an answer
    UncoveredCell {
        /// Row of the cell
        row: usize,
        /// Column of the cell
        col: usize,
    },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewClues { found, required } => {
                write!(f, "only {found} clues placed, {required} required")
            }
            Self::ClueOutOfBounds { number, direction } => {
                write!(f, "{number} {direction} runs past the grid")
            }
            Self::AnswerLengthMismatch { number, direction } => {
                write!(f, "{number} {direction} answer does not match its length")
            }
            Self::CrossingMismatch { row, col } => {
                write!(f, "answers disagree at ({row}, {col})")
            }
            Self::BlackCellCovered { row, col } => {
                write!(f, "black cell ({row}, {col}) is covered by an answer")
            }
            Self::BlackCellOutOfBounds { row, col } => {
                write!(f, "black cell ({row}, {col}) is outside the grid")
            }
            Self::UncoveredCell { row, col } => {
                write!(f, "cell ({row}, {col}) is neither black nor covered")
            }
        }
    }
}

impl PuzzleData {
    /// Every structural inconsistency in the layout
    ///
    /// Checks the clue count, answer bounds and lengths, letter agreement at
    /// crossings, and that black and covered cells partition the grid.
    pub fn violations(&self, min_clues: usize) -> Vec<Violation> {
        let size = self.grid_size;
        let mut violations = Vec::new();

        if self.clues.len() < min_clues {
            violations.push(Violation::TooFewClues {
                found: self.clues.len(),
                required: min_clues,
            });
        }

        let mut letters = vec![vec![None; size]; size];
        let mut covered = HashSet::new();

        for (direction, clue) in self.clues.iter() {
            let number = clue.number;
            let placement = clue.placement(direction);

            if clue.answer.chars().count() != clue.length {
                violations.push(Violation::AnswerLengthMismatch { number, direction });
            }
            if clue.length == 0 || !placement.fits(clue.length, size) {
                violations.push(Violation::ClueOutOfBounds { number, direction });
                continue;
            }

            for (letter, [row, col]) in clue.answer.chars().zip(placement.cells(clue.length)) {
                covered.insert([row, col]);
                let Some(cell) = letters.get_mut(row).and_then(|r| r.get_mut(col)) else {
                    continue;
                };
                match *cell {
                    Some(existing) if existing != letter => {
                        violations.push(Violation::CrossingMismatch { row, col });
                    }
                    _ => *cell = Some(letter),
                }
            }
        }

        let black: HashSet<[usize; 2]> = self.black_cells.iter().copied().collect();
        for &[row, col] in &self.black_cells {
            if row >= size || col >= size {
                violations.push(Violation::BlackCellOutOfBounds { row, col });
            } else if covered.contains(&[row, col]) {
                violations.push(Violation::BlackCellCovered { row, col });
            }
        }

        for row in 0..size {
            for col in 0..size {
                if !black.contains(&[row, col]) && !covered.contains(&[row, col]) {
                    violations.push(Violation::UncoveredCell { row, col });
                }
            }
        }

        violations
    }

    /// Whether the layout has no structural inconsistency
    pub fn is_valid(&self, min_clues: usize) -> bool {
        self.violations(min_clues).is_empty()
    }
}
