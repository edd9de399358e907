//! Finished puzzle layout handed to the presentation layer

use serde::{Deserialize, Serialize};

use crate::spatial::span::{Direction, Placement};

/// A numbered clue and the answer placed for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClueEntry {
    /// Clue number, shared between across and down numbering
    pub number: u32,
    /// Clue text
    pub clue: String,
    /// Answer word
    pub answer: String,
    /// Row of the first letter
    pub row: usize,
    /// Column of the first letter
    pub col: usize,
    /// Answer length
    pub length: usize,
}

impl ClueEntry {
    /// Placement of this answer given its orientation
    pub const fn placement(&self, direction: Direction) -> Placement {
        Placement::new(self.row, self.col, direction)
    }
}

/// Across and down clue lists in placement order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clues {
    /// Clues for across answers
    pub across: Vec<ClueEntry>,
    /// Clues for down answers
    pub down: Vec<ClueEntry>,
}

impl Clues {
    /// Total number of clues
    pub fn len(&self) -> usize {
        self.across.len() + self.down.len()
    }

    /// Whether no clue has been placed
    pub fn is_empty(&self) -> bool {
        self.across.is_empty() && self.down.is_empty()
    }

    /// Clue list for `direction`
    pub fn list(&self, direction: Direction) -> &[ClueEntry] {
        match direction {
            Direction::Across => &self.across,
            Direction::Down => &self.down,
        }
    }

    /// Every clue paired with its orientation, across first
    pub fn iter(&self) -> impl Iterator<Item = (Direction, &ClueEntry)> {
        self.across
            .iter()
            .map(|clue| (Direction::Across, clue))
            .chain(self.down.iter().map(|clue| (Direction::Down, clue)))
    }
}

/// A generated crossword
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PuzzleData {
    /// Side length of the square grid
    pub grid_size: usize,
    /// Cells not covered by any answer, row-major
    pub black_cells: Vec<[usize; 2]>,
    /// Numbered clues
    pub clues: Clues,
}

impl PuzzleData {
    /// Whether (`row`, `col`) is a black cell
    pub fn is_black(&self, row: usize, col: usize) -> bool {
        self.black_cells.contains(&[row, col])
    }

    /// Letters implied by the answers, `None` where no answer reaches
    ///
    /// Letters falling outside the grid are ignored; when two answers disagree
    /// on a cell the later one wins.
    pub fn solution_grid(&self) -> Vec<Vec<Option<char>>> {
        let mut grid = vec![vec![None; self.grid_size]; self.grid_size];
        for (direction, clue) in self.clues.iter() {
            let placement = clue.placement(direction);
            for (letter, [row, col]) in clue.answer.chars().zip(placement.cells(clue.length)) {
                if let Some(cell) = grid.get_mut(row).and_then(|r| r.get_mut(col)) {
                    *cell = Some(letter);
                }
            }
        }
        grid
    }

    /// Number shown in (`row`, `col`), if an answer starts there
    ///
    /// Across numbering takes precedence when both directions start in the cell.
    pub fn clue_number_at(&self, row: usize, col: usize) -> Option<u32> {
        self.clues
            .across
            .iter()
            .chain(&self.clues.down)
            .find(|clue| clue.row == row && clue.col == col)
            .map(|clue| clue.number)
    }
}
