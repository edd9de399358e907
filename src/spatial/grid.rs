//! Square letter grid backing a single generation attempt
//!
//! Cells are either empty or hold one uppercase letter. A grid is owned by
//! exactly one placement state and is dropped with it when an attempt fails.

use ndarray::Array2;

use crate::spatial::span::Placement;

/// NxN matrix of optional letters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterGrid {
    cells: Array2<Option<char>>,
}

impl LetterGrid {
    /// Create an empty `size`x`size` grid
    pub fn new(size: usize) -> Self {
        Self {
            cells: Array2::from_elem((size, size), None),
        }
    }

    /// Side length of the grid
    pub fn size(&self) -> usize {
        self.cells.nrows()
    }

    /// Letter at (`row`, `col`), `None` if empty or out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        self.cells.get([row, col]).copied().flatten()
    }

    /// Whether (`row`, `col`) holds a letter
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_some()
    }

    /// Write `letter` at (`row`, `col`), returning false when out of bounds
    pub fn set(&mut self, row: usize, col: usize, letter: char) -> bool {
        match self.cells.get_mut([row, col]) {
            Some(cell) => {
                *cell = Some(letter);
                true
            }
            None => false,
        }
    }

    /// Write every letter of `word` along `placement`
    ///
    /// Returns false without touching the grid if the word leaves the grid.
    pub fn write_word(&mut self, word: &str, placement: Placement) -> bool {
        let length = word.chars().count();
        if !placement.fits(length, self.size()) {
            return false;
        }
        for (letter, [row, col]) in word.chars().zip(placement.cells(length)) {
            self.set(row, col, letter);
        }
        true
    }

    /// Empty cells in row-major order
    pub fn empty_cells(&self) -> Vec<[usize; 2]> {
        self.cells
            .indexed_iter()
            .filter(|(_, cell)| cell.is_none())
            .map(|((row, col), _)| [row, col])
            .collect()
    }
}
