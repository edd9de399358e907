//! Placement state of one generation attempt and the operations on it
//!
//! The grid, clue lists, clue counter and used-word set travel together as a
//! single [`PlacementState`] value. Queries borrow it; [`PlacementState::commit`]
//! consumes it and hands back the updated state, so an attempt that fails simply
//! drops its state.

use std::collections::HashSet;

use crate::io::configuration::{INTERSECTION_SCORE, OPEN_NEIGHBOUR_SCORE};
use crate::io::error::{CrosswordError, Result};
use crate::puzzle::data::{ClueEntry, Clues, PuzzleData};
use crate::spatial::grid::LetterGrid;
use crate::spatial::span::{Direction, Placement, perpendicular_neighbours};

/// Grid and clue bookkeeping for a single attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementState {
    grid: LetterGrid,
    clues: Clues,
    next_number: u32,
    used_words: HashSet<String>,
}

impl PlacementState {
    /// Empty state for a `size`x`size` grid, numbering from 1
    pub fn new(size: usize) -> Self {
        Self {
            grid: LetterGrid::new(size),
            clues: Clues::default(),
            next_number: 1,
            used_words: HashSet::new(),
        }
    }

    /// Side length of the grid
    pub fn size(&self) -> usize {
        self.grid.size()
    }

    /// Current letter grid
    pub const fn grid(&self) -> &LetterGrid {
        &self.grid
    }

    /// Clues committed so far
    pub const fn clues(&self) -> &Clues {
        &self.clues
    }

    /// Number of committed words
    pub fn clue_count(&self) -> usize {
        self.clues.len()
    }

    /// Whether `word` has already been committed
    pub fn is_used(&self, word: &str) -> bool {
        self.used_words.contains(word)
    }

    /// Whether `word` may legally start at `placement`
    ///
    /// The word must stay inside the grid and agree with every letter it
    /// overlaps. Filled perpendicular neighbours are accepted without checking
    /// the run of letters they form with the word. Once any word is placed, a
    /// new word must overlap at least one existing letter.
    pub fn can_place(&self, word: &str, placement: Placement) -> bool {
        let length = word.chars().count();
        if length == 0 || !placement.fits(length, self.size()) {
            return false;
        }

        let mut has_intersection = false;
        for (letter, [row, col]) in word.chars().zip(placement.cells(length)) {
            if let Some(existing) = self.grid.get(row, col) {
                if existing != letter {
                    return false;
                }
                has_intersection = true;
            }
        }

        self.clues.is_empty() || has_intersection
    }

    /// Desirability of a legal placement
    ///
    /// Each overlapped letter is worth [`INTERSECTION_SCORE`]; each empty
    /// perpendicular neighbour is worth [`OPEN_NEIGHBOUR_SCORE`].
    pub fn placement_score(&self, word: &str, placement: Placement) -> f64 {
        let size = self.size();
        let mut score = 0.0;

        for [row, col] in placement.cells(word.chars().count()) {
            if self.grid.is_filled(row, col) {
                score += INTERSECTION_SCORE;
            }
            for [n_row, n_col] in perpendicular_neighbours([row, col], placement.direction, size)
            {
                if !self.grid.is_filled(n_row, n_col) {
                    score += OPEN_NEIGHBOUR_SCORE;
                }
            }
        }

        score
    }

    /// Highest scoring legal placement for `word`
    ///
    /// Candidates are enumerated across first, then down, each row-major; the
    /// first candidate with the top score wins.
    pub fn find_best_placement(&self, word: &str) -> Option<Placement> {
        let size = self.size();
        let mut best: Option<(Placement, f64)> = None;

        for direction in Direction::ALL {
            for row in 0..size {
                for col in 0..size {
                    let placement = Placement::new(row, col, direction);
                    if !self.can_place(word, placement) {
                        continue;
                    }
                    let score = self.placement_score(word, placement);
                    if best.is_none_or(|(_, best_score)| score > best_score) {
                        best = Some((placement, score));
                    }
                }
            }
        }

        best.map(|(placement, _)| placement)
    }

    /// Write `word` into the grid and record its clue under the next number
    ///
    /// # Errors
    ///
    /// Returns `InvalidPlacement` if the word leaves the grid or conflicts with
    /// a letter already placed. The state is consumed either way.
    pub fn commit(mut self, word: &str, clue: &str, placement: Placement) -> Result<Self> {
        let length = word.chars().count();
        let conflicts = word
            .chars()
            .zip(placement.cells(length))
            .any(|(letter, [row, col])| self.grid.get(row, col).is_some_and(|c| c != letter));

        if conflicts || !self.grid.write_word(word, placement) {
            return Err(CrosswordError::InvalidPlacement {
                word: word.to_string(),
                row: placement.row,
                col: placement.col,
                direction: placement.direction,
            });
        }

        let entry = ClueEntry {
            number: self.next_number,
            clue: clue.to_string(),
            answer: word.to_string(),
            row: placement.row,
            col: placement.col,
            length,
        };
        self.next_number += 1;

        match placement.direction {
            Direction::Across => self.clues.across.push(entry),
            Direction::Down => self.clues.down.push(entry),
        }
        self.used_words.insert(word.to_string());

        Ok(self)
    }

    /// Finish the attempt, turning every empty cell black
    pub fn into_puzzle(self) -> PuzzleData {
        PuzzleData {
            grid_size: self.grid.size(),
            black_cells: self.grid.empty_cells(),
            clues: self.clues,
        }
    }
}
