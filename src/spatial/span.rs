//! Word orientation and the cells a placed word covers

use std::fmt;

/// Orientation of a word on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Left to right along a row
    Across,
    /// Top to bottom along a column
    Down,
}

impl Direction {
    /// Enumeration order used when searching for placements
    pub const ALL: [Self; 2] = [Self::Across, Self::Down];
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Across => write!(f, "across"),
            Self::Down => write!(f, "down"),
        }
    }
}

/// Starting cell and orientation of a word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    /// Starting row
    pub row: usize,
    /// Starting column
    pub col: usize,
    /// Orientation
    pub direction: Direction,
}

impl Placement {
    /// Create a placement starting at (`row`, `col`)
    pub const fn new(row: usize, col: usize, direction: Direction) -> Self {
        Self {
            row,
            col,
            direction,
        }
    }

    /// Whether a word of `length` starting here stays inside a `size`x`size` grid
    pub const fn fits(self, length: usize, size: usize) -> bool {
        if self.row >= size || self.col >= size {
            return false;
        }
        match self.direction {
            Direction::Across => self.col + length <= size,
            Direction::Down => self.row + length <= size,
        }
    }

    /// Cell covered by the letter at `offset` within the word
    pub const fn cell(self, offset: usize) -> [usize; 2] {
        match self.direction {
            Direction::Across => [self.row, self.col + offset],
            Direction::Down => [self.row + offset, self.col],
        }
    }

    /// All cells covered by a word of `length`, in letter order
    pub fn cells(self, length: usize) -> impl Iterator<Item = [usize; 2]> {
        (0..length).map(move |offset| self.cell(offset))
    }
}

/// In-bounds neighbours of `cell` perpendicular to `direction`
///
/// Above and below for an across word, left and right for a down word.
pub fn perpendicular_neighbours(
    cell: [usize; 2],
    direction: Direction,
    size: usize,
) -> impl Iterator<Item = [usize; 2]> {
    let [row, col] = cell;
    let (before, after) = match direction {
        Direction::Across => (
            row.checked_sub(1).map(|r| [r, col]),
            (row + 1 < size).then_some([row + 1, col]),
        ),
        Direction::Down => (
            col.checked_sub(1).map(|c| [row, c]),
            (col + 1 < size).then_some([row, col + 1]),
        ),
    };
    before.into_iter().chain(after)
}
