//! Plain-text rendering of puzzles

use std::fmt;

use crate::puzzle::data::PuzzleData;
use crate::spatial::span::Direction;

const BLACK_CELL: &str = "###";

/// Render the grid followed by the across and down clue lists
///
/// Blank cells show their clue number when an answer starts there; with
/// `reveal` every white cell shows its answer letter instead.
pub fn render_puzzle(puzzle: &PuzzleData, reveal: bool) -> String {
    PuzzleText { puzzle, reveal }.to_string()
}

struct PuzzleText<'a> {
    puzzle: &'a PuzzleData,
    reveal: bool,
}

impl fmt::Display for PuzzleText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_grid(self.puzzle, self.reveal))?;

        for direction in Direction::ALL {
            let heading = match direction {
                Direction::Across => "ACROSS",
                Direction::Down => "DOWN",
            };
            writeln!(f, "\n{heading}")?;
            for clue in self.puzzle.clues.list(direction) {
                write!(f, "{:>3}. {} ({})", clue.number, clue.clue, clue.length)?;
                if self.reveal {
                    write!(f, " = {}", clue.answer)?;
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Render only the grid, one text line per row
pub fn render_grid(puzzle: &PuzzleData, reveal: bool) -> String {
    let solution = puzzle.solution_grid();
    let mut out = String::new();

    for (row, letters) in solution.iter().enumerate() {
        let cells: Vec<String> = letters
            .iter()
            .enumerate()
            .map(|(col, letter)| {
                if puzzle.is_black(row, col) {
                    return BLACK_CELL.to_string();
                }
                match (reveal, letter, puzzle.clue_number_at(row, col)) {
                    (true, Some(letter), _) => format!(" {letter} "),
                    (false, _, Some(number)) => format!("{number:<3}"),
                    _ => " . ".to_string(),
                }
            })
            .collect();
        out.push_str(cells.join("|").trim_end());
        out.push('\n');
    }

    out
}
