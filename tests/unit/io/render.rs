//! Tests for plain-text puzzle rendering

#[cfg(test)]
mod tests {
    use minicross::algorithm::placement::PlacementState;
    use minicross::io::render::{render_grid, render_puzzle};
    use minicross::puzzle::data::PuzzleData;
    use minicross::spatial::span::{Direction, Placement};

    fn cat_and_oat() -> PuzzleData {
        PlacementState::new(5)
            .commit("CAT", "Feline friend", Placement::new(2, 0, Direction::Across))
            .and_then(|state| {
                state.commit("OAT", "Horse feed", Placement::new(0, 2, Direction::Down))
            })
            .expect("CAT and OAT interlock")
            .into_puzzle()
    }

    // Tests numbered blank cells and black cells in the unrevealed grid
    // Verified by numbering every white cell
    #[test]
    fn test_render_blank_grid() {
        let rendered = render_grid(&cat_and_oat(), false);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "###|###|2  |###|###");
        assert_eq!(lines[1], "###|###| . |###|###");
        assert_eq!(lines[2], "1  | . | . |###|###");
        assert_eq!(lines[4], "###|###|###|###|###");
    }

    #[test]
    fn test_render_revealed_grid() {
        let rendered = render_grid(&cat_and_oat(), true);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "###|###| O |###|###");
        assert_eq!(lines[2], " C | A | T |###|###");
    }

    #[test]
    fn test_render_clue_lists() {
        let puzzle = cat_and_oat();

        let hidden = render_puzzle(&puzzle, false);
        assert!(hidden.contains("\nACROSS\n  1. Feline friend (3)\n"));
        assert!(hidden.contains("\nDOWN\n  2. Horse feed (3)\n"));
        assert!(!hidden.contains("CAT"));

        let revealed = render_puzzle(&puzzle, true);
        assert!(revealed.contains("  1. Feline friend (3) = CAT"));
        assert!(revealed.contains("  2. Horse feed (3) = OAT"));
    }

    // Tests the full rendering: grid first, then both clue lists in order
    // Verified by dropping the blank line before each heading
    #[test]
    fn test_render_puzzle_layout() {
        let puzzle = cat_and_oat();

        let rendered = render_puzzle(&puzzle, false);
        let expected = format!(
            "{}\nACROSS\n  1. Feline friend (3)\n\nDOWN\n  2. Horse feed (3)\n",
            render_grid(&puzzle, false)
        );

        assert_eq!(rendered, expected);
    }
}
