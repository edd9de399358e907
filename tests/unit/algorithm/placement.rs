//! Tests for placement legality, scoring, best-placement search and commits

#[cfg(test)]
mod tests {
    use minicross::CrosswordError;
    use minicross::algorithm::placement::PlacementState;
    use minicross::spatial::span::{Direction, Placement};

    fn across(row: usize, col: usize) -> Placement {
        Placement::new(row, col, Direction::Across)
    }

    fn down(row: usize, col: usize) -> Placement {
        Placement::new(row, col, Direction::Down)
    }

    fn with_cat() -> PlacementState {
        PlacementState::new(5)
            .commit("CAT", "Feline friend", across(2, 0))
            .expect("CAT fits an empty grid")
    }

    #[test]
    fn test_first_word_needs_no_intersection() {
        let state = PlacementState::new(5);

        assert!(state.can_place("DOG", across(0, 0)));
        assert!(state.can_place("HAPPY", down(0, 4)));
        assert!(!state.can_place("HAPPY", across(0, 1)));
        assert!(!state.can_place("", across(0, 0)));
    }

    // Tests that a word touching nothing is rejected once the grid has words
    // Verified by dropping the intersection requirement
    #[test]
    fn test_disconnected_word_rejected() {
        let state = with_cat();

        assert!(!state.can_place("DOG", down(0, 2)));
        assert!(!state.can_place("DOG", across(0, 0)));
    }

    // Tests letter agreement at crossings
    // Verified by counting any filled cell as an intersection
    #[test]
    fn test_crossing_must_match_letters() {
        let state = with_cat();

        assert!(state.can_place("OAT", down(0, 2)));
        assert!(!state.can_place("TOP", down(0, 2)));
        assert!(state.can_place("CAT", down(2, 0)));
    }

    #[test]
    fn test_filled_neighbours_do_not_block() {
        let state = with_cat()
            .commit("OAT", "Horse feed", down(0, 2))
            .expect("OAT crosses CAT");

        // Sits directly above CAT, forming an unchecked down run with it
        assert!(state.can_place("PA", across(1, 1)));
    }

    // Tests the scoring weights for intersections and open neighbours
    // Verified by swapping the two score constants
    #[test]
    fn test_placement_score() {
        let empty = PlacementState::new(5);
        assert!((empty.placement_score("CAT", across(2, 0)) - 3.0).abs() < f64::EPSILON);
        assert!((empty.placement_score("CAT", across(0, 0)) - 1.5).abs() < f64::EPSILON);

        let state = with_cat();
        assert!((state.placement_score("OAT", down(0, 2)) - 4.5).abs() < f64::EPSILON);
        assert!((state.placement_score("OAT", down(1, 1)) - 4.0).abs() < f64::EPSILON);
    }

    // Tests that the highest scoring legal placement is chosen
    // Verified by keeping the first legal placement instead of the best
    #[test]
    fn test_find_best_placement() {
        let state = with_cat();

        assert_eq!(state.find_best_placement("OAT"), Some(down(0, 2)));
        assert_eq!(state.find_best_placement("XYZ"), None);
        assert_eq!(state.find_best_placement("TOOLONG"), None);
    }

    #[test]
    fn test_queries_leave_state_unchanged() {
        let state = with_cat();
        let before = state.clone();

        let _ = state.can_place("OAT", down(0, 2));
        let _ = state.placement_score("OAT", down(0, 2));
        let _ = state.find_best_placement("OAT");

        assert_eq!(state, before);
    }

    // Tests numbering shared between across and down clues
    // Verified by numbering each direction separately
    #[test]
    fn test_commit_numbers_clues_sequentially() {
        let state = with_cat()
            .commit("OAT", "Horse feed", down(0, 2))
            .expect("OAT crosses CAT")
            .commit("ON", "Switched up", across(0, 2))
            .expect("ON starts on the O of OAT");

        let clues = state.clues();
        assert_eq!(state.clue_count(), 3);
        assert_eq!(clues.across[0].number, 1);
        assert_eq!(clues.down[0].number, 2);
        assert_eq!(clues.across[1].number, 3);
        assert_eq!(clues.down[0].answer, "OAT");
        assert_eq!(clues.down[0].clue, "Horse feed");
        assert_eq!((clues.down[0].row, clues.down[0].col), (0, 2));
        assert_eq!(clues.down[0].length, 3);
        assert!(state.is_used("OAT"));
        assert!(!state.is_used("DOG"));
        assert_eq!(state.grid().get(0, 3), Some('N'));
    }

    #[test]
    fn test_commit_rejects_illegal_writes() {
        let overflow = PlacementState::new(5).commit("HAPPY", "Joyful", across(1, 1));
        assert!(matches!(
            overflow,
            Err(CrosswordError::InvalidPlacement { row: 1, col: 1, .. })
        ));

        let conflict = with_cat().commit("TOP", "Summit", down(0, 2));
        assert!(matches!(
            conflict,
            Err(CrosswordError::InvalidPlacement { .. })
        ));
    }

    // Tests that clue length and covered cells count letters, not bytes
    // Verified by recording the byte length of the answer
    #[test]
    fn test_commit_counts_letters() {
        let puzzle = PlacementState::new(5)
            .commit("ÉTÉ", "Summer in Paris", across(0, 0))
            .expect("Three letters fit a 5x5 grid")
            .into_puzzle();

        assert_eq!(puzzle.clues.across[0].length, 3);
        assert_eq!(puzzle.black_cells.len(), 22);
        assert!(puzzle.is_valid(1));
    }

    // Tests that every empty cell becomes black
    // Verified by reporting filled cells as black
    #[test]
    fn test_into_puzzle_marks_empty_cells_black() {
        let puzzle = with_cat()
            .commit("OAT", "Horse feed", down(0, 2))
            .expect("OAT crosses CAT")
            .into_puzzle();

        assert_eq!(puzzle.grid_size, 5);
        assert_eq!(puzzle.black_cells.len(), 20);
        assert!(!puzzle.is_black(2, 0));
        assert!(!puzzle.is_black(0, 2));
        assert!(puzzle.is_black(0, 0));
        assert!(puzzle.is_valid(2));
    }
}
