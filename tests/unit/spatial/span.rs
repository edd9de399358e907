//! Tests for word orientation, covered cells and perpendicular neighbourhoods

#[cfg(test)]
mod tests {
    use minicross::spatial::span::{Direction, Placement, perpendicular_neighbours};

    // Tests bounds checking for both orientations
    // Verified by dropping the start-cell bounds check
    #[test]
    fn test_placement_fits_grid() {
        assert!(Placement::new(2, 0, Direction::Across).fits(5, 5));
        assert!(Placement::new(0, 2, Direction::Across).fits(3, 5));
        assert!(!Placement::new(0, 3, Direction::Across).fits(3, 5));
        assert!(Placement::new(2, 4, Direction::Down).fits(3, 5));
        assert!(!Placement::new(3, 4, Direction::Down).fits(3, 5));

        // Start outside the grid never fits, even for the free axis
        assert!(!Placement::new(5, 0, Direction::Across).fits(1, 5));
        assert!(!Placement::new(0, 5, Direction::Down).fits(1, 5));
    }

    #[test]
    fn test_cells_follow_direction() {
        let across: Vec<_> = Placement::new(1, 1, Direction::Across).cells(3).collect();
        assert_eq!(across, vec![[1, 1], [1, 2], [1, 3]]);

        let down: Vec<_> = Placement::new(0, 4, Direction::Down).cells(2).collect();
        assert_eq!(down, vec![[0, 4], [1, 4]]);
        assert_eq!(Placement::new(0, 4, Direction::Down).cell(1), [1, 4]);
    }

    // Tests that neighbours are perpendicular and clipped to the grid
    // Verified by swapping the across and down neighbour axes
    #[test]
    fn test_perpendicular_neighbours() {
        let corner: Vec<_> = perpendicular_neighbours([0, 0], Direction::Across, 5).collect();
        assert_eq!(corner, vec![[1, 0]]);

        let middle: Vec<_> = perpendicular_neighbours([2, 2], Direction::Down, 5).collect();
        assert_eq!(middle, vec![[2, 1], [2, 3]]);

        let edge: Vec<_> = perpendicular_neighbours([4, 4], Direction::Down, 5).collect();
        assert_eq!(edge, vec![[4, 3]]);
    }

    #[test]
    fn test_direction_order_and_display() {
        assert_eq!(Direction::ALL, [Direction::Across, Direction::Down]);
        assert_eq!(Direction::Across.to_string(), "across");
        assert_eq!(Direction::Down.to_string(), "down");
    }
}
