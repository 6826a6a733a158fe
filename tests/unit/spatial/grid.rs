//! Tests for cell state and row-major grid addressing

#[cfg(test)]
mod tests {
    use tilecollapse::algorithm::bitset::TileBitset;
    use tilecollapse::spatial::grid::{Cell, Grid};

    // Tests a fresh cell allows every tile and reports no choice
    #[test]
    fn test_new_cell() {
        let cell = Cell::new(6);
        assert!(!cell.is_collapsed());
        assert_eq!(cell.candidate_count(), 6);
        assert_eq!(cell.chosen_tile(), None);
    }

    // Tests a collapsed cell holds exactly its tile
    // Breaks if collapsed_to keeps the full option set
    #[test]
    fn test_collapsed_cell() {
        let cell = Cell::collapsed_to(6, 4);
        assert!(cell.is_collapsed());
        assert_eq!(cell.candidate_count(), 1);
        assert_eq!(cell.chosen_tile(), Some(4));
    }

    // Tests restriction only ever removes candidates
    #[test]
    fn test_restrict() {
        let mut cell = Cell::with_options(TileBitset::from_indices(&[0, 2, 3], 5));
        cell.restrict(&TileBitset::from_indices(&[2, 3, 4], 5));
        assert_eq!(cell.options().to_vec(), vec![2, 3]);
        assert!(!cell.is_collapsed());

        cell.restrict(&TileBitset::new(5));
        assert_eq!(cell.candidate_count(), 0);
    }

    // Tests (i, j) and row-major addressing agree
    #[test]
    fn test_row_major_addressing() {
        let mut grid = Grid::new(3, 2, 4);
        assert_eq!(grid.dims(), (3, 2));
        assert_eq!(grid.len(), 6);
        assert_eq!(grid.index(2, 1), 5);

        if let Some(cell) = grid.cell_mut(1, 1) {
            *cell = Cell::collapsed_to(4, 3);
        }
        assert_eq!(grid.cell_at(4).and_then(Cell::chosen_tile), Some(3));
        assert!(grid.cell(3, 0).is_none());
        assert!(grid.cell_at(6).is_none());
    }

    // Tests positioned_cells walks rows top to bottom
    #[test]
    fn test_positioned_cells_order() {
        let grid = Grid::new(2, 2, 1);
        let positions: Vec<_> = grid.positioned_cells().map(|(position, _)| position).collect();
        assert_eq!(positions, vec![(0, 0), (1, 0), (0, 1), (1, 1)]);
    }

    // Tests snapshots reject a cell count that does not fit the shape
    #[test]
    fn test_from_cells_shape_mismatch() {
        let cells = vec![Cell::new(2); 5];
        assert!(Grid::from_cells(3, 2, cells).is_err());

        let cells = vec![Cell::new(2); 6];
        let grid = Grid::from_cells(3, 2, cells).expect("shape matches");
        assert_eq!(grid.dims(), (3, 2));
    }

    // Tests completion tracking
    #[test]
    fn test_all_collapsed() {
        let mut grid = Grid::new(2, 1, 3);
        assert!(!grid.all_collapsed());
        assert_eq!(grid.collapsed_count(), 0);

        for index in 0..grid.len() {
            if let Some(cell) = grid.cell_at_mut(index) {
                *cell = Cell::collapsed_to(3, index);
            }
        }
        assert!(grid.all_collapsed());
        assert_eq!(grid.collapsed_count(), 2);
    }
}
