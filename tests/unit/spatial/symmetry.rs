//! Tests for mirrored half dimensions and boundary exemptions

#[cfg(test)]
mod tests {
    use tilecollapse::spatial::direction::Direction;
    use tilecollapse::spatial::symmetry::SymmetryAdapter;

    // Tests mirrored axes solve half of the rendered extent, rounding down
    #[test]
    fn test_active_dims() {
        assert_eq!(SymmetryAdapter::default().active_dims((7, 5)), (7, 5));
        assert_eq!(SymmetryAdapter::new(true, false).active_dims((7, 5)), (3, 5));
        assert_eq!(SymmetryAdapter::new(false, true).active_dims((7, 5)), (7, 2));
        assert_eq!(SymmetryAdapter::new(true, true).active_dims((10, 10)), (5, 5));
        assert_eq!(SymmetryAdapter::new(true, false).active_dims((5, 5)), (2, 5));
    }

    // Tests only the far edge of a mirrored axis is exempt from the boundary
    #[test]
    fn test_exempts() {
        let both = SymmetryAdapter::new(true, true);
        assert!(both.exempts(Direction::Right));
        assert!(both.exempts(Direction::Down));
        assert!(!both.exempts(Direction::Up));
        assert!(!both.exempts(Direction::Left));

        let none = SymmetryAdapter::default();
        assert!(Direction::ALL.iter().all(|&direction| !none.exempts(direction)));
    }

    // Tests resizing moves two rendered cells while mirroring
    #[test]
    fn test_resize_step() {
        assert_eq!(SymmetryAdapter::default().resize_step(), 1);
        assert!(!SymmetryAdapter::default().is_active());
        assert_eq!(SymmetryAdapter::new(false, true).resize_step(), 2);
        assert!(SymmetryAdapter::new(true, false).is_active());
    }
}
