//! Tests for `TileBitset` set operations and ordering

#[cfg(test)]
mod tests {
    use tilecollapse::algorithm::bitset::TileBitset;

    // Verifies new TileBitset is empty with count 0
    // Breaks if the constructor fills the bits
    #[test]
    fn test_new_bitset() {
        let bitset = TileBitset::new(10);
        assert_eq!(bitset.count(), 0);
        assert!(bitset.is_empty());
        assert_eq!(bitset.capacity(), 10);
    }

    // Tests insertion uses 0-based indices and ignores out-of-range tiles
    #[test]
    fn test_insert_and_contains() {
        let mut bitset = TileBitset::new(10);
        bitset.insert(0);
        bitset.insert(5);
        bitset.insert(10);
        assert!(bitset.contains(0));
        assert!(bitset.contains(5));
        assert!(!bitset.contains(3));
        assert!(!bitset.contains(10));
        assert_eq!(bitset.count(), 2);
    }

    // Tests intersection of two bitsets returns correct elements
    // Breaks if intersection is swapped for union
    #[test]
    fn test_intersection() {
        let set1 = TileBitset::from_indices(&[1, 3, 5], 10);
        let set2 = TileBitset::from_indices(&[3, 5, 7], 10);

        assert_eq!(set1.intersection(&set2).to_vec(), vec![3, 5]);
    }

    // Tests union keeps members of both sides
    #[test]
    fn test_union_with() {
        let mut set = TileBitset::from_indices(&[1], 6);
        set.union_with(&TileBitset::from_indices(&[4, 5], 6));
        assert_eq!(set.to_vec(), vec![1, 4, 5]);
    }

    // Tests iteration order is ascending regardless of insertion order
    #[test]
    fn test_ascending_iteration() {
        let set = TileBitset::from_indices(&[9, 2, 7, 0], 10);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![0, 2, 7, 9]);
        assert_eq!(set.nth(0), Some(0));
        assert_eq!(set.nth(2), Some(7));
        assert_eq!(set.nth(4), None);
    }

    // Tests creation of bitset with all bits set
    #[test]
    fn test_all_and_single() {
        let all = TileBitset::all(5);
        assert_eq!(all.to_vec(), vec![0, 1, 2, 3, 4]);

        let single = TileBitset::single(5, 3);
        assert_eq!(single.to_vec(), vec![3]);
        assert_eq!(single.count(), 1);
    }

    // Tests display lists members
    #[test]
    fn test_display() {
        let set = TileBitset::from_indices(&[1, 2], 4);
        assert_eq!(set.to_string(), "TileBitset(2 tiles: [1, 2])");
    }
}
