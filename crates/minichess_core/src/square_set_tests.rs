use super::*;

#[test]
fn test_insert_and_contains() {
    let mut set = SquareSet::EMPTY;
    assert!(set.is_empty());
    set.insert(Square::new(2, 3));
    assert!(set.contains(Square::new(2, 3)));
    assert!(!set.contains(Square::new(3, 2)));
    assert_eq!(set.len(), 1);

    set.remove(Square::new(2, 3));
    assert!(set.is_empty());
}

#[test]
fn test_iterator_order() {
    let set: SquareSet = [Square::new(4, 4), Square::new(1, 0), Square::new(0, 2)]
        .into_iter()
        .collect();
    let squares: Vec<Square> = set.iter().collect();
    assert_eq!(
        squares,
        vec![Square::new(1, 0), Square::new(0, 2), Square::new(4, 4)]
    );
}

#[test]
fn test_union_and_intersection() {
    let a = SquareSet::from_square(Square::new(0, 0)) | SquareSet::from_square(Square::new(1, 1));
    let b = SquareSet::from_square(Square::new(1, 1));
    assert_eq!((a & b).len(), 1);
    assert_eq!((a | b).len(), 2);
}
