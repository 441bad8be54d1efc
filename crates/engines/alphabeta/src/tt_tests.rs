use super::*;

#[test]
fn test_register_node_keeps_first() {
    let mut tt = TranspositionTable::new();
    assert_eq!(tt.register_node(42, NodeId(3)), NodeId(3));
    assert_eq!(tt.register_node(42, NodeId(9)), NodeId(3));
    assert_eq!(tt.lookup_node(42), Some(NodeId(3)));
    assert_eq!(tt.node_count(), 1);
    assert_eq!(tt.lookup_node(7), None);
}

#[test]
fn test_deeper_result_is_not_overwritten_by_shallower() {
    let mut tt = TranspositionTable::new();
    tt.store_result(1, 3, 5.0, Bound::Exact);
    tt.store_result(1, 1, -2.0, Bound::Lower);
    let entry = tt.lookup_result(1).unwrap();
    assert_eq!(entry.depth, 3);
    assert_eq!(entry.score, 5.0);
    assert_eq!(tt.stats().rejected, 1);

    tt.store_result(1, 3, 4.0, Bound::Upper);
    assert_eq!(tt.lookup_result(1).unwrap().bound, Bound::Upper);
    tt.store_result(1, 4, 6.0, Bound::Exact);
    assert_eq!(tt.lookup_result(1).unwrap().depth, 4);
}

#[test]
fn test_bound_flags_parse() {
    assert_eq!("exact".parse::<Bound>().unwrap(), Bound::Exact);
    assert_eq!("LOWER".parse::<Bound>().unwrap(), Bound::Lower);
    assert_eq!("Upper".parse::<Bound>().unwrap(), Bound::Upper);
    assert_eq!(
        "between".parse::<Bound>(),
        Err(SearchError::InvalidBound("between".to_string()))
    );
}

#[test]
fn test_store_result_flag_rejects_unknown_flag() {
    let mut tt = TranspositionTable::new();
    assert!(tt.store_result_flag(1, 2, 0.5, "exact").is_ok());
    assert!(tt.store_result_flag(2, 2, 0.5, "maybe").is_err());
    assert_eq!(tt.result_count(), 1);
}

#[test]
fn test_clear_empties_everything() {
    let mut tt = TranspositionTable::new();
    tt.register_node(1, NodeId(0));
    tt.store_result(1, 1, 0.0, Bound::Exact);
    tt.clear();
    assert_eq!(tt.node_count(), 0);
    assert_eq!(tt.result_count(), 0);
    assert!(tt.lookup_result(1).is_none());
}
