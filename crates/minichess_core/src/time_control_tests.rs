use super::*;
use std::thread;

#[test]
fn test_search_limits_fixed_depth() {
    let limits = SearchLimits::depth(5);
    assert_eq!(limits.depth, 5);
    assert!(!limits.iterative);
    assert!(limits.move_time.is_none());
    assert!(!limits.should_stop());
}

#[test]
fn test_search_limits_with_time_deepens() {
    let limits = SearchLimits::depth_and_time(4, Duration::from_millis(100));
    assert_eq!(limits.depth, 4);
    assert!(limits.iterative);
    assert_eq!(limits.move_time, Some(Duration::from_millis(100)));
}

#[test]
fn test_time_control_expiry() {
    let tc = TimeControl::new(Some(Duration::from_millis(10)));
    tc.start();
    assert!(!tc.is_stopped());

    thread::sleep(Duration::from_millis(20));
    tc.check_time();
    assert!(tc.is_stopped());
    assert_eq!(tc.remaining(), Some(Duration::ZERO));
}

#[test]
fn test_time_control_no_limit() {
    let tc = TimeControl::new(None);
    tc.start();
    thread::sleep(Duration::from_millis(10));
    tc.check_time();
    assert!(!tc.is_stopped());
    assert!(tc.remaining().is_none());
}

#[test]
fn test_time_control_manual_stop_shared_by_clones() {
    let tc = TimeControl::new(None);
    tc.start();
    let worker_view = tc.clone();
    tc.stop();
    assert!(worker_view.is_stopped());
}

#[test]
fn test_node_limit_trips_stop() {
    let tc = TimeControl::new(None).with_node_limit(100);
    tc.start();
    assert!(!tc.check_nodes(99));
    assert!(!tc.is_stopped());
    assert!(tc.check_nodes(100));
    assert!(tc.is_stopped());
    assert!(tc.check_time());
}
