//! Tests for termination conditions.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use super::*;
use crate::scope::SearchScope;

#[test]
fn test_no_termination() {
    let scope = SearchScope::new();
    assert!(!NoTermination.is_terminated(&scope));
}

#[test]
fn test_node_count_termination() {
    let mut scope = SearchScope::new();
    let term = NodeCountTermination::new(3);

    assert!(!term.is_terminated(&scope));
    scope.increment_node_count();
    scope.increment_node_count();
    assert!(!term.is_terminated(&scope));
    scope.increment_node_count();
    assert!(term.is_terminated(&scope));
}

#[test]
fn test_time_termination_zero_limit() {
    let scope = SearchScope::new();
    assert!(TimeTermination::new(Duration::ZERO).is_terminated(&scope));
}

#[test]
fn test_time_termination_not_reached() {
    let scope = SearchScope::new();
    let term = TimeTermination::seconds(3600);
    assert!(!term.is_terminated(&scope));
    assert_eq!(term.limit(), Duration::from_secs(3600));
}

#[test]
fn test_external_termination() {
    let flag = Arc::new(AtomicBool::new(false));
    let term = ExternalTermination::new(Arc::clone(&flag));
    let scope = SearchScope::new();

    assert!(!term.is_terminated(&scope));
    flag.store(true, Ordering::Relaxed);
    assert!(term.is_terminated(&scope));
}

#[test]
fn test_external_termination_from_other_thread() {
    let flag = Arc::new(AtomicBool::new(false));
    let term = ExternalTermination::new(Arc::clone(&flag));

    std::thread::spawn(move || flag.store(true, Ordering::Relaxed))
        .join()
        .unwrap();

    assert!(term.is_terminated(&SearchScope::new()));
}

#[test]
fn test_or_termination() {
    let mut scope = SearchScope::new();
    let term = OrTermination::new((
        TimeTermination::seconds(3600),
        NodeCountTermination::new(1),
    ));

    assert!(!term.is_terminated(&scope));
    scope.increment_node_count();
    assert!(term.is_terminated(&scope));
}

#[test]
fn test_option_termination() {
    let mut scope = SearchScope::new();
    let none: Option<NodeCountTermination> = None;
    let some = Some(NodeCountTermination::new(1));
    scope.increment_node_count();

    assert!(!none.is_terminated(&scope));
    assert!(some.is_terminated(&scope));
}

#[test]
fn test_reference_termination() {
    let mut scope = SearchScope::new();
    let inner = NodeCountTermination::new(1);
    let term = OrTermination::new((&inner, NoTermination));
    scope.increment_node_count();
    assert!(term.is_terminated(&scope));
}
