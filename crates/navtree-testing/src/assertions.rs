//! Assertion helpers for controller trees.

use crate::recording::{RecordingHost, Released};
use navtree_core::{Controller, ControllerTree};
use std::collections::HashMap;

/// Assert that a value is within an expected range.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

/// Ids of `controller`'s direct children, in order.
pub fn child_ids(controller: &Controller) -> Vec<&str> {
    controller
        .children()
        .iter()
        .map(|child| child.id().as_str())
        .collect()
}

/// Assert that every id resolves to exactly that node.
pub fn assert_findable(tree: &ControllerTree, ids: &[&str]) {
    for id in ids {
        let found = tree.find(id).map(|c| c.id().as_str());
        assert_eq!(found, Some(*id), "lookup of {id}");
    }
}

/// Assert that every resource released by `host` was released once.
pub fn assert_released_once(host: &RecordingHost) {
    let mut counts: HashMap<Released, usize> = HashMap::new();
    for released in &host.released {
        *counts.entry(*released).or_default() += 1;
    }
    let repeated: Vec<_> = counts.into_iter().filter(|(_, n)| *n > 1).collect();
    assert!(repeated.is_empty(), "released more than once: {repeated:?}");
}
