//! Terse construction of controller trees.
//!
//! Views and components are numbered from a shared counter, so every built
//! node gets distinct handles and a leaf's component number equals its view
//! number.

use navtree_core::{Component, CompositeController, Controller, LeafController};
use navtree_layout::ViewHandle;
use navtree_options::Options;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_HANDLE: AtomicU64 = AtomicU64::new(1);

pub fn next_handle() -> u64 {
    NEXT_HANDLE.fetch_add(1, Ordering::Relaxed)
}

pub fn leaf(id: &str) -> LeafController {
    leaf_with(id, Options::default())
}

pub fn leaf_with(id: &str, options: Options) -> LeafController {
    let raw = next_handle();
    LeafController::new(id, ViewHandle(raw), Component(raw), options)
}

/// Composite with `children` attached in order; the first one is active.
///
/// Panics on duplicate ids.
pub fn composite(id: &str, children: Vec<Controller>) -> CompositeController {
    composite_with(id, Options::default(), children)
}

pub fn composite_with(
    id: &str,
    options: Options,
    children: Vec<Controller>,
) -> CompositeController {
    let mut node = CompositeController::new(id, ViewHandle(next_handle()), options);
    for child in children {
        if let Err(err) = node.add_child(child) {
            panic!("building {id}: {err}");
        }
    }
    node
}

/// Options with only `statusBar.drawBehind` set.
pub fn draw_behind(value: bool) -> Options {
    let mut options = Options::default();
    options.status_bar.draw_behind = Some(value);
    options
}

/// Options parsed from a JSON literal. Panics on malformed input.
pub fn options_json(source: &str) -> Options {
    match Options::from_json(source) {
        Ok(options) => options,
        Err(err) => panic!("bad options literal: {err}"),
    }
}
