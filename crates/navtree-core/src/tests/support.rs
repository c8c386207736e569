//! Minimal builders for unit tests; recording fakes live in `navtree-testing`.

use crate::id::Component;
use crate::{CompositeController, Controller, LeafController};
use navtree_layout::ViewHandle;
use navtree_options::Options;
use std::cell::Cell;

thread_local! {
    static NEXT_VIEW: Cell<u64> = const { Cell::new(1) };
}

fn next_view() -> u64 {
    NEXT_VIEW.with(|next| {
        let value = next.get();
        next.set(value + 1);
        value
    })
}

pub fn leaf(id: &str) -> LeafController {
    leaf_with(id, Options::default())
}

/// Leaf whose component number equals its view number.
pub fn leaf_with(id: &str, options: Options) -> LeafController {
    let raw = next_view();
    LeafController::new(id, ViewHandle(raw), Component(raw), options)
}

pub fn composite(id: &str) -> CompositeController {
    composite_with(id, Options::default())
}

pub fn composite_with(id: &str, options: Options) -> CompositeController {
    CompositeController::new(id, ViewHandle(next_view()), options)
}

pub fn draw_behind(value: bool) -> Options {
    let mut options = Options::default();
    options.status_bar.draw_behind = Some(value);
    options
}

pub fn built(composite: CompositeController, children: Vec<Controller>) -> CompositeController {
    children.into_iter().fold(composite, |parent, child| {
        parent.with_child(child).expect("unique ids")
    })
}
