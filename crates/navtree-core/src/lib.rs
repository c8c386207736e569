#![doc = r"Hierarchical view-controller composition for navigation trees."]

mod collections;
pub mod controller;
mod error;
pub mod host;
mod id;
mod metrics;
mod tree;

pub use controller::{
    ChildPath, CompositeBehavior, CompositeController, Controller, ControllerBase,
    DefaultBehavior, LeafController,
};
pub use error::{ControllerError, HostError};
pub use host::{Presenter, ViewHost};
pub use id::{Component, ControllerId};
pub use metrics::ChromeMetrics;
pub use tree::ControllerTree;

pub use navtree_layout::{Container, MeasureMode, MeasureOutcome, MeasureSpec, ViewHandle};
pub use navtree_options::Options;

#[cfg(test)]
#[path = "tests/support.rs"]
pub(crate) mod test_support;
