//! Seams to the host platform.
//!
//! The controller tree never creates or draws views itself. Releasing views
//! goes through a [`ViewHost`], and resolved option snapshots are handed to a
//! [`Presenter`] that styles the real chrome.

use crate::error::HostError;
use crate::id::{Component, ControllerId};
use navtree_layout::ViewHandle;
use navtree_options::Options;

/// Releases platform resources owned by controllers.
pub trait ViewHost {
    fn destroy_component(&mut self, component: Component) -> Result<(), HostError>;

    fn destroy_view(&mut self, view: ViewHandle) -> Result<(), HostError>;
}

/// Applies a resolved options snapshot to platform chrome.
pub trait Presenter {
    fn apply_options(&mut self, controller: &ControllerId, options: &Options);
}
