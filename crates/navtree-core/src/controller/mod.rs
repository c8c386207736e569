//! Controller nodes.
//!
//! A tree is built from exactly two node kinds: a [`LeafController`] hosting
//! one component, and a [`CompositeController`] owning an ordered list of
//! child controllers with one of them active. [`Controller`] is the tagged
//! union every recursive operation dispatches through.

mod behavior;
mod composite;
mod leaf;

pub use behavior::{CompositeBehavior, DefaultBehavior};
pub use composite::CompositeController;
pub use leaf::LeafController;

use crate::error::ControllerError;
use crate::host::ViewHost;
use crate::id::{Component, ControllerId};
use navtree_layout::ViewHandle;
use navtree_options::Options;
use smallvec::SmallVec;

/// Index path from a node down to one of its descendants.
pub type ChildPath = SmallVec<[usize; 8]>;

/// State shared by both controller kinds.
#[derive(Debug, Clone)]
pub struct ControllerBase {
    id: ControllerId,
    view: ViewHandle,
    initial_options: Options,
    options: Options,
    default_options: Options,
    wait_for_render: bool,
    parent: Option<ControllerId>,
    destroyed: bool,
}

impl ControllerBase {
    pub(crate) fn new(id: ControllerId, view: ViewHandle, initial_options: Options) -> Self {
        Self {
            options: initial_options.clone(),
            id,
            view,
            initial_options,
            default_options: Options::default(),
            wait_for_render: false,
            parent: None,
            destroyed: false,
        }
    }

    pub fn id(&self) -> &ControllerId {
        &self.id
    }

    pub fn view(&self) -> ViewHandle {
        self.view
    }

    /// Baseline snapshot fixed at construction.
    pub fn initial_options(&self) -> &Options {
        &self.initial_options
    }

    /// Working snapshot: the baseline shadowed by runtime overlays.
    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn default_options(&self) -> &Options {
        &self.default_options
    }

    pub fn wait_for_render(&self) -> bool {
        self.wait_for_render
    }

    pub fn parent(&self) -> Option<&ControllerId> {
        self.parent.as_ref()
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    pub(crate) fn set_parent(&mut self, parent: Option<ControllerId>) {
        self.parent = parent;
    }

    pub(crate) fn set_options(&mut self, options: Options) {
        self.options = options;
    }

    pub(crate) fn options_mut(&mut self) -> &mut Options {
        &mut self.options
    }

    pub(crate) fn reset_options(&mut self) {
        self.options = self.initial_options.clone().clear_one_time_options();
    }

    /// Marks the node destroyed. Returns false if it already was.
    pub(crate) fn begin_destroy(&mut self) -> bool {
        !std::mem::replace(&mut self.destroyed, true)
    }

    pub(crate) fn release_view(&self, host: &mut dyn ViewHost) -> Result<(), ControllerError> {
        host.destroy_view(self.view)
            .map_err(|source| ControllerError::Host {
                id: self.id.clone(),
                view: self.view,
                source,
            })
    }
}

/// A node of the controller tree.
#[derive(Debug)]
pub enum Controller {
    Leaf(LeafController),
    Composite(CompositeController),
}

impl From<LeafController> for Controller {
    fn from(leaf: LeafController) -> Self {
        Controller::Leaf(leaf)
    }
}

impl From<CompositeController> for Controller {
    fn from(composite: CompositeController) -> Self {
        Controller::Composite(composite)
    }
}

impl Controller {
    pub fn base(&self) -> &ControllerBase {
        match self {
            Controller::Leaf(leaf) => leaf.base(),
            Controller::Composite(composite) => composite.base(),
        }
    }

    pub(crate) fn base_mut(&mut self) -> &mut ControllerBase {
        match self {
            Controller::Leaf(leaf) => &mut leaf.base,
            Controller::Composite(composite) => &mut composite.base,
        }
    }

    pub fn id(&self) -> &ControllerId {
        self.base().id()
    }

    pub fn view(&self) -> ViewHandle {
        self.base().view()
    }

    pub fn is_root(&self) -> bool {
        self.base().is_root()
    }

    pub fn is_destroyed(&self) -> bool {
        self.base().is_destroyed()
    }

    pub fn as_leaf(&self) -> Option<&LeafController> {
        match self {
            Controller::Leaf(leaf) => Some(leaf),
            Controller::Composite(_) => None,
        }
    }

    pub fn as_leaf_mut(&mut self) -> Option<&mut LeafController> {
        match self {
            Controller::Leaf(leaf) => Some(leaf),
            Controller::Composite(_) => None,
        }
    }

    pub fn as_composite(&self) -> Option<&CompositeController> {
        match self {
            Controller::Composite(composite) => Some(composite),
            Controller::Leaf(_) => None,
        }
    }

    pub fn as_composite_mut(&mut self) -> Option<&mut CompositeController> {
        match self {
            Controller::Composite(composite) => Some(composite),
            Controller::Leaf(_) => None,
        }
    }

    /// Direct children; always empty for a leaf.
    pub fn children(&self) -> &[Controller] {
        match self {
            Controller::Leaf(_) => &[],
            Controller::Composite(composite) => composite.children(),
        }
    }

    pub fn resolve_current_options(&self) -> Options {
        match self {
            Controller::Leaf(leaf) => leaf.resolve_current_options(),
            Controller::Composite(composite) => composite.resolve_current_options(),
        }
    }

    /// Resolved options with `defaults` filling whatever is still unset.
    pub fn resolve_current_options_with(&self, defaults: &Options) -> Options {
        self.resolve_current_options().with_default_options(defaults)
    }

    pub fn set_wait_for_render(&mut self, wait: bool) {
        match self {
            Controller::Leaf(leaf) => leaf.base.wait_for_render = wait,
            Controller::Composite(composite) => composite.set_wait_for_render(wait),
        }
    }

    /// Stores `defaults` here and on every descendant.
    pub fn set_default_options(&mut self, defaults: &Options) {
        self.base_mut().default_options = defaults.clone();
        if let Controller::Composite(composite) = self {
            for child in composite.children.iter_mut() {
                child.set_default_options(defaults);
            }
        }
    }

    pub fn is_rendered(&self) -> bool {
        match self {
            Controller::Leaf(leaf) => leaf.is_rendered(),
            Controller::Composite(composite) => composite.is_rendered(),
        }
    }

    /// Depth-first, self first; the first match in child order wins.
    pub fn find_by_id(&self, id: &str) -> Option<&Controller> {
        if self.id() == id {
            return Some(self);
        }
        self.children()
            .iter()
            .find_map(|child| child.find_by_id(id))
    }

    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut Controller> {
        if self.id() == id {
            return Some(self);
        }
        match self {
            Controller::Leaf(_) => None,
            Controller::Composite(composite) => composite
                .children
                .iter_mut()
                .find_map(|child| child.find_by_id_mut(id)),
        }
    }

    pub fn find_by_handle(&self, view: ViewHandle) -> Option<&Controller> {
        if self.view() == view {
            return Some(self);
        }
        self.children()
            .iter()
            .find_map(|child| child.find_by_handle(view))
    }

    pub fn contains_component(&self, component: Component) -> bool {
        match self {
            Controller::Leaf(leaf) => leaf.component() == component,
            Controller::Composite(composite) => composite.contains_component(component),
        }
    }

    /// Relays the top inset down the active path to the visible leaf.
    ///
    /// Returns false when the path ends in a composite with no children.
    pub fn apply_top_insets(&mut self, inset: f32) -> bool {
        match self {
            Controller::Leaf(leaf) => leaf.apply_top_inset(inset),
            Controller::Composite(composite) => composite.apply_top_insets(inset),
        }
    }

    /// The node at the end of the active path: a leaf, or a childless composite.
    pub fn active_end(&self) -> &Controller {
        match self {
            Controller::Leaf(_) => self,
            Controller::Composite(composite) => match composite.active_child() {
                Some(child) => child.active_end(),
                None => self,
            },
        }
    }

    pub fn active_leaf(&self) -> Option<&LeafController> {
        self.active_end().as_leaf()
    }

    /// Releases this node, then every descendant, each exactly once.
    ///
    /// A host failure aborts the walk. Every node the walk reached is already
    /// marked destroyed, so calling this again is a no-op and siblings after
    /// the failing child are never released.
    pub fn destroy(&mut self, host: &mut dyn ViewHost) -> Result<(), ControllerError> {
        match self {
            Controller::Leaf(leaf) => leaf.destroy(host),
            Controller::Composite(composite) => composite.destroy(host),
        }
    }

    /// Clears working options back to the baseline minus one-time values.
    /// Ancestors are not touched; see `ControllerTree::clear_options`.
    pub(crate) fn reset_options(&mut self) {
        self.base_mut().reset_options();
    }

    pub(crate) fn path_to(&self, id: &str, path: &mut ChildPath) -> bool {
        if self.id() == id {
            return true;
        }
        for (index, child) in self.children().iter().enumerate() {
            path.push(index);
            if child.path_to(id, path) {
                return true;
            }
            path.pop();
        }
        false
    }

    pub(crate) fn node_at(&self, path: &[usize]) -> Option<&Controller> {
        match path.split_first() {
            None => Some(self),
            Some((&index, rest)) => self.children().get(index)?.node_at(rest),
        }
    }

    pub(crate) fn node_at_mut(&mut self, path: &[usize]) -> Option<&mut Controller> {
        match path.split_first() {
            None => Some(self),
            Some((&index, rest)) => match self {
                Controller::Leaf(_) => None,
                Controller::Composite(composite) => {
                    composite.children.get_mut(index)?.node_at_mut(rest)
                }
            },
        }
    }

    /// Every id in this subtree, depth-first.
    pub fn subtree_ids(&self) -> Vec<&ControllerId> {
        let mut ids = Vec::new();
        self.collect_ids(&mut ids);
        ids
    }

    fn collect_ids<'a>(&'a self, out: &mut Vec<&'a ControllerId>) {
        out.push(self.id());
        for child in self.children() {
            child.collect_ids(out);
        }
    }
}

#[cfg(test)]
#[path = "../tests/controller_tests.rs"]
mod tests;
