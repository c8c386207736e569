//! Whole-tree operations.
//!
//! Nodes only hold their parent's id, so anything that walks upwards
//! (clearing options root-first, computing insets at the root) goes through
//! the [`ControllerTree`] that owns the root.

use crate::collections::set::HashSet;
use crate::controller::{ChildPath, Controller};
use crate::error::ControllerError;
use crate::host::{Presenter, ViewHost};
use crate::id::{Component, ControllerId};
use crate::metrics::ChromeMetrics;
use navtree_layout::{Container, MeasureOutcome, MeasureSpec, ViewHandle};
use navtree_options::Options;

#[derive(Debug)]
pub struct ControllerTree {
    root: Controller,
    metrics: ChromeMetrics,
}

impl ControllerTree {
    pub fn new(root: impl Into<Controller>) -> Self {
        Self::with_metrics(root, ChromeMetrics::default())
    }

    pub fn with_metrics(root: impl Into<Controller>, metrics: ChromeMetrics) -> Self {
        let mut root = root.into();
        root.base_mut().set_parent(None);
        Self { root, metrics }
    }

    pub fn metrics(&self) -> &ChromeMetrics {
        &self.metrics
    }

    pub fn root(&self) -> &Controller {
        &self.root
    }

    pub fn find(&self, id: &str) -> Option<&Controller> {
        self.root.find_by_id(id)
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut Controller> {
        self.root.find_by_id_mut(id)
    }

    pub fn find_by_handle(&self, view: ViewHandle) -> Option<&Controller> {
        self.root.find_by_handle(view)
    }

    pub fn contains_component(&self, component: Component) -> bool {
        self.root.contains_component(component)
    }

    fn path(&self, id: &str) -> Result<ChildPath, ControllerError> {
        let mut path = ChildPath::new();
        if self.root.path_to(id, &mut path) {
            Ok(path)
        } else {
            log::warn!("no controller {id} in tree rooted at {}", self.root.id());
            Err(ControllerError::NotFound { id: id.into() })
        }
    }

    /// Ids from the root down to (and including) `id`.
    pub fn ancestors(&self, id: &str) -> Option<Vec<&ControllerId>> {
        let mut path = ChildPath::new();
        if !self.root.path_to(id, &mut path) {
            return None;
        }
        (0..=path.len())
            .map(|depth| self.root.node_at(&path[..depth]).map(Controller::id))
            .collect()
    }

    pub fn parent_of(&self, id: &str) -> Option<&Controller> {
        let parent = self.find(id)?.base().parent()?.clone();
        self.find(parent.as_str())
    }

    /// Attaches `child` under the composite `parent`, rejecting any id that is
    /// already present anywhere in the tree.
    pub fn attach(
        &mut self,
        parent: &str,
        child: impl Into<Controller>,
    ) -> Result<(), ControllerError> {
        let child = child.into();
        let existing: HashSet<&ControllerId> = self.root.subtree_ids().into_iter().collect();
        if let Some(clash) = child
            .subtree_ids()
            .into_iter()
            .find(|id| existing.contains(id))
        {
            return Err(ControllerError::DuplicateId { id: clash.clone() });
        }
        let target = self
            .root
            .find_by_id_mut(parent)
            .ok_or_else(|| ControllerError::NotFound { id: parent.into() })?;
        let composite = target
            .as_composite_mut()
            .ok_or_else(|| ControllerError::NotComposite { id: parent.into() })?;
        log::debug!("attaching {} under {parent}", child.id());
        composite.add_child(child)
    }

    /// Detaches the subtree rooted at `id` without destroying it.
    pub fn detach(&mut self, id: &str) -> Result<Controller, ControllerError> {
        let path = self.path(id)?;
        let Some((_, parent_path)) = path.split_last() else {
            return Err(ControllerError::IsRoot { id: id.into() });
        };
        let parent = self
            .root
            .node_at_mut(parent_path)
            .and_then(Controller::as_composite_mut)
            .ok_or_else(|| ControllerError::NotFound { id: id.into() })?;
        log::debug!("detaching {id} from {}", parent.id());
        parent
            .remove_child(id)
            .ok_or_else(|| ControllerError::NotFound { id: id.into() })
    }

    pub fn resolve_current_options(&self) -> Options {
        self.root.resolve_current_options()
    }

    fn root_inset_for(&self, child: &Controller) -> f32 {
        match &self.root {
            Controller::Composite(root) => root.root_top_inset(child, &self.metrics),
            Controller::Leaf(_) => 0.0,
        }
    }

    /// Top inset for `child` as seen from `at`. Every node defers to the root,
    /// so the answer does not depend on `at`.
    pub fn top_inset(&self, at: &str, child: &str) -> Result<f32, ControllerError> {
        self.path(at)?;
        let child = self
            .find(child)
            .ok_or_else(|| ControllerError::NotFound { id: child.into() })?;
        Ok(self.root_inset_for(child))
    }

    /// Resets working options on every node from the root down to `id`,
    /// root-most first.
    pub fn clear_options(&mut self, id: &str) -> Result<(), ControllerError> {
        let path = self.path(id)?;
        for depth in 0..=path.len() {
            if let Some(node) = self.root.node_at_mut(&path[..depth]) {
                log::trace!("clearing options of {}", node.id());
                node.reset_options();
            }
        }
        Ok(())
    }

    /// Relays the root-computed inset to the visible leaf.
    pub fn apply_top_insets(&mut self) -> bool {
        let end = self.root.active_end();
        if end.as_leaf().is_none() {
            return false;
        }
        let inset = self.root_inset_for(end);
        self.root.apply_top_insets(inset)
    }

    fn composite_mut(
        &mut self,
        id: &str,
    ) -> Result<&mut crate::controller::CompositeController, ControllerError> {
        self.root
            .find_by_id_mut(id)
            .ok_or_else(|| ControllerError::NotFound { id: id.into() })?
            .as_composite_mut()
            .ok_or_else(|| ControllerError::NotComposite { id: id.into() })
    }

    pub fn apply_child_options(
        &mut self,
        composite: &str,
        options: &Options,
        origin: Option<Component>,
    ) -> Result<(), ControllerError> {
        self.composite_mut(composite)?
            .apply_child_options(options, origin);
        Ok(())
    }

    pub fn merge_child_options(
        &mut self,
        composite: &str,
        options: &Options,
        child: &ControllerId,
        origin: Option<Component>,
    ) -> Result<(), ControllerError> {
        self.composite_mut(composite)?
            .merge_child_options(options, child, origin);
        Ok(())
    }

    pub fn set_default_options(&mut self, defaults: &Options) {
        self.root.set_default_options(defaults);
    }

    pub fn set_wait_for_render(&mut self, wait: bool) {
        self.root.set_wait_for_render(wait);
    }

    pub fn is_rendered(&self) -> bool {
        self.root.is_rendered()
    }

    /// Hands the options resolved at `id`, over its stored defaults, to `presenter`.
    pub fn present(
        &self,
        id: &str,
        presenter: &mut dyn Presenter,
    ) -> Result<(), ControllerError> {
        let node = self
            .find(id)
            .ok_or_else(|| ControllerError::NotFound { id: id.into() })?;
        let resolved = node.resolve_current_options_with(node.base().default_options());
        presenter.apply_options(node.id(), &resolved);
        Ok(())
    }

    /// Measurement request from the container backing the composite `at`.
    #[allow(clippy::too_many_arguments)]
    pub fn measure_child(
        &self,
        at: &str,
        container: &mut dyn Container,
        child: ViewHandle,
        width: MeasureSpec,
        width_used: f32,
        height: MeasureSpec,
        height_used: f32,
    ) -> Result<MeasureOutcome, ControllerError> {
        let composite = self
            .find(at)
            .ok_or_else(|| ControllerError::NotFound { id: at.into() })?
            .as_composite()
            .ok_or_else(|| ControllerError::NotComposite { id: at.into() })?;
        Ok(composite.measure_child(container, child, width, width_used, height, height_used))
    }

    /// Tears the whole tree down, root first.
    pub fn destroy(self, host: &mut dyn ViewHost) -> Result<(), ControllerError> {
        let mut root = self.root;
        root.destroy(host).map_err(|err| {
            log::warn!("teardown of {} aborted: {err}", root.id());
            err
        })
    }
}

#[cfg(test)]
#[path = "tests/tree_tests.rs"]
mod tests;
