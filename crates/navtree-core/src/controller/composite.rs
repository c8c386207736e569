use super::{CompositeBehavior, Controller, ControllerBase, DefaultBehavior};
use crate::error::ControllerError;
use crate::host::ViewHost;
use crate::id::{Component, ControllerId};
use crate::metrics::ChromeMetrics;
use navtree_layout::{Container, MeasureOutcome, MeasureSpec, ViewHandle};
use navtree_options::Options;
use std::fmt;

/// Tree node owning an ordered list of children, one of which is active.
///
/// The active child is the visible branch: option resolution, render gating
/// and inset relay follow it, while lookup, default-option broadcast and
/// destruction cover every child.
pub struct CompositeController {
    pub(crate) base: ControllerBase,
    pub(crate) children: Vec<Controller>,
    active: Option<usize>,
    behavior: Box<dyn CompositeBehavior>,
}

impl fmt::Debug for CompositeController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeController")
            .field("base", &self.base)
            .field("children", &self.children)
            .field("active", &self.active)
            .field("behavior", &self.behavior.debug_name())
            .finish()
    }
}

impl CompositeController {
    pub fn new(id: impl Into<ControllerId>, view: ViewHandle, initial_options: Options) -> Self {
        Self {
            base: ControllerBase::new(id.into(), view, initial_options),
            children: Vec::new(),
            active: None,
            behavior: Box::new(DefaultBehavior),
        }
    }

    pub fn with_behavior(mut self, behavior: impl CompositeBehavior + 'static) -> Self {
        self.behavior = Box::new(behavior);
        self
    }

    /// Builder form of [`add_child`](Self::add_child).
    pub fn with_child(mut self, child: impl Into<Controller>) -> Result<Self, ControllerError> {
        self.add_child(child.into())?;
        Ok(self)
    }

    pub fn base(&self) -> &ControllerBase {
        &self.base
    }

    pub fn id(&self) -> &ControllerId {
        self.base.id()
    }

    pub fn view(&self) -> ViewHandle {
        self.base.view()
    }

    pub fn behavior(&self) -> &dyn CompositeBehavior {
        self.behavior.as_ref()
    }

    /// The live direct-child collection.
    pub fn children(&self) -> &[Controller] {
        &self.children
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn active_child(&self) -> Option<&Controller> {
        self.children.get(self.active?)
    }

    pub fn active_child_mut(&mut self) -> Option<&mut Controller> {
        self.children.get_mut(self.active?)
    }

    /// Appends `child`. The first child attached becomes active.
    ///
    /// Only this subtree is checked for id clashes; `ControllerTree::attach`
    /// checks the whole tree.
    pub fn add_child(&mut self, mut child: Controller) -> Result<(), ControllerError> {
        let existing: Vec<&ControllerId> = std::iter::once(self.id())
            .chain(self.children.iter().flat_map(|c| c.subtree_ids()))
            .collect();
        if let Some(clash) = child
            .subtree_ids()
            .into_iter()
            .find(|id| existing.contains(id))
        {
            return Err(ControllerError::DuplicateId { id: clash.clone() });
        }
        child.base_mut().set_parent(Some(self.id().clone()));
        self.children.push(child);
        if self.active.is_none() {
            self.active = Some(self.children.len() - 1);
        }
        Ok(())
    }

    /// Detaches a direct child. Removing the active child activates the last
    /// remaining one.
    pub fn remove_child(&mut self, id: &str) -> Option<Controller> {
        let index = self.children.iter().position(|c| c.id() == id)?;
        let mut child = self.children.remove(index);
        child.base_mut().set_parent(None);
        self.active = match self.active {
            _ if self.children.is_empty() => None,
            Some(active) if active == index => Some(self.children.len() - 1),
            Some(active) if active > index => Some(active - 1),
            other => other,
        };
        Some(child)
    }

    pub fn set_active(&mut self, id: &str) -> Result<(), ControllerError> {
        let index = self
            .children
            .iter()
            .position(|c| c.id() == id)
            .ok_or_else(|| ControllerError::NotFound { id: id.into() })?;
        self.active = Some(index);
        Ok(())
    }

    /// Active child's resolved options with this node's baseline filling
    /// whatever the child left unset. The baseline alone when childless.
    pub fn resolve_current_options(&self) -> Options {
        match self.active_child() {
            Some(child) => child
                .resolve_current_options()
                .with_initial_options(self.base.initial_options()),
            None => self.base.initial_options().clone(),
        }
    }

    /// Same cascade as [`resolve_current_options`](Self::resolve_current_options)
    /// applied to an arbitrary member of the subtree.
    pub fn resolve_child_options(&self, child: &Controller) -> Options {
        if child.id() == self.id() {
            return self.resolve_current_options();
        }
        child
            .resolve_current_options()
            .with_initial_options(self.base.initial_options())
    }

    pub fn resolve_current_options_with(&self, defaults: &Options) -> Options {
        self.resolve_current_options().with_default_options(defaults)
    }

    /// Folds a child-originated change against the baseline, discarding
    /// earlier overlays.
    pub fn apply_child_options(&mut self, options: &Options, origin: Option<Component>) {
        if let Some(component) = origin {
            log::trace!("{} applies options from {component}", self.id());
        }
        let merged = self.base.initial_options().merge(options);
        self.base.set_options(merged);
    }

    pub fn merge_child_options(
        &mut self,
        options: &Options,
        child: &ControllerId,
        origin: Option<Component>,
    ) {
        self.behavior
            .merge_child_options(self.base.options_mut(), options, child, origin);
    }

    pub fn on_child_destroyed(&mut self, component: Component) {
        self.behavior.on_child_destroyed(component);
    }

    pub fn setup_top_tabs(&mut self, pager: ViewHandle) {
        self.behavior.setup_top_tabs(pager);
    }

    pub fn clear_top_tabs(&mut self) {
        self.behavior.clear_top_tabs();
    }

    /// Only the active branch waits for render.
    pub fn set_wait_for_render(&mut self, wait: bool) {
        self.base.wait_for_render = wait;
        if let Some(child) = self.active_child_mut() {
            child.set_wait_for_render(wait);
        }
    }

    pub fn is_rendered(&self) -> bool {
        self.active_child().is_some_and(Controller::is_rendered)
    }

    pub fn contains_component(&self, component: Component) -> bool {
        self.children
            .iter()
            .any(|child| child.contains_component(component))
    }

    pub fn apply_top_insets(&mut self, inset: f32) -> bool {
        match self.active_child_mut() {
            Some(child) => child.apply_top_insets(inset),
            None => false,
        }
    }

    /// Top inset for `child` computed as the root of the tree: zero when the
    /// child draws behind the status bar.
    pub fn root_top_inset(&self, child: &Controller, metrics: &ChromeMetrics) -> f32 {
        if self.resolve_child_options(child).status_bar.draws_behind() {
            0.0
        } else {
            metrics.status_bar_height
        }
    }

    /// Measures a descendant view on behalf of `container`.
    ///
    /// Leaves get an exact height reduced by their bottom inset. Composites
    /// pass through untouched so the inset is subtracted once, at the leaf.
    #[allow(clippy::too_many_arguments)]
    pub fn measure_child(
        &self,
        container: &mut dyn Container,
        child: ViewHandle,
        width: MeasureSpec,
        width_used: f32,
        height: MeasureSpec,
        height_used: f32,
    ) -> MeasureOutcome {
        if child == self.view() {
            return MeasureOutcome::NotHandled;
        }
        let Some(controller) = self
            .children
            .iter()
            .find_map(|c| c.find_by_handle(child))
        else {
            log::debug!("{} has no controller for {child}, using default", self.id());
            return container.measure_default(child, width, width_used, height, height_used);
        };
        match controller {
            Controller::Leaf(leaf) => {
                let available = (height.size() - leaf.bottom_inset()).max(0.0);
                container.measure(
                    leaf.view(),
                    width,
                    width_used,
                    MeasureSpec::exactly(available),
                    height_used,
                );
                MeasureOutcome::Handled
            }
            Controller::Composite(_) => MeasureOutcome::NotHandled,
        }
    }

    pub(crate) fn destroy(&mut self, host: &mut dyn ViewHost) -> Result<(), ControllerError> {
        if !self.base.begin_destroy() {
            return Ok(());
        }
        log::debug!(
            "destroying {} ({}) with {} children",
            self.base.id(),
            self.behavior.debug_name(),
            self.children.len()
        );
        self.base.release_view(host)?;
        // Marked before the children; a failure below strands the rest.
        for child in self.children.iter_mut() {
            child.destroy(host)?;
            if let Controller::Leaf(leaf) = child {
                self.behavior.on_child_destroyed(leaf.component());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/composite_tests.rs"]
mod tests;
