use super::ControllerBase;
use crate::error::ControllerError;
use crate::host::ViewHost;
use crate::id::{Component, ControllerId};
use navtree_layout::ViewHandle;
use navtree_options::Options;

/// Tree node hosting exactly one component.
#[derive(Debug, Clone)]
pub struct LeafController {
    pub(crate) base: ControllerBase,
    component: Component,
    rendered: bool,
    bottom_inset: f32,
    top_inset: f32,
}

impl LeafController {
    pub fn new(
        id: impl Into<ControllerId>,
        view: ViewHandle,
        component: Component,
        initial_options: Options,
    ) -> Self {
        Self {
            base: ControllerBase::new(id.into(), view, initial_options),
            component,
            rendered: false,
            bottom_inset: 0.0,
            top_inset: 0.0,
        }
    }

    /// Sets the space this leaf gives up to chrome at the bottom edge.
    pub fn with_bottom_inset(mut self, inset: f32) -> Self {
        self.bottom_inset = inset;
        self
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

    pub fn component(&self) -> Component {
        self.component
    }

    pub fn resolve_current_options(&self) -> Options {
        self.base.options().clone()
    }

    /// Layers a runtime overlay over the working options.
    pub fn merge_options(&mut self, overlay: &Options) {
        let merged = self.base.options().merge(overlay);
        self.base.set_options(merged);
    }

    pub fn mark_rendered(&mut self) {
        self.rendered = true;
    }

    pub fn is_rendered(&self) -> bool {
        self.rendered
    }

    pub fn bottom_inset(&self) -> f32 {
        self.bottom_inset
    }

    pub fn set_bottom_inset(&mut self, inset: f32) {
        self.bottom_inset = inset;
    }

    /// Last top inset relayed down the active path.
    pub fn top_inset(&self) -> f32 {
        self.top_inset
    }

    pub(crate) fn apply_top_inset(&mut self, inset: f32) -> bool {
        self.top_inset = inset;
        true
    }

    pub(crate) fn destroy(&mut self, host: &mut dyn ViewHost) -> Result<(), ControllerError> {
        if !self.base.begin_destroy() {
            return Ok(());
        }
        log::debug!("destroying leaf {}", self.base.id());
        host.destroy_component(self.component)
            .map_err(|source| ControllerError::Host {
                id: self.base.id().clone(),
                view: self.base.view(),
                source,
            })?;
        self.base.release_view(host)
    }
}
