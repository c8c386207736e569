//! Recording fakes for the host-side collaborators.

use navtree_core::{
    Component, CompositeBehavior, ControllerId, HostError, Presenter, ViewHost,
};
use navtree_layout::{Container, MeasureOutcome, MeasureSpec, ViewHandle};
use navtree_options::Options;
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

/// One `Container::measure` call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeasureRequest {
    pub child: ViewHandle,
    pub width: MeasureSpec,
    pub width_used: f32,
    pub height: MeasureSpec,
    pub height_used: f32,
}

#[derive(Debug, Default)]
pub struct RecordingContainer {
    pub requests: Vec<MeasureRequest>,
    pub fallbacks: Vec<ViewHandle>,
}

impl RecordingContainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request_for(&self, child: ViewHandle) -> Option<&MeasureRequest> {
        self.requests.iter().find(|request| request.child == child)
    }
}

impl Container for RecordingContainer {
    fn measure(
        &mut self,
        child: ViewHandle,
        width: MeasureSpec,
        width_used: f32,
        height: MeasureSpec,
        height_used: f32,
    ) {
        self.requests.push(MeasureRequest {
            child,
            width,
            width_used,
            height,
            height_used,
        });
    }

    fn measure_default(
        &mut self,
        child: ViewHandle,
        _width: MeasureSpec,
        _width_used: f32,
        _height: MeasureSpec,
        _height_used: f32,
    ) -> MeasureOutcome {
        self.fallbacks.push(child);
        MeasureOutcome::NotHandled
    }
}

#[derive(Debug, Default)]
pub struct RecordingPresenter {
    pub applied: Vec<(ControllerId, Options)>,
}

impl RecordingPresenter {
    pub fn last(&self) -> Option<&(ControllerId, Options)> {
        self.applied.last()
    }
}

impl Presenter for RecordingPresenter {
    fn apply_options(&mut self, controller: &ControllerId, options: &Options) {
        self.applied.push((controller.clone(), options.clone()));
    }
}

/// A released resource, in release order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Released {
    View(ViewHandle),
    Component(Component),
}

/// View host that records releases and can be told to fail on given views.
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub released: Vec<Released>,
    failing: HashSet<ViewHandle>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(mut self, view: ViewHandle) -> Self {
        self.failing.insert(view);
        self
    }

    pub fn released_views(&self) -> Vec<ViewHandle> {
        self.released
            .iter()
            .filter_map(|released| match released {
                Released::View(view) => Some(*view),
                Released::Component(_) => None,
            })
            .collect()
    }

    pub fn released_components(&self) -> Vec<Component> {
        self.released
            .iter()
            .filter_map(|released| match released {
                Released::Component(component) => Some(*component),
                Released::View(_) => None,
            })
            .collect()
    }
}

impl ViewHost for RecordingHost {
    fn destroy_component(&mut self, component: Component) -> Result<(), HostError> {
        self.released.push(Released::Component(component));
        Ok(())
    }

    fn destroy_view(&mut self, view: ViewHandle) -> Result<(), HostError> {
        if self.failing.contains(&view) {
            log::debug!("refusing to release {view}");
            return Err(HostError::new(format!("{view} refused release")));
        }
        self.released.push(Released::View(view));
        Ok(())
    }
}

/// Calls observed by a [`RecordingBehavior`].
#[derive(Debug, Default, Clone, PartialEq)]
pub struct BehaviorLog {
    pub merged: Vec<(ControllerId, Option<Component>)>,
    pub destroyed: Vec<Component>,
    pub top_tabs: Vec<ViewHandle>,
    pub cleared_top_tabs: usize,
}

/// Composite behavior that records hook calls into a shared log.
#[derive(Debug, Clone, Default)]
pub struct RecordingBehavior {
    log: Rc<RefCell<BehaviorLog>>,
}

impl RecordingBehavior {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle to the log that stays valid after the behavior is boxed.
    pub fn log(&self) -> Rc<RefCell<BehaviorLog>> {
        Rc::clone(&self.log)
    }
}

impl CompositeBehavior for RecordingBehavior {
    fn merge_child_options(
        &mut self,
        working: &mut Options,
        options: &Options,
        child: &ControllerId,
        origin: Option<Component>,
    ) {
        *working = working.merge(options);
        self.log.borrow_mut().merged.push((child.clone(), origin));
    }

    fn on_child_destroyed(&mut self, component: Component) {
        self.log.borrow_mut().destroyed.push(component);
    }

    fn setup_top_tabs(&mut self, pager: ViewHandle) {
        self.log.borrow_mut().top_tabs.push(pager);
    }

    fn clear_top_tabs(&mut self) {
        self.log.borrow_mut().cleared_top_tabs += 1;
    }

    fn debug_name(&self) -> &str {
        "RecordingBehavior"
    }
}
