use crate::id::{Component, ControllerId};
use navtree_layout::ViewHandle;
use navtree_options::Options;

/// Hooks a composite variant (stack, tabs, pager, ...) customizes.
///
/// All hooks default to no-ops.
pub trait CompositeBehavior {
    /// Custom merge policy for options raised by `child`.
    ///
    /// `working` is the composite's working snapshot.
    fn merge_child_options(
        &mut self,
        _working: &mut Options,
        _options: &Options,
        _child: &ControllerId,
        _origin: Option<Component>,
    ) {
    }

    fn on_child_destroyed(&mut self, _component: Component) {}

    /// Binds swipeable top-tab content hosted in `pager`.
    fn setup_top_tabs(&mut self, _pager: ViewHandle) {}

    fn clear_top_tabs(&mut self) {}

    fn debug_name(&self) -> &str {
        "CompositeBehavior"
    }
}

/// Plain composite with no variant-specific hooks.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultBehavior;

impl CompositeBehavior for DefaultBehavior {
    fn debug_name(&self) -> &str {
        "DefaultBehavior"
    }
}
