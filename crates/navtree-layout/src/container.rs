//! The host container that performs real measurement.

use crate::measure_spec::MeasureSpec;
use std::fmt;

/// Opaque handle to a view owned by the host platform.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewHandle(pub u64);

impl fmt::Display for ViewHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "view#{}", self.0)
    }
}

/// Whether a controller took over measuring a child.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MeasureOutcome {
    /// A measurement request was issued on the container.
    Handled,
    /// The container should measure the child itself.
    NotHandled,
}

impl MeasureOutcome {
    #[inline]
    pub fn is_handled(self) -> bool {
        matches!(self, MeasureOutcome::Handled)
    }
}

/// Layout host that lays children out on behalf of controllers.
///
/// Controllers only decide how much space to hand a child; the container
/// owns the measurement itself.
pub trait Container {
    /// Measures `child` against the given specs. Side effects only.
    fn measure(
        &mut self,
        child: ViewHandle,
        width: MeasureSpec,
        width_used: f32,
        height: MeasureSpec,
        height_used: f32,
    );

    /// Fallback for children no controller claims.
    fn measure_default(
        &mut self,
        _child: ViewHandle,
        _width: MeasureSpec,
        _width_used: f32,
        _height: MeasureSpec,
        _height_used: f32,
    ) -> MeasureOutcome {
        MeasureOutcome::NotHandled
    }
}
