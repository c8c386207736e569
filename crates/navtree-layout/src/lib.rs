//! Measurement contracts between navtree controllers and their containers

mod container;
mod measure_spec;

pub use container::*;
pub use measure_spec::*;

pub mod prelude {
    pub use crate::container::{Container, MeasureOutcome, ViewHandle};
    pub use crate::measure_spec::{MeasureMode, MeasureSpec};
}
