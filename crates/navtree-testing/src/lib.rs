//! Testing utilities and fakes for navtree

pub mod assertions;
pub mod builders;
pub mod recording;

pub use assertions::*;
pub use builders::*;
pub use recording::*;

pub mod prelude {
    pub use crate::assertions;
    pub use crate::builders::*;
    pub use crate::recording::*;
}
