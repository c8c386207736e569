//! Option values and cascade rules for navtree controllers
//!
//! Every field is optional. Resolution never clears a set field; it only
//! decides which layer supplies a value for fields that are still unset.

mod error;
mod groups;
mod options;
mod overlay;
mod values;

pub use error::*;
pub use groups::*;
pub use options::*;
pub use overlay::Overlay;
pub use values::*;

pub mod prelude {
    pub use crate::groups::{
        BottomTabsOptions, LayoutOptions, StatusBarOptions, TopBarOptions, TopTabsOptions,
    };
    pub use crate::options::Options;
    pub use crate::overlay::Overlay;
    pub use crate::values::{Color, Orientation, StatusBarStyle};
}
