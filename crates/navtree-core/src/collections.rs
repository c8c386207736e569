#[cfg(feature = "std-hash")]
pub mod set {
    pub use std::collections::HashSet;
}

#[cfg(not(feature = "std-hash"))]
pub mod set {
    pub use rustc_hash::FxHashSet as HashSet;
}
