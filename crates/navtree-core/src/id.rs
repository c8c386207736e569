use std::borrow::Borrow;
use std::fmt;

/// Identifier of a controller, unique across the whole tree.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ControllerId(String);

impl ControllerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ControllerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for ControllerId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ControllerId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ControllerId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl PartialEq<str> for ControllerId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

/// Opaque handle to a hosted display unit. Owned by exactly one leaf.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Component(pub u64);

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "component#{}", self.0)
    }
}
