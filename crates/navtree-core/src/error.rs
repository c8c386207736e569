use crate::id::ControllerId;
use navtree_layout::ViewHandle;
use std::fmt;

/// Failure reported by the host while releasing a view or component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostError {
    pub reason: String,
}

impl HostError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.reason)
    }
}

impl std::error::Error for HostError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControllerError {
    NotFound { id: ControllerId },
    DuplicateId { id: ControllerId },
    NotComposite { id: ControllerId },
    IsRoot { id: ControllerId },
    Host {
        id: ControllerId,
        view: ViewHandle,
        source: HostError,
    },
}

impl fmt::Display for ControllerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControllerError::NotFound { id } => write!(f, "controller {id} not found"),
            ControllerError::DuplicateId { id } => {
                write!(f, "controller id {id} is already attached")
            }
            ControllerError::NotComposite { id } => {
                write!(f, "controller {id} cannot own children")
            }
            ControllerError::IsRoot { id } => write!(f, "controller {id} is the tree root"),
            ControllerError::Host { id, view, source } => {
                write!(f, "host failed to destroy {view} of controller {id}: {source}")
            }
        }
    }
}

impl std::error::Error for ControllerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ControllerError::Host { source, .. } => Some(source),
            _ => None,
        }
    }
}
