use std::fmt;

/// Failure to read an [`Options`](crate::Options) document.
#[derive(Debug)]
pub enum OptionsError {
    Parse(serde_json::Error),
}

impl fmt::Display for OptionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionsError::Parse(err) => write!(f, "invalid options document: {err}"),
        }
    }
}

impl std::error::Error for OptionsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OptionsError::Parse(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for OptionsError {
    fn from(err: serde_json::Error) -> Self {
        OptionsError::Parse(err)
    }
}
