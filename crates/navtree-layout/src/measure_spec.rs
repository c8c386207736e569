//! Per-axis measurement requests

/// How a container constrains one axis of a child.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MeasureMode {
    /// The child must be exactly `size`.
    Exactly,
    /// The child may be at most `size`.
    AtMost,
    /// The container imposes no bound; `size` is a hint at most.
    Unspecified,
}

/// A size request along one axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeasureSpec {
    pub mode: MeasureMode,
    pub size: f32,
}

impl MeasureSpec {
    pub const fn exactly(size: f32) -> Self {
        Self {
            mode: MeasureMode::Exactly,
            size,
        }
    }

    pub const fn at_most(size: f32) -> Self {
        Self {
            mode: MeasureMode::AtMost,
            size,
        }
    }

    pub const fn unspecified() -> Self {
        Self {
            mode: MeasureMode::Unspecified,
            size: 0.0,
        }
    }

    #[inline]
    pub fn mode(&self) -> MeasureMode {
        self.mode
    }

    #[inline]
    pub fn size(&self) -> f32 {
        self.size
    }

    #[inline]
    pub fn is_exact(&self) -> bool {
        matches!(self.mode, MeasureMode::Exactly)
    }
}

#[cfg(test)]
#[path = "tests/measure_spec_tests.rs"]
mod tests;
