/// Platform chrome dimensions used for inset accounting.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChromeMetrics {
    /// Top inset reserved when content does not draw behind the status bar.
    pub status_bar_height: f32,
}

impl ChromeMetrics {
    pub const DEFAULT_STATUS_BAR_HEIGHT: f32 = 63.0;

    pub const fn new(status_bar_height: f32) -> Self {
        Self { status_bar_height }
    }
}

impl Default for ChromeMetrics {
    fn default() -> Self {
        Self::new(Self::DEFAULT_STATUS_BAR_HEIGHT)
    }
}
