//! The `Options` snapshot and its layering operations.

use crate::error::OptionsError;
use crate::groups::{
    BottomTabsOptions, LayoutOptions, StatusBarOptions, TopBarOptions, TopTabsOptions,
};
use crate::overlay::{impl_overlay, Overlay};
use serde::{Deserialize, Serialize};

/// Hierarchical set of named configuration values attached to a controller.
///
/// `Options` is a plain value: [`Clone`] produces a deep copy and every
/// layering operation returns a new snapshot.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Options {
    #[serde(skip_serializing_if = "Overlay::is_unset")]
    pub top_bar: TopBarOptions,
    #[serde(skip_serializing_if = "Overlay::is_unset")]
    pub status_bar: StatusBarOptions,
    #[serde(skip_serializing_if = "Overlay::is_unset")]
    pub bottom_tabs: BottomTabsOptions,
    #[serde(skip_serializing_if = "Overlay::is_unset")]
    pub top_tabs: TopTabsOptions,
    #[serde(skip_serializing_if = "Overlay::is_unset")]
    pub layout: LayoutOptions,
}

impl_overlay!(Options {
    top_bar,
    status_bar,
    bottom_tabs,
    top_tabs,
    layout,
});

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses the camelCase JSON shape, e.g. `{"statusBar": {"drawBehind": true}}`.
    ///
    /// Unknown keys are ignored.
    pub fn from_json(source: &str) -> Result<Self, OptionsError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Serializes only the fields that are set; groups with nothing set are omitted.
    pub fn to_json(&self) -> Result<String, OptionsError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Returns true if no field is set in any group.
    pub fn is_empty(&self) -> bool {
        self.is_unset()
    }

    /// Returns a new snapshot where set fields of `other` win.
    #[must_use]
    pub fn merge(&self, other: &Options) -> Options {
        let mut merged = self.clone();
        merged.merge_from(other);
        merged
    }

    /// Fills unset fields from `defaults`, the lowest-priority layer.
    #[must_use]
    pub fn with_default_options(mut self, defaults: &Options) -> Options {
        self.fill_from(defaults);
        self
    }

    /// Fills unset fields from an ancestor's baseline.
    #[must_use]
    pub fn with_initial_options(mut self, base: &Options) -> Options {
        self.fill_from(base);
        self
    }

    /// Drops transient values such as pending tab selections.
    #[must_use]
    pub fn clear_one_time_options(mut self) -> Options {
        self.bottom_tabs.clear_one_time_options();
        self.top_tabs.clear_one_time_options();
        self
    }
}

#[cfg(test)]
#[path = "tests/options_tests.rs"]
mod tests;
