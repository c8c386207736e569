//! Option groups, one per piece of chrome.

use crate::overlay::impl_overlay;
use crate::values::{Color, Orientation, StatusBarStyle};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TopBarOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    /// Content extends underneath the top bar.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draw_behind: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
}

impl_overlay!(TopBarOptions {
    title,
    visible,
    draw_behind,
    background_color,
});

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatusBarOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    /// Content extends underneath the status bar, so no top inset is reserved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draw_behind: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<StatusBarStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
}

impl_overlay!(StatusBarOptions {
    visible,
    draw_behind,
    style,
    background_color,
});

impl StatusBarOptions {
    /// Unset counts as drawing in front of the status bar.
    pub fn draws_behind(&self) -> bool {
        self.draw_behind.unwrap_or(false)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BottomTabsOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draw_behind: Option<bool>,
    /// One-time: a tab selection command, dropped by `clear_one_time_options`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_tab_index: Option<usize>,
    /// One-time, like `current_tab_index`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_tab_id: Option<String>,
}

impl_overlay!(BottomTabsOptions {
    visible,
    draw_behind,
    current_tab_index,
    current_tab_id,
});

impl BottomTabsOptions {
    pub fn clear_one_time_options(&mut self) {
        self.current_tab_index = None;
        self.current_tab_id = None;
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TopTabsOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_tab_index: Option<usize>,
}

impl_overlay!(TopTabsOptions {
    visible,
    current_tab_index,
});

impl TopTabsOptions {
    pub fn clear_one_time_options(&mut self) {
        self.current_tab_index = None;
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orientation: Option<Orientation>,
}

impl_overlay!(LayoutOptions {
    background_color,
    orientation,
});
