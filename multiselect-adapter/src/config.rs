use alloc::string::String;

use multiselect::{
    DEFAULT_OVERSCAN, DEFAULT_VIRTUALIZE_THRESHOLD, Rect, RowHeights, SelectionMode,
    VirtualizerOptions,
};

use crate::ConfigError;

pub const DEFAULT_PLACEHOLDER: &str = "Select...";
pub const DEFAULT_SEARCH_PLACEHOLDER: &str = "Search...";
pub const DEFAULT_MAX_HEIGHT: u32 = 320;

/// Configuration for [`crate::Dropdown`].
///
/// With `feature = "serde"`, missing fields fall back to their defaults.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DropdownConfig {
    /// Trigger text while nothing is selected.
    pub placeholder: String,
    pub search_placeholder: String,
    /// Height of the scrollable list while it has rows.
    pub max_height: u32,
    /// Minimum row count that turns windowing on. `0` disables windowing.
    pub virtualize_threshold: usize,
    pub disabled: bool,
    pub multiple: bool,
    pub row_heights: RowHeights,
    pub overscan: usize,
}

impl DropdownConfig {
    pub fn new() -> Self {
        Self {
            placeholder: String::from(DEFAULT_PLACEHOLDER),
            search_placeholder: String::from(DEFAULT_SEARCH_PLACEHOLDER),
            max_height: DEFAULT_MAX_HEIGHT,
            virtualize_threshold: DEFAULT_VIRTUALIZE_THRESHOLD,
            disabled: false,
            multiple: true,
            row_heights: RowHeights::default(),
            overscan: DEFAULT_OVERSCAN,
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn with_search_placeholder(mut self, search_placeholder: impl Into<String>) -> Self {
        self.search_placeholder = search_placeholder.into();
        self
    }

    pub fn with_max_height(mut self, max_height: u32) -> Self {
        self.max_height = max_height;
        self
    }

    pub fn with_virtualize_threshold(mut self, virtualize_threshold: usize) -> Self {
        self.virtualize_threshold = virtualize_threshold;
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn with_multiple(mut self, multiple: bool) -> Self {
        self.multiple = multiple;
        self
    }

    pub fn with_row_heights(mut self, row_heights: RowHeights) -> Self {
        self.row_heights = row_heights;
        self
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    pub fn selection_mode(&self) -> SelectionMode {
        SelectionMode::from_multiple(self.multiple)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_height == 0 {
            return Err(ConfigError::ZeroMaxHeight);
        }
        if self.row_heights.header == 0 {
            return Err(ConfigError::ZeroHeaderHeight);
        }
        if self.row_heights.option == 0 {
            return Err(ConfigError::ZeroOptionHeight);
        }
        Ok(())
    }

    /// Options for the list virtualizer. The list viewport starts at `max_height` until the
    /// host reports its real size.
    pub fn virtualizer_options(&self) -> VirtualizerOptions {
        VirtualizerOptions::new(self.row_heights)
            .with_overscan(self.overscan)
            .with_virtualize_threshold(self.virtualize_threshold)
            .with_initial_rect(Some(Rect {
                main: self.max_height,
                cross: 0,
            }))
    }
}

impl Default for DropdownConfig {
    fn default() -> Self {
        Self::new()
    }
}
