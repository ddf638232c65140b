use crate::{Rect, Row, RowKind};

pub const DEFAULT_HEADER_HEIGHT: u32 = 32;
pub const DEFAULT_OPTION_HEIGHT: u32 = 36;
pub const DEFAULT_OVERSCAN: usize = 5;
pub const DEFAULT_VIRTUALIZE_THRESHOLD: usize = 50;

/// Fixed row heights, one per row kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RowHeights {
    pub header: u32,
    pub option: u32,
}

impl RowHeights {
    pub const fn new(header: u32, option: u32) -> Self {
        Self { header, option }
    }

    pub fn of_kind(&self, kind: RowKind) -> u32 {
        match kind {
            RowKind::Header => self.header,
            RowKind::Item => self.option,
        }
    }

    pub fn of(&self, row: &Row) -> u32 {
        self.of_kind(row.kind())
    }
}

impl Default for RowHeights {
    fn default() -> Self {
        Self::new(DEFAULT_HEADER_HEIGHT, DEFAULT_OPTION_HEIGHT)
    }
}

/// Configuration for [`crate::Virtualizer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct VirtualizerOptions {
    pub row_heights: RowHeights,

    /// Extra rows rendered past each edge of the viewport.
    pub overscan: usize,

    /// Minimum row count that turns windowing on. `0` disables windowing entirely, in which
    /// case every row is reported as visible.
    pub virtualize_threshold: usize,

    /// Padding before the first row.
    pub padding_start: u32,
    /// Padding after the last row.
    pub padding_end: u32,

    /// Additional padding applied when computing scroll-to offsets.
    pub scroll_padding_start: u32,
    /// Additional padding applied when computing scroll-to offsets.
    pub scroll_padding_end: u32,

    /// The initial size of the scroll container, before the host reports one.
    pub initial_rect: Option<Rect>,
    pub initial_offset: u64,
}

impl VirtualizerOptions {
    pub fn new(row_heights: RowHeights) -> Self {
        Self {
            row_heights,
            overscan: DEFAULT_OVERSCAN,
            virtualize_threshold: DEFAULT_VIRTUALIZE_THRESHOLD,
            padding_start: 0,
            padding_end: 0,
            scroll_padding_start: 0,
            scroll_padding_end: 0,
            initial_rect: None,
            initial_offset: 0,
        }
    }

    pub fn with_row_heights(mut self, row_heights: RowHeights) -> Self {
        self.row_heights = row_heights;
        self
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    pub fn with_virtualize_threshold(mut self, virtualize_threshold: usize) -> Self {
        self.virtualize_threshold = virtualize_threshold;
        self
    }

    pub fn with_padding(mut self, padding_start: u32, padding_end: u32) -> Self {
        self.padding_start = padding_start;
        self.padding_end = padding_end;
        self
    }

    pub fn with_scroll_padding(
        mut self,
        scroll_padding_start: u32,
        scroll_padding_end: u32,
    ) -> Self {
        self.scroll_padding_start = scroll_padding_start;
        self.scroll_padding_end = scroll_padding_end;
        self
    }

    pub fn with_initial_rect(mut self, initial_rect: Option<Rect>) -> Self {
        self.initial_rect = initial_rect;
        self
    }

    pub fn with_initial_offset(mut self, initial_offset: u64) -> Self {
        self.initial_offset = initial_offset;
        self
    }
}

impl Default for VirtualizerOptions {
    fn default() -> Self {
        Self::new(RowHeights::default())
    }
}
