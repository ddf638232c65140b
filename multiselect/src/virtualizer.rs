use alloc::vec::Vec;
use core::cmp;

use crate::offsets::RowOffsets;
use crate::{Align, Rect, Row, RowKind, VirtualRow, VirtualizerOptions, VisibleWindow};

/// Windowed rendering over a row sequence with fixed per-kind heights.
///
/// This type is UI-agnostic:
/// - It does not hold any UI objects or rows, only their kinds and sizes.
/// - Your adapter drives it by providing the viewport rect and scroll offset.
/// - Rendering is exposed via [`Self::visible_window`] or the allocation-free
///   [`Self::for_each_virtual_row`].
#[derive(Clone, Debug)]
pub struct Virtualizer {
    options: VirtualizerOptions,
    viewport_size: u32,
    scroll_offset: u64,
    scroll_rect: Rect,

    kinds: Vec<RowKind>,
    sizes: Vec<u32>,
    offsets: RowOffsets,
}

impl Virtualizer {
    /// Creates an empty virtualizer. Call [`Self::set_rows`] to give it something to window.
    pub fn new(options: VirtualizerOptions) -> Self {
        let scroll_rect = options.initial_rect.unwrap_or_default();
        mdebug!(
            overscan = options.overscan,
            virtualize_threshold = options.virtualize_threshold,
            "Virtualizer::new"
        );
        Self {
            viewport_size: scroll_rect.main,
            scroll_offset: options.initial_offset,
            scroll_rect,
            kinds: Vec::new(),
            sizes: Vec::new(),
            offsets: RowOffsets::default(),
            options,
        }
    }

    pub fn with_rows(options: VirtualizerOptions, rows: &[Row]) -> Self {
        let mut v = Self::new(options);
        v.set_rows(rows);
        v
    }

    pub fn options(&self) -> &VirtualizerOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: VirtualizerOptions) {
        let heights_changed = self.options.row_heights != options.row_heights;
        self.options = options;
        mtrace!(
            overscan = self.options.overscan,
            virtualize_threshold = self.options.virtualize_threshold,
            "Virtualizer::set_options"
        );
        if heights_changed {
            self.rebuild_sizes();
            self.scroll_offset = self.clamp_scroll_offset(self.scroll_offset);
        }
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut VirtualizerOptions)) {
        let mut next = self.options;
        f(&mut next);
        self.set_options(next);
    }

    /// Replaces the row sequence being windowed.
    ///
    /// The scroll offset is kept, but clamped to the new content size.
    pub fn set_rows(&mut self, rows: &[Row]) {
        self.kinds.clear();
        self.kinds.extend(rows.iter().map(Row::kind));
        self.rebuild_sizes();
        self.scroll_offset = self.clamp_scroll_offset(self.scroll_offset);
    }

    fn rebuild_sizes(&mut self) {
        let heights = self.options.row_heights;
        self.sizes.clear();
        self.sizes
            .extend(self.kinds.iter().map(|&kind| heights.of_kind(kind)));
        self.offsets = RowOffsets::from_sizes(&self.sizes);
        mdebug!(
            count = self.sizes.len(),
            total = self.offsets.total(),
            "rebuild_sizes"
        );
    }

    pub fn count(&self) -> usize {
        self.sizes.len()
    }

    /// Whether windowing is active for the current row count.
    pub fn is_virtualized(&self) -> bool {
        let threshold = self.options.virtualize_threshold;
        threshold > 0 && self.count() >= threshold
    }

    pub fn overscan(&self) -> usize {
        self.options.overscan
    }

    pub fn set_overscan(&mut self, overscan: usize) {
        self.options.overscan = overscan;
    }

    pub fn set_virtualize_threshold(&mut self, virtualize_threshold: usize) {
        self.options.virtualize_threshold = virtualize_threshold;
    }

    pub fn viewport_size(&self) -> u32 {
        self.viewport_size
    }

    pub fn scroll_rect(&self) -> Rect {
        self.scroll_rect
    }

    pub fn set_scroll_rect(&mut self, rect: Rect) {
        if self.scroll_rect == rect {
            return;
        }
        self.scroll_rect = rect;
        self.viewport_size = rect.main;
    }

    pub fn set_viewport_size(&mut self, size: u32) {
        self.viewport_size = size;
        self.scroll_rect.main = size;
    }

    pub fn scroll_offset(&self) -> u64 {
        self.scroll_offset
    }

    pub fn set_scroll_offset(&mut self, offset: u64) {
        self.scroll_offset = offset;
    }

    pub fn set_scroll_offset_clamped(&mut self, offset: u64) {
        self.scroll_offset = self.clamp_scroll_offset(offset);
    }

    pub fn set_viewport_and_scroll_clamped(&mut self, viewport_size: u32, scroll_offset: u64) {
        self.set_viewport_size(viewport_size);
        self.set_scroll_offset_clamped(scroll_offset);
    }

    pub fn total_size(&self) -> u64 {
        (self.options.padding_start as u64)
            .saturating_add(self.offsets.total())
            .saturating_add(self.options.padding_end as u64)
    }

    pub fn max_scroll_offset(&self) -> u64 {
        self.total_size()
            .saturating_sub(self.viewport_size as u64)
    }

    pub fn clamp_scroll_offset(&self, offset: u64) -> u64 {
        offset.min(self.max_scroll_offset())
    }

    pub fn item_start(&self, index: usize) -> Option<u64> {
        (index < self.count()).then(|| self.start_of(index))
    }

    pub fn item_size(&self, index: usize) -> Option<u32> {
        self.sizes.get(index).copied()
    }

    pub fn item_end(&self, index: usize) -> Option<u64> {
        let start = self.item_start(index)?;
        let size = self.item_size(index)? as u64;
        Some(start.saturating_add(size))
    }

    /// Returns the index of the row at `offset`, clamped to the first/last row.
    pub fn index_at_offset(&self, offset: u64) -> Option<usize> {
        let count = self.count();
        if count == 0 {
            return None;
        }
        let ps = self.options.padding_start as u64;
        if offset < ps {
            return Some(0);
        }
        let consumed = self.offsets.lower_bound(offset - ps);
        Some(consumed.min(count - 1))
    }

    /// The rows to render at the current scroll offset and viewport size.
    ///
    /// When windowing is inactive this is every row; otherwise see
    /// [`Self::compute_visible_range`].
    pub fn visible_window(&self) -> Option<VisibleWindow> {
        let (start_index, end_index) = self.window_bounds()?;
        let mut rows = Vec::with_capacity(end_index + 1 - start_index);
        self.for_each_row_in(start_index, end_index, |row| rows.push(row));
        Some(VisibleWindow {
            start_index,
            end_index,
            rows,
        })
    }

    /// Computes the overscanned window for an arbitrary scroll offset and viewport size,
    /// ignoring the virtualization threshold.
    ///
    /// `start_index` is the first row intersecting `[scroll_offset, scroll_offset +
    /// viewport_size)` minus overscan (clamped at 0); `end_index` is the last intersecting row
    /// plus overscan (clamped at the last row). The scroll offset is clamped to
    /// [`Self::max_scroll_offset`] first.
    ///
    /// Returns `None` when there are no rows or the viewport has no height.
    pub fn compute_visible_range(
        &self,
        scroll_offset: u64,
        viewport_size: u32,
    ) -> Option<VisibleWindow> {
        let (start_index, end_index) = self.overscanned_bounds(scroll_offset, viewport_size)?;
        let mut rows = Vec::with_capacity(end_index + 1 - start_index);
        self.for_each_row_in(start_index, end_index, |row| rows.push(row));
        Some(VisibleWindow {
            start_index,
            end_index,
            rows,
        })
    }

    /// Inclusive index bounds of the current window, virtualization gate applied.
    pub fn window_bounds(&self) -> Option<(usize, usize)> {
        let count = self.count();
        if count == 0 {
            return None;
        }
        if !self.is_virtualized() {
            return Some((0, count - 1));
        }
        self.overscanned_bounds(self.scroll_offset, self.viewport_size)
    }

    /// Inclusive bounds of the rows intersecting the viewport, without overscan.
    pub fn intersecting_bounds(
        &self,
        scroll_offset: u64,
        viewport_size: u32,
    ) -> Option<(usize, usize)> {
        if self.count() == 0 || viewport_size == 0 {
            return None;
        }

        let view = viewport_size as u64;
        let max_scroll = self.total_size().saturating_sub(view);
        let visible_start = scroll_offset.min(max_scroll);
        let visible_end_inclusive = visible_start.saturating_add(view - 1);

        let first = self.index_at_offset(visible_start)?;
        let last = self.index_at_offset(visible_end_inclusive)?;
        Some((first, cmp::max(first, last)))
    }

    fn overscanned_bounds(&self, scroll_offset: u64, viewport_size: u32) -> Option<(usize, usize)> {
        let (first, last) = self.intersecting_bounds(scroll_offset, viewport_size)?;
        let overscan = self.options.overscan;
        let start = first.saturating_sub(overscan);
        let end = cmp::min(self.count() - 1, last.saturating_add(overscan));
        mtrace!(
            scroll_offset,
            viewport_size,
            first,
            last,
            start,
            end,
            "overscanned_bounds"
        );
        Some((start, end))
    }

    /// Calls `f` for every row of the current window, in index order, without allocating.
    pub fn for_each_virtual_row(&self, f: impl FnMut(VirtualRow)) {
        let Some((start, end)) = self.window_bounds() else {
            return;
        };
        self.for_each_row_in(start, end, f);
    }

    fn for_each_row_in(&self, start_index: usize, end_index: usize, mut f: impl FnMut(VirtualRow)) {
        if start_index > end_index || end_index >= self.count() {
            mwarn!(
                start_index,
                end_index,
                count = self.count(),
                "for_each_row_in: invalid bounds"
            );
            debug_assert!(
                start_index <= end_index && end_index < self.count(),
                "invalid row bounds (start={start_index}, end={end_index}, count={})",
                self.count()
            );
            return;
        }

        let mut start = self.start_of(start_index);
        for index in start_index..=end_index {
            let size = self.sizes[index];
            f(VirtualRow { index, start, size });
            start = start.saturating_add(size as u64);
        }
    }

    /// Programmatically scrolls to a row (no animation).
    ///
    /// Returns the applied (clamped) offset.
    pub fn scroll_to_index(&mut self, index: usize, align: Align) -> u64 {
        let offset = self.scroll_to_index_offset(index, align);
        self.set_scroll_offset(offset);
        offset
    }

    /// Computes the scroll offset that brings row `index` into view.
    ///
    /// With [`Align::Auto`] this is the minimal adjustment: the current offset when the row is
    /// already fully visible, otherwise the offset that aligns the row to the nearest edge.
    pub fn scroll_to_index_offset(&self, index: usize, align: Align) -> u64 {
        let count = self.count();
        if count == 0 {
            return 0;
        }
        let index = index.min(count - 1);
        let start = self.start_of(index);
        let size = self.sizes[index] as u64;
        let end = start.saturating_add(size);

        let sp_start = self.options.scroll_padding_start as u64;
        let sp_end = self.options.scroll_padding_end as u64;
        let view = self.viewport_size as u64;

        let target = match align {
            Align::Start => start.saturating_sub(sp_start),
            Align::End => end.saturating_add(sp_end).saturating_sub(view),
            Align::Center => start.saturating_add(size / 2).saturating_sub(view / 2),
            Align::Auto => {
                let cur = self.scroll_offset;
                let cur_end = cur.saturating_add(view);
                if start >= cur && end <= cur_end {
                    cur
                } else if start < cur {
                    start.saturating_sub(sp_start)
                } else {
                    end.saturating_add(sp_end).saturating_sub(view)
                }
            }
        };

        self.clamp_scroll_offset(target)
    }

    fn start_of(&self, index: usize) -> u64 {
        (self.options.padding_start as u64).saturating_add(self.offsets.start(index))
    }
}
