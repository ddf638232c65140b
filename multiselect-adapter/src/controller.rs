use alloc::format;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use multiselect::{
    Align, DataSource, Item, Memo, Rect, Row, Virtualizer, filter_rows, flatten, is_selected,
    normalize_query, option_items, select_all, select_none, toggle,
};

use crate::{ConfigError, DropdownConfig};

/// A callback fired with the complete new selection whenever a user action changes it.
pub type OnChangeCallback = Arc<dyn Fn(&[Item]) + Send + Sync>;

/// Filtered rows are keyed by the item generation and the normalized query.
type FilterKey = (u64, Option<String>);

/// One row to draw, positioned within the list content.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderRow<'a> {
    pub index: usize,
    /// Top offset within the list content.
    pub start: u64,
    pub size: u32,
    pub row: &'a Row,
    /// The row is an item that is in the selection.
    pub checked: bool,
    /// The row has keyboard focus.
    pub active: bool,
}

impl RenderRow<'_> {
    pub fn disabled(&self) -> bool {
        self.row.item().is_some_and(|i| i.disabled)
    }
}

/// A framework-neutral dropdown controller.
///
/// It owns the transient UI state of one dropdown (search query, keyboard focus, list scroll
/// position, measured sizes) and derives the rows to draw from it. It never stores the
/// selection: every selection-aware method takes the caller's current selection and returns
/// the new one, also publishing it through the `on_change` callback.
///
/// Adapters drive it by calling:
/// - `set_items` / `set_query` when the data or the search input changes
/// - `on_viewport` / `on_trigger_resize` / `on_scroll` when UI events occur
/// - `for_each_render_row` when drawing
#[derive(Clone)]
pub struct Dropdown {
    config: DropdownConfig,
    items: Arc<DataSource>,
    generation: u64,
    query: String,
    flattened: Memo<u64, Vec<Row>>,
    filtered: Memo<FilterKey, Vec<Row>>,
    virtualizer: Virtualizer,
    active_index: Option<usize>,
    trigger_width: u32,
    viewport_measured: bool,
    on_change: Option<OnChangeCallback>,
}

impl Dropdown {
    /// Creates a controller without validating `config`; see [`Self::try_new`].
    pub fn new(items: Arc<DataSource>, config: DropdownConfig) -> Self {
        let virtualizer = Virtualizer::new(config.virtualizer_options());
        let mut d = Self {
            config,
            items,
            generation: 0,
            query: String::new(),
            flattened: Memo::new(),
            filtered: Memo::new(),
            virtualizer,
            active_index: None,
            trigger_width: 0,
            viewport_measured: false,
            on_change: None,
        };
        d.refresh();
        d
    }

    pub fn try_new(items: Arc<DataSource>, config: DropdownConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(items, config))
    }

    pub fn with_on_change(mut self, on_change: impl Fn(&[Item]) + Send + Sync + 'static) -> Self {
        self.on_change = Some(Arc::new(on_change));
        self
    }

    /// Replaces the selection callback; `None` removes it.
    pub fn set_on_change(&mut self, on_change: Option<OnChangeCallback>) {
        self.on_change = on_change;
    }

    pub fn clear_on_change(&mut self) {
        self.on_change = None;
    }

    pub fn config(&self) -> &DropdownConfig {
        &self.config
    }

    /// Validates and applies a new configuration.
    ///
    /// A viewport reported through [`Self::on_viewport`] is kept. Until then the list height
    /// follows `max_height`. The scroll offset is clamped to the new content size.
    pub fn set_config(&mut self, config: DropdownConfig) -> Result<(), ConfigError> {
        config.validate()?;
        let next = config.virtualizer_options();
        self.virtualizer.update_options(|o| {
            o.row_heights = next.row_heights;
            o.overscan = next.overscan;
            o.virtualize_threshold = next.virtualize_threshold;
        });
        if !self.viewport_measured {
            self.virtualizer.set_viewport_size(config.max_height);
        }
        let offset = self.virtualizer.scroll_offset();
        self.virtualizer.set_scroll_offset_clamped(offset);
        adebug!(
            max_height = config.max_height,
            viewport = self.virtualizer.viewport_size(),
            "Dropdown::set_config"
        );
        self.config = config;
        Ok(())
    }

    pub fn items(&self) -> &Arc<DataSource> {
        &self.items
    }

    /// Replaces the item collection. Passing the same `Arc` again is a no-op.
    pub fn set_items(&mut self, items: Arc<DataSource>) {
        if Arc::ptr_eq(&self.items, &items) {
            return;
        }
        self.items = items;
        self.generation = self.generation.wrapping_add(1);
        if self.refresh() {
            self.active_index = None;
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Updates the search query.
    ///
    /// When the normalized query changes, the rows are filtered again, focus is cleared and the
    /// list scrolls back to the top. Edits that normalize to the same query (surrounding
    /// whitespace, case) keep both.
    pub fn set_query(&mut self, query: &str) {
        if self.query == query {
            return;
        }
        self.query.clear();
        self.query.push_str(query);
        if self.refresh() {
            self.active_index = None;
            self.virtualizer.set_scroll_offset(0);
        }
    }

    pub fn clear_query(&mut self) {
        self.set_query("");
    }

    /// Re-derives the filtered rows; returns `true` when they were recomputed.
    fn refresh(&mut self) -> bool {
        let generation = self.generation;
        let items = &self.items;
        let flattened = self
            .flattened
            .get_or_insert_with(generation, || flatten(items));

        let query = &self.query;
        let mut recomputed = false;
        let rows = self
            .filtered
            .get_or_insert_with((generation, normalize_query(query)), || {
                recomputed = true;
                filter_rows(flattened, query)
            });

        if recomputed {
            self.virtualizer.set_rows(rows);
            adebug!(
                generation,
                query = query.as_str(),
                rows = rows.len(),
                "Dropdown::refresh"
            );
        }
        recomputed
    }

    /// The filtered rows, headers included.
    pub fn rows(&self) -> &[Row] {
        self.filtered.value().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Items of the currently visible (filtered) rows.
    pub fn visible_options(&self) -> impl Iterator<Item = &Item> {
        option_items(self.rows())
    }

    pub fn is_empty(&self) -> bool {
        self.rows().is_empty()
    }

    /// Whether the list should show a "no results" indicator.
    pub fn shows_no_results(&self) -> bool {
        self.is_empty() && normalize_query(&self.query).is_some()
    }

    /// Text for the trigger button: the placeholder, or the number of selected items.
    pub fn trigger_label(&self, selection: &[Item]) -> String {
        if selection.is_empty() {
            return self.config.placeholder.clone();
        }
        format!("{} selected", selection.len())
    }

    pub fn is_selected(&self, item: &Item, selection: &[Item]) -> bool {
        is_selected(item, selection)
    }

    /// Toggles the item at row `index`.
    ///
    /// Returns `None` (and publishes nothing) for header rows, disabled items, out-of-range
    /// indexes, or while the dropdown is disabled.
    pub fn toggle_row(&self, index: usize, selection: &[Item]) -> Option<Vec<Item>> {
        let item = self.rows().get(index)?.item()?;
        self.toggle_item(item, selection)
    }

    pub fn toggle_active(&self, selection: &[Item]) -> Option<Vec<Item>> {
        self.toggle_row(self.active_index?, selection)
    }

    pub fn toggle_item(&self, item: &Item, selection: &[Item]) -> Option<Vec<Item>> {
        if self.config.disabled {
            return None;
        }
        let next = toggle(item, selection, self.config.selection_mode())?;
        self.publish(&next);
        Some(next)
    }

    /// Selects every enabled visible item.
    pub fn select_all(&self, selection: &[Item]) -> Option<Vec<Item>> {
        if self.config.disabled {
            return None;
        }
        let next = select_all(self.visible_options(), selection);
        self.publish(&next);
        Some(next)
    }

    /// Deselects every visible item.
    pub fn select_none(&self, selection: &[Item]) -> Option<Vec<Item>> {
        if self.config.disabled {
            return None;
        }
        let next = select_none(self.visible_options(), selection);
        self.publish(&next);
        Some(next)
    }

    fn publish(&self, selection: &[Item]) {
        atrace!(selected = selection.len(), "Dropdown::publish");
        if let Some(cb) = &self.on_change {
            cb(selection);
        }
    }

    pub fn virtualizer(&self) -> &Virtualizer {
        &self.virtualizer
    }

    pub fn is_virtualized(&self) -> bool {
        self.virtualizer.is_virtualized()
    }

    /// Call this when the scroll container is resized (`main` is the list height).
    pub fn on_viewport(&mut self, rect: Rect) {
        self.viewport_measured = true;
        self.virtualizer.set_scroll_rect(rect);
        let offset = self.virtualizer.scroll_offset();
        self.virtualizer.set_scroll_offset_clamped(offset);
    }

    /// Call this when the trigger button is resized; the popup matches its width.
    pub fn on_trigger_resize(&mut self, width: u32) {
        self.trigger_width = width;
    }

    /// Width for the popup, once the trigger has been measured.
    pub fn popup_width(&self) -> Option<u32> {
        (self.trigger_width > 0).then_some(self.trigger_width)
    }

    /// Call this when the UI reports a scroll offset change (e.g. user wheel/drag).
    pub fn on_scroll(&mut self, offset: u64) {
        self.virtualizer.set_scroll_offset_clamped(offset);
    }

    pub fn scroll_offset(&self) -> u64 {
        self.virtualizer.scroll_offset()
    }

    /// Height of the scroll container: `None` (size to content) when there are no rows.
    pub fn list_height(&self) -> Option<u32> {
        (!self.is_empty()).then_some(self.config.max_height)
    }

    /// Total height of all rows; the size of the virtual content container.
    pub fn content_height(&self) -> u64 {
        self.virtualizer.total_size()
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active_index
    }

    pub fn active_item(&self) -> Option<&Item> {
        self.rows().get(self.active_index?)?.item()
    }

    /// Moves keyboard focus to row `index`.
    ///
    /// Headers and disabled items cannot take focus; such indexes clear it. When windowing is
    /// active the focused row is scrolled into view.
    pub fn set_active_index(&mut self, index: Option<usize>) {
        let index = index.filter(|&i| self.rows().get(i).is_some_and(is_focusable));
        self.active_index = index;
        let Some(index) = index else {
            return;
        };
        if self.virtualizer.is_virtualized() {
            self.virtualizer.scroll_to_index(index, Align::Auto);
            atrace!(
                index,
                offset = self.virtualizer.scroll_offset(),
                "Dropdown::set_active_index"
            );
        }
    }

    pub fn focus_next(&mut self) -> Option<usize> {
        let rows = self.rows();
        let from = self.active_index.map_or(0, |i| i + 1);
        let next = (from..rows.len()).find(|&i| is_focusable(&rows[i]));
        if next.is_some() {
            self.set_active_index(next);
        }
        self.active_index
    }

    pub fn focus_prev(&mut self) -> Option<usize> {
        let rows = self.rows();
        let to = self.active_index.unwrap_or(rows.len());
        let prev = (0..to).rev().find(|&i| is_focusable(&rows[i]));
        if prev.is_some() {
            self.set_active_index(prev);
        }
        self.active_index
    }

    pub fn focus_first(&mut self) -> Option<usize> {
        let first = self.rows().iter().position(is_focusable);
        self.set_active_index(first);
        self.active_index
    }

    pub fn focus_last(&mut self) -> Option<usize> {
        let last = self.rows().iter().rposition(is_focusable);
        self.set_active_index(last);
        self.active_index
    }

    /// Calls `f` for every row to draw, in index order.
    ///
    /// With windowing active only the overscanned window is yielded, positioned absolutely.
    /// Otherwise, or while nothing intersects the viewport (e.g. before the host reports a
    /// non-zero list height), every row is yielded, stacked from the top.
    pub fn for_each_render_row<'a>(&'a self, selection: &[Item], mut f: impl FnMut(RenderRow<'a>)) {
        let rows = self.rows();
        let active = self.active_index;
        let mut emit = |index: usize, start: u64, size: u32| {
            let row = &rows[index];
            f(RenderRow {
                index,
                start,
                size,
                row,
                checked: row.item().is_some_and(|i| is_selected(i, selection)),
                active: active == Some(index),
            });
        };

        if self.virtualizer.window_bounds().is_some() {
            self.virtualizer
                .for_each_virtual_row(|vr| emit(vr.index, vr.start, vr.size));
            return;
        }

        let heights = self.config.row_heights;
        let mut start = 0u64;
        for (index, row) in rows.iter().enumerate() {
            let size = heights.of(row);
            emit(index, start, size);
            start = start.saturating_add(size as u64);
        }
    }

    /// Collects the rows to draw (see [`Self::for_each_render_row`]).
    pub fn render_rows(&self, selection: &[Item]) -> Vec<RenderRow<'_>> {
        let mut out = Vec::new();
        self.for_each_render_row(selection, |row| out.push(row));
        out
    }
}

fn is_focusable(row: &Row) -> bool {
    row.item().is_some_and(|i| !i.disabled)
}

impl fmt::Debug for Dropdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dropdown")
            .field("config", &self.config)
            .field("generation", &self.generation)
            .field("query", &self.query)
            .field("rows", &self.rows().len())
            .field("active_index", &self.active_index)
            .field("trigger_width", &self.trigger_width)
            .field("viewport_measured", &self.viewport_measured)
            .field("virtualizer", &self.virtualizer)
            .finish_non_exhaustive()
    }
}
