//! A headless multi-select dropdown model.
//!
//! For a ready-made controller that tracks query, focus and scroll state, see the
//! `multiselect-adapter` crate.
//!
//! This crate focuses on the logic behind a searchable, grouped, virtualized option list:
//! flattening grouped input into rows, filtering rows by a query while keeping group headers,
//! selection set operations keyed by item id, and overscanned visible windows over fixed
//! row heights.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - the item collection and the current selection
//! - the search query
//! - viewport size and scroll offset
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod filter;
mod key;
mod memo;
mod offsets;
mod options;
mod rows;
mod selection;
#[cfg(feature = "serde")]
mod serde_impl;
mod types;
mod virtualizer;


pub use filter::{filter_rows, matches, normalize_query};
pub use memo::Memo;
pub use options::{
    DEFAULT_HEADER_HEIGHT, DEFAULT_OPTION_HEIGHT, DEFAULT_OVERSCAN, DEFAULT_VIRTUALIZE_THRESHOLD,
    RowHeights, VirtualizerOptions,
};
pub use rows::{flatten, option_count, option_items};
pub use selection::{SelectionMode, is_selected, select_all, select_none, toggle};
pub use types::{
    Align, DataSource, Group, HeaderRow, Item, ItemRow, Rect, Row, RowId, RowKind, VirtualRow,
    VisibleWindow,
};
pub use virtualizer::Virtualizer;
