//! Adapter utilities for the `multiselect` crate.
//!
//! The `multiselect` crate is UI-agnostic and focuses on the row, filter, selection and
//! windowing logic. This crate wraps it in a small, framework-neutral [`Dropdown`] controller
//! that holds the transient state of one dropdown:
//!
//! - the search query, with memoized flatten/filter passes
//! - keyboard focus over the visible options
//! - list viewport, scroll position and the trigger width used to size the popup
//! - selection change notifications (the selection itself stays with the caller)
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod config;
mod controller;
mod error;

#[cfg(test)]
mod tests;

pub use config::{
    DEFAULT_MAX_HEIGHT, DEFAULT_PLACEHOLDER, DEFAULT_SEARCH_PLACEHOLDER, DropdownConfig,
};
pub use controller::{Dropdown, OnChangeCallback, RenderRow};
pub use error::ConfigError;
