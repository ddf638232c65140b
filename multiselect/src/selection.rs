use alloc::vec::Vec;

use crate::Item;
use crate::key::IdSet;

/// How a single-item toggle updates the selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SelectionMode {
    Single,
    #[default]
    Multiple,
}

impl SelectionMode {
    pub fn from_multiple(multiple: bool) -> Self {
        if multiple {
            Self::Multiple
        } else {
            Self::Single
        }
    }
}

/// Returns `true` if an item with the same id is in `selection`.
pub fn is_selected(item: &Item, selection: &[Item]) -> bool {
    selection.iter().any(|s| s.id == item.id)
}

/// Adds every enabled visible item that is not yet selected.
///
/// The existing selection keeps its order; new items are appended in visible order. Disabled
/// items are never added, and no id is added twice.
pub fn select_all<'a>(
    visible: impl IntoIterator<Item = &'a Item>,
    selection: &'a [Item],
) -> Vec<Item> {
    let mut present: IdSet<'a> = selection.iter().map(|s| s.id.as_str()).collect();
    let mut out = selection.to_vec();
    for item in visible {
        if item.disabled {
            continue;
        }
        if present.insert(item.id.as_str()) {
            out.push(item.clone());
        }
    }
    mtrace!(
        before = selection.len(),
        after = out.len(),
        "select_all"
    );
    out
}

/// Removes every visible item from the selection, disabled ones included.
pub fn select_none<'a>(
    visible: impl IntoIterator<Item = &'a Item>,
    selection: &[Item],
) -> Vec<Item> {
    let visible: IdSet<'a> = visible.into_iter().map(|v| v.id.as_str()).collect();
    let out: Vec<Item> = selection
        .iter()
        .filter(|s| !visible.contains(s.id.as_str()))
        .cloned()
        .collect();
    mtrace!(
        before = selection.len(),
        after = out.len(),
        "select_none"
    );
    out
}

/// Applies a user-initiated toggle of one item.
///
/// Returns `None` when the item is disabled (the selection is left as is).
pub fn toggle(item: &Item, selection: &[Item], mode: SelectionMode) -> Option<Vec<Item>> {
    if item.disabled {
        return None;
    }
    let selected = is_selected(item, selection);
    let next = match mode {
        SelectionMode::Multiple if selected => selection
            .iter()
            .filter(|s| s.id != item.id)
            .cloned()
            .collect(),
        SelectionMode::Multiple => {
            let mut next = selection.to_vec();
            next.push(item.clone());
            next
        }
        SelectionMode::Single if selected => Vec::new(),
        SelectionMode::Single => alloc::vec![item.clone()],
    };
    Some(next)
}
