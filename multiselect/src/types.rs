use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

/// A selectable option.
///
/// Selection membership compares `id` only; `label`, `value` and `disabled` are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub id: String,
    /// Display text; also the text matched by search.
    pub label: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub value: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub disabled: bool,
}

impl Item {
    pub fn new(id: impl Into<String>, label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            value: value.into(),
            disabled: false,
        }
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// A labelled group of items. Groups themselves are not selectable.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Group {
    pub label: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub items: Vec<Item>,
}

impl Group {
    pub fn new(label: impl Into<String>, items: Vec<Item>) -> Self {
        Self {
            label: label.into(),
            items,
        }
    }
}

/// The input collection: either a flat list of items or a list of groups.
///
/// An empty collection is always treated as flat, whichever variant holds it.
///
/// With `feature = "serde"`, this type deserializes from a plain sequence and decides the shape
/// from its first element: the collection is grouped iff that element has an `items` field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DataSource {
    Flat(Vec<Item>),
    Grouped(Vec<Group>),
}

impl DataSource {
    pub fn is_grouped(&self) -> bool {
        matches!(self, Self::Grouped(groups) if !groups.is_empty())
    }

    /// Number of top-level entries (items in flat mode, groups in grouped mode).
    pub fn len(&self) -> usize {
        match self {
            Self::Flat(items) => items.len(),
            Self::Grouped(groups) => groups.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total number of selectable items across all groups.
    pub fn item_count(&self) -> usize {
        match self {
            Self::Flat(items) => items.len(),
            Self::Grouped(groups) => groups.iter().map(|g| g.items.len()).sum(),
        }
    }
}

impl Default for DataSource {
    fn default() -> Self {
        Self::Flat(Vec::new())
    }
}

impl From<Vec<Item>> for DataSource {
    fn from(items: Vec<Item>) -> Self {
        Self::Flat(items)
    }
}

impl From<Vec<Group>> for DataSource {
    fn from(groups: Vec<Group>) -> Self {
        Self::Grouped(groups)
    }
}

/// Identity of a row in the flattened list.
///
/// Group headers are keyed by their position in the input collection, so two groups sharing a
/// label still get distinct ids.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RowId {
    Group(usize),
    Item(String),
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Group(index) => write!(f, "group-{index}"),
            Self::Item(id) => f.write_str(id),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeaderRow {
    pub id: RowId,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemRow {
    pub id: RowId,
    pub item: Item,
}

/// One renderable line of the dropdown list.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Row {
    Header(HeaderRow),
    Item(ItemRow),
}

impl Row {
    pub fn from_item(item: &Item) -> Self {
        Self::Item(ItemRow {
            id: RowId::Item(item.id.clone()),
            item: item.clone(),
        })
    }

    pub fn id(&self) -> &RowId {
        match self {
            Self::Header(h) => &h.id,
            Self::Item(r) => &r.id,
        }
    }

    pub fn kind(&self) -> RowKind {
        match self {
            Self::Header(_) => RowKind::Header,
            Self::Item(_) => RowKind::Item,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Header(h) => &h.label,
            Self::Item(r) => &r.item.label,
        }
    }

    pub fn item(&self) -> Option<&Item> {
        match self {
            Self::Header(_) => None,
            Self::Item(r) => Some(&r.item),
        }
    }

    pub fn is_header(&self) -> bool {
        matches!(self, Self::Header(_))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RowKind {
    Header,
    Item,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Align {
    Start,
    Center,
    End,
    Auto,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    /// Size along the scroll axis (the list height).
    pub main: u32,
    pub cross: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VirtualRow {
    pub index: usize,
    /// Absolute top offset (includes `padding_start`).
    pub start: u64,
    pub size: u32,
}

impl VirtualRow {
    pub fn end(&self) -> u64 {
        self.start.saturating_add(self.size as u64)
    }
}

/// The rows to render for one scroll position, overscan included.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibleWindow {
    pub start_index: usize,
    pub end_index: usize, // inclusive
    pub rows: Vec<VirtualRow>,
}

impl VisibleWindow {
    pub fn len(&self) -> usize {
        self.end_index + 1 - self.start_index
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn contains(&self, index: usize) -> bool {
        (self.start_index..=self.end_index).contains(&index)
    }
}
