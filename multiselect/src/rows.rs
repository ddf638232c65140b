use alloc::vec::Vec;

use crate::{DataSource, HeaderRow, Item, Row, RowId};

/// Flattens an input collection into a single ordered row sequence.
///
/// Flat collections produce one item row per item. Grouped collections produce, per group, a
/// header row followed by that group's item rows; a group with no items still emits its header.
/// Nothing is filtered or deduplicated.
pub fn flatten(source: &DataSource) -> Vec<Row> {
    let rows: Vec<Row> = match source {
        DataSource::Flat(items) => items.iter().map(Row::from_item).collect(),
        DataSource::Grouped(groups) => {
            let mut rows = Vec::with_capacity(groups.len() + source.item_count());
            for (index, group) in groups.iter().enumerate() {
                rows.push(Row::Header(HeaderRow {
                    id: RowId::Group(index),
                    label: group.label.clone(),
                }));
                rows.extend(group.items.iter().map(Row::from_item));
            }
            rows
        }
    };
    mdebug!(
        grouped = source.is_grouped(),
        rows = rows.len(),
        "flatten"
    );
    rows
}

/// Iterates over the items of the item rows, in row order.
pub fn option_items(rows: &[Row]) -> impl Iterator<Item = &Item> {
    rows.iter().filter_map(Row::item)
}

/// Number of item rows (headers excluded).
pub fn option_count(rows: &[Row]) -> usize {
    rows.iter().filter(|r| !r.is_header()).count()
}
