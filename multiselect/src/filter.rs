use alloc::string::String;
use alloc::vec::Vec;

use crate::{HeaderRow, Item, Row};

/// Trims and lower-cases a search query.
///
/// Returns `None` when the query is empty or whitespace only, which means "no filter".
pub fn normalize_query(query: &str) -> Option<String> {
    let query = query.trim();
    if query.is_empty() {
        return None;
    }
    Some(query.to_lowercase())
}

/// Case-insensitive substring match of `item.label` against an already normalized query.
pub fn matches(item: &Item, normalized_query: &str) -> bool {
    item.label.to_lowercase().contains(normalized_query)
}

/// Filters a flattened row sequence by a free-text query.
///
/// Only item rows whose label contains the query survive. Each group header is re-inserted at
/// most once, immediately before the first surviving item of its group, and is dropped when no
/// item of the group survives. Relative order is preserved. An empty query returns the rows
/// unchanged.
pub fn filter_rows(rows: &[Row], query: &str) -> Vec<Row> {
    let Some(query) = normalize_query(query) else {
        return rows.to_vec();
    };

    let mut out = Vec::new();
    // The header of the group being walked, until one of its items is emitted.
    let mut pending: Option<&HeaderRow> = None;
    for row in rows {
        match row {
            Row::Header(header) => pending = Some(header),
            Row::Item(r) => {
                if !matches(&r.item, &query) {
                    continue;
                }
                if let Some(header) = pending.take() {
                    out.push(Row::Header(header.clone()));
                }
                out.push(row.clone());
            }
        }
    }
    mtrace!(
        query = query.as_str(),
        input = rows.len(),
        output = out.len(),
        "filter_rows"
    );
    out
}
