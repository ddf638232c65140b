// Example: drive a dropdown controller over a large flat list.
//
// Run with `--features tracing` and `RUST_LOG=multiselect=trace,multiselect_adapter=trace` to
// see the memoization and windowing logs.
use std::sync::Arc;

use multiselect::{DataSource, Item, Rect};
use multiselect_adapter::{Dropdown, DropdownConfig};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let items: Vec<Item> = (0..200)
        .map(|i| Item::new(format!("item-{i}"), format!("Option {}", i + 1), format!("item-{i}")))
        .collect();
    let config = DropdownConfig::default()
        .with_placeholder("Select options...")
        .with_virtualize_threshold(50);
    let mut dropdown = match Dropdown::try_new(Arc::new(DataSource::Flat(items)), config) {
        Ok(d) => d.with_on_change(|selection| println!("on_change: {} selected", selection.len())),
        Err(err) => {
            eprintln!("invalid config: {err}");
            return;
        }
    };

    dropdown.on_trigger_resize(280);
    dropdown.on_viewport(Rect {
        main: 320,
        cross: 280,
    });

    let mut selection = Vec::new();
    println!("trigger={:?}", dropdown.trigger_label(&selection));

    dropdown.set_query("option 1");
    if let Some(next) = dropdown.select_all(&selection) {
        selection = next;
    }
    println!("trigger={:?}", dropdown.trigger_label(&selection));

    dropdown.clear_query();
    dropdown.focus_last();
    println!(
        "active={:?} scroll_offset={} content_height={}",
        dropdown.active_index(),
        dropdown.scroll_offset(),
        dropdown.content_height()
    );
    dropdown.for_each_render_row(&selection, |row| {
        println!(
            "{:>4} @{:>5} [{}] {}{}",
            row.index,
            row.start,
            if row.checked { "x" } else { " " },
            row.row.label(),
            if row.active { " <" } else { "" }
        );
    });
}
