// Example: overscanned visible windows over a large flat list.
use multiselect::{Align, DataSource, Item, Virtualizer, VirtualizerOptions, flatten};

fn main() {
    let items: Vec<Item> = (0..10_000)
        .map(|i| Item::new(format!("item-{i}"), format!("Option {}", i + 1), format!("{i}")))
        .collect();
    let rows = flatten(&DataSource::Flat(items));

    let mut v = Virtualizer::with_rows(
        VirtualizerOptions::default().with_virtualize_threshold(50),
        &rows,
    );
    v.set_viewport_and_scroll_clamped(320, 123_456);

    println!("total_size={}", v.total_size());
    if let Some(w) = v.visible_window() {
        println!(
            "window={}..={} first={:?}",
            w.start_index,
            w.end_index,
            w.rows.first()
        );
    }

    v.scroll_to_index(9_999, Align::Auto);
    println!("after scroll_to_index: offset={}", v.scroll_offset());
}
