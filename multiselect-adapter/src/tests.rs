use crate::*;

use alloc::format;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec;
use alloc::vec::Vec;
use std::sync::Mutex;

use multiselect::{DataSource, Group, Item, Rect, Row, RowHeights};

fn item(id: &str, label: &str) -> Item {
    Item::new(id, label, id)
}

fn foods() -> Arc<DataSource> {
    Arc::new(DataSource::Grouped(vec![
        Group::new(
            "Fruits",
            vec![
                item("apple", "Apple"),
                item("banana", "Banana").with_disabled(true),
            ],
        ),
        Group::new("Vegetables", vec![item("carrot", "Carrot")]),
    ]))
}

fn large_list(n: usize) -> Arc<DataSource> {
    Arc::new(DataSource::Flat(
        (0..n)
            .map(|i| item(&format!("item-{i}"), &format!("Option {}", i + 1)))
            .collect(),
    ))
}

fn ids(items: &[Item]) -> Vec<&str> {
    items.iter().map(|i| i.id.as_str()).collect()
}

fn labels(d: &Dropdown) -> Vec<&str> {
    d.rows().iter().map(Row::label).collect()
}

fn recorder() -> (Arc<Mutex<Vec<Vec<String>>>>, impl Fn(&[Item]) + Send + Sync + 'static) {
    let log = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&log);
    let cb = move |selection: &[Item]| {
        let ids: Vec<String> = selection.iter().map(|i| i.id.clone()).collect();
        sink.lock().unwrap().push(ids);
    };
    (log, cb)
}

#[test]
fn trigger_shows_placeholder_or_count() {
    let d = Dropdown::new(foods(), DropdownConfig::default().with_placeholder("Select foods..."));
    assert_eq!(d.trigger_label(&[]), "Select foods...");
    assert_eq!(d.trigger_label(&[item("a", "A"), item("b", "B")]), "2 selected");
    assert_eq!(d.config().search_placeholder, DEFAULT_SEARCH_PLACEHOLDER);
}

#[test]
fn query_filters_rows_and_reports_no_results() {
    let mut d = Dropdown::new(foods(), DropdownConfig::default());
    assert_eq!(
        labels(&d),
        ["Fruits", "Apple", "Banana", "Vegetables", "Carrot"]
    );

    d.set_query("an");
    assert_eq!(labels(&d), ["Fruits", "Banana"]);
    assert!(!d.shows_no_results());
    assert_eq!(d.list_height(), Some(DEFAULT_MAX_HEIGHT));

    d.set_query("zzz");
    assert!(d.is_empty());
    assert!(d.shows_no_results());
    assert_eq!(d.list_height(), None);

    d.clear_query();
    assert_eq!(d.rows().len(), 5);

    let empty = Dropdown::new(Arc::new(DataSource::default()), DropdownConfig::default());
    assert!(empty.is_empty());
    assert!(!empty.shows_no_results());
}

#[test]
fn select_all_and_none_only_touch_visible_options() {
    let (log, cb) = recorder();
    let mut d = Dropdown::new(foods(), DropdownConfig::default()).with_on_change(cb);

    let selection = vec![item("carrot", "Carrot")];
    d.set_query("a");
    // Apple, Banana (disabled), Carrot all match "a".
    let all = d.select_all(&selection).unwrap();
    assert_eq!(ids(&all), ["carrot", "apple"]);

    d.set_query("apple");
    let none = d.select_none(&all).unwrap();
    assert_eq!(ids(&none), ["carrot"]);

    let published = log.lock().unwrap().clone();
    assert_eq!(published, [vec!["carrot", "apple"], vec!["carrot"]]);
}

#[test]
fn select_none_removes_selected_disabled_items() {
    let d = Dropdown::new(foods(), DropdownConfig::default());
    let selection = vec![item("banana", "Banana"), item("apple", "Apple")];
    assert!(d.select_none(&selection).unwrap().is_empty());
}

#[test]
fn disabled_dropdown_ignores_user_actions() {
    let (log, cb) = recorder();
    let d = Dropdown::new(foods(), DropdownConfig::default().with_disabled(true)).with_on_change(cb);
    assert_eq!(d.select_all(&[]), None);
    assert_eq!(d.select_none(&[]), None);
    assert_eq!(d.toggle_row(1, &[]), None);
    assert!(log.lock().unwrap().is_empty());
}

#[test]
fn toggle_row_handles_headers_disabled_items_and_modes() {
    let d = Dropdown::new(foods(), DropdownConfig::default());
    assert_eq!(d.toggle_row(0, &[]), None); // header
    assert_eq!(d.toggle_row(2, &[]), None); // disabled Banana
    assert_eq!(d.toggle_row(99, &[]), None);

    let selection = d.toggle_row(1, &[]).unwrap();
    let selection = d.toggle_row(4, &selection).unwrap();
    assert_eq!(ids(&selection), ["apple", "carrot"]);
    assert_eq!(ids(&d.toggle_row(1, &selection).unwrap()), ["carrot"]);

    let single = Dropdown::new(foods(), DropdownConfig::default().with_multiple(false));
    let selection = single.toggle_row(1, &[]).unwrap();
    let selection = single.toggle_row(4, &selection).unwrap();
    assert_eq!(ids(&selection), ["carrot"]);
    assert!(single.toggle_row(4, &selection).unwrap().is_empty());
}

#[test]
fn large_list_renders_only_the_window() {
    let mut d = Dropdown::new(
        large_list(200),
        DropdownConfig::default().with_virtualize_threshold(10),
    );
    d.on_viewport(Rect {
        main: 360,
        cross: 240,
    });
    assert!(d.is_virtualized());
    assert_eq!(d.content_height(), 200 * 36);

    let selection = vec![item("item-3", "Option 4")];
    let rows = d.render_rows(&selection);
    assert_eq!(rows.len(), 15);
    assert_eq!(rows[0].index, 0);
    assert_eq!(rows[14].index, 14);
    assert_eq!(rows[14].start, 14 * 36);
    assert!(rows[3].checked);
    assert_eq!(rows.iter().filter(|r| r.checked).count(), 1);

    d.on_scroll(3600);
    let rows = d.render_rows(&selection);
    assert_eq!(rows.first().map(|r| r.index), Some(95));
    assert_eq!(rows.last().map(|r| r.index), Some(114));
}

#[test]
fn list_viewport_defaults_to_max_height() {
    let d = Dropdown::new(large_list(200), DropdownConfig::default());
    // 320px shows rows 0..=8; five rows of overscan below.
    assert_eq!(d.render_rows(&[]).len(), 14);
}

#[test]
fn zero_threshold_renders_every_row() {
    let mut d = Dropdown::new(
        large_list(200),
        DropdownConfig::default().with_virtualize_threshold(0),
    );
    d.on_scroll(5000);
    assert!(!d.is_virtualized());
    let rows = d.render_rows(&[]);
    assert_eq!(rows.len(), 200);
    assert_eq!(rows[199].start, 199 * 36);
}

#[test]
fn zero_height_viewport_falls_back_to_full_render() {
    let mut d = Dropdown::new(
        large_list(100),
        DropdownConfig::default().with_virtualize_threshold(10),
    );
    d.on_viewport(Rect { main: 0, cross: 0 });
    assert!(d.is_virtualized());
    assert_eq!(d.render_rows(&[]).len(), 100);
}

#[test]
fn grouped_rows_render_with_header_heights() {
    let d = Dropdown::new(
        foods(),
        DropdownConfig::default()
            .with_virtualize_threshold(0)
            .with_row_heights(RowHeights::new(20, 30)),
    );
    let starts: Vec<u64> = d.render_rows(&[]).iter().map(|r| r.start).collect();
    assert_eq!(starts, [0, 20, 50, 80, 100]);
    assert!(d.render_rows(&[])[2].disabled());
}

#[test]
fn focus_skips_headers_and_disabled_items() {
    let mut d = Dropdown::new(foods(), DropdownConfig::default());
    assert_eq!(d.focus_next(), Some(1));
    assert_eq!(d.active_item().map(|i| i.id.as_str()), Some("apple"));
    assert_eq!(d.focus_next(), Some(4));
    assert_eq!(d.focus_next(), Some(4));
    assert_eq!(d.focus_prev(), Some(1));
    assert_eq!(d.focus_prev(), Some(1));
    assert_eq!(d.focus_last(), Some(4));
    assert_eq!(d.focus_first(), Some(1));

    d.set_active_index(Some(0));
    assert_eq!(d.active_index(), None);
    d.set_active_index(Some(2));
    assert_eq!(d.active_index(), None);

    d.set_active_index(Some(4));
    assert_eq!(ids(&d.toggle_active(&[]).unwrap()), ["carrot"]);
    let rows = d.render_rows(&[]);
    assert!(rows[4].active && !rows[1].active);
}

#[test]
fn focusing_a_row_scrolls_it_into_view() {
    let mut d = Dropdown::new(
        large_list(200),
        DropdownConfig::default().with_virtualize_threshold(10),
    );
    d.on_viewport(Rect {
        main: 360,
        cross: 0,
    });

    d.set_active_index(Some(20));
    assert_eq!(d.scroll_offset(), 21 * 36 - 360);

    assert_eq!(d.focus_last(), Some(199));
    assert_eq!(d.scroll_offset(), 200 * 36 - 360);
    let rows = d.render_rows(&[]);
    assert_eq!(rows.last().map(|r| (r.index, r.active)), Some((199, true)));

    assert_eq!(d.focus_first(), Some(0));
    assert_eq!(d.scroll_offset(), 0);
}

#[test]
fn query_change_resets_focus_and_scroll() {
    let mut d = Dropdown::new(
        large_list(200),
        DropdownConfig::default().with_virtualize_threshold(10),
    );
    d.on_viewport(Rect {
        main: 360,
        cross: 0,
    });
    d.on_scroll(2000);
    d.set_active_index(Some(60));

    d.set_query("Option 1");
    // "Option 1", "Option 10".."Option 19", "Option 100".."Option 199"
    assert_eq!(d.rows().len(), 111);
    assert_eq!(d.scroll_offset(), 0);
    assert_eq!(d.active_index(), None);

    d.set_active_index(Some(5));
    d.set_query("option 1 ");
    assert_eq!(d.query(), "option 1 ");
    assert_eq!(d.active_index(), Some(5));

    // Same matches, new normalized query: filtered again, so focus resets.
    d.set_query("option 1");
    assert_eq!(d.active_index(), Some(5));
    d.set_query("ption 1");
    assert_eq!(d.rows().len(), 111);
    assert_eq!(d.active_index(), None);
}

#[test]
fn set_items_refilters_with_the_current_query() {
    let mut d = Dropdown::new(foods(), DropdownConfig::default());
    d.set_query("a");
    d.focus_first();
    let same = Arc::clone(d.items());
    d.set_items(same);
    assert_eq!(d.active_index(), Some(1));

    d.set_items(Arc::new(DataSource::Grouped(vec![Group::new(
        "Fruits",
        vec![item("banana", "Banana"), item("mango", "Mango")],
    )])));
    assert_eq!(labels(&d), ["Fruits", "Banana", "Mango"]);
    assert_eq!(d.active_index(), None);
}

#[test]
fn config_is_validated() {
    assert_eq!(
        DropdownConfig::default().with_max_height(0).validate(),
        Err(ConfigError::ZeroMaxHeight)
    );
    assert_eq!(
        Dropdown::try_new(
            foods(),
            DropdownConfig::default().with_row_heights(RowHeights::new(0, 36))
        )
        .map(|_| ()),
        Err(ConfigError::ZeroHeaderHeight)
    );
    assert_eq!(
        format!("{}", ConfigError::ZeroOptionHeight),
        "option row height must be greater than zero"
    );

    let mut d = Dropdown::try_new(foods(), DropdownConfig::default()).unwrap();
    assert!(d
        .set_config(DropdownConfig::default().with_row_heights(RowHeights::new(32, 0)))
        .is_err());
    assert_eq!(d.content_height(), 32 + 36 + 36 + 32 + 36);

    d.set_config(DropdownConfig::default().with_row_heights(RowHeights::new(10, 20)))
        .unwrap();
    assert_eq!(d.content_height(), 10 + 20 + 20 + 10 + 20);
}

#[test]
fn max_height_change_resizes_an_unmeasured_viewport() {
    let mut d = Dropdown::new(
        large_list(200),
        DropdownConfig::default()
            .with_virtualize_threshold(10)
            .with_max_height(360),
    );
    assert_eq!(d.render_rows(&[]).last().map(|r| r.index), Some(14));

    d.set_config(
        DropdownConfig::default()
            .with_virtualize_threshold(10)
            .with_max_height(720),
    )
    .unwrap();
    assert_eq!(d.list_height(), Some(720));
    assert_eq!(d.virtualizer().viewport_size(), 720);
    // 20 rows in view plus five of overscan.
    assert_eq!(d.render_rows(&[]).last().map(|r| r.index), Some(24));
}

#[test]
fn set_config_keeps_a_measured_viewport_and_clamps_scroll() {
    let mut d = Dropdown::new(
        large_list(200),
        DropdownConfig::default().with_virtualize_threshold(10),
    );
    d.on_viewport(Rect {
        main: 300,
        cross: 0,
    });
    d.on_scroll(6000);
    assert_eq!(d.scroll_offset(), 6000);

    d.set_config(
        DropdownConfig::default()
            .with_virtualize_threshold(10)
            .with_max_height(600)
            .with_row_heights(RowHeights::new(10, 10)),
    )
    .unwrap();
    assert_eq!(d.virtualizer().viewport_size(), 300);
    assert_eq!(d.scroll_offset(), 200 * 10 - 300);
    assert_eq!(d.render_rows(&[]).last().map(|r| r.index), Some(199));
}

#[test]
fn on_change_can_be_replaced_and_cleared() {
    let (log, cb) = recorder();
    let mut d = Dropdown::new(foods(), DropdownConfig::default());
    d.set_on_change(Some(Arc::new(cb)));
    d.select_all(&[]);
    assert_eq!(log.lock().unwrap().len(), 1);

    d.set_on_change(None);
    d.select_all(&[]);
    d.clear_on_change();
    d.select_none(&[]);
    assert_eq!(log.lock().unwrap().len(), 1);
}

#[test]
fn popup_width_follows_trigger() {
    let mut d = Dropdown::new(foods(), DropdownConfig::default());
    assert_eq!(d.popup_width(), None);
    d.on_trigger_resize(280);
    assert_eq!(d.popup_width(), Some(280));
}

#[cfg(feature = "serde")]
#[test]
fn partial_config_fills_in_defaults() {
    let config: DropdownConfig =
        serde_json::from_str(r#"{"placeholder": "Pick...", "virtualize_threshold": 0}"#).unwrap();
    assert_eq!(config.placeholder, "Pick...");
    assert_eq!(config.virtualize_threshold, 0);
    assert_eq!(config.max_height, DEFAULT_MAX_HEIGHT);
    assert!(config.multiple);
    assert_eq!(config.row_heights, RowHeights::default());
}
