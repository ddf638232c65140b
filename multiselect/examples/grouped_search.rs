// Example: flatten a grouped collection, filter it, and select what is visible.
use multiselect::{
    DataSource, Group, Item, filter_rows, flatten, option_items, select_all, select_none,
};

fn main() {
    let source = DataSource::Grouped(vec![
        Group::new(
            "Fruits",
            vec![
                Item::new("apple", "Apple", "apple"),
                Item::new("banana", "Banana", "banana"),
                Item::new("cherry", "Cherry", "cherry").with_disabled(true),
            ],
        ),
        Group::new(
            "Vegetables",
            vec![
                Item::new("carrot", "Carrot", "carrot"),
                Item::new("dill", "Dill", "dill"),
            ],
        ),
    ]);

    let rows = flatten(&source);
    println!("rows={}", rows.len());

    for query in ["", "an", "r"] {
        let filtered = filter_rows(&rows, query);
        let labels: Vec<&str> = filtered.iter().map(|r| r.label()).collect();
        println!("query={query:?} rows={labels:?}");
    }

    let visible = filter_rows(&rows, "r");
    let selection = select_all(option_items(&visible), &[]);
    println!(
        "select_all -> {:?}",
        selection.iter().map(|i| &i.id).collect::<Vec<_>>()
    );
    let selection = select_none(option_items(&visible), &selection);
    println!("select_none -> {} selected", selection.len());
}
