mod common;
use common::{Sandbox, dataset, read};
use mocboard::models::Level;
use mocboard::store::Store;
use std::fs;

#[test]
fn test_missing_file_loads_empty() {
    let sb = Sandbox::new();
    assert!(sb.store().load().is_empty());
}

#[test]
fn test_corrupt_file_loads_empty() {
    let sb = Sandbox::new();
    fs::write(&sb.data, "this,is\nnot,\"our schema").unwrap();
    assert!(sb.store().load().is_empty());
}

#[test]
fn test_bad_numeric_field_loads_empty() {
    let sb = Sandbox::new();
    fs::write(
        &sb.data,
        "staff_name,description,hours_spent,moc_count,month,level\nAlice,Valve,lots,3,May,5\n",
    )
    .unwrap();
    assert!(sb.store().load().is_empty());
}

#[test]
fn test_save_then_load_round_trip() {
    let sb = Sandbox::new();
    let ds = dataset(&[
        ("Alice", "Valve swap", 10.0, 3, "March"),
        ("Bob", "Pump, north bay", 22.5, 6, "April"),
        ("Alice", "Relief \"valve\" test", 0.0, 1, "April"),
    ]);

    sb.store().save(&ds).unwrap();
    let loaded = sb.store().load();

    assert_eq!(loaded, ds);
}

#[test]
fn test_file_has_fixed_header() {
    let sb = Sandbox::new();
    sb.seed(&[("Alice", "Valve swap", 10.0, 3, "March")]);

    let content = read(sb.store().path());
    let mut lines = content.lines();
    assert_eq!(
        lines.next(),
        Some("staff_name,description,hours_spent,moc_count,month,level")
    );
    assert_eq!(lines.next(), Some("Alice,Valve swap,10,3,March,5"));
}

#[test]
fn test_stored_level_is_recomputed_on_load() {
    let sb = Sandbox::new();
    fs::write(
        &sb.data,
        "staff_name,description,hours_spent,moc_count,month,level\n\
         Alice,Valve,25,6,May,3\n\
         Bob,Pump,1,1,May,0\n",
    )
    .unwrap();

    let ds = sb.store().load();
    assert_eq!(ds.len(), 2);
    assert_eq!(ds[0].level, Level::Seven);
    assert_eq!(ds[1].level, Level::Three);
}

#[test]
fn test_save_overwrites_previous_content() {
    let sb = Sandbox::new();
    sb.seed(&[
        ("Alice", "A", 1.0, 1, "May"),
        ("Bob", "B", 1.0, 1, "May"),
    ]);
    sb.seed(&[("Carol", "C", 1.0, 1, "June")]);

    let ds = sb.store().load();
    assert_eq!(ds.len(), 1);
    assert_eq!(ds[0].staff_name, "Carol");
}

#[test]
fn test_init_creates_header_only_file_once() {
    let sb = Sandbox::new();
    let store = Store::new(sb.path("nested/dir/data.csv"));

    assert!(store.init().unwrap());
    assert!(store.load().is_empty());
    assert!(read(store.path()).starts_with("staff_name,description"));

    assert!(!store.init().unwrap());
}
