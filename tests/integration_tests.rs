use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{PASS, Sandbox, USER, read};
use mocboard::models::Level;

#[test]
fn test_init_creates_empty_dataset() {
    let sb = Sandbox::new();

    sb.cmd()
        .args(["--test", "init"])
        .assert()
        .success()
        .stdout(contains("Dataset created"));

    assert_eq!(
        read(sb.store().path()).trim_end(),
        "staff_name,description,hours_spent,moc_count,month,level"
    );
}

#[test]
fn test_wrong_credentials_halt_session() {
    let sb = Sandbox::new();

    sb.cmd()
        .args(["--user", USER, "--password", "nope", "list"])
        .assert()
        .failure()
        .stderr(contains("Invalid credentials."));

    sb.cmd()
        .args(["add", "--name", "Alice", "--desc", "Valve swap"])
        .assert()
        .failure()
        .stderr(contains("Invalid credentials."));

    assert!(sb.store().load().is_empty());
}

#[test]
fn test_credentials_from_environment() {
    let sb = Sandbox::new();

    sb.cmd()
        .env("MOCBOARD_USER", USER)
        .env("MOCBOARD_PASSWORD", PASS)
        .arg("list")
        .assert()
        .success()
        .stdout(contains("No data found."));
}

#[test]
fn test_add_entries_and_classify() {
    let sb = Sandbox::new();

    sb.session()
        .args([
            "add", "--name", "Alice", "--desc", "Valve swap", "--hours", "10", "--count", "3",
        ])
        .assert()
        .success()
        .stdout(contains("Entry added for Alice (Level 5"));

    sb.session()
        .args([
            "add", "--name", "Bob", "--desc", "Pump overhaul", "--hours", "25", "--count", "6",
        ])
        .assert()
        .success();

    let ds = sb.store().load();
    assert_eq!(ds.len(), 2);
    assert_eq!(ds[0].level, Level::Five);
    assert_eq!(ds[1].level, Level::Seven);
    assert!(!ds[0].month.is_empty());
}

#[test]
fn test_add_defaults_to_one_hour_one_moc() {
    let sb = Sandbox::new();

    sb.session()
        .args(["add", "--name", "Carol", "--desc", "Gasket"])
        .assert()
        .success();

    let ds = sb.store().load();
    assert_eq!(ds.len(), 1);
    assert_eq!(ds[0].hours_spent, 1.0);
    assert_eq!(ds[0].moc_count, 1);
    assert_eq!(ds[0].level, Level::Three);
}

#[test]
fn test_blank_name_adds_nothing() {
    let sb = Sandbox::new();
    sb.seed(&[("Alice", "Valve swap", 10.0, 3, "March")]);
    let before = read(sb.store().path());

    sb.session()
        .args(["add", "--name", "   ", "--desc", "Valve swap", "--hours", "5"])
        .assert()
        .success()
        .stdout(contains("nothing recorded"));

    sb.session()
        .args(["add", "--name", "Bob", "--desc", ""])
        .assert()
        .success();

    assert_eq!(sb.store().load().len(), 1);
    assert_eq!(read(sb.store().path()), before);
}

#[test]
fn test_add_rejects_invalid_numbers() {
    let sb = Sandbox::new();

    sb.session()
        .args(["add", "--name", "Alice", "--desc", "X", "--count", "0"])
        .assert()
        .failure();

    sb.session()
        .args(["add", "--name", "Alice", "--desc", "X", "--hours=-2"])
        .assert()
        .failure()
        .stderr(contains("Invalid hours value"));

    assert!(sb.store().load().is_empty());
}

#[test]
fn test_add_to_corrupt_file_starts_fresh() {
    let sb = Sandbox::new();
    std::fs::write(&sb.data, "garbage without schema\n\u{0}\u{1}").unwrap();

    sb.session()
        .args(["add", "--name", "Alice", "--desc", "Valve swap"])
        .assert()
        .success();

    let ds = sb.store().load();
    assert_eq!(ds.len(), 1);
    assert_eq!(ds[0].staff_name, "Alice");
}

#[test]
fn test_list_with_filters_and_totals() {
    let sb = Sandbox::new();
    sb.seed(&[
        ("Alice", "Valve swap", 10.0, 3, "March"),
        ("Bob", "Pump overhaul", 25.0, 6, "April"),
        ("Alice", "Pump check", 12.0, 2, "April"),
    ]);

    sb.session()
        .arg("list")
        .assert()
        .success()
        .stdout(contains("Valve swap").and(contains("Pump overhaul")))
        .stdout(contains("Total MOCs:").and(contains(" 11 ")))
        .stdout(contains("Unique Staff:"));

    sb.session()
        .args(["list", "--staff", "Alice", "--month", "April"])
        .assert()
        .success()
        .stdout(contains("Pump check"))
        .stdout(contains("Valve swap").not())
        .stdout(contains("Pump overhaul").not());

    sb.session()
        .args(["list", "--level", "7"])
        .assert()
        .success()
        .stdout(contains("Bob"))
        .stdout(contains("Alice").not());

    sb.session()
        .args(["list", "--staff", "Nobody"])
        .assert()
        .success()
        .stdout(contains("No records match"));
}

#[test]
fn test_list_rejects_unknown_level() {
    let sb = Sandbox::new();

    sb.session()
        .args(["list", "--level", "4"])
        .assert()
        .failure()
        .stderr(contains("invalid level"));
}

#[test]
fn test_summary_groups_by_staff_and_level() {
    let sb = Sandbox::new();
    sb.seed(&[
        ("Alice", "Valve swap", 10.0, 3, "March"),
        ("Alice", "Pump check", 12.0, 2, "March"),
    ]);

    let out = sb.session().arg("summary").output().unwrap();
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);

    let alice_rows: Vec<&str> = stdout.lines().filter(|l| l.starts_with("Alice")).collect();
    assert_eq!(alice_rows.len(), 2);
    assert!(alice_rows[0].split_whitespace().eq(["Alice", "3", "2", "12"]));
    assert!(alice_rows[1].split_whitespace().eq(["Alice", "5", "3", "10"]));
}

#[test]
fn test_promote_lists_only_summed_candidates() {
    let sb = Sandbox::new();
    sb.seed(&[
        ("Alice", "Valve swap", 10.0, 3, "March"),
        ("Alice", "Pump check", 12.0, 2, "March"),
    ]);

    sb.session()
        .arg("promote")
        .assert()
        .success()
        .stdout(contains("No current promotion candidates."));

    sb.seed(&[
        ("Dave", "A", 12.0, 2, "May"),
        ("Dave", "B", 8.0, 3, "May"),
        ("Erin", "C", 40.0, 8, "May"),
    ]);

    sb.session()
        .arg("promote")
        .assert()
        .success()
        .stdout(contains("eligible for promotion"))
        .stdout(contains("Dave"))
        .stdout(contains("Erin").not());
}

#[test]
fn test_chart_output() {
    let sb = Sandbox::new();
    sb.seed(&[
        ("Alice", "Valve swap", 10.0, 3, "March"),
        ("Bob", "Valve swap", 30.0, 1, "March"),
        ("Bob", "Pump check", 2.0, 1, "March"),
    ]);

    sb.session()
        .arg("chart")
        .assert()
        .success()
        .stdout(contains("Hours by Staff"))
        .stdout(contains("MOC Distribution"))
        .stdout(contains("66.7%"))
        .stdout(contains("33.3%"))
        .stdout(contains("32"));
}
