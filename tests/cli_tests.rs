use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{init_db_with_data, ptk, setup_test_db, temp_out};

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("init_creates");

    ptk()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_add_derives_shift_from_time() {
    let db_path = setup_test_db("add_derives_shift");
    ptk()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    ptk()
        .args(["--db", &db_path, "add", "10", "--date", "2024-03-05", "--time", "15:30"])
        .assert()
        .success()
        .stdout(contains("2024-03-05 15:30 shift B"));

    ptk()
        .args(["--db", &db_path, "add", "10", "--date", "2024-03-05", "--time", "07:00"])
        .assert()
        .success()
        .stdout(contains("shift A"));
}

#[test]
fn test_add_rejects_invalid_input() {
    let db_path = setup_test_db("add_rejects");
    ptk()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    ptk()
        .args(["--db", &db_path, "add", "-5", "--time", "08:00"])
        .assert()
        .failure()
        .stderr(contains("Invalid count -5"));

    ptk()
        .args(["--db", &db_path, "add", "5", "--time", "06:59"])
        .assert()
        .failure()
        .stderr(contains("outside defined shifts"));

    ptk()
        .args(["--db", &db_path, "add", "5", "--time", "08:00", "--shift", "a"])
        .assert()
        .failure()
        .stderr(contains("Invalid shift 'a'"));

    ptk()
        .args(["--db", &db_path, "list", "--json"])
        .assert()
        .success()
        .stdout(contains("[]"));
}

#[test]
fn test_add_accepts_explicit_shift_outside_window() {
    let db_path = setup_test_db("add_explicit_shift");
    ptk()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    ptk()
        .args([
            "--db", &db_path, "add", "4", "--date", "2024-01-02", "--time", "16:00", "--shift",
            "A",
        ])
        .assert()
        .success()
        .stdout(contains("2024-01-02 16:00 shift A"));
}

#[test]
fn test_list_filters_by_date_and_shift() {
    let db_path = setup_test_db("list_filters");
    init_db_with_data(&db_path);

    ptk()
        .args(["--db", &db_path, "list", "--shift", "B", "--json"])
        .assert()
        .success()
        .stdout(contains("\"line\": \"L2\"").and(contains("\"line\": \"L1\"").not()));

    ptk()
        .args(["--db", &db_path, "list", "--date", "2024-01-02"])
        .assert()
        .success()
        .stdout(contains("No records found matching"));

    ptk()
        .args(["--db", &db_path, "list", "--date", "01/01/2024"])
        .assert()
        .failure()
        .stderr(contains("expected YYYY-MM-DD"));
}

#[test]
fn test_export_csv_has_totals_row() {
    let db_path = setup_test_db("export_csv_totals");
    init_db_with_data(&db_path);
    let out = temp_out("export_csv_totals", "csv");

    ptk()
        .args([
            "--db", &db_path, "export", "--date", "2024-01-01", "--shift", "A", "--file", &out,
            "--format", "csv",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read csv");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(
        lines[0],
        "Date,Time,Shift,Line,Product,Operator,Good Count,Defects,Notes"
    );
    assert_eq!(lines[1], "2024-01-01,08:15,A,L1,P100,,120,3,");
    assert_eq!(lines[2], ",,,,,Totals,120,3,");
    assert_eq!(lines.len(), 3);
}

#[test]
fn test_export_xlsx_of_empty_shift() {
    let db_path = setup_test_db("export_xlsx_empty");
    init_db_with_data(&db_path);
    let out = temp_out("export_xlsx_empty", "xlsx");

    ptk()
        .args([
            "--db", &db_path, "export", "--date", "2024-02-01", "--shift", "B", "--file", &out,
        ])
        .assert()
        .success()
        .stdout(contains("header and totals only"));

    let bytes = fs::read(&out).expect("read xlsx");
    assert_eq!(&bytes[..2], b"PK");
}

#[test]
fn test_export_refuses_existing_file_without_force() {
    let db_path = setup_test_db("export_no_force");
    init_db_with_data(&db_path);
    let out = temp_out("export_no_force", "json");
    fs::write(&out, "keep me").unwrap();

    ptk()
        .args([
            "--db", &db_path, "export", "--date", "2024-01-01", "--shift", "B", "--file", &out,
            "--format", "json",
        ])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(contains("--force"));

    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");

    ptk()
        .args([
            "--db", &db_path, "export", "--date", "2024-01-01", "--shift", "B", "--file", &out,
            "--format", "json", "--force",
        ])
        .assert()
        .success();

    let json = fs::read_to_string(&out).unwrap();
    assert!(json.contains("\"total_good\": 80"));
}

#[test]
fn test_export_rejects_relative_path_and_bad_shift() {
    let db_path = setup_test_db("export_rejects");
    init_db_with_data(&db_path);

    ptk()
        .args([
            "--db", &db_path, "export", "--date", "2024-01-01", "--shift", "A", "--file",
            "relative.csv", "--format", "csv",
        ])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));

    let out = temp_out("export_bad_shift", "csv");
    ptk()
        .args([
            "--db", &db_path, "export", "--date", "2024-01-01", "--shift", "C", "--file", &out,
            "--format", "csv",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid shift"));
}

#[test]
fn test_log_records_operations() {
    let db_path = setup_test_db("log_records");
    init_db_with_data(&db_path);

    ptk()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("migration_applied").and(contains("add")));
}

#[test]
fn test_db_info_and_check() {
    let db_path = setup_test_db("db_info_check");
    init_db_with_data(&db_path);

    ptk()
        .args(["--db", &db_path, "db", "--info", "--check"])
        .assert()
        .success()
        .stdout(contains("Total records").and(contains("Integrity check passed")));
}

#[cfg(unix)]
#[test]
fn test_relative_db_is_shared_by_init_and_add() {
    let home = tempfile::tempdir().unwrap();
    let cwd = tempfile::tempdir().unwrap();

    ptk()
        .env("HOME", home.path())
        .current_dir(cwd.path())
        .args(["--db", "plant.sqlite", "--test", "init"])
        .assert()
        .success();

    ptk()
        .env("HOME", home.path())
        .current_dir(cwd.path())
        .args(["--db", "plant.sqlite", "add", "5", "--time", "08:00"])
        .assert()
        .success();

    ptk()
        .env("HOME", home.path())
        .current_dir(cwd.path())
        .args(["--db", "plant.sqlite", "list", "--json"])
        .assert()
        .success()
        .stdout(contains("\"count\": 5"));

    assert!(home.path().join(".prodtracker/plant.sqlite").exists());
    assert!(!cwd.path().join("plant.sqlite").exists());
}
