#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn ptk() -> Command {
    let mut cmd = cargo_bin_cmd!("prodtracker");
    // Keep the caller's environment from redirecting the store.
    cmd.env_remove("DATABASE_URL");
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_prodtracker.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the DB and record one entry per shift on 2024-01-01
pub fn init_db_with_data(db_path: &str) {
    ptk()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    ptk()
        .args([
            "--db", db_path, "add", "120", "--date", "2024-01-01", "--time", "08:15", "--line",
            "L1", "--product", "P100", "--defects", "3",
        ])
        .assert()
        .success();

    ptk()
        .args([
            "--db", db_path, "add", "80", "--date", "2024-01-01", "--time", "16:45", "--line",
            "L2", "--operator", "Ada",
        ])
        .assert()
        .success();
}
