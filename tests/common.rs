#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// The binary with colors off, so output can be matched literally.
pub fn sc() -> Command {
    let mut cmd = cargo_bin_cmd!("seatchart");
    cmd.env("NO_COLOR", "1");
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_seatchart.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_seatchart_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the DB and name a few seats of a 2×3 grid.
pub fn init_db_with_seats(db_path: &str) {
    sc().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    for (pos, name) in [("0-0", "Aiko"), ("0-1", "Ben"), ("1-2", "Chloe")] {
        sc().args([
            "--db", db_path, "edit", pos, "--name", name, "--rows", "2", "--cols", "3",
        ])
        .assert()
        .success();
    }
}

/// Export the 2×3 grid as parsed JSON.
pub fn export_json(db_path: &str, name: &str) -> serde_json::Value {
    let out = temp_out(name, "json");
    sc().args([
        "--db", db_path, "export", "--format", "json", "--file", &out, "--force", "-r", "2",
        "-c", "3",
    ])
    .assert()
    .success();
    let content = fs::read_to_string(&out).expect("read export");
    serde_json::from_str(&content).expect("valid json")
}
