use predicates::str::contains;
use std::fs;

mod common;
use common::{init_db_with_seats, sc, setup_test_db, temp_out};

#[test]
fn test_export_csv() {
    let db_path = setup_test_db("export_csv");
    init_db_with_seats(&db_path);
    let out = temp_out("export_csv", "csv");

    sc().args(["--db", &db_path, "export", "--format", "csv", "--file", &out, "-r", "2", "-c", "3"])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("csv written");
    let mut lines = content.lines();
    assert_eq!(
        lines.next(),
        Some("position,row,col,name,memo,color,attendance,has_sketch")
    );
    assert_eq!(lines.next(), Some("0-0,0,0,Aiko,,#f0f0f0,present,false"));
    assert_eq!(content.lines().count(), 7);
}

#[test]
fn test_export_json() {
    let db_path = setup_test_db("export_json");
    init_db_with_seats(&db_path);
    let out = temp_out("export_json", "json");

    sc().args(["--db", &db_path, "export", "--format", "json", "--file", &out, "-r", "2", "-c", "3"])
        .assert()
        .success()
        .stdout(contains("JSON export completed"));

    let content = fs::read_to_string(&out).expect("json written");
    let rows: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(rows.as_array().unwrap().len(), 6);
    assert_eq!(rows[1]["position"], "0-1");
    assert_eq!(rows[1]["name"], "Ben");
    assert_eq!(rows[5]["name"], "Chloe");
}

#[test]
fn test_export_existing_file_needs_force() {
    let db_path = setup_test_db("export_force");
    init_db_with_seats(&db_path);
    let out = temp_out("export_force", "csv");
    fs::write(&out, "keep me").unwrap();

    sc().args(["--db", &db_path, "export", "--file", &out, "-r", "2", "-c", "3"])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("cancelled"));
    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");

    sc().args(["--db", &db_path, "export", "--file", &out, "--force", "-r", "2", "-c", "3"])
        .assert()
        .success();
    assert!(fs::read_to_string(&out).unwrap().starts_with("position,"));
}
