use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{export_json, init_db_with_seats, sc, setup_test_db, temp_out};

#[test]
fn test_shell_session_from_stdin() {
    let db_path = setup_test_db("shell_stdin");
    init_db_with_seats(&db_path);

    sc().args(["--db", &db_path, "--plain", "shell", "-r", "2", "-c", "3"])
        .write_stdin(
            "open 1-0\nname Dana\nmemo back row\ncolor 5\nattendance その他\nsave\nshow\n",
        )
        .assert()
        .success()
        .stdout(contains("editing 1-0").and(contains("saved 1-0")).and(contains("Dana")));

    let rows = export_json(&db_path, "shell_stdin");
    assert_eq!(rows[3]["name"], "Dana");
    assert_eq!(rows[3]["memo"], "back row");
    assert_eq!(rows[3]["color"], "#3399ff");
    assert_eq!(rows[3]["attendance"], "other");
}

#[test]
fn test_shell_keeps_going_after_errors() {
    let db_path = setup_test_db("shell_errors");
    init_db_with_seats(&db_path);

    sc().args(["--db", &db_path, "shell", "-r", "2", "-c", "3"])
        .write_stdin("name Nobody\nopen 7-7\nopen 0-2\nname Eli\nsave\n")
        .assert()
        .success()
        .stdout(contains("error: No seat is open").and(contains("saved 0-2")));

    assert_eq!(export_json(&db_path, "shell_errors")[2]["name"], "Eli");
}

#[test]
fn test_shell_script_file_drag_and_draw() {
    let db_path = setup_test_db("shell_script");
    init_db_with_seats(&db_path);
    let script = temp_out("shell_script", "txt");
    fs::write(
        &script,
        "# move Aiko to the back\ndrag 0-0\ndrop 1-1\nopen 1-1\ndown 3 3\nmove 40 20\nleave\nsave\nquit\nshuffle\n",
    )
    .unwrap();

    sc().args(["--db", &db_path, "shell", "--script", &script, "-r", "2", "-c", "3"])
        .assert()
        .success()
        .stdout(contains("swapped 0-0 and 1-1").and(contains("shuffled").not()));

    let rows = export_json(&db_path, "shell_script");
    assert_eq!(rows[0]["name"], "");
    assert_eq!(rows[4]["name"], "Aiko");
    assert_eq!(rows[4]["has_sketch"], true);
}

#[test]
fn test_shell_cancel_keeps_strokes_but_not_fields() {
    let db_path = setup_test_db("shell_cancel");
    init_db_with_seats(&db_path);

    sc().args(["--db", &db_path, "shell", "-r", "2", "-c", "3"])
        .write_stdin("open 0-1\nname Changed\ndown 2 2\nmove 9 9\nup\ncancel\n")
        .assert()
        .success()
        .stdout(contains("without saving"));

    let rows = export_json(&db_path, "shell_cancel");
    assert_eq!(rows[1]["name"], "Ben");
    assert_eq!(rows[1]["has_sketch"], true);
}

#[test]
fn test_shell_missing_script_fails() {
    let db_path = setup_test_db("shell_missing_script");
    init_db_with_seats(&db_path);

    sc().args(["--db", &db_path, "shell", "--script", "/nonexistent/seatchart.txt"])
        .assert()
        .failure();
}
