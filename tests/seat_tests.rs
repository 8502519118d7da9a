use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{export_json, init_db_with_seats, sc, setup_test_db};

#[test]
fn test_init_creates_schema() {
    let db_path = setup_test_db("init_creates_schema");

    sc().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    sc().args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("migration_applied").and(contains("init")));
}

#[test]
fn test_edit_then_show() {
    let db_path = setup_test_db("edit_then_show");
    init_db_with_seats(&db_path);

    sc().args([
        "--db",
        &db_path,
        "edit",
        "0-1",
        "--memo",
        "window seat",
        "--color",
        "#FF4D4D",
        "--attendance",
        "absent",
        "-r",
        "2",
        "-c",
        "3",
    ])
    .assert()
    .success()
    .stdout(contains("Seat 0-1 saved"));

    sc().args(["--db", &db_path, "--plain", "show", "-r", "2", "-c", "3"])
        .assert()
        .success()
        .stdout(contains("Aiko").and(contains("Ben ")).and(contains("(1-0)")));

    sc().args(["--db", &db_path, "--plain", "show", "--details", "-r", "2", "-c", "3"])
        .assert()
        .success()
        .stdout(
            contains("window seat")
                .and(contains("#ff4d4d"))
                .and(contains("absent")),
        );
}

#[test]
fn test_edit_rejects_bad_input() {
    let db_path = setup_test_db("edit_rejects_bad_input");
    init_db_with_seats(&db_path);

    sc().args(["--db", &db_path, "edit", "0-0", "--color", "red", "-r", "2", "-c", "3"])
        .assert()
        .failure()
        .stderr(contains("Invalid color"));

    sc().args(["--db", &db_path, "edit", "4-4", "--name", "X", "-r", "2", "-c", "3"])
        .assert()
        .failure()
        .stderr(contains("4-4"));

    sc().args(["--db", &db_path, "edit", "0-0", "--attendance", "late", "-r", "2", "-c", "3"])
        .assert()
        .failure();

    // Nothing was written by the failed attempts.
    let rows = export_json(&db_path, "edit_rejects_bad_input");
    assert_eq!(rows[0]["name"], "Aiko");
    assert_eq!(rows[0]["color"], "#f0f0f0");
}

#[test]
fn test_swap_twice_restores() {
    let db_path = setup_test_db("swap_twice_restores");
    init_db_with_seats(&db_path);
    sc().args(["--db", &db_path, "edit", "0-0", "--attendance", "other", "-r", "2", "-c", "3"])
        .assert()
        .success();

    let before = export_json(&db_path, "swap_twice_before");

    sc().args(["--db", &db_path, "swap", "0-0", "1-2", "-r", "2", "-c", "3"])
        .assert()
        .success()
        .stdout(contains("swapped"));

    let swapped = export_json(&db_path, "swap_twice_mid");
    assert_eq!(swapped[0]["name"], "Chloe");
    assert_eq!(swapped[5]["name"], "Aiko");
    // Attendance stays with the seat.
    assert_eq!(swapped[0]["attendance"], "other");

    sc().args(["--db", &db_path, "swap", "1-2", "0-0", "-r", "2", "-c", "3"])
        .assert()
        .success();

    assert_eq!(export_json(&db_path, "swap_twice_after"), before);
}

#[test]
fn test_swap_with_itself_is_a_noop() {
    let db_path = setup_test_db("swap_with_itself");
    init_db_with_seats(&db_path);

    sc().args(["--db", &db_path, "swap", "0-1", "0-1", "-r", "2", "-c", "3"])
        .assert()
        .success()
        .stdout(contains("stays"));
}

#[test]
fn test_shuffle_with_seed_is_reproducible() {
    let a = setup_test_db("shuffle_seed_a");
    let b = setup_test_db("shuffle_seed_b");
    init_db_with_seats(&a);
    init_db_with_seats(&b);

    for db in [&a, &b] {
        sc().args(["--db", db, "shuffle", "--seed", "42", "-r", "2", "-c", "3"])
            .assert()
            .success()
            .stdout(contains("Shuffled 6 seats"));
    }

    let rows_a = export_json(&a, "shuffle_seed_a");
    assert_eq!(rows_a, export_json(&b, "shuffle_seed_b"));

    let mut names: Vec<String> = rows_a
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["name"].as_str().unwrap().to_string())
        .filter(|n| !n.is_empty())
        .collect();
    names.sort();
    assert_eq!(names, ["Aiko", "Ben", "Chloe"]);
}

#[test]
fn test_reset_is_scoped_to_namespace() {
    let db_path = setup_test_db("reset_scoped");
    init_db_with_seats(&db_path);

    for ns in ["seat1", "seat10"] {
        sc().args([
            "--db", &db_path, "-n", ns, "edit", "0-0", "--name", ns, "-r", "2", "-c", "3",
        ])
        .assert()
        .success();
    }

    sc().args(["--db", &db_path, "-n", "seat1", "reset", "--yes", "-r", "2", "-c", "3"])
        .assert()
        .success()
        .stdout(contains("Removed"));

    sc().args(["--db", &db_path, "-n", "seat1", "--plain", "show", "-r", "2", "-c", "3"])
        .assert()
        .success()
        .stdout(contains("[(0-0)"));

    sc().args(["--db", &db_path, "-n", "seat10", "--plain", "show", "-r", "2", "-c", "3"])
        .assert()
        .success()
        .stdout(contains("[seat10"));
}

#[test]
fn test_reset_declined_keeps_data() {
    let db_path = setup_test_db("reset_declined");
    init_db_with_seats(&db_path);

    sc().args(["--db", &db_path, "reset", "-r", "2", "-c", "3"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("cancelled"));

    assert_eq!(export_json(&db_path, "reset_declined")[0]["name"], "Aiko");
}

#[test]
fn test_orphaned_seats_come_back() {
    let db_path = setup_test_db("orphaned_seats");
    init_db_with_seats(&db_path);

    sc().args(["--db", &db_path, "--plain", "show", "-r", "1", "-c", "1"])
        .assert()
        .success()
        .stdout(contains("Aiko").and(contains("Chloe").not()));

    sc().args(["--db", &db_path, "--plain", "show", "-r", "2", "-c", "3"])
        .assert()
        .success()
        .stdout(contains("Chloe"));
}

#[test]
fn test_invalid_dimensions_give_an_empty_grid() {
    let db_path = setup_test_db("invalid_dimensions");
    init_db_with_seats(&db_path);

    sc().args(["--db", &db_path, "--plain", "show", "-r", "abc", "-c", "3"])
        .assert()
        .success()
        .stdout(contains("(empty grid)"));
}

#[test]
fn test_invalid_namespace_is_rejected() {
    let db_path = setup_test_db("invalid_namespace");
    init_db_with_seats(&db_path);

    sc().args(["--db", &db_path, "-n", "seat-1", "show"])
        .assert()
        .failure();
}
