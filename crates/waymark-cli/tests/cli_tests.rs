use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color and a scratch database
fn wm_cmd(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("wm").expect("Failed to find wm binary");
    cmd.env_remove("WAYMARK_LOCATION")
        .arg("--no-color")
        .arg("--database-file")
        .arg(temp_dir.path().join("cli_test.db"));
    cmd
}

fn add_place(temp_dir: &TempDir, name: &str, lat: &str, lon: &str, alert: bool) {
    let mut cmd = wm_cmd(temp_dir);
    cmd.args(["place", "add", name, "--lat", lat, "--lon", lon]);
    if alert {
        cmd.arg("--alert");
    }
    cmd.assert().success();
}

#[test]
fn test_cli_add_place_success() {
    let temp_dir = create_cli_test_environment();

    wm_cmd(&temp_dir)
        .args(["place", "add", "Home", "--lat", "52.52", "--lon", "13.405"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved place with ID: 1"))
        .stdout(predicate::str::contains("# 1. 📍 Home"))
        .stdout(predicate::str::contains("- Type: normal"));
}

#[test]
fn test_cli_add_alert_with_negative_coordinates() {
    let temp_dir = create_cli_test_environment();

    wm_cmd(&temp_dir)
        .args([
            "place", "add", "Reef", "--lat", "-16.5", "--lon", "-145.7", "--alert",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("🚨 Reef"))
        .stdout(predicate::str::contains("-16.500000, -145.700000"));
}

#[test]
fn test_cli_add_rejects_blank_name() {
    let temp_dir = create_cli_test_environment();

    wm_cmd(&temp_dir)
        .args(["place", "add", "   ", "--lat", "1", "--lon", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must not be empty"));

    wm_cmd(&temp_dir)
        .args(["place", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No favorite places yet."));
}

#[test]
fn test_cli_add_rejects_out_of_range_latitude() {
    let temp_dir = create_cli_test_environment();

    wm_cmd(&temp_dir)
        .args(["place", "add", "Nowhere", "--lat", "91", "--lon", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("latitude"));
}

#[test]
fn test_cli_list_places_in_insertion_order() {
    let temp_dir = create_cli_test_environment();
    add_place(&temp_dir, "Zoo", "1", "1", false);
    add_place(&temp_dir, "Airport", "2", "2", true);

    let output = wm_cmd(&temp_dir)
        .args(["place", "ls"])
        .output()
        .expect("Failed to run wm");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let zoo = stdout.find("Zoo").expect("Zoo listed");
    let airport = stdout.find("Airport").expect("Airport listed");
    assert!(zoo < airport);
}

#[test]
fn test_cli_list_json() {
    let temp_dir = create_cli_test_environment();
    add_place(&temp_dir, "Pier", "-33.86", "151.21", true);

    let output = wm_cmd(&temp_dir)
        .args(["place", "list", "--json"])
        .output()
        .expect("Failed to run wm");
    assert!(output.status.success());

    let places: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Output should be JSON");
    assert_eq!(places[0]["id"], 1);
    assert_eq!(places[0]["name"], "Pier");
    assert_eq!(places[0]["latitude"], -33.86);
    assert_eq!(places[0]["is_alert"], true);
}

#[test]
fn test_cli_no_subcommand_lists_places() {
    let temp_dir = create_cli_test_environment();
    add_place(&temp_dir, "Library", "3", "4", false);

    wm_cmd(&temp_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Library"));
}

#[test]
fn test_cli_show_place() {
    let temp_dir = create_cli_test_environment();
    add_place(&temp_dir, "Museum", "5", "6", false);

    wm_cmd(&temp_dir)
        .args(["place", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# 1. 📍 Museum"));

    wm_cmd(&temp_dir)
        .args(["place", "show", "42"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Place with ID 42 not found"));
}

#[test]
fn test_cli_delete_place() {
    let temp_dir = create_cli_test_environment();
    add_place(&temp_dir, "Old Spot", "7", "8", false);

    wm_cmd(&temp_dir)
        .args(["place", "rm", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted place 'Old Spot' (ID: 1)"));

    wm_cmd(&temp_dir)
        .args(["place", "delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("OK: Place 1 not found, nothing deleted."));
}

#[test]
fn test_cli_markers_follow_zoom() {
    let temp_dir = create_cli_test_environment();
    add_place(&temp_dir, "Home", "10", "20", false);
    add_place(&temp_dir, "Danger", "11", "21", true);

    wm_cmd(&temp_dir)
        .args(["markers"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Markers at zoom 12"))
        .stdout(predicate::str::contains("place:1: normal icon `red_marker`"))
        .stdout(predicate::str::contains("place:2: alert icon `alert_marker`"))
        .stdout(predicate::str::contains("(size 0.55)"));

    wm_cmd(&temp_dir)
        .args(["markers", "--zoom", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(size 0.2)"));
}

#[test]
fn test_cli_markers_rejects_zoom_out_of_range() {
    let temp_dir = create_cli_test_environment();

    wm_cmd(&temp_dir)
        .args(["markers", "--zoom", "30"])
        .assert()
        .failure();
}

#[test]
fn test_cli_session_adds_alert_place() {
    let temp_dir = create_cli_test_environment();

    wm_cmd(&temp_dir)
        .arg("session")
        .write_stdin("tap 10 20\nalert\nname Park\nstate\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("+ pending: alert icon"))
        .stdout(predicate::str::contains("- pending"))
        .stdout(predicate::str::contains("Saved place 'Park' (ID: 1)"))
        .stdout(predicate::str::contains("- Dialog: idle"));

    wm_cmd(&temp_dir)
        .args(["place", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("🚨 Park"))
        .stdout(predicate::str::contains("- Type: alert"));
}

#[test]
fn test_cli_session_empty_name_keeps_dialog_open() {
    let temp_dir = create_cli_test_environment();

    wm_cmd(&temp_dir)
        .arg("session")
        .write_stdin("tap 1 2\nnormal\nname\nstate\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: Invalid input for field 'name'"))
        .stdout(predicate::str::contains("- Dialog: naming normal point"));
}

#[test]
fn test_cli_session_camera_commands() {
    let temp_dir = create_cli_test_environment();
    add_place(&temp_dir, "Tower", "48.8584", "2.2945", false);

    wm_cmd(&temp_dir)
        .args(["--location", "48.85,2.35", "session"])
        .write_stdin("zoom-in\nzoom 50\nrecenter\nstyle\ngoto 1\nmarker 1\nbogus\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Zoom 13"))
        .stdout(predicate::str::contains("Zoom 22"))
        .stdout(predicate::str::contains("Centered on 48.850000, 2.350000"))
        .stdout(predicate::str::contains("Style: satellite"))
        .stdout(predicate::str::contains("Centered on 'Tower'"))
        .stdout(predicate::str::contains("📍 Tower"))
        .stdout(predicate::str::contains("unknown command 'bogus'"));
}

#[test]
fn test_cli_session_without_location() {
    let temp_dir = create_cli_test_environment();

    wm_cmd(&temp_dir)
        .arg("session")
        .write_stdin("recenter\ndelete 9\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Location unavailable"))
        .stdout(predicate::str::contains("Place 9 was already gone"));
}
