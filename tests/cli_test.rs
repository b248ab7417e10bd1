use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn two_video_playlist() -> serde_json::Value {
    serde_json::json!({
        "items": [
            {
                "snippet": {
                    "title": "First",
                    "resourceId": { "videoId": "aaa" }
                }
            },
            {
                "snippet": {
                    "title": "Second",
                    "resourceId": { "videoId": "bbb" }
                }
            }
        ]
    })
}

fn half_hour_durations() -> serde_json::Value {
    serde_json::json!({
        "items": [
            { "id": "aaa", "contentDetails": { "duration": "PT30M" } },
            { "id": "bbb", "contentDetails": { "duration": "PT30M" } }
        ]
    })
}

#[tokio::test(flavor = "multi_thread")]
async fn test_calculate_json_contract() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/playlistItems"))
        .respond_with(ResponseTemplate::new(200).set_body_json(two_video_playlist()))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/videos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(half_hour_durations()))
        .mount(&mock_server)
        .await;

    let temp_home = tempfile::tempdir().unwrap();
    let config_dir = temp_home.path().join(".tube-tally");
    fs::create_dir_all(&config_dir).unwrap();

    let config_content = format!(
        r#"
[youtube]
api_key = "dummy_key"
api_url = "{}"
use_keyring = false
"#,
        mock_server.uri()
    );
    fs::write(config_dir.join("config.toml"), config_content).unwrap();

    let mut cmd = Command::cargo_bin("tubetally").unwrap();
    let assert = cmd
        .env("HOME", temp_home.path())
        .args([
            "calculate",
            "https://www.youtube.com/watch?v=aaa&list=PL99",
            "--format",
            "json",
        ])
        .assert()
        .success();

    let output = assert.get_output();
    let report: Value = serde_json::from_slice(&output.stdout).expect("Output should be valid JSON");

    assert_eq!(report["playlist_id"], "PL99");
    assert_eq!(report["total_videos"], 2);
    assert_eq!(report["range"]["start"], 1);
    assert_eq!(report["range"]["end"], 2);
    assert_eq!(report["total_seconds"], 3600);
    assert_eq!(report["unresolved"], 0);

    // Default speed table from config
    let projections = report["projections"].as_array().unwrap();
    assert_eq!(projections.len(), 5);
    assert_eq!(projections[0]["speed"].as_f64(), Some(1.0));
    assert_eq!(projections[0]["watch_seconds"].as_f64(), Some(3600.0));
    assert_eq!(projections[4]["speed"].as_f64(), Some(2.0));
    assert_eq!(projections[4]["watch_seconds"].as_f64(), Some(1800.0));
    assert_eq!(projections[4]["saved_seconds"].as_f64(), Some(1800.0));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_calculate_text_output() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/playlistItems"))
        .respond_with(ResponseTemplate::new(200).set_body_json(two_video_playlist()))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/videos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(half_hour_durations()))
        .mount(&mock_server)
        .await;

    let temp_home = tempfile::tempdir().unwrap();
    let config_dir = temp_home.path().join(".tube-tally");
    fs::create_dir_all(&config_dir).unwrap();

    let config_content = format!(
        r#"
[youtube]
api_key = "dummy_key"
api_url = "{}"
use_keyring = false
"#,
        mock_server.uri()
    );
    fs::write(config_dir.join("config.toml"), config_content).unwrap();

    let mut cmd = Command::cargo_bin("tubetally").unwrap();
    cmd.env("HOME", temp_home.path())
        .args(["calculate", "PL99", "--speeds", "1.0,2.0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Videos: 2 of 2 (positions 1-2)"))
        .stdout(predicate::str::contains("Total watch time: 1h 0m"))
        .stdout(predicate::str::contains("2x"))
        .stdout(predicate::str::contains("Saves 30m 0s"));
}

#[test]
fn test_calculate_rejects_bad_url() {
    let temp_home = tempfile::tempdir().unwrap();
    let config_dir = temp_home.path().join(".tube-tally");
    fs::create_dir_all(&config_dir).unwrap();

    let config_content = r#"
[youtube]
api_key = "dummy_key"
use_keyring = false
"#;
    fs::write(config_dir.join("config.toml"), config_content).unwrap();

    let mut cmd = Command::cargo_bin("tubetally").unwrap();
    cmd.env("HOME", temp_home.path())
        .args(["calculate", "https://www.youtube.com/watch?v=abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no playlist id found"));
}

#[test]
fn test_calculate_without_api_key_points_at_key_set() {
    let temp_home = tempfile::tempdir().unwrap();
    let config_dir = temp_home.path().join(".tube-tally");
    fs::create_dir_all(&config_dir).unwrap();

    let config_content = r#"
[youtube]
use_keyring = false
"#;
    fs::write(config_dir.join("config.toml"), config_content).unwrap();

    let mut cmd = Command::cargo_bin("tubetally").unwrap();
    cmd.env("HOME", temp_home.path())
        .args(["calculate", "PL99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("tubetally key set"));
}

#[test]
fn test_config_list_shows_defaults_without_a_file() {
    let temp_home = tempfile::tempdir().unwrap();

    let mut cmd = Command::cargo_bin("tubetally").unwrap();
    cmd.env("HOME", temp_home.path())
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("use_keyring = true"))
        .stdout(predicate::str::contains("[playback]"));
}

#[test]
fn test_config_get_reads_dot_notation_path() {
    let temp_home = tempfile::tempdir().unwrap();
    let config_dir = temp_home.path().join(".tube-tally");
    fs::create_dir_all(&config_dir).unwrap();

    let config_content = r#"
[youtube]
api_url = "http://localhost:9999"
use_keyring = false
"#;
    fs::write(config_dir.join("config.toml"), config_content).unwrap();

    let mut cmd = Command::cargo_bin("tubetally").unwrap();
    cmd.env("HOME", temp_home.path())
        .args(["config", "get", "youtube.api_url"])
        .assert()
        .success()
        .stdout(predicate::str::contains("http://localhost:9999"));
}

#[test]
fn test_config_set_writes_and_rereads() {
    let temp_home = tempfile::tempdir().unwrap();

    let mut cmd = Command::cargo_bin("tubetally").unwrap();
    cmd.env("HOME", temp_home.path())
        .args(["config", "set", "playback.speeds", "1.0,3.0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Set playback.speeds"));

    let saved = fs::read_to_string(
        temp_home.path().join(".tube-tally").join("config.toml"),
    )
    .unwrap();
    assert!(saved.contains("3.0"));

    let mut cmd = Command::cargo_bin("tubetally").unwrap();
    cmd.env("HOME", temp_home.path())
        .args(["config", "get", "playback.speeds"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3.0"));
}

#[test]
fn test_config_set_rejects_unknown_key() {
    let temp_home = tempfile::tempdir().unwrap();

    let mut cmd = Command::cargo_bin("tubetally").unwrap();
    cmd.env("HOME", temp_home.path())
        .args(["config", "set", "youtube.nope", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn test_key_lifecycle_in_config_file_mode() {
    let temp_home = tempfile::tempdir().unwrap();
    let config_dir = temp_home.path().join(".tube-tally");
    fs::create_dir_all(&config_dir).unwrap();

    let config_content = r#"
[youtube]
use_keyring = false
"#;
    fs::write(config_dir.join("config.toml"), config_content).unwrap();

    // Store
    let mut cmd = Command::cargo_bin("tubetally").unwrap();
    cmd.env("HOME", temp_home.path())
        .args(["key", "set", "AIza-dummy"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ API key stored"));

    let saved = fs::read_to_string(config_dir.join("config.toml")).unwrap();
    assert!(saved.contains("AIza-dummy"));

    // Status sees it
    let mut cmd = Command::cargo_bin("tubetally").unwrap();
    cmd.env("HOME", temp_home.path())
        .args(["key", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config file"));

    // Clear removes it
    let mut cmd = Command::cargo_bin("tubetally").unwrap();
    cmd.env("HOME", temp_home.path())
        .args(["key", "clear"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ API key removed"));

    let mut cmd = Command::cargo_bin("tubetally").unwrap();
    cmd.env("HOME", temp_home.path())
        .args(["key", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No API key stored"));
}
