//! Config file loading and override precedence tests.

use anteroom::config::AnteroomConfig;

#[test]
fn load_from_path_reads_file_values() {
    let dir = tempfile::tempdir().expect("tempdir should create");
    let path = dir.path().join("anteroom.toml");
    std::fs::write(
        &path,
        "[backend]\nbase_url = \"http://10.0.0.2:8080\"\npage_size = 5\n",
    )
    .expect("config file should write");

    let config = AnteroomConfig::load_from_path(&path).expect("config should parse");
    assert_eq!(config.backend.base_url, "http://10.0.0.2:8080");
    assert_eq!(config.backend.page_size, 5);
    // Untouched values keep their defaults.
    assert_eq!(config.backend.connect_timeout_secs, 5);
    assert_eq!(config.paths.logs_dir, "./logs");
}

#[test]
fn missing_file_yields_defaults() {
    let dir = tempfile::tempdir().expect("tempdir should create");
    let path = dir.path().join("absent.toml");

    let config = AnteroomConfig::load_from_path(&path).expect("missing file is not an error");
    assert_eq!(config.backend.base_url, "http://127.0.0.1:5000");
    assert_eq!(config.backend.page_size, 50);
}

#[test]
fn malformed_file_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir should create");
    let path = dir.path().join("anteroom.toml");
    std::fs::write(&path, "[backend\nnot toml").expect("config file should write");

    assert!(AnteroomConfig::load_from_path(&path).is_err());
}

#[test]
fn env_overrides_beat_file_values() {
    let mut config = AnteroomConfig::default();
    config.apply_overrides(|key| match key {
        "ANTEROOM_API_URL" => Some("http://10.1.1.1:9999".to_owned()),
        "ANTEROOM_PAGE_SIZE" => Some("7".to_owned()),
        "ANTEROOM_LOGS_DIR" => Some("/var/log/anteroom".to_owned()),
        _ => None,
    });

    assert_eq!(config.backend.base_url, "http://10.1.1.1:9999");
    assert_eq!(config.backend.page_size, 7);
    assert_eq!(config.paths.logs_dir, "/var/log/anteroom");
}

#[test]
fn invalid_numeric_override_is_ignored() {
    let mut config = AnteroomConfig::default();
    config.apply_overrides(|key| {
        (key == "ANTEROOM_PAGE_SIZE").then(|| "lots".to_owned())
    });
    assert_eq!(config.backend.page_size, 50);
}
