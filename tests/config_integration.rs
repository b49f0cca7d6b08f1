use omnipanel::config::AppConfig;
use omnipanel::playground::PlaygroundMode;
use serial_test::serial;
use std::env;
use std::fs;

// Clear environment variables that might interfere with tests
fn clear_env_vars() {
    unsafe {
        env::remove_var("OMNI_SERVER__PORT");
        env::remove_var("OMNI_PLAYGROUND__MODE");
        env::remove_var("OMNI_BACKEND__BASE_URL");
        env::remove_var("CONFIG_FILE");
        env::remove_var("PORT");
        env::remove_var("BACKEND_URL");
        env::remove_var("PLAYGROUND_MODE");
    }
}

fn load() -> AppConfig {
    AppConfig::load_from_args(["omnipanel"]).expect("Failed to load config")
}

#[test]
#[serial]
fn test_default_config() {
    clear_env_vars();

    let config = load();
    assert_eq!(config.server.port, 3000);
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.playground.mode, PlaygroundMode::Networked);
    assert_eq!(config.playground.simulated_delay_ms, 800);
    assert!(config.backend.base_url.is_none());
    assert!(config.credentials.path.is_none());
    assert_eq!(config.backend_base_url(), "http://127.0.0.1:3000");
}

#[test]
#[serial]
fn test_env_override() {
    clear_env_vars();
    unsafe {
        env::set_var("OMNI_SERVER__PORT", "9090");
        env::set_var("OMNI_PLAYGROUND__MODE", "simulated");
    }

    let config = load();
    assert_eq!(config.server.port, 9090);
    assert_eq!(config.playground.mode, PlaygroundMode::Simulated);

    clear_env_vars();
}

#[test]
#[serial]
fn test_file_load() {
    clear_env_vars();

    let dir = tempfile::tempdir().unwrap();
    let file_path = dir.path().join("omni.yaml");
    fs::write(
        &file_path,
        r#"
server:
  port: 7070
backend:
  base_url: "https://consensus.example"
credentials:
  path: "/var/lib/omnipanel/keys.json"
"#,
    )
    .expect("Failed to write temp config");

    unsafe {
        env::set_var("CONFIG_FILE", &file_path);
    }

    let config = load();
    assert_eq!(config.server.port, 7070);
    assert_eq!(config.backend_base_url(), "https://consensus.example");
    assert_eq!(
        config.credentials.path.as_deref(),
        Some("/var/lib/omnipanel/keys.json")
    );

    clear_env_vars();
}

#[test]
#[serial]
fn test_cli_flags_win() {
    clear_env_vars();
    unsafe {
        env::set_var("OMNI_SERVER__PORT", "9090");
    }

    let config = AppConfig::load_from_args([
        "omnipanel",
        "--port",
        "8081",
        "--mode",
        "Simulated",
        "--backend-url",
        "http://10.0.0.5:9000",
    ])
    .expect("Failed to load config");

    assert_eq!(config.server.port, 8081);
    assert_eq!(config.playground.mode, PlaygroundMode::Simulated);
    assert_eq!(config.backend_base_url(), "http://10.0.0.5:9000");

    clear_env_vars();
}

#[test]
#[serial]
fn test_invalid_mode_is_rejected() {
    clear_env_vars();

    let result = AppConfig::load_from_args(["omnipanel", "--mode", "offline"]);
    assert!(result.is_err());
}
