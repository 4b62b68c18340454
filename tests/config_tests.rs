// Config loading and validation tests

use dockhand::config::AppConfig;

const VALID_CONFIG: &str = r#"
[server]
port = 5000
host = "0.0.0.0"

[engine]
ping_timeout_ms = 2000
stop_timeout_secs = 10
"#;

#[test]
fn test_config_loads_from_str() {
    let config = AppConfig::load_from_str(VALID_CONFIG).expect("load_from_str");
    assert_eq!(config.server.port, 5000);
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.engine.ping_timeout_ms, 2000);
    assert_eq!(config.engine.stop_timeout_secs, 10);
}

#[test]
fn test_config_engine_section_has_defaults() {
    let minimal = r#"
[server]
port = 5000
host = "127.0.0.1"

[engine]
"#;
    let config = AppConfig::load_from_str(minimal).expect("defaults");
    assert_eq!(config.engine.ping_timeout_ms, 2000);
    assert_eq!(config.engine.stop_timeout_secs, 10);
}

#[test]
fn test_config_validation_rejects_invalid_port() {
    let bad = VALID_CONFIG.replace("port = 5000", "port = 0");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("server.port"));
}

#[test]
fn test_config_validation_rejects_empty_host() {
    let bad = VALID_CONFIG.replace("host = \"0.0.0.0\"", "host = \"\"");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("server.host"));
}

#[test]
fn test_config_validation_rejects_zero_ping_timeout() {
    let bad = VALID_CONFIG.replace("ping_timeout_ms = 2000", "ping_timeout_ms = 0");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("engine.ping_timeout_ms"));
}
