//! Tests for YAML configuration loading and environment overrides

use order_desk::prelude::*;
use std::collections::HashMap;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(yaml: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(yaml.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_full_config_file() {
    let file = write_config(
        r#"
server:
  host: 0.0.0.0
  port: 8088
  public_url: https://orders.example.com
pagination:
  default_per_page: 10
  max_per_page: 50
logging:
  level: debug
  json: true
seed: false
"#,
    );

    let config = AppConfig::from_yaml_file(file.path().to_str().unwrap()).unwrap();

    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 8088);
    assert_eq!(
        config.server.public_url.as_deref(),
        Some("https://orders.example.com")
    );
    assert_eq!(config.pagination.default_per_page, 10);
    assert_eq!(config.pagination.max_per_page, 50);
    assert_eq!(config.logging.level, "debug");
    assert!(config.logging.json);
    assert!(!config.seed);
}

#[test]
fn test_partial_file_keeps_defaults() {
    let file = write_config("server:\n  port: 9000\n");

    let config = AppConfig::from_yaml_file(file.path().to_str().unwrap()).unwrap();

    assert_eq!(config.server.port, 9000);
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.pagination, PaginationConfig::default());
    assert!(config.seed);
}

#[test]
fn test_missing_file_is_an_error() {
    let err = AppConfig::from_yaml_file("/nonexistent/order-desk.yaml").unwrap_err();
    assert!(err.to_string().contains("/nonexistent/order-desk.yaml"));
}

#[test]
fn test_invalid_pagination_is_rejected() {
    let file = write_config("pagination:\n  default_per_page: 20\n  max_per_page: 10\n");

    let err = AppConfig::from_yaml_file(file.path().to_str().unwrap()).unwrap_err();
    assert!(err.to_string().contains("pagination.default_per_page"));
}

#[test]
fn test_env_overrides_file_values() {
    let file = write_config("server:\n  port: 9000\n");
    let mut config = AppConfig::from_yaml_file(file.path().to_str().unwrap()).unwrap();

    let env: HashMap<&str, &str> = [
        ("ORDER_DESK_PORT", "9100"),
        ("ORDER_DESK_PUBLIC_URL", "http://localhost:9100"),
        ("ORDER_DESK_LOG_JSON", "true"),
    ]
    .into_iter()
    .collect();
    config
        .apply_env(|key| env.get(key).map(|v| v.to_string()))
        .unwrap();

    assert_eq!(config.server.port, 9100);
    assert_eq!(
        config.server.public_url.as_deref(),
        Some("http://localhost:9100")
    );
    assert!(config.logging.json);
    assert_eq!(config.bind_addr().unwrap().port(), 9100);
}

#[test]
fn test_configured_page_size_drives_listing_default() {
    let config = AppConfig::from_yaml_str("pagination:\n  default_per_page: 4\n").unwrap();
    let params = ListParams::default();

    let query = params.resolve(&config.pagination).unwrap();
    assert_eq!(query.per_page, 4);
    assert_eq!(query.page, 1);
    assert_eq!(query.sort_field, SortField::DueDate);
    assert_eq!(query.sort_order, SortOrder::Asc);
}
