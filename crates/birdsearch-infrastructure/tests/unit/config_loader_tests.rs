//! Tests for layered configuration loading and validation

use std::io::Write;

use birdsearch_domain::Error;
use birdsearch_infrastructure::config::loader::validate_app_config;
use birdsearch_infrastructure::config::{AppConfig, ConfigLoader};
use tempfile::NamedTempFile;

const BLOB_AZURE_TOML: &str = r#"
[server]
host = "127.0.0.1"
port = 9090

[record_source]
provider = "blob"
url = "https://birds.blob.core.windows.net"
container_name = "birds"
file_name = "indian_birds.csv"

[embedding]
provider = "azure_openai"
endpoint = "https://birds.openai.azure.com"
deployment = "bird-embeddings"
concurrency = 8

[logging]
level = "debug"
json_format = true
"#;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn load(contents: &str) -> Result<AppConfig, Error> {
    let file = write_config(contents);
    ConfigLoader::new().with_config_path(file.path()).load()
}

fn valid_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.record_source.provider = "file".to_string();
    config.record_source.path = Some("birds.csv".into());
    config.embedding.provider = "null".to_string();
    config
}

#[test]
fn test_toml_values_override_defaults() {
    let config = load(BLOB_AZURE_TOML).unwrap();

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 9090);
    assert_eq!(config.record_source.container_name.as_deref(), Some("birds"));
    assert_eq!(config.embedding.deployment.as_deref(), Some("bird-embeddings"));
    assert_eq!(config.embedding.concurrency, 8);
    assert!(config.logging.json_format);
}

#[test]
fn test_unset_keys_keep_defaults() {
    let config = load(BLOB_AZURE_TOML).unwrap();
    let defaults = AppConfig::default();

    assert_eq!(config.embedding.timeout_secs, defaults.embedding.timeout_secs);
    assert_eq!(config.record_source.timeout_secs, defaults.record_source.timeout_secs);
    assert_eq!(config.record_source.sas_token, None);
    assert_eq!(config.logging.file_output, None);
}

#[test]
fn test_defaults_require_provider_settings() {
    let err = validate_app_config(&AppConfig::default()).unwrap_err();

    assert!(matches!(err, Error::Configuration { .. }));
    assert!(err.to_string().contains("record_source.url"));
}

#[test]
fn test_missing_azure_deployment_is_rejected() {
    let toml = BLOB_AZURE_TOML.replace("deployment = \"bird-embeddings\"", "");

    let err = load(&toml).unwrap_err();

    assert!(err.to_string().contains("embedding.deployment"), "{err}");
}

#[test]
fn test_blank_required_value_is_rejected() {
    let toml = BLOB_AZURE_TOML.replace("container_name = \"birds\"", "container_name = \"  \"");

    let err = load(&toml).unwrap_err();

    assert!(err.to_string().contains("record_source.container_name"), "{err}");
}

#[test]
fn test_openai_requires_api_key() {
    let mut config = valid_config();
    config.embedding.provider = "openai".to_string();
    assert!(validate_app_config(&config).is_err());

    config.embedding.api_key = Some("sk-test".to_string());
    assert!(validate_app_config(&config).is_ok());
}

#[test]
fn test_file_source_requires_path() {
    let mut config = valid_config();
    config.record_source.path = None;

    let err = validate_app_config(&config).unwrap_err();

    assert!(err.to_string().contains("record_source.path"));
}

#[test]
fn test_unknown_providers_are_rejected() {
    let mut config = valid_config();
    config.embedding.provider = "word2vec".to_string();
    assert!(
        validate_app_config(&config)
            .unwrap_err()
            .to_string()
            .contains("Unknown embedding provider")
    );

    let mut config = valid_config();
    config.record_source.provider = "ftp".to_string();
    assert!(
        validate_app_config(&config)
            .unwrap_err()
            .to_string()
            .contains("Unknown record source")
    );
}

#[test]
fn test_numeric_limits_are_validated() {
    let mut config = valid_config();
    config.server.port = 0;
    assert!(validate_app_config(&config).is_err());

    let mut config = valid_config();
    config.embedding.concurrency = 0;
    assert!(validate_app_config(&config).is_err());

    let mut config = valid_config();
    config.embedding.timeout_secs = 0;
    assert!(validate_app_config(&config).is_err());

    assert!(validate_app_config(&valid_config()).is_ok());
}

#[test]
fn test_invalid_log_level_is_rejected() {
    let toml = BLOB_AZURE_TOML.replace("level = \"debug\"", "level = \"chatty\"");

    let err = load(&toml).unwrap_err();

    assert!(err.to_string().contains("Invalid log level"));
}

#[test]
fn test_malformed_toml_is_a_configuration_error() {
    let err = load("[server\nport = ").unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }), "got {err:?}");
}

#[test]
fn test_explicit_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.toml");

    let err = ConfigLoader::new()
        .with_config_path(&missing)
        .load()
        .unwrap_err();

    assert!(err.to_string().contains("absent.toml"));
}
