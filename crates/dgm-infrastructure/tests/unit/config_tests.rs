//! Configuration Tests

extern crate dgm_providers;

use dgm_domain::error::Error;
use dgm_infrastructure::config::{AppConfig, ConfigBuilder, ConfigLoader, LoggingConfig};
use std::io::Write;

fn loader_for(file: &std::path::Path) -> ConfigLoader {
    ConfigLoader::new()
        .with_config_path(file)
        .with_env_prefix("DGM_TEST_UNSET")
}

#[test]
fn test_defaults() {
    let config = AppConfig::default();
    assert_eq!(config.logging.level, "info");
    assert!(!config.logging.json_format);
    assert!(config.languages.enabled.is_empty());
}

#[test]
fn test_load_from_toml() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "[logging]\nlevel = \"debug\"\njson_format = true\n\n[languages]\nenabled = [\"packet\"]"
    )
    .unwrap();

    let config = loader_for(file.path()).load().unwrap();
    assert_eq!(config.logging.level, "debug");
    assert!(config.logging.json_format);
    assert_eq!(config.languages.enabled, vec!["packet"]);
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = loader_for(&dir.path().join("absent.toml")).load().unwrap();
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_invalid_level_is_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[logging]\nlevel = \"loud\"").unwrap();
    let err = loader_for(file.path()).load().unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));
}

#[test]
fn test_unknown_language_is_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[languages]\nenabled = [\"flowchart-elk\"]").unwrap();
    let err = loader_for(file.path()).load().unwrap_err();
    assert!(err.to_string().contains("flowchart-elk"));
}

#[test]
fn test_save_and_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dgm.toml");
    let config = ConfigBuilder::new()
        .with_logging(LoggingConfig {
            level: "warn".to_string(),
            ..LoggingConfig::default()
        })
        .with_languages(["packet"])
        .build();

    let loader = loader_for(&path);
    loader.save_to_file(&config, &path).unwrap();
    assert_eq!(loader.load().unwrap(), config);
}
