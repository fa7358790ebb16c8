use std::path::PathBuf;
use tempfile::TempDir;

use crate::config::{ConfigFile, GeneratorConfig, load_config_file, parse_config_file};
use crate::error::GenError;

#[test]
fn test_defaults() {
    let config = GeneratorConfig::default();
    assert_eq!(config.input, PathBuf::from("enumList.txt"));
    assert_eq!(config.output, PathBuf::from("outputEnums.txt"));
    assert_eq!(config.prefix, "VK_COMPARE_OP_");
}

#[test]
fn test_parse_partial_config() {
    let file = parse_config_file(r#"{ "prefix": "VK_FORMAT_" }"#).unwrap();
    assert_eq!(
        file,
        ConfigFile {
            input: None,
            output: None,
            prefix: Some("VK_FORMAT_".to_string()),
        }
    );

    let mut config = GeneratorConfig::default();
    config.merge_file(file);
    assert_eq!(config.prefix, "VK_FORMAT_");
    assert_eq!(config.input, PathBuf::from("enumList.txt"));
}

#[test]
fn test_parse_rejects_unknown_keys() {
    assert!(parse_config_file(r#"{ "prefixes": ["VK_"] }"#).is_err());
}

#[test]
fn test_load_resolves_paths_relative_to_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("enumgen.json");
    std::fs::write(
        &config_path,
        r#"{ "input": "polygonModes.txt", "output": "/tmp/polygonModes.inc", "prefix": "VK_POLYGON_MODE_" }"#,
    )
    .unwrap();

    let file = load_config_file(&config_path).unwrap();
    assert_eq!(file.input, Some(temp_dir.path().join("polygonModes.txt")));
    assert_eq!(file.output, Some(PathBuf::from("/tmp/polygonModes.inc")));
    assert_eq!(file.prefix.as_deref(), Some("VK_POLYGON_MODE_"));
}

#[test]
fn test_load_malformed_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("enumgen.json");
    std::fs::write(&config_path, "{ prefix: ").unwrap();

    let err = load_config_file(&config_path).unwrap_err();
    match err {
        GenError::Config { path, .. } => assert_eq!(path, config_path),
        other => panic!("expected config error, got {other:?}"),
    }
}

#[test]
fn test_load_missing_config() {
    let temp_dir = TempDir::new().unwrap();
    let err = load_config_file(&temp_dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, GenError::FileAccess { action: "read", .. }));
}
