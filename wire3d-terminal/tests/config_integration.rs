//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use serial_test::serial;
use std::fs;
use std::path::PathBuf;
use wire3d_terminal::{AppConfig, ConfigError};

fn repo_config_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../config")
}

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("wire3d-config-{}-{}", name, std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
#[serial]
fn test_default_toml_matches_builtin_defaults() {
    let config = AppConfig::load_from(repo_config_dir()).unwrap();
    assert_eq!(config.surface, AppConfig::default().surface);
    assert_eq!(config.lens, AppConfig::default().lens);
    assert_eq!(config.camera, AppConfig::default().camera);
}

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("WIRE3D_CAMERA__DISTANCE", "6.5");
    let config = AppConfig::load_from(repo_config_dir());
    std::env::remove_var("WIRE3D_CAMERA__DISTANCE");

    let config = config.unwrap();
    assert_eq!(config.camera.distance, 6.5);
    assert_eq!(config.initial_state().distance, 6.5);
}

#[test]
#[serial]
fn test_user_toml_overrides_default() {
    let dir = scratch_dir("user");
    fs::write(dir.join("default.toml"), "[surface]\nwidth = 640\nheight = 480\n").unwrap();
    fs::write(dir.join("user.toml"), "[surface]\nwidth = 1024\n\n[lens]\nfov = 60.0\n").unwrap();

    let config = AppConfig::load_from(&dir).unwrap();
    assert_eq!(config.surface.width, 1024);
    assert_eq!(config.surface.height, 480);
    assert_eq!(config.lens.fov, 60.0);
    // Sections missing from both files keep their defaults
    assert_eq!(config.camera.rotation_y, 45.0);

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
#[serial]
fn test_missing_directory_uses_defaults() {
    let config = AppConfig::load_from("no/such/config/dir").unwrap();
    assert_eq!(config, AppConfig::default());
}

#[test]
#[serial]
fn test_invalid_values_are_rejected() {
    let dir = scratch_dir("invalid");
    fs::write(dir.join("default.toml"), "[lens]\nnear = 5.0\nfar = 1.0\n").unwrap();

    let result = AppConfig::load_from(&dir);
    assert!(matches!(result, Err(ConfigError::Invalid(_))));

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
#[serial]
fn test_wrong_type_is_a_figment_error() {
    let dir = scratch_dir("type");
    fs::write(dir.join("default.toml"), "[surface]\nwidth = \"wide\"\n").unwrap();

    let result = AppConfig::load_from(&dir);
    assert!(matches!(result, Err(ConfigError::Figment(_))));

    fs::remove_dir_all(&dir).unwrap();
}
