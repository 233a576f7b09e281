//! Layered config precedence: global XDG file < explicit file < env.
//!
//! Own test binary: it redirects `XDG_CONFIG_HOME` and sets `RSCAMELOT_*`
//! vars. Linux only, where `directories` resolves the config dir from
//! `XDG_CONFIG_HOME`.
#![cfg(target_os = "linux")]

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use tempfile::TempDir;

use rscamelot::config::{global_config_path, Settings};

static ENV_LOCK: Mutex<()> = Mutex::new(());

fn lock_env() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner())
}

/// Global config in `<xdg>/rscamelot/rscamelot.toml`, with `XDG_CONFIG_HOME`
/// pointing at `xdg`.
fn write_global_config(xdg: &TempDir, content: &str) -> PathBuf {
    env::set_var("XDG_CONFIG_HOME", xdg.path());
    let dir = xdg.path().join("rscamelot");
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("rscamelot.toml");
    fs::write(&path, content).unwrap();
    path
}

fn write_explicit_config(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("explicit.toml");
    fs::write(&path, content).unwrap();
    path
}

const GLOBAL: &str = r#"
program = "camelot-global"

[global]
pages = "1"
zip = true
format = "csv"
"#;

const EXPLICIT: &str = r#"
[global]
pages = "2"
format = "json"
"#;

#[test]
fn given_xdg_config_home_when_global_config_path_then_points_into_it() {
    let _lock = lock_env();
    let xdg = TempDir::new().unwrap();

    let path = write_global_config(&xdg, "");

    assert_eq!(global_config_path(), Some(path));
}

#[test]
fn given_only_global_config_when_load_then_uses_global_values() {
    let _lock = lock_env();
    // Arrange
    let xdg = TempDir::new().unwrap();
    write_global_config(&xdg, GLOBAL);

    // Act
    let settings = Settings::load(None).expect("load settings");

    // Assert
    assert_eq!(settings.program, "camelot-global");
    assert_eq!(settings.global.pages.as_deref(), Some("1"));
    assert_eq!(settings.global.zip, Some(true));
    assert_eq!(settings.global.format.as_deref(), Some("csv"));
}

#[test]
fn given_global_and_explicit_config_when_load_then_explicit_overrides_field_by_field() {
    let _lock = lock_env();
    // Arrange
    let xdg = TempDir::new().unwrap();
    let dir = TempDir::new().unwrap();
    write_global_config(&xdg, GLOBAL);
    let explicit = write_explicit_config(dir.path(), EXPLICIT);

    // Act
    let settings = Settings::load(Some(&explicit)).expect("load settings");

    // Assert
    assert_eq!(settings.program, "camelot-global");
    assert_eq!(settings.global.pages.as_deref(), Some("2"));
    assert_eq!(settings.global.format.as_deref(), Some("json"));
    assert_eq!(settings.global.zip, Some(true));
}

#[test]
fn given_global_explicit_and_env_when_load_then_env_overrides_both() {
    let _lock = lock_env();
    // Arrange
    let xdg = TempDir::new().unwrap();
    let dir = TempDir::new().unwrap();
    write_global_config(&xdg, GLOBAL);
    let explicit = write_explicit_config(dir.path(), EXPLICIT);
    env::set_var("RSCAMELOT_PROGRAM", "camelot-env");
    env::set_var("RSCAMELOT_GLOBAL__PAGES", "3");
    env::set_var("RSCAMELOT_GLOBAL__ZIP", "false");

    // Act
    let result = Settings::load(Some(&explicit));

    env::remove_var("RSCAMELOT_PROGRAM");
    env::remove_var("RSCAMELOT_GLOBAL__PAGES");
    env::remove_var("RSCAMELOT_GLOBAL__ZIP");

    // Assert
    let settings = result.expect("load settings");
    assert_eq!(settings.program, "camelot-env");
    assert_eq!(settings.global.pages.as_deref(), Some("3"));
    assert_eq!(settings.global.zip, Some(false));
    assert_eq!(settings.global.format.as_deref(), Some("json"));
}

#[test]
fn given_malformed_global_config_when_load_then_fails_with_its_path() {
    let _lock = lock_env();
    let xdg = TempDir::new().unwrap();
    write_global_config(&xdg, "program = [");

    let err = Settings::load(None).unwrap_err();

    assert!(err.to_string().contains("rscamelot.toml"), "got: {err}");
}
