//! Environment variable overrides for Settings.
//!
//! Kept in its own test binary: env vars are process-global and would race
//! with the file-based config tests. Tests in here serialize on `ENV_LOCK`
//! and point `XDG_CONFIG_HOME` at an empty temp dir.

use std::env;
use std::fs;
use std::sync::{Mutex, MutexGuard};

use tempfile::TempDir;

use rscamelot::application::ApplicationError;
use rscamelot::config::Settings;

static ENV_LOCK: Mutex<()> = Mutex::new(());

fn lock_env() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner())
}

/// Sets env vars for the lifetime of the guard, removes them on drop.
struct EnvVars(Vec<&'static str>);

impl EnvVars {
    fn set(vars: &[(&'static str, &str)]) -> Self {
        for (key, value) in vars {
            env::set_var(key, value);
        }
        Self(vars.iter().map(|(key, _)| *key).collect())
    }
}

impl Drop for EnvVars {
    fn drop(&mut self) {
        for key in &self.0 {
            env::remove_var(key);
        }
    }
}

#[test]
fn given_env_vars_when_load_then_override_config_file() {
    let _lock = lock_env();
    // Arrange
    let xdg = TempDir::new().unwrap();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("rscamelot.toml");
    fs::write(
        &path,
        r#"
program = "camelot-from-file"

[global]
pages = "1"
"#,
    )
    .unwrap();

    let _env = EnvVars::set(&[
        ("XDG_CONFIG_HOME", xdg.path().to_str().unwrap()),
        ("RSCAMELOT_PROGRAM", "camelot-from-env"),
        ("RSCAMELOT_GLOBAL__PAGES", "3-end"),
        ("RSCAMELOT_GLOBAL__ZIP", "true"),
        ("RSCAMELOT_GLOBAL__MARGINS", "1.0, 0.5,0.1"),
    ]);

    // Act
    let settings = Settings::load(Some(&path)).expect("load settings");

    // Assert
    assert_eq!(settings.program, "camelot-from-env");
    assert_eq!(settings.global.pages.as_deref(), Some("3-end"));
    assert_eq!(settings.global.zip, Some(true));
    assert_eq!(settings.global.margins, Some(vec![1.0, 0.5, 0.1]));
}

#[test]
fn given_malformed_bool_env_var_when_load_then_fails_instead_of_keeping_file_value() {
    let _lock = lock_env();
    // Arrange
    let xdg = TempDir::new().unwrap();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("rscamelot.toml");
    fs::write(&path, "[global]\nzip = true\n").unwrap();

    let _env = EnvVars::set(&[
        ("XDG_CONFIG_HOME", xdg.path().to_str().unwrap()),
        ("RSCAMELOT_GLOBAL__ZIP", "notabool"),
    ]);

    // Act
    let result = Settings::load(Some(&path));

    // Assert
    let err = result.unwrap_err();
    assert!(matches!(err, ApplicationError::Config { .. }));
    assert!(err.to_string().contains("global.zip"), "got: {err}");
}

#[test]
fn given_malformed_margins_env_var_when_load_then_fails() {
    let _lock = lock_env();
    let xdg = TempDir::new().unwrap();
    let _env = EnvVars::set(&[
        ("XDG_CONFIG_HOME", xdg.path().to_str().unwrap()),
        ("RSCAMELOT_GLOBAL__MARGINS", "1.0,wide,0.1"),
    ]);

    let err = Settings::load(None).unwrap_err();

    assert!(matches!(err, ApplicationError::Config { .. }));
    assert!(err.to_string().contains("MARGINS"));
}
