//! Global settings for the checking tools.
//!
//! `AppConfig` is a lazily initialized, globally accessible singleton loaded from
//! `.env` and environment variables. Tests can override single fields through the
//! per-field setters and restore the environment-derived values with [`AppConfig::reset`].

use std::env;
use std::sync::{OnceLock, RwLock};

/// Every setting the checker binary and its logging read at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub project_name: String,
    pub log_level: String,
    pub log_dir: String,
    pub log_file: String,
    pub log_to_stdout: bool,
    /// Checker name used when no problem handler is supplied.
    pub default_checker: Option<String>,
}

static CONFIG_INSTANCE: OnceLock<RwLock<AppConfig>> = OnceLock::new();

impl AppConfig {
    /// Loads the configuration from `.env` and environment variables.
    ///
    /// Every variable has a default, so this never fails.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            project_name: env::var("PROJECT_NAME").unwrap_or_else(|_| "jutge-check".into()),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: env::var("LOG_DIR").unwrap_or_else(|_| "logs".into()),
            log_file: env::var("LOG_FILE").unwrap_or_else(|_| "checker.log".into()),
            log_to_stdout: env::var("LOG_TO_STDOUT")
                .map(|v| v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
            default_checker: env::var("DEFAULT_CHECKER")
                .ok()
                .filter(|v| !v.trim().is_empty()),
        }
    }

    /// Returns a shared reference to the global configuration.
    ///
    /// # Panics
    /// Panics if the lock is poisoned.
    pub fn global() -> std::sync::RwLockReadGuard<'static, AppConfig> {
        CONFIG_INSTANCE
            .get_or_init(|| RwLock::new(AppConfig::from_env()))
            .read()
            .expect("Failed to acquire AppConfig read lock")
    }

    /// Reloads the configuration from the environment, dropping any overrides.
    pub fn reset() {
        if let Some(lock) = CONFIG_INSTANCE.get() {
            let mut guard = lock.write().expect("Failed to acquire AppConfig write lock");
            *guard = AppConfig::from_env();
        }
    }

    fn set_field<F>(setter: F)
    where
        F: FnOnce(&mut AppConfig),
    {
        let lock = CONFIG_INSTANCE.get_or_init(|| RwLock::new(AppConfig::from_env()));
        let mut guard = lock
            .write()
            .expect("Failed to acquire AppConfig write lock");
        setter(&mut guard);
    }

    pub fn set_project_name(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.project_name = value.into());
    }

    pub fn set_default_checker(value: Option<String>) {
        AppConfig::set_field(|cfg| cfg.default_checker = value);
    }
}
