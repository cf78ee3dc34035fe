//! Configuration loading for TOC processing.
//!
//! Layered config: defaults -> config files -> env vars -> CLI flags.
//! The default config file lives at `~/.config/apidoc-toc/config.toml`
//! (platform equivalent via `directories`).

use config::{Config, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::TocError;
use crate::format::TocFormat;
use crate::labels::LabelMap;

/// Main application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Root packages whose prefix is stripped and sectioned (e.g. "tf")
    #[serde(default)]
    pub root_packages: Vec<String>,

    /// Package labels, in sort priority order
    #[serde(default)]
    pub labels: LabelMap,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Output format; inferred from the output path when unset
    #[serde(default)]
    pub output_format: Option<TocFormat>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            root_packages: Vec::new(),
            labels: LabelMap::new(),
            log_level: default_log_level(),
            output_format: None,
        }
    }
}

/// Location of the default config file (without extension).
pub fn default_config_path() -> PathBuf {
    ProjectDirs::from("", "", "apidoc-toc")
        .map(|p| p.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
        .join("config")
}

impl Settings {
    /// Load settings with layered precedence:
    /// 1. Built-in defaults
    /// 2. Config file (~/.config/apidoc-toc/config.toml)
    /// 3. CLI-specified config file (optional)
    /// 4. Environment variables (APIDOC_*)
    ///
    /// CLI flags should be applied by the caller after this returns.
    pub fn load(cli_config_path: Option<&str>) -> Result<Self, TocError> {
        let mut builder = Config::builder()
            .set_default("log_level", default_log_level())
            .map_err(|e| TocError::Config(e.to_string()))?
            .add_source(
                File::with_name(&default_config_path().to_string_lossy()).required(false),
            );

        if let Some(path) = cli_config_path {
            builder = builder.add_source(File::with_name(path).required(true));
        }

        // APIDOC_LOG_LEVEL, APIDOC_ROOT_PACKAGES=tf,tfa, APIDOC_OUTPUT_FORMAT
        builder = builder.add_source(
            Environment::with_prefix("APIDOC")
                .prefix_separator("_")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("root_packages")
                .try_parsing(true),
        );

        let settings: Settings = builder
            .build()
            .map_err(|e| TocError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| TocError::Config(e.to_string()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Reject empty root packages and empty label packages.
    pub fn validate(&self) -> Result<(), TocError> {
        if self.root_packages.iter().any(|p| p.is_empty()) {
            return Err(TocError::Config(
                "root_packages must not contain empty strings".to_string(),
            ));
        }
        if self.labels.packages().any(str::is_empty) {
            return Err(TocError::Config(
                "label package must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Replace the configured root packages when any are given.
    pub fn with_root_packages(mut self, root_packages: Vec<String>) -> Self {
        if !root_packages.is_empty() {
            self.root_packages = root_packages;
        }
        self
    }

    /// Replace the configured labels when any are given.
    pub fn with_labels(mut self, labels: LabelMap) -> Self {
        if !labels.is_empty() {
            self.labels = labels;
        }
        self
    }

    /// Override the log level.
    pub fn with_log_level(mut self, log_level: Option<&str>) -> Self {
        if let Some(level) = log_level {
            self.log_level = level.to_string();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Mutex, MutexGuard};

    /// Serializes tests that call `Settings::load`, since the environment is
    /// shared by the whole test process.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn env_lock() -> MutexGuard<'static, ()> {
        ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Sets `APIDOC_*` variables for the life of the guard.
    struct EnvVars(Vec<&'static str>);

    impl EnvVars {
        fn set(vars: &[(&'static str, &str)]) -> Self {
            for (key, value) in vars {
                std::env::set_var(key, value);
            }
            Self(vars.iter().map(|(key, _)| *key).collect())
        }
    }

    impl Drop for EnvVars {
        fn drop(&mut self) {
            for key in &self.0 {
                std::env::remove_var(key);
            }
        }
    }

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert!(settings.root_packages.is_empty());
        assert!(settings.labels.is_empty());
        assert_eq!(settings.log_level, "info");
        assert_eq!(settings.output_format, None);
    }

    #[test]
    fn test_load_from_file() {
        let _lock = env_lock();
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
root_packages = ["org.tensorflow"]
output_format = "toml"

[[labels]]
package = "org.tensorflow.op"
label = "Ops"

[[labels]]
package = "org.tensorflow.framework"
label = "Framework"
"#
        )
        .unwrap();

        let settings = Settings::load(Some(&file.path().to_string_lossy())).unwrap();
        assert_eq!(settings.root_packages, vec!["org.tensorflow"]);
        assert_eq!(settings.output_format, Some(TocFormat::Toml));
        assert_eq!(
            settings.labels.packages().collect::<Vec<_>>(),
            vec!["org.tensorflow.op", "org.tensorflow.framework"]
        );
        assert_eq!(settings.labels.get("org.tensorflow.op"), Some("Ops"));
    }

    #[test]
    fn test_missing_cli_config_file_is_an_error() {
        let _lock = env_lock();
        let result = Settings::load(Some("/nonexistent/apidoc-toc/config.toml"));
        assert!(matches!(result, Err(TocError::Config(_))));
    }

    #[test]
    fn test_env_overrides_config_file() {
        let _lock = env_lock();
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
root_packages = ["org.tensorflow"]
log_level = "debug"
"#
        )
        .unwrap();

        let _env = EnvVars::set(&[
            ("APIDOC_ROOT_PACKAGES", "tf,tfa"),
            ("APIDOC_LOG_LEVEL", "warn"),
        ]);
        let settings = Settings::load(Some(&file.path().to_string_lossy())).unwrap();
        assert_eq!(settings.root_packages, vec!["tf", "tfa"]);
        assert_eq!(settings.log_level, "warn");
    }

    #[test]
    fn test_validate_rejects_empty_prefixes() {
        let settings = Settings::default().with_root_packages(vec![String::new()]);
        assert!(settings.validate().is_err());

        let settings = Settings::default().with_labels([("", "Root")].into_iter().collect());
        assert!(settings.validate().is_err());

        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn test_cli_overrides() {
        let settings = Settings::default()
            .with_root_packages(vec!["tf".to_string()])
            .with_labels([("tf.keras", "Keras")].into_iter().collect())
            .with_log_level(Some("debug"));
        assert_eq!(settings.root_packages, vec!["tf"]);
        assert_eq!(settings.labels.get("tf.keras"), Some("Keras"));
        assert_eq!(settings.log_level, "debug");

        // Empty overrides keep what was configured
        let settings = settings
            .with_root_packages(Vec::new())
            .with_labels(LabelMap::new())
            .with_log_level(None);
        assert_eq!(settings.root_packages, vec!["tf"]);
        assert_eq!(settings.labels.len(), 1);
        assert_eq!(settings.log_level, "debug");
    }
}
