//! Formatter configuration: JSON config file plus environment overrides.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::paths;
use crate::format::{FormatOptions, QaShape};

pub const ESCAPE_CURRENCY_ENV: &str = "TUTOR_CHAT_FORMAT_ESCAPE_CURRENCY";
pub const ALL_BLOCKS_ENV: &str = "TUTOR_CHAT_FORMAT_ALL_BLOCKS";
pub const QA_SHAPE_ENV: &str = "TUTOR_CHAT_FORMAT_QA_SHAPE";

/// Error loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("{var} must be {expected}, got '{value}'")]
    InvalidEnv {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Load options from the config file (defaults when absent), then apply env overrides.
pub fn load() -> Result<FormatOptions, ConfigError> {
    let mut options = match paths::config_file() {
        Some(path) => load_file(&path)?,
        None => FormatOptions::default(),
    };
    apply_env_overrides(&mut options, |var| env::var(var).ok())?;
    Ok(options)
}

/// Read options from `path`. A missing file yields the defaults.
pub fn load_file(path: &Path) -> Result<FormatOptions, ConfigError> {
    if !path.exists() {
        log::debug!("No config file at {}, using defaults", path.display());
        return Ok(FormatOptions::default());
    }
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| ConfigError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Apply `TUTOR_CHAT_FORMAT_*` overrides read through `lookup`.
pub fn apply_env_overrides(
    options: &mut FormatOptions,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<(), ConfigError> {
    if let Some(value) = lookup(ESCAPE_CURRENCY_ENV) {
        options.escape_currency = parse_bool(ESCAPE_CURRENCY_ENV, &value)?;
    }
    if let Some(value) = lookup(ALL_BLOCKS_ENV) {
        options.all_blocks = parse_bool(ALL_BLOCKS_ENV, &value)?;
    }
    if let Some(value) = lookup(QA_SHAPE_ENV) {
        options.qa_shape = value
            .parse::<QaShape>()
            .map_err(|_| ConfigError::InvalidEnv {
                var: QA_SHAPE_ENV,
                expected: "nested or flat",
                value,
            })?;
    }
    Ok(())
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidEnv {
            var,
            expected: "true or false",
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> + use<> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn load_file_missing_returns_defaults() {
        let tmp = tempfile::TempDir::new().expect("temp dir");
        let options = load_file(&tmp.path().join("nope.json")).unwrap();
        assert_eq!(options, FormatOptions::default());
    }

    #[test]
    fn load_file_partial_json_keeps_other_defaults() {
        let tmp = tempfile::TempDir::new().expect("temp dir");
        let path = tmp.path().join("config.json");
        fs::write(&path, r#"{"qa_shape":"flat","all_blocks":true}"#).unwrap();
        let options = load_file(&path).unwrap();
        assert_eq!(options.qa_shape, QaShape::Flat);
        assert!(options.all_blocks);
        assert!(options.escape_currency);
        assert_eq!(options.currency_replacement, "USD");
    }

    #[test]
    fn load_file_invalid_json() {
        let tmp = tempfile::TempDir::new().expect("temp dir");
        let path = tmp.path().join("config.json");
        fs::write(&path, "{not json").unwrap();
        let err = load_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Json { .. }));
        assert!(err.to_string().contains("config.json"));
    }

    #[test]
    fn env_overrides_apply() {
        let mut options = FormatOptions::default();
        apply_env_overrides(
            &mut options,
            lookup(&[
                (ESCAPE_CURRENCY_ENV, "false"),
                (ALL_BLOCKS_ENV, "1"),
                (QA_SHAPE_ENV, "Flat"),
            ]),
        )
        .unwrap();
        assert!(!options.escape_currency);
        assert!(options.all_blocks);
        assert_eq!(options.qa_shape, QaShape::Flat);
    }

    #[test]
    fn env_overrides_absent_leave_options() {
        let mut options = FormatOptions::default();
        apply_env_overrides(&mut options, lookup(&[])).unwrap();
        assert_eq!(options, FormatOptions::default());
    }

    #[test]
    fn env_override_invalid_bool() {
        let mut options = FormatOptions::default();
        let err = apply_env_overrides(&mut options, lookup(&[(ALL_BLOCKS_ENV, "maybe")]))
            .unwrap_err();
        assert!(err.to_string().contains(ALL_BLOCKS_ENV));
    }

    #[test]
    fn env_override_invalid_shape() {
        let mut options = FormatOptions::default();
        let err =
            apply_env_overrides(&mut options, lookup(&[(QA_SHAPE_ENV, "tree")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnv { var: QA_SHAPE_ENV, .. }));
    }
}
