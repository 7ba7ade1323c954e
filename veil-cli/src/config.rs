use std::{ffi::OsString, path::Path};

use serde::Serialize;
use serde_json::{Map, Value};
use veil::{Error, Result};

/// Dotenv file read from the working directory.
pub const ENV_FILE: &str = ".env";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct Settings {
    pub app_name: String,
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app_name: "veil".to_string(),
            log_level: "INFO".to_string(),
        }
    }
}

impl Settings {
    /// Defaults, then `.env`, then the process environment.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(ENV_FILE))
    }

    pub fn load_from(env_file: &Path) -> Result<Self> {
        let settings = Self::default().with_env_file(env_file)?;
        Ok(settings.with_overrides(utf8_vars(std::env::vars_os())))
    }

    fn with_env_file(self, path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(self);
        }

        let entries = dotenvy::from_path_iter(path).map_err(|e| {
            Error::configuration(format!("cannot read {}: {e}", path.display()))
        })?;
        let vars = entries
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| Error::configuration(format!("malformed {}: {e}", path.display())))?;

        Ok(self.with_overrides(vars))
    }

    /// Applies `KEY=VALUE` pairs. Keys are case-insensitive; unknown keys are ignored.
    pub fn with_overrides<I>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        for (key, value) in vars {
            match key.to_ascii_uppercase().as_str() {
                "APP_NAME" => self.app_name = value,
                "LOG_LEVEL" => self.log_level = value,
                _ => {}
            }
        }
        self
    }

    /// Settings as a flat record keyed by environment variable name.
    pub fn to_record(&self) -> Map<String, Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        }
    }
}

/// Pairs whose key or value is not valid UTF-8 cannot name a setting and are skipped.
fn utf8_vars<I>(vars: I) -> impl Iterator<Item = (String, String)>
where
    I: IntoIterator<Item = (OsString, OsString)>,
{
    vars.into_iter()
        .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;
    use veil::ErrorKind;

    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn defaults() {
        let settings = Settings::default();
        assert_eq!(settings.app_name, "veil");
        assert_eq!(settings.log_level, "INFO");
    }

    #[test]
    fn overrides_ignore_key_case_and_unknown_keys() {
        let settings = Settings::default().with_overrides(vars(&[
            ("log_level", "debug"),
            ("App_Name", "demo"),
            ("DATABASE_URL", "postgres://"),
        ]));
        assert_eq!(settings.app_name, "demo");
        assert_eq!(settings.log_level, "debug");
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_variables_are_skipped() {
        use std::os::unix::ffi::OsStringExt;

        let vars = vec![
            (OsString::from("UNRELATED_VAR"), OsString::from_vec(b"f\xffo".to_vec())),
            (OsString::from_vec(b"K\xffY".to_vec()), OsString::from("v")),
            (OsString::from("APP_NAME"), OsString::from("demo")),
        ];
        let settings = Settings::default().with_overrides(utf8_vars(vars));
        assert_eq!(settings.app_name, "demo");
        assert_eq!(settings.log_level, "INFO");
    }

    #[test]
    fn reads_env_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".env");
        fs::write(&path, "# local overrides\nAPP_NAME=\"from-file\"\nLOG_LEVEL=WARNING\nEXTRA=1\n")
            .unwrap();

        let settings = Settings::default().with_env_file(&path).unwrap();
        assert_eq!(settings.app_name, "from-file");
        assert_eq!(settings.log_level, "WARNING");
    }

    #[test]
    fn missing_env_file_keeps_defaults() {
        let dir = TempDir::new().unwrap();
        let settings = Settings::default()
            .with_env_file(&dir.path().join(".env"))
            .unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn malformed_env_file_is_a_configuration_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".env");
        fs::write(&path, "APP_NAME='unterminated\n").unwrap();

        let err = Settings::default().with_env_file(&path).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn record_uses_variable_names() {
        let record = Settings::default().to_record();
        assert_eq!(record["APP_NAME"], "veil");
        assert_eq!(record["LOG_LEVEL"], "INFO");
        let keys: Vec<&str> = record.keys().map(String::as_str).collect();
        assert_eq!(keys, ["APP_NAME", "LOG_LEVEL"]);
    }
}
