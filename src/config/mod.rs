//! Display and export preferences. Ledger data is never stored here.

use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::errors::{LedgerError, Result};
use crate::utils::app_data_dir;

const CONFIG_FILE: &str = "config.json";
const TMP_SUFFIX: &str = "tmp";

pub const CONFIG_KEYS: [&str; 3] = ["currency", "export_file", "plain_output"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub currency: String,
    pub export_file: String,
    pub plain_output: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency: "RM".into(),
            export_file: "my_expenses.csv".into(),
            plain_output: false,
        }
    }
}

impl Config {
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "currency" => Some(self.currency.clone()),
            "export_file" => Some(self.export_file.clone()),
            "plain_output" => Some(self.plain_output.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let value = value.trim();
        match key {
            "currency" => {
                if value.is_empty() {
                    return Err(LedgerError::Config("currency label cannot be empty".into()));
                }
                self.currency = value.to_string();
            }
            "export_file" => {
                if value.is_empty() {
                    return Err(LedgerError::Config("export file cannot be empty".into()));
                }
                self.export_file = value.to_string();
            }
            "plain_output" => {
                self.plain_output = parse_flag(value).ok_or_else(|| {
                    LedgerError::Config(format!("`{value}` is not a valid on/off value"))
                })?;
            }
            other => {
                return Err(LedgerError::Config(format!(
                    "unknown key `{other}` (expected one of: {})",
                    CONFIG_KEYS.join(", ")
                )))
            }
        }
        Ok(())
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Some(true),
        "false" | "off" | "no" | "0" => Some(false),
        _ => None,
    }
}

/// Loads and saves [`Config`] as JSON inside the application data directory.
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self> {
        Self::with_base_dir(app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self> {
        fs::create_dir_all(&base)?;
        Ok(Self {
            path: base.join(CONFIG_FILE),
        })
    }

    /// Returns defaults when no configuration has been saved yet.
    pub fn load(&self) -> Result<Config> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        let mut file = File::create(&tmp)?;
        file.write_all(json.as_bytes())?;
        file.flush()?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{existing}.{TMP_SUFFIX}"),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_get_known_keys() {
        let mut config = Config::default();
        config.set("currency", " USD ").unwrap();
        config.set("plain_output", "on").unwrap();
        assert_eq!(config.get("currency").as_deref(), Some("USD"));
        assert_eq!(config.get("plain_output").as_deref(), Some("true"));
    }

    #[test]
    fn rejects_unknown_key_and_bad_flag() {
        let mut config = Config::default();
        assert!(matches!(config.set("theme", "dark"), Err(LedgerError::Config(_))));
        assert!(matches!(config.set("plain_output", "maybe"), Err(LedgerError::Config(_))));
        assert!(matches!(config.set("currency", "  "), Err(LedgerError::Config(_))));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn tmp_path_appends_suffix() {
        let tmp = tmp_path(Path::new("/data/config.json"));
        assert_eq!(tmp, PathBuf::from("/data/config.json.tmp"));
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config: Config = serde_json::from_str(r#"{"currency":"EUR"}"#).unwrap();
        assert_eq!(config.currency, "EUR");
        assert_eq!(config.export_file, "my_expenses.csv");
    }
}
