// Fri Oct 16 2026 - Alex

use crate::ids::{get_table, IdsError, PciIdTable, ParseMode};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found: {0:?}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Validation error: {0}")]
    Validation(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Read this pci.ids instead of the compiled-in corpus.
    pub ids_file: Option<PathBuf>,
    pub parse_mode: ParseMode,
    pub log_level: String,
    pub json_output: bool,
    pub color: bool,
    pub search_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ids_file: None,
            parse_mode: ParseMode::Lenient,
            log_level: "warn".to_string(),
            json_output: false,
            color: true,
            search_limit: 50,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a JSON config. Not validated here; command-line overrides are
    /// applied first and the merged result is checked by the caller.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let contents = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&contents)?;

        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn with_ids_file(mut self, path: PathBuf) -> Self {
        self.ids_file = Some(path);
        self
    }

    pub fn with_parse_mode(mut self, mode: ParseMode) -> Self {
        self.parse_mode = mode;
        self
    }

    pub fn with_json_output(mut self, json: bool) -> Self {
        self.json_output = json;
        self
    }

    pub fn with_log_level(mut self, level: &str) -> Self {
        self.log_level = level.to_string();
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.search_limit == 0 {
            return Err("search_limit must be greater than 0".to_string());
        }
        if !matches!(
            self.log_level.to_lowercase().as_str(),
            "trace" | "debug" | "info" | "warn" | "error" | "off"
        ) {
            return Err(format!("Unknown log level: {}", self.log_level));
        }
        if self.parse_mode == ParseMode::Strict && self.ids_file.is_none() {
            return Err("strict parsing only applies to an ids_file".to_string());
        }
        Ok(())
    }

    /// The table this configuration selects: a file on disk, or the embedded global.
    pub fn open_table(&self) -> Result<Cow<'static, PciIdTable>, IdsError> {
        match &self.ids_file {
            Some(path) => PciIdTable::from_path(path, self.parse_mode).map(Cow::Owned),
            None => Ok(Cow::Borrowed(get_table())),
        }
    }
}
