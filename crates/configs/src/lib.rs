use anyhow::Result;
use serde::Deserialize;
use anyhow::anyhow;
use std::path::PathBuf;

pub const DEFAULT_CONFIG_PATH: &str = "config.toml";
pub const DEFAULT_DATA_FILE: &str = "inventory.json";
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 5;
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub inventory: InventoryConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InventoryConfig {
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,
    #[serde(default = "default_low_stock_threshold")]
    pub low_stock_threshold: i64,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self { data_file: default_data_file(), low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_filter")]
    pub filter: String,
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { filter: default_log_filter(), json: false }
    }
}

fn default_data_file() -> PathBuf { PathBuf::from(DEFAULT_DATA_FILE) }
fn default_low_stock_threshold() -> i64 { DEFAULT_LOW_STOCK_THRESHOLD }
fn default_log_filter() -> String { DEFAULT_LOG_FILTER.to_string() }

/// Path of the config file: `$CONFIG_PATH`, else `config.toml`.
pub fn config_path() -> String {
    std::env::var("CONFIG_PATH").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string())
}

pub fn load_default() -> Result<AppConfig> {
    load_from_file(&config_path())
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    parse(&content)
}

pub fn parse(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

impl AppConfig {
    /// Load from [`config_path`]. A missing file yields defaults; an unreadable
    /// or invalid one is an error the caller decides how to surface.
    pub fn load_and_validate() -> Result<Self> {
        let path = config_path();
        let mut cfg = match std::fs::metadata(&path) {
            Ok(_) => load_from_file(&path)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => AppConfig::default(),
            Err(e) => return Err(anyhow!("cannot read {path}: {e}")),
        };
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.inventory.normalize()?;
        self.logging.normalize();
        Ok(())
    }
}

impl InventoryConfig {
    fn normalize(&mut self) -> Result<()> {
        let raw = self.data_file.to_string_lossy().into_owned();
        if raw.trim().is_empty() {
            self.data_file = default_data_file();
            return Ok(());
        }
        if raw.ends_with('/') || raw.ends_with(std::path::MAIN_SEPARATOR) {
            return Err(anyhow!("inventory.data_file must name a file, got directory path {raw}"));
        }
        Ok(())
    }
}

impl LoggingConfig {
    fn normalize(&mut self) {
        if self.filter.trim().is_empty() {
            self.filter = default_log_filter();
        }
    }
}
