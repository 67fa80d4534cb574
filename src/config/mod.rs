use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_dataset")]
    pub dataset: String,
    #[serde(default = "default_gate_username")]
    pub gate_username: String,
    #[serde(default = "default_gate_password")]
    pub gate_password: String,
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    #[serde(default = "default_report_title")]
    pub report_title: String,
}

fn default_dataset() -> String {
    Config::dataset_file().to_string_lossy().to_string()
}
fn default_gate_username() -> String {
    "admin".to_string()
}
fn default_gate_password() -> String {
    "mocpass".to_string()
}
fn default_smtp_host() -> String {
    "smtp.office365.com".to_string()
}
fn default_smtp_port() -> u16 {
    587
}
fn default_report_title() -> String {
    "MOC Summary Report".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self::with_dataset(Self::dataset_file())
    }
}

impl Config {
    fn with_dataset(path: PathBuf) -> Self {
        Self {
            dataset: path.to_string_lossy().to_string(),
            gate_username: default_gate_username(),
            gate_password: default_gate_password(),
            smtp_host: default_smtp_host(),
            smtp_port: default_smtp_port(),
            report_title: default_report_title(),
        }
    }

    /// Return the standard configuration directory (~/.mocboard)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".mocboard")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("mocboard.conf")
    }

    /// Return the default path of the dataset
    pub fn dataset_file() -> PathBuf {
        Self::config_dir().join("moc_records.csv")
    }

    /// Dataset path with `~/` expanded.
    pub fn dataset_path(&self) -> PathBuf {
        expand_tilde(&self.dataset)
    }

    /// Load configuration from the standard location, or defaults if not found.
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        Ok(cfg)
    }

    /// Resolve a user-supplied dataset path: `~/` is expanded and a relative
    /// path is taken from the current working directory.
    pub fn resolve_dataset(raw: &str) -> AppResult<PathBuf> {
        let p = expand_tilde(raw);
        if p.is_absolute() {
            Ok(p)
        } else {
            Ok(std::env::current_dir()?.join(p))
        }
    }

    /// Create the config directory and, unless `is_test`, write the config
    /// file. `dataset` must already be resolved (see `resolve_dataset`).
    /// Returns the resulting configuration.
    pub fn init_all(dataset: Option<PathBuf>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();
        let dataset_path = dataset.unwrap_or_else(Self::dataset_file);

        let config = Self::with_dataset(dataset_path);

        if !is_test {
            fs::create_dir_all(&dir)?;
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| AppError::Config(format!("cannot serialize config: {e}")))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        Ok(config)
    }
}
