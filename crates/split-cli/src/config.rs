use serde::Deserialize;
use split_calculator::{Catalog, CatalogError};
use split_types::AllocationMethod;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

pub const CONFIG_PATH_ENV: &str = "SALARY_SPLIT_CONFIG_PATH";
pub const DEFAULT_CONFIG_FILE: &str = "salary-split.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration error: cannot read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: cannot parse '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Configuration error: invalid custom method: {0}")]
    Catalog(#[from] CatalogError),
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct DisplayConfig {
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default = "default_decimals")]
    pub decimals: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { currency: default_currency(), decimals: default_decimals() }
    }
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct SplitConfig {
    /// Method used when `--method` is not given; the catalog's first entry when unset.
    #[serde(default)]
    pub default_method: Option<String>,
    #[serde(default)]
    pub display: DisplayConfig,
    /// User-authored methods appended after the built-in ones.
    #[serde(default)]
    pub methods: Vec<AllocationMethod>,
}

impl SplitConfig {
    /// Loads the configuration file.
    ///
    /// An explicit `path` must exist. Otherwise the path comes from
    /// `SALARY_SPLIT_CONFIG_PATH` or defaults to `salary-split.toml`, and a
    /// missing file falls back to the default configuration.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with(path, |key| std::env::var(key).ok())
    }

    /// [`SplitConfig::load`] with environment lookups routed through `lookup`.
    pub fn load_with(
        path: Option<&Path>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let (config_path, explicit) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => {
                let path = lookup(CONFIG_PATH_ENV).unwrap_or_else(|| DEFAULT_CONFIG_FILE.to_string());
                (PathBuf::from(path), false)
            }
        };

        let config_str = match fs::read_to_string(&config_path) {
            Ok(contents) => contents,
            Err(err) if !explicit && err.kind() == std::io::ErrorKind::NotFound => {
                warn!(
                    "Configuration file '{}' not found. Using default configuration.",
                    config_path.display()
                );
                return Ok(Self::default());
            }
            Err(source) => return Err(ConfigError::Io { path: config_path, source }),
        };

        let config = Self::from_toml_str(&config_str)
            .map_err(|source| ConfigError::Parse { path: config_path.clone(), source })?;
        info!(
            path = %config_path.display(),
            custom_methods = config.methods.len(),
            "Loaded configuration"
        );
        Ok(config)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Applies `SALARY_SPLIT_*` environment overrides.
    pub fn apply_env_overrides(self) -> Self {
        self.apply_overrides_from(|key| std::env::var(key).ok())
    }

    pub fn apply_overrides_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(currency) = lookup("SALARY_SPLIT_CURRENCY") {
            self.display.currency = currency;
        }
        if let Some(decimals) = lookup("SALARY_SPLIT_DECIMALS") {
            match decimals.parse::<usize>() {
                Ok(decimals) => self.display.decimals = decimals,
                Err(_) => warn!(value = %decimals, "ignoring non-numeric SALARY_SPLIT_DECIMALS"),
            }
        }
        if let Some(method) = lookup("SALARY_SPLIT_DEFAULT_METHOD") {
            self.default_method = Some(method);
        }
        self
    }

    /// Built-in catalog extended with the configured methods.
    pub fn catalog(&self) -> Result<Catalog, ConfigError> {
        Ok(Catalog::with_extra(self.methods.clone())?)
    }
}

fn default_currency() -> String {
    "dh".to_string()
}

fn default_decimals() -> usize {
    2
}
