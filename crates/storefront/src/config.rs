//! Runtime configuration read from `STOREFRONT_*` environment variables.

use crate::model::StockPolicy;
use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_CHANNEL_CAPACITY: usize = 32;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {value:?}")]
    InvalidValue { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct StorefrontConfig {
    /// Directory for the JSON snapshots. `None` keeps everything in memory.
    pub data_dir: Option<PathBuf>,
    /// Request buffer of each actor.
    pub channel_capacity: usize,
    pub stock_policy: StockPolicy,
    /// Add the starter product when no catalog has been saved yet.
    pub seed_catalog: bool,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
            stock_policy: StockPolicy::Floor,
            seed_catalog: true,
        }
    }
}

impl StorefrontConfig {
    /// Reads `STOREFRONT_DATA_DIR`, `STOREFRONT_CHANNEL_CAPACITY`,
    /// `STOREFRONT_STOCK_POLICY` (`floor` or `strict`) and `STOREFRONT_SEED`.
    /// Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Same as [`StorefrontConfig::from_env`] with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(dir) = lookup("STOREFRONT_DATA_DIR").filter(|d| !d.trim().is_empty()) {
            config.data_dir = Some(PathBuf::from(dir));
        }
        if let Some(value) = lookup("STOREFRONT_CHANNEL_CAPACITY") {
            config.channel_capacity = value
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|capacity| *capacity > 0)
                .ok_or(ConfigError::InvalidValue {
                    var: "STOREFRONT_CHANNEL_CAPACITY",
                    value,
                })?;
        }
        if let Some(value) = lookup("STOREFRONT_STOCK_POLICY") {
            config.stock_policy = match value.trim().to_ascii_lowercase().as_str() {
                "floor" => StockPolicy::Floor,
                "strict" => StockPolicy::Strict,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        var: "STOREFRONT_STOCK_POLICY",
                        value,
                    })
                }
            };
        }
        if let Some(value) = lookup("STOREFRONT_SEED") {
            config.seed_catalog = match value.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" => false,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        var: "STOREFRONT_SEED",
                        value,
                    })
                }
            };
        }
        Ok(config)
    }
}
