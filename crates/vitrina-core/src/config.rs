//! Application configuration
//!
//! Centralized configuration for the financing engine using the `config`
//! crate. Values can be loaded from config files and environment variables;
//! money-valued knobs are held as `f64` and converted to `Decimal` at the
//! use site.

use config::{Config, ConfigError, Environment, File};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::env;

use crate::pricing::{DESCUENTO_CONTADO_DEFAULT, UMBRAL_SIN_MINIMO};

/// Financing engine configuration
#[derive(Debug, Deserialize, Clone)]
pub struct FinanciacionConfig {
    /// Threshold below which a plan's monto_minimo counts as "no minimum"
    #[serde(default = "default_umbral_sin_minimo")]
    pub umbral_sin_minimo: f64,

    /// Cash-plan discount percentage used when a plan declares none
    #[serde(default = "default_descuento_contado")]
    pub descuento_contado_default: f64,

    /// TTL for cached reference data (categories, brands) in seconds
    #[serde(default = "default_referencia_ttl")]
    pub referencia_ttl_secs: u64,
}

fn default_umbral_sin_minimo() -> f64 {
    1.0
}

fn default_descuento_contado() -> f64 {
    20.0
}

fn default_referencia_ttl() -> u64 {
    300
}

impl FinanciacionConfig {
    /// Load configuration from environment and optional config file
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = Config::builder()
            // Start with default values
            .set_default("umbral_sin_minimo", 1.0)?
            .set_default("descuento_contado_default", 20.0)?
            .set_default("referencia_ttl_secs", 300)?
            // Load config file if exists
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Load from environment variables with VITRINA_ prefix
            .add_source(
                Environment::with_prefix("VITRINA")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(File::with_name(path))
            .add_source(Environment::with_prefix("VITRINA").separator("__"))
            .build()?;

        config.try_deserialize()
    }

    /// The "no minimum" threshold as a Decimal
    pub fn umbral(&self) -> Decimal {
        Decimal::from_f64(self.umbral_sin_minimo).unwrap_or(UMBRAL_SIN_MINIMO)
    }

    /// The default cash discount percentage as a Decimal
    pub fn descuento_contado(&self) -> Decimal {
        Decimal::from_f64(self.descuento_contado_default).unwrap_or(DESCUENTO_CONTADO_DEFAULT)
    }
}

impl Default for FinanciacionConfig {
    fn default() -> Self {
        Self {
            umbral_sin_minimo: 1.0,
            descuento_contado_default: 20.0,
            referencia_ttl_secs: 300,
        }
    }
}
