//! Unified error handling for Vitrina
//!
//! The financing engine signals "not applicable" outcomes with `Option` and
//! empty collections; `AppError` is reserved for the operations that are
//! genuinely fallible: store access, configuration loading, and validation.

use thiserror::Error;

/// Main application error type
///
/// All errors in the engine should be converted to this type.
#[derive(Error, Debug)]
pub enum AppError {
    // ==================== Store Errors ====================
    #[error("Store error: {0}")]
    Almacen(String),

    // ==================== Business Logic Errors ====================
    #[error("Plan not found: {0}")]
    PlanNoEncontrado(i32),

    #[error("Invalid item id: {0}")]
    ItemInvalido(String),

    // ==================== Validation Errors ====================
    #[error("Validation error: {0}")]
    Validacion(String),

    // ==================== Resource Errors ====================
    #[error("Not found: {0}")]
    NoEncontrado(String),

    // ==================== Internal Errors ====================
    #[error("Internal error: {0}")]
    Interno(String),

    #[error("Configuration error: {0}")]
    Configuracion(String),

    #[error("Serialization error: {0}")]
    Serializacion(String),
}

impl AppError {
    /// Returns the error code for logs and telemetry
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Almacen(_) => "store_error",
            AppError::PlanNoEncontrado(_) => "plan_not_found",
            AppError::ItemInvalido(_) => "invalid_item_id",
            AppError::Validacion(_) => "validation_error",
            AppError::NoEncontrado(_) => "not_found",
            AppError::Interno(_) => "internal_error",
            AppError::Configuracion(_) => "config_error",
            AppError::Serializacion(_) => "serialization_error",
        }
    }
}

// ==================== From implementations ====================

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serializacion(err.to_string())
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Configuracion(err.to_string())
    }
}
