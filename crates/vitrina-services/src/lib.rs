//! Business logic services for Vitrina
//!
//! This crate orchestrates the financing engine over the caller's stores:
//! plan resolution by priority tier, eligibility selection, and quoting.
//!
//! # Architecture
//!
//! - `FinanciacionService` owns its dependencies (stores plus config) and is
//!   generic over the store traits, so tests inject mocks and production
//!   injects whatever the data layer materializes
//! - Resolution never fails: store errors at a tier are logged and treated
//!   as zero results at that tier
//! - All operations are instrumented with tracing

pub mod financiacion;
pub mod memoria;

pub use financiacion::{FinanciacionService, ResolucionPlanes};
pub use memoria::{AsociacionesEnMemoria, PlanesEnMemoria};
