//! Vitrina financing engine
//!
//! Facade over the workspace crates: the narrow, UI-agnostic API the
//! storefront's view layer consumes. The engine is pure and synchronous;
//! the caller fetches plan and association records, hands them over through
//! the store traits, and renders whatever comes back.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use rust_decimal_macros::dec;
//! use vitrina::{
//!     formatear_precio, AsociacionesEnMemoria, FinanciacionConfig,
//!     FinanciacionService, ItemRef, PlanFinanciacion, PlanesEnMemoria,
//! };
//!
//! let plan = PlanFinanciacion {
//!     id: 3,
//!     nombre: Some("12 Cuotas".to_string()),
//!     cuotas: 12,
//!     recargo_porcentual: dec!(30),
//!     recargo_fijo: dec!(0),
//!     monto_minimo: None,
//!     monto_maximo: None,
//!     anticipo_minimo: None,
//!     anticipo_minimo_fijo: None,
//!     descuento_contado: None,
//!     activo: true,
//!     created_at: chrono::Utc::now(),
//!     updated_at: chrono::Utc::now(),
//! };
//!
//! let mut asociaciones = AsociacionesEnMemoria::new();
//! asociaciones.asociar_default(ItemRef::Producto(1), 3);
//!
//! let service = FinanciacionService::new(
//!     Arc::new(PlanesEnMemoria::con_planes(vec![plan])),
//!     Arc::new(asociaciones),
//!     FinanciacionConfig::default(),
//! );
//!
//! let resolucion = service.resolver_planes_producto("1");
//! let ofertables = service.planes_ofertables(dec!(120000), &resolucion.planes);
//! let cuota = service.cotizar(dec!(120000), &ofertables[0]).unwrap();
//! assert_eq!(formatear_precio(cuota.cuota_mensual), "13.000");
//! ```

pub use vitrina_core::config::FinanciacionConfig;
pub use vitrina_core::error::AppError;
pub use vitrina_core::format::formatear_precio;
pub use vitrina_core::models::{
    Articulo, AsociacionPlan, Categoria, Combo, CuotaCalculada, ItemRef, Marca, PlanFinanciacion,
    Producto, TipoPlanes,
};
pub use vitrina_core::pricing::{
    calcular_anticipo, calcular_cuota, descuento_contado, precio_contado, precio_electro,
    redondear_anticipo, redondear_cuota,
};
pub use vitrina_core::seleccion::seleccionar_planes;
pub use vitrina_core::traits::{AsociacionStore, Clock, PlanStore, SystemClock};
pub use vitrina_core::AppResult;

pub use vitrina_cache::{ReferenciaCache, Referencias, TtlCache, REFERENCIA_TTL_SECS};

pub use vitrina_services::{
    AsociacionesEnMemoria, FinanciacionService, PlanesEnMemoria, ResolucionPlanes,
};
