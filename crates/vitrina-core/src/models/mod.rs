//! Domain models for Vitrina
//!
//! This module contains all the core domain models used throughout the engine.

pub mod asociacion;
pub mod catalogo;
pub mod cuota;
pub mod item;
pub mod plan;

pub use asociacion::{AsociacionPlan, ItemRef, TipoPlanes};
pub use catalogo::{Categoria, Marca};
pub use cuota::CuotaCalculada;
pub use item::{Articulo, Combo, Producto};
pub use plan::PlanFinanciacion;
