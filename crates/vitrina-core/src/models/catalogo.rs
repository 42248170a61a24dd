//! Catalog reference data
//!
//! Categories and brands are small lookup tables the caller fetches once and
//! caches; the engine only consumes them for display enrichment.

use serde::{Deserialize, Serialize};

/// Product category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Categoria {
    /// Unique category ID
    pub id: i32,

    /// Display description
    pub descripcion: String,
}

/// Product brand
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Marca {
    /// Unique brand ID
    pub id: i32,

    /// Display description
    pub descripcion: String,
}
