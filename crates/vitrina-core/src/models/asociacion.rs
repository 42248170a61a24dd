//! Plan association model
//!
//! Items are linked to financing plans in two tiers: *special* associations
//! (explicit per-item overrides) and *default* associations (catalog-wide
//! fallbacks). If any special association exists for an item, defaults are
//! ignored entirely for that item.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Key of a sellable item in association lookups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemRef {
    Producto(i32),
    Combo(i32),
}

impl ItemRef {
    /// The underlying row id, regardless of item kind
    pub fn id(&self) -> i32 {
        match self {
            ItemRef::Producto(id) | ItemRef::Combo(id) => *id,
        }
    }
}

impl fmt::Display for ItemRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemRef::Producto(id) => write!(f, "producto:{}", id),
            ItemRef::Combo(id) => write!(f, "combo:{}", id),
        }
    }
}

/// Link between a sellable item and a financing plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AsociacionPlan {
    /// Unique association ID
    pub id: i32,

    /// Item this association applies to
    pub item: ItemRef,

    /// Linked plan ID
    pub fk_id_plan: i32,

    /// Whether the association is active
    pub activo: bool,
}

/// Resolution tier of an item's plan set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TipoPlanes {
    /// Per-item special associations won
    #[serde(rename = "especiales")]
    Especiales,

    /// Catalog-wide default associations won
    #[serde(rename = "default")]
    PorDefecto,

    /// No associations resolved; the item displays no financing options
    #[serde(rename = "ninguno")]
    Ninguno,
}

impl TipoPlanes {
    pub fn as_str(&self) -> &'static str {
        match self {
            TipoPlanes::Especiales => "especiales",
            TipoPlanes::PorDefecto => "default",
            TipoPlanes::Ninguno => "ninguno",
        }
    }
}

impl fmt::Display for TipoPlanes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
