//! Sellable item models
//!
//! Products and combos share the subset of fields the financing engine
//! consumes (id, price, association key); `Articulo` is the discriminated
//! union over both so pricing code never depends on either concrete shape.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::asociacion::ItemRef;

/// Catalog product
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Producto {
    /// Unique product ID
    pub id: i32,

    /// Display description
    pub descripcion: String,

    /// Base list price
    pub precio: Decimal,

    /// Featured on the home page
    pub destacado: bool,

    /// Whether the product is active
    pub activo: bool,

    /// Category foreign key
    pub fk_id_categoria: Option<i32>,

    /// Brand foreign key
    pub fk_id_marca: Option<i32>,
}

/// Product bundle sold at a single price
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Combo {
    /// Unique combo ID
    pub id: i32,

    /// Display name
    pub nombre: String,

    /// Optional longer description
    pub descripcion: Option<String>,

    /// Bundle price
    pub precio: Decimal,

    /// Whether the combo is active
    pub activo: bool,

    /// Start of the validity window (None = no lower bound)
    pub fecha_vigencia_inicio: Option<DateTime<Utc>>,

    /// End of the validity window (None = no expiry)
    pub fecha_vigencia_fin: Option<DateTime<Utc>>,
}

impl Combo {
    /// Check if the combo is inside its validity window at `ahora`
    pub fn es_vigente(&self, ahora: DateTime<Utc>) -> bool {
        if let Some(inicio) = self.fecha_vigencia_inicio {
            if ahora < inicio {
                return false;
            }
        }
        if let Some(fin) = self.fecha_vigencia_fin {
            if ahora > fin {
                return false;
            }
        }
        true
    }
}

/// A sellable item: either a product or a combo
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Articulo {
    Producto(Producto),
    Combo(Combo),
}

impl Articulo {
    /// The item's row id
    pub fn id(&self) -> i32 {
        match self {
            Articulo::Producto(p) => p.id,
            Articulo::Combo(c) => c.id,
        }
    }

    /// The item's base price, the input to every pricing computation
    pub fn precio(&self) -> Decimal {
        match self {
            Articulo::Producto(p) => p.precio,
            Articulo::Combo(c) => c.precio,
        }
    }

    /// The association-lookup key for this item
    pub fn item_ref(&self) -> ItemRef {
        match self {
            Articulo::Producto(p) => ItemRef::Producto(p.id),
            Articulo::Combo(c) => ItemRef::Combo(c.id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use rust_decimal_macros::dec;

    fn create_test_combo() -> Combo {
        Combo {
            id: 9,
            nombre: "Combo Cocina".to_string(),
            descripcion: None,
            precio: dec!(250000),
            activo: true,
            fecha_vigencia_inicio: None,
            fecha_vigencia_fin: None,
        }
    }

    #[test]
    fn test_combo_without_window_is_always_valid() {
        let combo = create_test_combo();
        assert!(combo.es_vigente(Utc::now()));
    }

    #[test]
    fn test_combo_before_window() {
        let now = Utc::now();
        let mut combo = create_test_combo();
        combo.fecha_vigencia_inicio = Some(now + Duration::hours(1));
        assert!(!combo.es_vigente(now));
    }

    #[test]
    fn test_combo_after_window() {
        let now = Utc::now();
        let mut combo = create_test_combo();
        combo.fecha_vigencia_fin = Some(now - Duration::hours(1));
        assert!(!combo.es_vigente(now));
    }

    #[test]
    fn test_combo_inside_window() {
        let now = Utc::now();
        let mut combo = create_test_combo();
        combo.fecha_vigencia_inicio = Some(now - Duration::days(1));
        combo.fecha_vigencia_fin = Some(now + Duration::days(1));
        assert!(combo.es_vigente(now));
    }

    #[test]
    fn test_articulo_common_subset() {
        let producto = Producto {
            id: 4,
            descripcion: "Heladera".to_string(),
            precio: dec!(800000),
            destacado: false,
            activo: true,
            fk_id_categoria: Some(2),
            fk_id_marca: Some(1),
        };

        let articulo = Articulo::Producto(producto);
        assert_eq!(articulo.id(), 4);
        assert_eq!(articulo.precio(), dec!(800000));
        assert_eq!(articulo.item_ref(), ItemRef::Producto(4));

        let articulo = Articulo::Combo(create_test_combo());
        assert_eq!(articulo.item_ref(), ItemRef::Combo(9));
    }
}
