//! Financing plan model
//!
//! A `PlanFinanciacion` is a named installment offer: a number of cuotas,
//! a surcharge (percentage plus fixed), optional price-band gating, and
//! optional down-payment requirements. A plan with `cuotas == 1` is the
//! cash ("contado") plan and is always a distinguished case.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Financing plan entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanFinanciacion {
    /// Unique plan ID
    pub id: i32,

    /// Display name (e.g., "12 Cuotas", "Contado 15%off")
    pub nombre: Option<String>,

    /// Number of installments; 1 denotes the cash plan
    pub cuotas: i32,

    /// Percentage surcharge applied to the price
    pub recargo_porcentual: Decimal,

    /// Fixed surcharge added to the price
    pub recargo_fijo: Decimal,

    /// Minimum base price required to qualify (absent or < 1 means none)
    pub monto_minimo: Option<Decimal>,

    /// Maximum base price allowed (absent or zero means none)
    pub monto_maximo: Option<Decimal>,

    /// Percentage-of-price down payment
    pub anticipo_minimo: Option<Decimal>,

    /// Fixed down payment; wins over the percentage when present and > 0
    pub anticipo_minimo_fijo: Option<Decimal>,

    /// Cash discount percentage; when absent the name-parsing fallback applies
    pub descuento_contado: Option<Decimal>,

    /// Whether this plan is active/selectable
    pub activo: bool,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl PlanFinanciacion {
    /// Check if plan is valid for use
    pub fn es_activo(&self) -> bool {
        self.activo
    }

    /// Check if this is the cash ("contado") plan
    pub fn es_contado(&self) -> bool {
        self.cuotas == 1
    }

    /// Check if the plan carries a meaningful minimum amount
    ///
    /// Values below `umbral` count as "no minimum": legacy data uses tiny
    /// placeholders such as 0.01 for unrestricted plans.
    pub fn tiene_minimo_significativo(&self, umbral: Decimal) -> bool {
        self.monto_minimo.map_or(false, |minimo| minimo >= umbral)
    }

    /// Raw price-band gate: does the price fall inside [monto_minimo, monto_maximo]?
    ///
    /// This is the calculator's gate. It grants no cash-plan exemption; the
    /// selection filter owns that policy.
    pub fn aplica_para_precio(&self, precio: Decimal) -> bool {
        if let Some(minimo) = self.monto_minimo {
            if precio < minimo {
                return false;
            }
        }
        match self.monto_maximo {
            Some(maximo) if !maximo.is_zero() && precio > maximo => false,
            _ => true,
        }
    }

    /// Validate plan configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.cuotas < 1 {
            return Err("Cuotas must be at least 1".to_string());
        }

        if self.recargo_porcentual < Decimal::ZERO {
            return Err("Percentage surcharge cannot be negative".to_string());
        }

        if self.recargo_fijo < Decimal::ZERO {
            return Err("Fixed surcharge cannot be negative".to_string());
        }

        if self.anticipo_minimo.map_or(false, |a| a < Decimal::ZERO) {
            return Err("Down-payment percentage cannot be negative".to_string());
        }

        if self.anticipo_minimo_fijo.map_or(false, |a| a < Decimal::ZERO) {
            return Err("Fixed down payment cannot be negative".to_string());
        }

        if let (Some(minimo), Some(maximo)) = (self.monto_minimo, self.monto_maximo) {
            if !maximo.is_zero() && minimo > maximo {
                return Err("monto_minimo cannot exceed monto_maximo".to_string());
            }
        }

        Ok(())
    }
}
