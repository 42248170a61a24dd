//! Computed installment quote
//!
//! `CuotaCalculada` is the derived result of running one (price, plan) pair
//! through the surcharge and installment pipeline. It is immutable and never
//! persisted; callers materialize it per request.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Quote for one (price, plan) pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CuotaCalculada {
    /// Base price the quote was computed from
    pub precio_original: Decimal,

    /// Total surcharge (percentage plus fixed), full precision
    pub recargo_total: Decimal,

    /// Price after surcharge, full precision
    pub precio_final: Decimal,

    /// Rounded monthly installment
    pub cuota_mensual: Decimal,

    /// Number of installments (echoed from the plan)
    pub cuotas: i32,

    /// Percentage surcharge (echoed from the plan)
    pub recargo_porcentual: Decimal,

    /// Electro price basis (base price plus fixed markup)
    pub precio_electro: Decimal,

    /// Electro price after surcharge, full precision
    pub precio_final_electro: Decimal,

    /// Rounded monthly installment on the electro basis
    pub cuota_mensual_electro: Decimal,

    /// Minimum required down payment
    pub anticipo: Decimal,
}

impl CuotaCalculada {
    /// Whether the plan added no surcharge at all ("Cuotas Sin interés")
    pub fn es_sin_interes(&self) -> bool {
        self.recargo_total.is_zero()
    }
}
