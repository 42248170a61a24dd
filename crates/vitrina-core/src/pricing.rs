//! Installment, surcharge, and down-payment calculators
//!
//! Pure functions over (price, plan) pairs. Every function here is free of
//! side effects and safe to call concurrently; the caller supplies all data.
//!
//! Rounding follows retail convention for the target market: installments at
//! or above 50 are quoted in round hundreds, down payments at or above 50 are
//! rounded up to the next multiple of 50, and smaller amounts keep cent
//! precision.

use regex::Regex;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use std::sync::OnceLock;

use crate::models::{CuotaCalculada, PlanFinanciacion};

/// Threshold below which a plan's monto_minimo counts as "no minimum"
pub const UMBRAL_SIN_MINIMO: Decimal = dec!(1);

/// Fixed percentage markup of the electro price basis
pub const RECARGO_ELECTRO_PORCENTUAL: Decimal = dec!(10);

/// Cash discount percentage used when a plan declares none
pub const DESCUENTO_CONTADO_DEFAULT: Decimal = dec!(20);

/// Amounts at or above this are rounded to whole hundreds (installments)
/// or up to the next fifty (down payments)
const UMBRAL_REDONDEO: Decimal = dec!(50);

const CIEN: Decimal = dec!(100);
const PASO_ANTICIPO: Decimal = dec!(50);

/// Round a monthly installment for display
///
/// At or above 50 the amount is rounded to the nearest multiple of 100, with
/// midpoints going away from zero (150 rounds to 200). Below 50 the amount is
/// rounded to 2 decimal places.
pub fn redondear_cuota(cuota: Decimal) -> Decimal {
    if cuota >= UMBRAL_REDONDEO {
        (cuota / CIEN).round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero) * CIEN
    } else {
        cuota.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    }
}

/// Round a down payment for display
///
/// At or above 50 the amount is rounded UP to the next multiple of 50: a
/// minimum required payment is never understated. Below 50 the amount is
/// rounded to 2 decimal places.
pub fn redondear_anticipo(anticipo: Decimal) -> Decimal {
    if anticipo >= UMBRAL_REDONDEO {
        (anticipo / PASO_ANTICIPO).ceil() * PASO_ANTICIPO
    } else {
        anticipo.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    }
}

/// The electro price basis: base price plus the fixed markup
pub fn precio_electro(precio: Decimal) -> Decimal {
    precio + precio * RECARGO_ELECTRO_PORCENTUAL / CIEN
}

/// Compute the quote for one (price, plan) pair
///
/// Returns `None` when the price falls outside the plan's raw min/max band;
/// callers skip such plans in display. The electro installment runs the same
/// surcharge pipeline over the inflated price basis.
pub fn calcular_cuota(precio: Decimal, plan: &PlanFinanciacion) -> Option<CuotaCalculada> {
    if !plan.aplica_para_precio(precio) {
        return None;
    }

    let recargo = precio * plan.recargo_porcentual / CIEN + plan.recargo_fijo;
    let precio_final = precio + recargo;

    let cuotas = Decimal::from(plan.cuotas);
    let cuota_mensual = redondear_cuota(precio_final / cuotas);

    let base_electro = precio_electro(precio);
    let recargo_electro = base_electro * plan.recargo_porcentual / CIEN + plan.recargo_fijo;
    let precio_final_electro = base_electro + recargo_electro;
    let cuota_mensual_electro = redondear_cuota(precio_final_electro / cuotas);

    Some(CuotaCalculada {
        precio_original: precio,
        recargo_total: recargo,
        precio_final,
        cuota_mensual,
        cuotas: plan.cuotas,
        recargo_porcentual: plan.recargo_porcentual,
        precio_electro: base_electro,
        precio_final_electro,
        cuota_mensual_electro,
        anticipo: calcular_anticipo(precio, plan),
    })
}

/// Compute the minimum required down payment for a plan
///
/// A fixed down payment wins over the percentage when present and positive.
pub fn calcular_anticipo(precio: Decimal, plan: &PlanFinanciacion) -> Decimal {
    let anticipo = if let Some(fijo) = plan.anticipo_minimo_fijo.filter(|f| *f > Decimal::ZERO) {
        fijo
    } else if let Some(pct) = plan.anticipo_minimo.filter(|p| *p > Decimal::ZERO) {
        precio * pct / CIEN
    } else {
        Decimal::ZERO
    };

    redondear_anticipo(anticipo)
}

fn descuento_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d+)%").expect("static pattern"))
}

/// The cash discount percentage for a plan
///
/// Precedence: the plan's `descuento_contado` field when set and positive,
/// else the first integer immediately followed by '%' in the plan name
/// (legacy data encodes the discount there, e.g. "Contado 15%off"), else
/// `descuento_default`. The name parsing lives only here.
pub fn descuento_contado(plan: &PlanFinanciacion, descuento_default: Decimal) -> Decimal {
    if let Some(descuento) = plan.descuento_contado.filter(|d| *d > Decimal::ZERO) {
        return descuento;
    }

    if let Some(nombre) = &plan.nombre {
        if let Some(captura) = descuento_regex().captures(nombre) {
            if let Ok(valor) = captura[1].parse::<u32>() {
                return Decimal::from(valor);
            }
        }
    }

    descuento_default
}

/// Cash display price: base price less the plan's cash discount
///
/// Cash plans are a discount offer, not an installment computation, even
/// though they share the plan record shape.
pub fn precio_contado(
    precio: Decimal,
    plan: &PlanFinanciacion,
    descuento_default: Decimal,
) -> Decimal {
    let descuento = descuento_contado(plan, descuento_default);
    precio * (Decimal::ONE - descuento / CIEN)
}
