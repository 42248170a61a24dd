//! Plan eligibility selection
//!
//! Given a price and a resolved candidate set, decide which plans are
//! actually offerable. The cash plan is always offerable; plans without a
//! meaningful minimum are offerable at any price; plans with a minimum are
//! gated on the price band. When both targeted (has-minimum) and generic
//! (no-minimum) plans qualify, only the targeted ones survive: an explicit
//! minimum marks a deliberately aimed offer.

use rust_decimal::Decimal;

use crate::models::PlanFinanciacion;
use crate::pricing;

/// Select the offerable plans for a price, ordered by monthly installment
///
/// Output is sorted ascending by the computed installment, tie-broken by
/// plan id; plans whose quote is not applicable under the raw band gate
/// sort last.
pub fn seleccionar_planes(
    precio: Decimal,
    planes: &[PlanFinanciacion],
    umbral_sin_minimo: Decimal,
) -> Vec<PlanFinanciacion> {
    let califican: Vec<&PlanFinanciacion> = planes
        .iter()
        .filter(|plan| califica(precio, plan, umbral_sin_minimo))
        .collect();

    let con_minimo: Vec<&PlanFinanciacion> = califican
        .iter()
        .copied()
        .filter(|plan| !plan.es_contado() && plan.tiene_minimo_significativo(umbral_sin_minimo))
        .collect();
    let hay_sin_minimo = califican
        .iter()
        .any(|plan| !plan.es_contado() && !plan.tiene_minimo_significativo(umbral_sin_minimo));
    let contado = califican.iter().copied().find(|plan| plan.es_contado());

    let mut seleccionados: Vec<PlanFinanciacion> = if !con_minimo.is_empty() && hay_sin_minimo {
        let mut planes: Vec<PlanFinanciacion> = con_minimo.into_iter().cloned().collect();
        if let Some(contado) = contado {
            planes.push(contado.clone());
        }
        planes
    } else {
        califican.into_iter().cloned().collect()
    };

    seleccionados.sort_by_key(|plan| orden_por_cuota(precio, plan));
    seleccionados
}

/// Amount gate applied at selection time
///
/// Unlike the calculator's raw gate, the cash plan and no-minimum plans pass
/// unconditionally here.
fn califica(precio: Decimal, plan: &PlanFinanciacion, umbral_sin_minimo: Decimal) -> bool {
    if plan.es_contado() {
        return true;
    }

    if !plan.tiene_minimo_significativo(umbral_sin_minimo) {
        return true;
    }

    plan.aplica_para_precio(precio)
}

fn orden_por_cuota(precio: Decimal, plan: &PlanFinanciacion) -> (Decimal, i32) {
    match pricing::calcular_cuota(precio, plan) {
        Some(cuota) => (cuota.cuota_mensual, plan.id),
        None => (Decimal::MAX, plan.id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::UMBRAL_SIN_MINIMO;
    use chrono::Utc;
    use rust_decimal_macros::dec;

    fn create_test_plan(id: i32, cuotas: i32, monto_minimo: Option<Decimal>) -> PlanFinanciacion {
        PlanFinanciacion {
            id,
            nombre: None,
            cuotas,
            recargo_porcentual: dec!(10),
            recargo_fijo: dec!(0),
            monto_minimo,
            monto_maximo: None,
            anticipo_minimo: None,
            anticipo_minimo_fijo: None,
            descuento_contado: None,
            activo: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn ids(planes: &[PlanFinanciacion]) -> Vec<i32> {
        planes.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_contado_always_survives() {
        // Cash plan with an unsatisfied minimum still passes selection
        let mut contado = create_test_plan(1, 1, Some(dec!(900000)));
        contado.monto_maximo = Some(dec!(950000));

        let planes = vec![contado];
        let seleccion = seleccionar_planes(dec!(1000), &planes, UMBRAL_SIN_MINIMO);
        assert_eq!(ids(&seleccion), vec![1]);
    }

    #[test]
    fn test_minimum_priority_collapse() {
        let planes = vec![
            create_test_plan(1, 3, None),                 // generic, no minimum
            create_test_plan(2, 6, Some(dec!(50000))),    // targeted, satisfied
            create_test_plan(3, 1, None),                 // contado
        ];

        let seleccion = seleccionar_planes(dec!(80000), &planes, UMBRAL_SIN_MINIMO);

        // The generic plan is dropped, the targeted one and contado remain
        assert!(!ids(&seleccion).contains(&1));
        assert!(ids(&seleccion).contains(&2));
        assert!(ids(&seleccion).contains(&3));
    }

    #[test]
    fn test_no_collapse_when_minimum_not_satisfied() {
        let planes = vec![
            create_test_plan(1, 3, None),
            create_test_plan(2, 6, Some(dec!(500000))), // targeted, not satisfied
        ];

        let seleccion = seleccionar_planes(dec!(80000), &planes, UMBRAL_SIN_MINIMO);
        assert_eq!(ids(&seleccion), vec![1]);
    }

    #[test]
    fn test_tiny_minimo_counts_as_no_minimum() {
        let planes = vec![
            create_test_plan(1, 3, Some(dec!(0.01))),
            create_test_plan(2, 6, Some(dec!(50000))),
        ];

        let seleccion = seleccionar_planes(dec!(80000), &planes, UMBRAL_SIN_MINIMO);

        // 0.01 is below the threshold, so plan 1 is generic and collapses away
        assert_eq!(ids(&seleccion), vec![2]);
    }

    #[test]
    fn test_maximo_gates_targeted_plans() {
        let mut plan = create_test_plan(2, 6, Some(dec!(10000)));
        plan.monto_maximo = Some(dec!(50000));

        let planes = vec![plan];
        assert!(seleccionar_planes(dec!(60000), &planes, UMBRAL_SIN_MINIMO).is_empty());
        assert_eq!(
            ids(&seleccionar_planes(dec!(30000), &planes, UMBRAL_SIN_MINIMO)),
            vec![2]
        );
    }

    #[test]
    fn test_sorted_by_installment_ascending() {
        // Same price, more cuotas means a smaller installment
        let planes = vec![
            create_test_plan(1, 3, None),
            create_test_plan(2, 12, None),
            create_test_plan(3, 6, None),
        ];

        let seleccion = seleccionar_planes(dec!(120000), &planes, UMBRAL_SIN_MINIMO);
        assert_eq!(ids(&seleccion), vec![2, 3, 1]);
    }

    #[test]
    fn test_tie_break_by_plan_id() {
        let planes = vec![
            create_test_plan(9, 6, None),
            create_test_plan(4, 6, None),
        ];

        let seleccion = seleccionar_planes(dec!(120000), &planes, UMBRAL_SIN_MINIMO);
        assert_eq!(ids(&seleccion), vec![4, 9]);
    }

    #[test]
    fn test_empty_input() {
        assert!(seleccionar_planes(dec!(1000), &[], UMBRAL_SIN_MINIMO).is_empty());
    }
}
