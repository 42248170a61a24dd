//! In-memory store implementations
//!
//! The engine ships without a database layer: callers materialize plan and
//! association records per request and hand them over through these stores,
//! which also back the test suites. Lookups honor the same active-record
//! filtering a persistent store would apply.

use std::collections::HashMap;

use vitrina_core::models::{AsociacionPlan, ItemRef, PlanFinanciacion};
use vitrina_core::traits::{AsociacionStore, PlanStore};
use vitrina_core::AppResult;

/// Map-backed [`PlanStore`]
#[derive(Debug, Default)]
pub struct PlanesEnMemoria {
    planes: HashMap<i32, PlanFinanciacion>,
}

impl PlanesEnMemoria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from a plan list
    pub fn con_planes(planes: Vec<PlanFinanciacion>) -> Self {
        Self {
            planes: planes.into_iter().map(|p| (p.id, p)).collect(),
        }
    }

    /// Insert or replace a plan
    pub fn insertar(&mut self, plan: PlanFinanciacion) {
        self.planes.insert(plan.id, plan);
    }
}

impl PlanStore for PlanesEnMemoria {
    fn plan_por_id(&self, id: i32) -> AppResult<Option<PlanFinanciacion>> {
        Ok(self.planes.get(&id).filter(|p| p.activo).cloned())
    }

    fn planes_por_ids(&self, ids: &[i32]) -> AppResult<Vec<PlanFinanciacion>> {
        Ok(ids
            .iter()
            .filter_map(|id| self.planes.get(id))
            .filter(|p| p.activo)
            .cloned()
            .collect())
    }

    fn planes_activos(&self) -> AppResult<Vec<PlanFinanciacion>> {
        let mut planes: Vec<PlanFinanciacion> =
            self.planes.values().filter(|p| p.activo).cloned().collect();
        planes.sort_by_key(|p| (p.cuotas, p.id));
        Ok(planes)
    }
}

/// Two-tier, vec-backed [`AsociacionStore`]
#[derive(Debug, Default)]
pub struct AsociacionesEnMemoria {
    especiales: Vec<AsociacionPlan>,
    por_defecto: Vec<AsociacionPlan>,
}

impl AsociacionesEnMemoria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an active special association for an item
    pub fn asociar_especial(&mut self, item: ItemRef, plan_id: i32) {
        let id = (self.especiales.len() + 1) as i32;
        self.especiales.push(AsociacionPlan {
            id,
            item,
            fk_id_plan: plan_id,
            activo: true,
        });
    }

    /// Add an active default association for an item
    pub fn asociar_default(&mut self, item: ItemRef, plan_id: i32) {
        let id = (self.por_defecto.len() + 1) as i32;
        self.por_defecto.push(AsociacionPlan {
            id,
            item,
            fk_id_plan: plan_id,
            activo: true,
        });
    }

    /// Add a pre-built association to the given tier
    pub fn insertar(&mut self, asociacion: AsociacionPlan, especial: bool) {
        if especial {
            self.especiales.push(asociacion);
        } else {
            self.por_defecto.push(asociacion);
        }
    }

    fn ids_de(tier: &[AsociacionPlan], item: ItemRef) -> Vec<i32> {
        tier.iter()
            .filter(|a| a.activo && a.item == item)
            .map(|a| a.fk_id_plan)
            .collect()
    }
}

impl AsociacionStore for AsociacionesEnMemoria {
    fn especiales(&self, item: ItemRef) -> AppResult<Vec<i32>> {
        Ok(Self::ids_de(&self.especiales, item))
    }

    fn por_defecto(&self, item: ItemRef) -> AppResult<Vec<i32>> {
        Ok(Self::ids_de(&self.por_defecto, item))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rust_decimal_macros::dec;

    fn create_test_plan(id: i32, cuotas: i32, activo: bool) -> PlanFinanciacion {
        PlanFinanciacion {
            id,
            nombre: None,
            cuotas,
            recargo_porcentual: dec!(0),
            recargo_fijo: dec!(0),
            monto_minimo: None,
            monto_maximo: None,
            anticipo_minimo: None,
            anticipo_minimo_fijo: None,
            descuento_contado: None,
            activo,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_inactive_plans_are_hidden() {
        let store = PlanesEnMemoria::con_planes(vec![
            create_test_plan(1, 3, true),
            create_test_plan(2, 6, false),
        ]);

        assert!(store.plan_por_id(1).unwrap().is_some());
        assert!(store.plan_por_id(2).unwrap().is_none());

        let planes = store.planes_por_ids(&[1, 2, 3]).unwrap();
        assert_eq!(planes.len(), 1);
        assert_eq!(planes[0].id, 1);
    }

    #[test]
    fn test_active_plans_ordered_by_cuotas() {
        let store = PlanesEnMemoria::con_planes(vec![
            create_test_plan(1, 12, true),
            create_test_plan(2, 1, true),
            create_test_plan(3, 6, true),
        ]);

        let cuotas: Vec<i32> = store
            .planes_activos()
            .unwrap()
            .iter()
            .map(|p| p.cuotas)
            .collect();
        assert_eq!(cuotas, vec![1, 6, 12]);
    }

    #[test]
    fn test_association_tiers_are_separate() {
        let mut store = AsociacionesEnMemoria::new();
        store.asociar_especial(ItemRef::Producto(1), 10);
        store.asociar_default(ItemRef::Producto(1), 20);

        assert_eq!(store.especiales(ItemRef::Producto(1)).unwrap(), vec![10]);
        assert_eq!(store.por_defecto(ItemRef::Producto(1)).unwrap(), vec![20]);
        assert!(store.especiales(ItemRef::Producto(2)).unwrap().is_empty());
    }

    #[test]
    fn test_inactive_associations_are_hidden() {
        let mut store = AsociacionesEnMemoria::new();
        store.insertar(
            AsociacionPlan {
                id: 1,
                item: ItemRef::Producto(1),
                fk_id_plan: 10,
                activo: false,
            },
            true,
        );

        assert!(store.especiales(ItemRef::Producto(1)).unwrap().is_empty());
    }
}
