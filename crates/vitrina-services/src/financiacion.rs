//! Financing service implementation
//!
//! Resolves the authoritative plan set for an item (special associations
//! override defaults, no merging), filters it for a price, and quotes
//! individual plans.

use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

use vitrina_core::models::{CuotaCalculada, ItemRef, PlanFinanciacion, TipoPlanes};
use vitrina_core::traits::{AsociacionStore, PlanStore};
use vitrina_core::{pricing, seleccion, AppResult, FinanciacionConfig};

/// Result of plan resolution for an item
#[derive(Debug, Clone)]
pub struct ResolucionPlanes {
    /// The candidate plan set for the winning tier
    pub planes: Vec<PlanFinanciacion>,

    /// Which tier won
    pub tipo: TipoPlanes,
}

impl ResolucionPlanes {
    /// Empty resolution: the item displays no financing options
    pub fn ninguna() -> Self {
        Self {
            planes: Vec::new(),
            tipo: TipoPlanes::Ninguno,
        }
    }
}

/// Financing service over the caller's stores
pub struct FinanciacionService<P: PlanStore, A: AsociacionStore> {
    planes: Arc<P>,
    asociaciones: Arc<A>,
    config: FinanciacionConfig,
}

impl<P: PlanStore, A: AsociacionStore> FinanciacionService<P, A> {
    /// Create a new financing service
    pub fn new(planes: Arc<P>, asociaciones: Arc<A>, config: FinanciacionConfig) -> Self {
        Self {
            planes,
            asociaciones,
            config,
        }
    }

    /// Resolve the authoritative plan set for an item
    ///
    /// Special associations win outright; defaults apply only when no
    /// special plan resolves; otherwise the item gets zero plans. Store
    /// failures at a tier count as zero results at that tier, so this
    /// operation always succeeds.
    #[instrument(skip(self))]
    pub fn resolver_planes(&self, item: ItemRef) -> ResolucionPlanes {
        debug!("Resolving plans for item: {}", item);

        let especiales = self.planes_del_tier(item, TipoPlanes::Especiales);
        if !especiales.is_empty() {
            debug!("Using {} special plans", especiales.len());
            return ResolucionPlanes {
                planes: especiales,
                tipo: TipoPlanes::Especiales,
            };
        }

        let por_defecto = self.planes_del_tier(item, TipoPlanes::PorDefecto);
        if !por_defecto.is_empty() {
            debug!("Using {} default plans", por_defecto.len());
            return ResolucionPlanes {
                planes: por_defecto,
                tipo: TipoPlanes::PorDefecto,
            };
        }

        debug!("No plans associated with item: {}", item);
        ResolucionPlanes::ninguna()
    }

    /// Resolve plans for a product given its raw string id
    ///
    /// A malformed id resolves to zero plans, never an error.
    #[instrument(skip(self))]
    pub fn resolver_planes_producto(&self, id: &str) -> ResolucionPlanes {
        match parsear_id(id) {
            Some(numero) => self.resolver_planes(ItemRef::Producto(numero)),
            None => {
                warn!("Invalid product id: {}", id);
                ResolucionPlanes::ninguna()
            }
        }
    }

    /// Resolve plans for a combo given its raw string id
    #[instrument(skip(self))]
    pub fn resolver_planes_combo(&self, id: &str) -> ResolucionPlanes {
        match parsear_id(id) {
            Some(numero) => self.resolver_planes(ItemRef::Combo(numero)),
            None => {
                warn!("Invalid combo id: {}", id);
                ResolucionPlanes::ninguna()
            }
        }
    }

    /// Probe which tier an item's plans would come from
    ///
    /// Judged on association presence alone; the linked plans are not
    /// materialized or checked for activity.
    #[instrument(skip(self))]
    pub fn tipo_planes(&self, item: ItemRef) -> TipoPlanes {
        if !self.ids_del_tier(item, TipoPlanes::Especiales).is_empty() {
            return TipoPlanes::Especiales;
        }
        if !self.ids_del_tier(item, TipoPlanes::PorDefecto).is_empty() {
            return TipoPlanes::PorDefecto;
        }
        TipoPlanes::Ninguno
    }

    /// Filter a resolved plan set to the ones offerable at a price
    ///
    /// Output is ordered ascending by monthly installment.
    pub fn planes_ofertables(
        &self,
        precio: Decimal,
        planes: &[PlanFinanciacion],
    ) -> Vec<PlanFinanciacion> {
        seleccion::seleccionar_planes(precio, planes, self.config.umbral())
    }

    /// Quote a plan for a price
    pub fn cotizar(&self, precio: Decimal, plan: &PlanFinanciacion) -> Option<CuotaCalculada> {
        pricing::calcular_cuota(precio, plan)
    }

    /// Quote a plan by id for a price
    ///
    /// `Ok(None)` when the plan is missing, inactive, or the price falls
    /// outside its band; `Err` only on store failure.
    #[instrument(skip(self))]
    pub fn cotizar_plan(&self, precio: Decimal, plan_id: i32) -> AppResult<Option<CuotaCalculada>> {
        let plan = self.planes.plan_por_id(plan_id)?;
        Ok(plan.as_ref().and_then(|p| pricing::calcular_cuota(precio, p)))
    }

    /// Cash display price for a plan, using the configured default discount
    pub fn precio_contado(&self, precio: Decimal, plan: &PlanFinanciacion) -> Decimal {
        pricing::precio_contado(precio, plan, self.config.descuento_contado())
    }

    fn ids_del_tier(&self, item: ItemRef, tier: TipoPlanes) -> Vec<i32> {
        let resultado = match tier {
            TipoPlanes::Especiales => self.asociaciones.especiales(item),
            TipoPlanes::PorDefecto => self.asociaciones.por_defecto(item),
            TipoPlanes::Ninguno => Ok(Vec::new()),
        };

        match resultado {
            Ok(ids) => ids,
            Err(e) => {
                warn!("Association lookup failed for {} ({}): {}", item, tier, e);
                Vec::new()
            }
        }
    }

    fn planes_del_tier(&self, item: ItemRef, tier: TipoPlanes) -> Vec<PlanFinanciacion> {
        let ids = self.ids_del_tier(item, tier);
        if ids.is_empty() {
            return Vec::new();
        }

        match self.planes.planes_por_ids(&ids) {
            Ok(planes) => planes,
            Err(e) => {
                warn!("Plan lookup failed for {} ({}): {}", item, tier, e);
                Vec::new()
            }
        }
    }
}

/// Parse a raw item id; non-numeric input is invalid, not an error
fn parsear_id(id: &str) -> Option<i32> {
    id.trim().parse::<i32>().ok().filter(|n| *n > 0)
}
