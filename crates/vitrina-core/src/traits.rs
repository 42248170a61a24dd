//! Store and clock abstractions
//!
//! The engine is synchronous and pure: the caller owns data retrieval,
//! caching, and any timeouts, and hands the engine these seams. All traits
//! are `Send + Sync` so services can be shared across request handlers
//! without coordination.

use chrono::{DateTime, Utc};

use crate::error::AppError;
use crate::models::{ItemRef, PlanFinanciacion};

/// Lookup over financing plans, filtered to active records
pub trait PlanStore: Send + Sync {
    /// Find an active plan by ID
    fn plan_por_id(&self, id: i32) -> Result<Option<PlanFinanciacion>, AppError>;

    /// Resolve a set of plan IDs to active plan records
    fn planes_por_ids(&self, ids: &[i32]) -> Result<Vec<PlanFinanciacion>, AppError>;

    /// All active plans, ordered by cuotas ascending
    fn planes_activos(&self) -> Result<Vec<PlanFinanciacion>, AppError>;
}

/// Lookup over item/plan associations, filtered to active records
///
/// Both tiers answer with plan IDs; the resolver joins them against the
/// `PlanStore`.
pub trait AsociacionStore: Send + Sync {
    /// Plan IDs from special (per-item override) associations
    fn especiales(&self, item: ItemRef) -> Result<Vec<i32>, AppError>;

    /// Plan IDs from default (catalog-wide) associations
    fn por_defecto(&self, item: ItemRef) -> Result<Vec<i32>, AppError>;
}

/// Time source, injected so caches and validity checks are testable
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock implementation of [`Clock`]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_advances() {
        let clock = SystemClock;
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }
}
