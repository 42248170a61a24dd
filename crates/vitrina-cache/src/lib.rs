//! TTL caching layer for Vitrina reference data
//!
//! The pricing core is pure and holds no state; caching reference data
//! (categories, brands) belongs to the caller. This crate provides that
//! cache as an explicit object with a fixed TTL and an injected clock, so
//! expiry is deterministic under test.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use vitrina_cache::{TtlCache, REFERENCIA_TTL_SECS};
//! use vitrina_core::traits::SystemClock;
//!
//! let cache: TtlCache<i32, String> =
//!     TtlCache::new(REFERENCIA_TTL_SECS, Arc::new(SystemClock));
//!
//! cache.guardar(1, "Electrodomésticos".to_string());
//! assert_eq!(cache.obtener(&1), Some("Electrodomésticos".to_string()));
//! ```

pub mod referencia;

pub use referencia::{ReferenciaCache, Referencias};

use chrono::{DateTime, Duration, Utc};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;
use tracing::debug;

use vitrina_core::traits::Clock;

/// Default TTL for reference data (5 minutes)
pub const REFERENCIA_TTL_SECS: u64 = 300;

struct Entrada<V> {
    valor: V,
    insertado: DateTime<Utc>,
}

/// In-process cache with per-entry TTL expiry against an injected clock
///
/// Internally synchronized; safe to share behind `Arc` across request
/// handlers. Stale entries are dropped lazily on read.
pub struct TtlCache<K, V> {
    entradas: RwLock<HashMap<K, Entrada<V>>>,
    ttl: Duration,
    reloj: Arc<dyn Clock>,
}

impl<K: Eq + Hash + Clone, V: Clone> TtlCache<K, V> {
    /// Create a cache with the given TTL in seconds
    pub fn new(ttl_secs: u64, reloj: Arc<dyn Clock>) -> Self {
        Self {
            entradas: RwLock::new(HashMap::new()),
            ttl: Duration::seconds(ttl_secs as i64),
            reloj,
        }
    }

    /// Get a value if present and not expired
    pub fn obtener(&self, clave: &K) -> Option<V> {
        let ahora = self.reloj.now();
        let entradas = self.entradas.read();

        match entradas.get(clave) {
            Some(entrada) if ahora - entrada.insertado < self.ttl => {
                debug!("cache HIT");
                Some(entrada.valor.clone())
            }
            Some(_) => {
                debug!("cache STALE");
                None
            }
            None => {
                debug!("cache MISS");
                None
            }
        }
    }

    /// Store a value, resetting its TTL
    pub fn guardar(&self, clave: K, valor: V) {
        let insertado = self.reloj.now();
        self.entradas
            .write()
            .insert(clave, Entrada { valor, insertado });
    }

    /// Remove a value
    ///
    /// Returns `true` if the key was present, expired or not.
    pub fn invalidar(&self, clave: &K) -> bool {
        self.entradas.write().remove(clave).is_some()
    }

    /// Drop every entry
    pub fn limpiar(&self) {
        self.entradas.write().clear();
    }

    /// Number of stored entries, including not-yet-collected stale ones
    pub fn len(&self) -> usize {
        self.entradas.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entradas.read().is_empty()
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use chrono::TimeZone;
    use parking_lot::Mutex;

    /// Clock that only moves when told to
    pub(crate) struct ManualClock {
        ahora: Mutex<DateTime<Utc>>,
    }

    impl ManualClock {
        pub(crate) fn new() -> Arc<Self> {
            Arc::new(Self {
                ahora: Mutex::new(Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()),
            })
        }

        pub(crate) fn avanzar(&self, secs: i64) {
            let mut ahora = self.ahora.lock();
            *ahora += Duration::seconds(secs);
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> DateTime<Utc> {
            *self.ahora.lock()
        }
    }
}
