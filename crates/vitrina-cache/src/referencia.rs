//! Combined category/brand reference cache
//!
//! Categories and brands are always refreshed together and share one
//! timestamp, so a single stale check covers both lookups. The loader is a
//! caller-supplied closure; a failing loader serves the previous snapshot
//! when one exists rather than raising.

use chrono::{DateTime, Duration, Utc};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

use vitrina_core::models::{Categoria, Marca};
use vitrina_core::traits::Clock;
use vitrina_core::AppResult;

/// Snapshot of the reference lookups, keyed by row id
#[derive(Debug, Clone, Default)]
pub struct Referencias {
    pub categorias: HashMap<i32, Categoria>,
    pub marcas: HashMap<i32, Marca>,
}

impl Referencias {
    pub fn categoria(&self, id: i32) -> Option<&Categoria> {
        self.categorias.get(&id)
    }

    pub fn marca(&self, id: i32) -> Option<&Marca> {
        self.marcas.get(&id)
    }
}

struct Snapshot {
    datos: Referencias,
    cargado: DateTime<Utc>,
}

/// TTL cache over the combined category/brand snapshot
pub struct ReferenciaCache {
    snapshot: RwLock<Option<Snapshot>>,
    ttl: Duration,
    reloj: Arc<dyn Clock>,
}

impl ReferenciaCache {
    /// Create a cache with the given TTL in seconds
    pub fn new(ttl_secs: u64, reloj: Arc<dyn Clock>) -> Self {
        Self {
            snapshot: RwLock::new(None),
            ttl: Duration::seconds(ttl_secs as i64),
            reloj,
        }
    }

    /// Return the cached snapshot, refreshing through `cargar` when stale
    ///
    /// On loader failure the previous snapshot is served as-is (possibly
    /// stale); with nothing cached yet, empty lookups are returned. Either
    /// way the caller always gets a usable snapshot.
    pub fn obtener_o_cargar<F>(&self, cargar: F) -> Referencias
    where
        F: FnOnce() -> AppResult<(Vec<Categoria>, Vec<Marca>)>,
    {
        let ahora = self.reloj.now();

        {
            let snapshot = self.snapshot.read();
            if let Some(actual) = snapshot.as_ref() {
                if ahora - actual.cargado < self.ttl {
                    debug!("reference cache HIT");
                    return actual.datos.clone();
                }
            }
        }

        debug!("reference cache MISS, refreshing");
        match cargar() {
            Ok((categorias, marcas)) => {
                let datos = Referencias {
                    categorias: categorias.into_iter().map(|c| (c.id, c)).collect(),
                    marcas: marcas.into_iter().map(|m| (m.id, m)).collect(),
                };
                let mut snapshot = self.snapshot.write();
                *snapshot = Some(Snapshot {
                    datos: datos.clone(),
                    cargado: ahora,
                });
                datos
            }
            Err(e) => {
                warn!("reference load failed, serving previous snapshot: {}", e);
                let snapshot = self.snapshot.read();
                snapshot
                    .as_ref()
                    .map(|s| s.datos.clone())
                    .unwrap_or_default()
            }
        }
    }

    /// Drop the snapshot so the next read refreshes
    pub fn invalidar(&self) {
        *self.snapshot.write() = None;
    }
}
