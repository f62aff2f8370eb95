use gazetteer_core::LookupService;
use std::sync::Arc;

/// Holds the shared state accessible by all request handlers.
///
/// The state is constructed exactly once, before the listener accepts
/// its first connection, and is never mutated afterwards — so handlers
/// read it concurrently without any locking. A process whose startup
/// initialization failed carries no service at all: it keeps serving
/// health probes (reporting unready) and answers the search routes with
/// 503 until a restart.
#[derive(Clone)]
pub struct AppState {
    service: Option<Arc<LookupService>>,
}

impl AppState {
    /// State for a successfully initialized process.
    pub fn ready(service: LookupService) -> Self {
        AppState {
            service: Some(Arc::new(service)),
        }
    }

    /// Degraded state for a process whose model/dataset failed to load.
    pub fn unready() -> Self {
        AppState { service: None }
    }

    pub fn service(&self) -> Option<&Arc<LookupService>> {
        self.service.as_ref()
    }

    pub fn is_ready(&self) -> bool {
        self.service.is_some()
    }

    /// Corpus size, 0 when the index never initialized.
    pub fn total_cities(&self) -> usize {
        self.service.as_ref().map_or(0, |s| s.len())
    }
}
