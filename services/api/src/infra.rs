use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use workalloc::workflows::allocation::{
    AllocationState, DraftFeeds, ProgressEngine, ProgressStore, ScoringConfig,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Fresh feeds and an empty store scored with `scoring`.
pub(crate) fn allocation_state(scoring: ScoringConfig) -> AllocationState {
    AllocationState {
        engine: Arc::new(ProgressEngine::new(scoring)),
        feeds: Arc::new(DraftFeeds::new()),
        store: Arc::new(ProgressStore::new()),
    }
}
