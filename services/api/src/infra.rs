use metrics_exporter_prometheus::PrometheusHandle;
use receipt_points::receipts::{InMemoryReceiptStore, ReceiptService};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Option<Arc<PrometheusHandle>>,
}

/// Receipt service backed by a fresh process-local store.
pub(crate) fn in_memory_receipt_service() -> Arc<ReceiptService<InMemoryReceiptStore>> {
    Arc::new(ReceiptService::new(Arc::new(InMemoryReceiptStore::new())))
}
