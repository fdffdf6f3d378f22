use std::sync::Arc;

use tracing::{debug, info};

use super::domain::{Receipt, ReceiptId};
use super::scoring::score_receipt;
use super::store::ReceiptStore;

/// Service composing the scoring rules with an injected score store.
pub struct ReceiptService<S> {
    store: Arc<S>,
}

impl<S> ReceiptService<S>
where
    S: ReceiptStore + 'static,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Score a receipt, persist the result under a fresh identifier, and return it.
    pub fn process(&self, receipt: &Receipt) -> ReceiptId {
        let id = ReceiptId::generate();
        let breakdown = score_receipt(receipt);

        debug!(
            receipt_id = %id,
            components = ?breakdown.components,
            "receipt scored"
        );

        self.store.put(id.clone(), breakdown.total);
        info!(receipt_id = %id, points = breakdown.total, "receipt processed");
        id
    }

    /// Points previously stored for `id`, if any.
    pub fn points(&self, id: &ReceiptId) -> Option<i64> {
        self.store.get(id)
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }
}
