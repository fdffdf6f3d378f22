use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::domain::ReceiptId;

/// Storage abstraction so the service can be exercised against test doubles.
///
/// Scores are written once per submission and live as long as the store.
pub trait ReceiptStore: Send + Sync {
    /// Inserts the score for `id`, replacing any previous value.
    fn put(&self, id: ReceiptId, points: i64);
    /// Returns the stored score, or `None` for an unknown identifier.
    fn get(&self, id: &ReceiptId) -> Option<i64>;
}

/// Process-local store guarded by a mutex. Clones share the same map.
#[derive(Debug, Default, Clone)]
pub struct InMemoryReceiptStore {
    scores: Arc<Mutex<HashMap<ReceiptId, i64>>>,
}

impl InMemoryReceiptStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.scores().len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores().is_empty()
    }

    // A panic mid-insert cannot leave a half-written i64, so a poisoned map is still sound.
    fn scores(&self) -> MutexGuard<'_, HashMap<ReceiptId, i64>> {
        self.scores.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ReceiptStore for InMemoryReceiptStore {
    fn put(&self, id: ReceiptId, points: i64) {
        self.scores().insert(id, points);
    }

    fn get(&self, id: &ReceiptId) -> Option<i64> {
        self.scores().get(id).copied()
    }
}
