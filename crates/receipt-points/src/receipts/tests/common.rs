use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::response::Response;
use serde_json::{json, Value};

use crate::receipts::domain::{Item, Receipt, ReceiptId};
use crate::receipts::store::{InMemoryReceiptStore, ReceiptStore};
use crate::receipts::{receipt_router, ReceiptService};

pub(super) fn corner_market_receipt() -> Receipt {
    Receipt {
        retailer: "M&M Corner Market".to_string(),
        total: 9.00,
        purchase_date: "2022-03-20".to_string(),
        purchase_time: "14:33".to_string(),
        items: vec![
            Item {
                description: "Gatorade".to_string(),
                price: 2.25,
            };
            4
        ],
    }
}

pub(super) fn corner_market_json() -> Value {
    json!({
        "retailer": "M&M Corner Market",
        "total": 9.00,
        "purchaseDate": "2022-03-20",
        "purchaseTime": "14:33",
        "items": [
            { "description": "Gatorade", "price": 2.25 },
            { "description": "Gatorade", "price": 2.25 },
            { "description": "Gatorade", "price": 2.25 },
            { "description": "Gatorade", "price": 2.25 }
        ]
    })
}

pub(super) fn build_service() -> (Arc<ReceiptService<InMemoryReceiptStore>>, InMemoryReceiptStore) {
    let store = InMemoryReceiptStore::new();
    let service = Arc::new(ReceiptService::new(Arc::new(store.clone())));
    (service, store)
}

pub(super) fn router_with_store() -> (axum::Router, InMemoryReceiptStore) {
    let (service, store) = build_service();
    (receipt_router(service), store)
}

/// Records every write so tests can assert what the service persisted.
#[derive(Default)]
pub(super) struct RecordingStore {
    writes: Mutex<Vec<(ReceiptId, i64)>>,
    scores: Mutex<HashMap<ReceiptId, i64>>,
}

impl RecordingStore {
    pub(super) fn writes(&self) -> Vec<(ReceiptId, i64)> {
        self.writes.lock().expect("writes mutex poisoned").clone()
    }
}

impl ReceiptStore for RecordingStore {
    fn put(&self, id: ReceiptId, points: i64) {
        self.writes
            .lock()
            .expect("writes mutex poisoned")
            .push((id.clone(), points));
        self.scores
            .lock()
            .expect("scores mutex poisoned")
            .insert(id, points);
    }

    fn get(&self, id: &ReceiptId) -> Option<i64> {
        self.scores
            .lock()
            .expect("scores mutex poisoned")
            .get(id)
            .copied()
    }
}

pub(super) fn json_request(method: Method, uri: &str, payload: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(payload).expect("payload serializes")))
        .expect("request builds")
}

pub(super) fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("request builds")
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 4096)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) async fn read_text_body(response: Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), 4096)
        .await
        .expect("read body");
    String::from_utf8(body.to_vec()).expect("utf-8 body")
}
