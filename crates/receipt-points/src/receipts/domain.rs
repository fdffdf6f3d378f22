use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque identifier handed back on submission and used to fetch points later.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReceiptId(pub String);

impl ReceiptId {
    /// Random 128-bit identifier rendered as a hyphenated UUID.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ReceiptId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Purchase receipt as submitted by the client.
///
/// Absent and `null` fields decode to their zero values, so `{}` is a valid
/// (if pointless) receipt. Fields of the wrong JSON type are rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Receipt {
    #[serde(deserialize_with = "null_as_default")]
    pub retailer: String,
    #[serde(deserialize_with = "null_as_default")]
    pub total: f64,
    /// `YYYY-MM-DD`, read permissively.
    #[serde(deserialize_with = "null_as_default")]
    pub purchase_date: String,
    /// `HH:MM` on a 24-hour clock, read permissively.
    #[serde(deserialize_with = "null_as_default")]
    pub purchase_time: String,
    #[serde(deserialize_with = "null_items_as_default")]
    pub items: Vec<Item>,
}

/// Single line item on a receipt.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Item {
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub price: f64,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A `null` list is empty; a `null` entry is a zero-valued item.
fn null_items_as_default<'de, D>(deserializer: D) -> Result<Vec<Item>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let items = Option::<Vec<Option<Item>>>::deserialize(deserializer)?;
    Ok(items
        .unwrap_or_default()
        .into_iter()
        .map(Option::unwrap_or_default)
        .collect())
}

/// Body returned by `POST /receipts/process`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessResponse {
    pub id: ReceiptId,
}

/// Body returned by `GET /receipts/{id}/points`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsResponse {
    pub points: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_camel_case_payload() {
        let receipt: Receipt = serde_json::from_value(json!({
            "retailer": "Target",
            "total": 35.35,
            "purchaseDate": "2022-01-01",
            "purchaseTime": "13:01",
            "items": [{ "description": "Mountain Dew 12PK", "price": 6.49 }]
        }))
        .expect("receipt decodes");

        assert_eq!(receipt.retailer, "Target");
        assert_eq!(receipt.purchase_date, "2022-01-01");
        assert_eq!(receipt.purchase_time, "13:01");
        assert_eq!(receipt.items.len(), 1);
        assert_eq!(receipt.items[0].price, 6.49);
    }

    #[test]
    fn missing_fields_take_zero_values() {
        let receipt: Receipt = serde_json::from_str("{}").expect("empty object decodes");
        assert_eq!(receipt, Receipt::default());
    }

    #[test]
    fn null_fields_take_zero_values() {
        let receipt: Receipt = serde_json::from_value(json!({
            "retailer": null,
            "total": null,
            "purchaseDate": null,
            "purchaseTime": null,
            "items": null
        }))
        .expect("null fields decode");
        assert_eq!(receipt, Receipt::default());
    }

    #[test]
    fn null_items_and_item_fields_take_zero_values() {
        let receipt: Receipt = serde_json::from_value(json!({
            "items": [null, { "description": null, "price": 1.5 }]
        }))
        .expect("null items decode");
        assert_eq!(
            receipt.items,
            vec![
                Item::default(),
                Item {
                    description: String::new(),
                    price: 1.5,
                },
            ]
        );
    }

    #[test]
    fn string_totals_are_rejected() {
        let result = serde_json::from_value::<Receipt>(json!({ "total": "35.35" }));
        assert!(result.is_err());
    }

    #[test]
    fn generated_ids_differ() {
        assert_ne!(ReceiptId::generate(), ReceiptId::generate());
    }

    #[test]
    fn id_serializes_as_plain_string() {
        let body = ProcessResponse {
            id: ReceiptId::from("abc"),
        };
        assert_eq!(serde_json::to_value(body).unwrap(), json!({ "id": "abc" }));
    }
}
