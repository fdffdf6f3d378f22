//! Receipt intake, scoring, and score lookup.
//!
//! Submissions are scored once by the fixed rule set in [`scoring`], stored
//! under a generated [`ReceiptId`], and read back through the same service.

pub mod domain;
pub mod router;
pub mod scoring;
pub mod service;
pub mod store;

#[cfg(test)]
mod tests;

pub use domain::{Item, PointsResponse, ProcessResponse, Receipt, ReceiptId};
pub use router::{receipt_router, ReceiptApiError};
pub use scoring::{calculate_points, score_receipt, PointsBreakdown, RuleContribution, RuleKind};
pub use service::ReceiptService;
pub use store::{InMemoryReceiptStore, ReceiptStore};
