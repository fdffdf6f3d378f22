mod parse;
mod rules;

pub use parse::{purchase_day, purchase_hour, scan_integers};

use serde::Serialize;

use super::domain::Receipt;

/// The fixed rule set, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    RetailerAlphanumeric,
    RoundDollarTotal,
    QuarterMultipleTotal,
    ItemPairs,
    DescriptionLength,
    OddPurchaseDay,
    AfternoonPurchase,
}

impl RuleKind {
    pub const ALL: [RuleKind; 7] = [
        RuleKind::RetailerAlphanumeric,
        RuleKind::RoundDollarTotal,
        RuleKind::QuarterMultipleTotal,
        RuleKind::ItemPairs,
        RuleKind::DescriptionLength,
        RuleKind::OddPurchaseDay,
        RuleKind::AfternoonPurchase,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RuleKind::RetailerAlphanumeric => "Retailer alphanumerics",
            RuleKind::RoundDollarTotal => "Round-dollar total",
            RuleKind::QuarterMultipleTotal => "Quarter-multiple total",
            RuleKind::ItemPairs => "Item pairs",
            RuleKind::DescriptionLength => "Description length",
            RuleKind::OddPurchaseDay => "Odd purchase day",
            RuleKind::AfternoonPurchase => "Afternoon purchase",
        }
    }
}

/// Points awarded by one rule, with a note for audit output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleContribution {
    pub rule: RuleKind,
    pub points: i64,
    pub notes: String,
}

/// Per-rule contributions and their sum.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointsBreakdown {
    pub components: Vec<RuleContribution>,
    pub total: i64,
}

impl PointsBreakdown {
    pub fn points_for(&self, rule: RuleKind) -> i64 {
        self.components
            .iter()
            .filter(|component| component.rule == rule)
            .map(|component| component.points)
            .sum()
    }
}

/// Applies every rule to the receipt and records what each one contributed.
pub fn score_receipt(receipt: &Receipt) -> PointsBreakdown {
    let components = rules::apply_rules(receipt);
    let total = components.iter().map(|component| component.points).sum();
    PointsBreakdown { components, total }
}

/// Points for a receipt. Never fails; malformed date or time fields count as zero.
pub fn calculate_points(receipt: &Receipt) -> i64 {
    score_receipt(receipt).total
}
