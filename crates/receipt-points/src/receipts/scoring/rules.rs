use super::super::domain::{Item, Receipt};
use super::parse::{purchase_day, purchase_hour};
use super::{RuleContribution, RuleKind};

const ROUND_DOLLAR_BONUS: i64 = 50;
const QUARTER_MULTIPLE_BONUS: i64 = 25;
const ITEM_PAIR_BONUS: i64 = 5;
const DESCRIPTION_PRICE_FACTOR: f64 = 0.2;
const ODD_DAY_BONUS: i64 = 6;
const AFTERNOON_BONUS: i64 = 10;
const AFTERNOON_START_HOUR: i64 = 14;
const AFTERNOON_END_HOUR: i64 = 16;

pub(crate) fn apply_rules(receipt: &Receipt) -> Vec<RuleContribution> {
    let mut components = Vec::with_capacity(RuleKind::ALL.len());

    let alphanumerics = retailer_alphanumerics(&receipt.retailer);
    components.push(RuleContribution {
        rule: RuleKind::RetailerAlphanumeric,
        points: alphanumerics,
        notes: format!(
            "{alphanumerics} alphanumeric character(s) in '{}'",
            receipt.retailer
        ),
    });

    let round_dollar = is_round_dollar(receipt.total);
    components.push(RuleContribution {
        rule: RuleKind::RoundDollarTotal,
        points: if round_dollar { ROUND_DOLLAR_BONUS } else { 0 },
        notes: if round_dollar {
            format!("total {:.2} has no cents", receipt.total)
        } else {
            format!("total {:.2} has cents", receipt.total)
        },
    });

    let quarter_multiple = is_quarter_multiple(receipt.total);
    components.push(RuleContribution {
        rule: RuleKind::QuarterMultipleTotal,
        points: if quarter_multiple {
            QUARTER_MULTIPLE_BONUS
        } else {
            0
        },
        notes: format!(
            "truncated quarters {} {} divisible by 4",
            truncated_quarters(receipt.total),
            if quarter_multiple { "is" } else { "is not" }
        ),
    });

    let pairs = receipt.items.len() / 2;
    components.push(RuleContribution {
        rule: RuleKind::ItemPairs,
        points: pairs as i64 * ITEM_PAIR_BONUS,
        notes: format!("{} item(s) form {pairs} pair(s)", receipt.items.len()),
    });

    let qualifying = receipt
        .items
        .iter()
        .filter(|item| description_qualifies(item))
        .count();
    components.push(RuleContribution {
        rule: RuleKind::DescriptionLength,
        points: receipt.items.iter().map(description_points).sum(),
        notes: format!("{qualifying} item description(s) with length divisible by 3"),
    });

    let day = purchase_day(&receipt.purchase_date);
    components.push(RuleContribution {
        rule: RuleKind::OddPurchaseDay,
        points: if day % 2 != 0 { ODD_DAY_BONUS } else { 0 },
        notes: format!("purchase day read as {day}"),
    });

    let hour = purchase_hour(&receipt.purchase_time);
    let afternoon = (AFTERNOON_START_HOUR..AFTERNOON_END_HOUR).contains(&hour);
    components.push(RuleContribution {
        rule: RuleKind::AfternoonPurchase,
        points: if afternoon { AFTERNOON_BONUS } else { 0 },
        notes: format!("purchase hour read as {hour}"),
    });

    components
}

/// ASCII letters and digits only; everything else, including non-ASCII letters, scores nothing.
pub(crate) fn retailer_alphanumerics(retailer: &str) -> i64 {
    retailer
        .chars()
        .filter(|character| character.is_ascii_alphanumeric())
        .count() as i64
}

pub(crate) fn is_round_dollar(total: f64) -> bool {
    total == total.trunc()
}

fn truncated_quarters(total: f64) -> i64 {
    (total * 4.0).trunc() as i64
}

/// True when `trunc(total * 4)` is divisible by 4. This also holds for
/// totals such as 35.10 that are not multiples of 0.25.
pub(crate) fn is_quarter_multiple(total: f64) -> bool {
    truncated_quarters(total) % 4 == 0
}

fn description_qualifies(item: &Item) -> bool {
    item.description.chars().count() % 3 == 0
}

/// `trunc(price * 0.2 + 0.5)` for items whose raw description length divides by 3.
///
/// Rounds half up for non-negative prices. Negative prices truncate toward
/// zero after the half is added.
pub(crate) fn description_points(item: &Item) -> i64 {
    if !description_qualifies(item) {
        return 0;
    }
    (item.price * DESCRIPTION_PRICE_FACTOR + 0.5).trunc() as i64
}
