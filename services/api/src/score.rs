use clap::Args;
use receipt_points::error::AppError;
use receipt_points::receipts::{score_receipt, PointsBreakdown, Receipt};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Receipt JSON file in the same shape accepted by POST /receipts/process
    #[arg(long)]
    pub(crate) receipt: PathBuf,
    /// Print the points contributed by each rule
    #[arg(long)]
    pub(crate) breakdown: bool,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let receipt = load_receipt(&args.receipt)?;
    let breakdown = score_receipt(&receipt);
    print!("{}", render_breakdown(&receipt, &breakdown, args.breakdown));
    Ok(())
}

pub(crate) fn load_receipt(path: &Path) -> Result<Receipt, AppError> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}

pub(crate) fn render_breakdown(
    receipt: &Receipt,
    breakdown: &PointsBreakdown,
    include_rules: bool,
) -> String {
    let mut output = format!(
        "Receipt from '{}' ({} item(s), total {:.2})\nPoints: {}\n",
        receipt.retailer,
        receipt.items.len(),
        receipt.total,
        breakdown.total
    );

    if include_rules {
        output.push_str("\nRule breakdown\n");
        for component in &breakdown.components {
            output.push_str(&format!(
                "- {}: {} ({})\n",
                component.rule.label(),
                component.points,
                component.notes
            ));
        }
    }

    output
}
