use dealscope_core::aggregate::PortfolioSummary;
use dealscope_core::fixtures::sample_deals;
use serde_json::{json, Value};

use crate::commands::CommandResult;

pub fn run() -> CommandResult {
    let deals = sample_deals();
    let summary = PortfolioSummary::from_deals(&deals);

    let rows: Vec<Value> = deals
        .iter()
        .map(|deal| {
            json!({
                "id": deal.id,
                "company": deal.company,
                "deal_type": deal.deal_type,
                "stage": deal.stage,
                "value": deal.value,
                "risk_level": deal.risk_level,
            })
        })
        .collect();

    CommandResult::success("portfolio", json!({ "summary": summary, "deals": rows }))
}
