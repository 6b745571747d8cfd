use chrono::NaiveDate;
use dealscope_core::activity::latest_activity;
use dealscope_core::aggregate::{
    confidence_for, deal_needs_immediate_attention, risk_from_probability,
};
use dealscope_core::fixtures::sample_deals;
use serde_json::{json, Value};

use crate::commands::CommandResult;

pub fn run(today: NaiveDate) -> CommandResult {
    let deals = sample_deals();

    let rows: Vec<Value> = deals
        .iter()
        .map(|deal| {
            json!({
                "id": deal.id,
                "company": deal.company,
                "stage": deal.stage,
                "progress": deal.progress,
                "probability": deal.probability,
                "confidence": confidence_for(deal.probability),
                "probability_risk": risk_from_probability(deal.probability),
                "recorded_risk": deal.risk_level,
                "needs_immediate_attention": deal_needs_immediate_attention(deal, today),
                "latest_activity": latest_activity(deal),
            })
        })
        .collect();

    CommandResult::success("deals", json!({ "deals": rows }))
}
