use chrono::NaiveDate;
use dealscope_core::classify::{ReachoutPolicy, StakeholderClassifier, StakeholderProfile};
use dealscope_core::domain::deal::DealId;
use dealscope_core::fixtures::{deal_by_id, sample_deals, sample_sellers};
use dealscope_core::sentiment::SentimentMatrix;
use serde_json::json;

use crate::commands::CommandResult;

pub fn run(deal_id: u32, policy: &ReachoutPolicy, today: NaiveDate) -> CommandResult {
    let deals = sample_deals();
    let deal = match deal_by_id(&deals, DealId(deal_id)) {
        Ok(deal) => deal,
        Err(error) => {
            return CommandResult::failure("stakeholders", "unknown_deal", error.to_string(), 4);
        }
    };

    let classifier = StakeholderClassifier::new(*policy);
    let profiles: Vec<StakeholderProfile> = deal
        .stakeholder_details
        .iter()
        .map(|stakeholder| classifier.classify(stakeholder, today))
        .collect();
    let matrix = SentimentMatrix::build(deal, &sample_sellers());

    CommandResult::success(
        "stakeholders",
        json!({
            "deal": deal.id,
            "company": deal.company,
            "profiles": profiles,
            "matrix": matrix,
        }),
    )
}
