use dealscope_core::activity::{build_activities, latest_activity};
use dealscope_core::domain::deal::DealId;
use dealscope_core::fixtures::{deal_by_id, sample_deals};
use serde_json::json;

use crate::commands::CommandResult;

pub fn run(deal_id: u32) -> CommandResult {
    let deals = sample_deals();
    let deal = match deal_by_id(&deals, DealId(deal_id)) {
        Ok(deal) => deal,
        Err(error) => {
            return CommandResult::failure("activities", "unknown_deal", error.to_string(), 4);
        }
    };

    CommandResult::success(
        "activities",
        json!({
            "deal": deal.id,
            "feed": build_activities(deal),
            "latest": latest_activity(deal),
        }),
    )
}
