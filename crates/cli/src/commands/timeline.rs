use dealscope_core::domain::deal::DealId;
use dealscope_core::fixtures::{deal_by_id, sample_deals};
use dealscope_core::timeline::{
    buyer_journey, buyer_journey_completion, buyer_time_invested_days, sales_process,
    sales_process_completion, sales_time_invested_hours,
};
use serde_json::json;

use crate::commands::CommandResult;

pub fn run(deal_id: u32) -> CommandResult {
    let deals = sample_deals();
    let deal = match deal_by_id(&deals, DealId(deal_id)) {
        Ok(deal) => deal,
        Err(error) => {
            return CommandResult::failure("timeline", "unknown_deal", error.to_string(), 4);
        }
    };

    CommandResult::success(
        "timeline",
        json!({
            "deal": deal.id,
            "stage": deal.stage,
            "progress": deal.progress,
            "buyer_journey": {
                "stages": buyer_journey(),
                "completed": buyer_journey_completion(deal.progress),
                "time_invested_days": buyer_time_invested_days(),
            },
            "sales_process": {
                "stages": sales_process(),
                "current_index": sales_process_completion(&deal.stage),
                "time_invested_hours": sales_time_invested_hours(),
            },
        }),
    )
}
