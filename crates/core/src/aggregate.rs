//! Deal-level signals derived from stakeholder classifications and the
//! deal's own win-rate estimate.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::classify::{needs_reachout, RiskLevel};
use crate::domain::deal::Deal;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceBand {
    Low,
    Medium,
    High,
}

/// Win-rate confidence band: 80/50 split.
pub fn confidence_for(probability: u8) -> ConfidenceBand {
    if probability >= 80 {
        ConfidenceBand::High
    } else if probability >= 50 {
        ConfidenceBand::Medium
    } else {
        ConfidenceBand::Low
    }
}

/// Whole-deal risk read off the win probability. Inverse of the
/// per-stakeholder scale: higher probability means lower risk. Both signals
/// coexist and are reported independently.
pub fn risk_from_probability(probability: u8) -> RiskLevel {
    if probability >= 80 {
        RiskLevel::Low
    } else if probability >= 50 {
        RiskLevel::Medium
    } else {
        RiskLevel::High
    }
}

/// OR-reduction of the reachout flag over the deal's stakeholders. A deal
/// with no stakeholder details never needs attention.
pub fn deal_needs_immediate_attention(deal: &Deal, today: NaiveDate) -> bool {
    deal.stakeholder_details.iter().any(|stakeholder| needs_reachout(stakeholder, today))
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioSummary {
    pub active_deals: usize,
    pub at_risk: usize,
    pub avg_progress: u8,
    pub total_value: Decimal,
}

impl PortfolioSummary {
    pub fn from_deals(deals: &[Deal]) -> Self {
        let at_risk = deals.iter().filter(|deal| deal.risk_level == RiskLevel::High).count();
        let avg_progress = if deals.is_empty() {
            0
        } else {
            let total: u32 = deals.iter().map(|deal| u32::from(deal.progress)).sum();
            (f64::from(total) / deals.len() as f64).round() as u8
        };
        let total_value: Decimal = deals.iter().map(|deal| deal.value).sum();

        Self { active_deals: deals.len(), at_risk, avg_progress, total_value }
    }
}
