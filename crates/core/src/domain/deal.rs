use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::classify::RiskLevel;
use crate::domain::clamp_percent;
use crate::domain::stakeholder::Stakeholder;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DealId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DealType {
    #[serde(rename = "New Business")]
    NewBusiness,
    Renewal,
    Expansion,
    #[serde(rename = "Cross-sell")]
    CrossSell,
}

/// Deal record as stored. `progress` tracks pipeline advancement while
/// `probability` is the win-rate estimate; the two drive independent
/// derivations and are never combined.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Deal {
    pub id: DealId,
    pub company: String,
    pub deal_type: DealType,
    pub value: Decimal,
    pub stage: String,
    pub progress: u8,
    pub owner: String,
    pub next_step: String,
    pub next_step_date: NaiveDate,
    pub blockers: Vec<String>,
    pub stakeholder_count: u32,
    pub last_activity: String,
    pub risk_level: RiskLevel,
    pub close_date: NaiveDate,
    pub probability: u8,
    pub stakeholder_details: Vec<Stakeholder>,
}

impl Deal {
    /// Re-clamps the percentage fields. Fixture data is already in range;
    /// this guards records arriving from outside the crate.
    pub fn normalized(mut self) -> Self {
        self.progress = clamp_percent(self.progress);
        self.probability = clamp_percent(self.probability);
        self
    }
}
