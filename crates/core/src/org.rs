//! Organizational chart and buying-committee analysis for a deal's
//! stakeholder map.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::classify::{days_since_contact, Engagement, Influence, Sentiment};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BuyingRole {
    ExecutiveSponsor,
    TechnicalBuyer,
    FinancialBuyer,
    Champion,
    EndUser,
}

/// A node in the customer org chart. Levels start at 1 for the root;
/// `children` carries member ids to keep the record serializable without
/// recursion.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrgMember {
    pub id: u32,
    pub name: String,
    pub role: String,
    pub company: String,
    pub level: u8,
    pub influence: Influence,
    pub engagement: Engagement,
    pub sentiment: Sentiment,
    pub buying_role: BuyingRole,
    pub last_contact: String,
    pub meetings: u32,
    pub interactions: u32,
    pub notes: String,
    pub reporting_to: Option<u32>,
    pub children: Vec<u32>,
}

impl OrgMember {
    /// Org-chart nodes carry no numeric progress, so staleness pairs with
    /// the recorded engagement level instead of a progress floor.
    pub fn needs_reachout(&self, today: NaiveDate) -> bool {
        let stale =
            days_since_contact(&self.last_contact, today).map_or(true, |days| days > 14);
        stale && self.engagement == Engagement::Low
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitteeAnalysis {
    pub decision_makers: usize,
    pub champions: usize,
    pub blockers: usize,
    pub high_engagement_rate: u8,
    pub immediate_reachout: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrgChart {
    members: Vec<OrgMember>,
}

impl OrgChart {
    pub fn new(members: Vec<OrgMember>) -> Self {
        Self { members }
    }

    pub fn members(&self) -> &[OrgMember] {
        &self.members
    }

    pub fn member(&self, id: u32) -> Option<&OrgMember> {
        self.members.iter().find(|member| member.id == id)
    }

    pub fn roots(&self) -> Vec<&OrgMember> {
        self.members.iter().filter(|member| member.reporting_to.is_none()).collect()
    }

    pub fn direct_reports(&self, id: u32) -> Vec<&OrgMember> {
        self.member(id)
            .map(|member| {
                member.children.iter().filter_map(|child| self.member(*child)).collect()
            })
            .unwrap_or_default()
    }

    pub fn members_at_level(&self, level: u8) -> Vec<&OrgMember> {
        self.members.iter().filter(|member| member.level == level).collect()
    }

    pub fn max_level(&self) -> u8 {
        self.members.iter().map(|member| member.level).max().unwrap_or(0)
    }

    /// Members keyed by influence, in enum order for deterministic output.
    pub fn group_by_influence(&self) -> BTreeMap<Influence, Vec<&OrgMember>> {
        let mut grouped: BTreeMap<Influence, Vec<&OrgMember>> = BTreeMap::new();
        for member in &self.members {
            grouped.entry(member.influence).or_default().push(member);
        }
        grouped
    }

    pub fn analyze(&self, today: NaiveDate) -> CommitteeAnalysis {
        let count_influence = |influence: Influence| {
            self.members.iter().filter(|member| member.influence == influence).count()
        };
        let high_engaged = self
            .members
            .iter()
            .filter(|member| member.engagement == Engagement::High)
            .count();
        let high_engagement_rate = if self.members.is_empty() {
            0
        } else {
            (high_engaged as f64 / self.members.len() as f64 * 100.0).round() as u8
        };

        CommitteeAnalysis {
            decision_makers: count_influence(Influence::DecisionMaker),
            champions: count_influence(Influence::Champion),
            blockers: count_influence(Influence::Blocker),
            high_engagement_rate,
            immediate_reachout: self
                .members
                .iter()
                .filter(|member| member.needs_reachout(today))
                .count(),
        }
    }
}
