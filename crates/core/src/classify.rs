//! Stakeholder classification: turns a raw `(progress, last_contact, role)`
//! record into the display-ready engagement/sentiment/influence/risk labels.
//!
//! Every function here is pure; the only ambient input is "today", which
//! callers inject so reachout checks stay testable.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::stakeholder::Stakeholder;
use crate::errors::DomainError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Engagement {
    Low,
    Medium,
    High,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Negative,
    Neutral,
    Positive,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Influence {
    DecisionMaker,
    Champion,
    Blocker,
    Influencer,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl std::str::FromStr for RiskLevel {
    type Err = DomainError;

    /// Stored records mix "Medium" and "medium"; casing is normalized here,
    /// at the data-model boundary, so the rest of the engine only sees the
    /// canonical lower-case set.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(DomainError::InvariantViolation(format!(
                "unrecognized risk level `{other}` (expected low|medium|high)"
            ))),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContactMethod {
    Email,
    Phone,
    VideoCall,
    Meeting,
}

impl ContactMethod {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::VideoCall => "Video Call",
            Self::Meeting => "Meeting",
        }
    }
}

/// Coarse influence tier shown on the deal-card stakeholder chips. Unlike
/// `Influence` it ignores role and reachout state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InfluenceTier {
    Low,
    Medium,
    High,
}

pub fn engagement_for(progress: u8) -> Engagement {
    if progress >= 70 {
        Engagement::High
    } else if progress >= 50 {
        Engagement::Medium
    } else {
        Engagement::Low
    }
}

pub fn sentiment_for(progress: u8) -> Sentiment {
    if progress >= 70 {
        Sentiment::Positive
    } else if progress >= 40 {
        Sentiment::Neutral
    } else {
        Sentiment::Negative
    }
}

pub fn influence_tier(progress: u8) -> InfluenceTier {
    if progress >= 70 {
        InfluenceTier::High
    } else if progress >= 40 {
        InfluenceTier::Medium
    } else {
        InfluenceTier::Low
    }
}

const SENIOR_ROLE_MARKERS: [&str; 4] = ["cfo", "cto", "director", "vp"];

/// Case-insensitive substring match against the senior-role markers, so
/// "VP Procurement" and "IT Director" both qualify.
pub fn is_senior_role(role: &str) -> bool {
    let role = role.to_ascii_lowercase();
    SENIOR_ROLE_MARKERS.iter().any(|marker| role.contains(marker))
}

/// Evaluated in fixed priority order: role seniority overrides behavioral
/// signals, progress beats staleness.
pub fn influence_for(role: &str, progress: u8, needs_reachout: bool) -> Influence {
    if is_senior_role(role) {
        Influence::DecisionMaker
    } else if progress >= 60 {
        Influence::Champion
    } else if needs_reachout {
        Influence::Blocker
    } else {
        Influence::Influencer
    }
}

/// Per-stakeholder risk only escalates above Low when the reachout flag
/// holds; severity within that branch depends on progress.
pub fn stakeholder_risk(needs_reachout: bool, progress: u8) -> RiskLevel {
    if !needs_reachout {
        RiskLevel::Low
    } else if progress < 30 {
        RiskLevel::High
    } else {
        RiskLevel::Medium
    }
}

pub fn interaction_estimate(progress: u8) -> u32 {
    u32::from(progress / 10).max(3)
}

pub fn preferred_contact(progress: u8) -> ContactMethod {
    if progress >= 60 {
        ContactMethod::Meeting
    } else {
        ContactMethod::Email
    }
}

pub fn parse_contact_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/// Whole days elapsed since the recorded contact date. `None` means the
/// stored string did not parse as a date.
pub fn days_since_contact(last_contact: &str, today: NaiveDate) -> Option<i64> {
    parse_contact_date(last_contact).map(|date| (today - date).num_days())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReachoutPolicy {
    pub stale_after_days: i64,
    pub progress_floor: u8,
}

impl Default for ReachoutPolicy {
    fn default() -> Self {
        Self { stale_after_days: 14, progress_floor: 40 }
    }
}

impl ReachoutPolicy {
    /// A stakeholder needs reachout when contact has gone stale AND progress
    /// sits below the floor. An unparseable contact date counts as stale
    /// rather than silently clearing the flag.
    pub fn needs_reachout(&self, stakeholder: &Stakeholder, today: NaiveDate) -> bool {
        if stakeholder.progress >= self.progress_floor {
            return false;
        }
        match days_since_contact(&stakeholder.last_contact, today) {
            Some(days) => days > self.stale_after_days,
            None => true,
        }
    }
}

pub fn needs_reachout(stakeholder: &Stakeholder, today: NaiveDate) -> bool {
    ReachoutPolicy::default().needs_reachout(stakeholder, today)
}

/// Display-ready classification bundle for one stakeholder.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StakeholderProfile {
    pub name: String,
    pub role: String,
    pub last_contact: String,
    pub progress: u8,
    pub engagement: Engagement,
    pub sentiment: Sentiment,
    pub influence: Influence,
    pub risk_level: RiskLevel,
    pub interactions: u32,
    pub contact_method: ContactMethod,
    pub needs_reachout: bool,
    pub activity: String,
    pub notes: String,
}

#[derive(Clone, Debug, Default)]
pub struct StakeholderClassifier {
    policy: ReachoutPolicy,
}

impl StakeholderClassifier {
    pub fn new(policy: ReachoutPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &ReachoutPolicy {
        &self.policy
    }

    pub fn classify(&self, stakeholder: &Stakeholder, today: NaiveDate) -> StakeholderProfile {
        let reachout = self.policy.needs_reachout(stakeholder, today);
        let engaged = stakeholder.progress >= 60;

        StakeholderProfile {
            name: stakeholder.name.clone(),
            role: stakeholder.role.clone(),
            last_contact: stakeholder.last_contact.clone(),
            progress: stakeholder.progress,
            engagement: engagement_for(stakeholder.progress),
            sentiment: sentiment_for(stakeholder.progress),
            influence: influence_for(&stakeholder.role, stakeholder.progress, reachout),
            risk_level: stakeholder_risk(reachout, stakeholder.progress),
            interactions: interaction_estimate(stakeholder.progress),
            contact_method: preferred_contact(stakeholder.progress),
            needs_reachout: reachout,
            activity: if engaged {
                "Reviewed proposal and provided feedback".to_string()
            } else {
                "Awaiting response to outreach".to_string()
            },
            notes: if engaged {
                "Positive on solution fit; needs budget alignment".to_string()
            } else {
                "Follow-up required to re-engage".to_string()
            },
        }
    }
}
