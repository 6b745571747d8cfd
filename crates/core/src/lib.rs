pub mod activity;
pub mod aggregate;
pub mod classify;
pub mod config;
pub mod domain;
pub mod errors;
pub mod fixtures;
pub mod org;
pub mod sentiment;
pub mod timeline;

pub use activity::{build_activities, latest_activity, ActivityRecord, LatestActivity};
pub use aggregate::{
    confidence_for, deal_needs_immediate_attention, risk_from_probability, ConfidenceBand,
    PortfolioSummary,
};
pub use classify::{
    days_since_contact, needs_reachout, ContactMethod, Engagement, Influence, InfluenceTier,
    ReachoutPolicy, RiskLevel, Sentiment, StakeholderClassifier, StakeholderProfile,
};
pub use config::{
    ConfigError, ConfigOverrides, EngineConfig, LoadOptions, LogFormat, LoggingConfig,
};
pub use domain::deal::{Deal, DealId, DealType};
pub use domain::stakeholder::Stakeholder;
pub use errors::DomainError;
pub use org::{BuyingRole, CommitteeAnalysis, OrgChart, OrgMember};
pub use sentiment::{SellerProfile, SentimentMatrix, StabilityBand, ThumbRating};
pub use timeline::{
    buyer_journey, buyer_journey_completion, sales_process, sales_process_completion,
    PipelineStage,
};
