//! Embedded sample dataset: the demo deal book, the TechCorp org chart, and
//! the selling team. The engine itself never depends on this module; it
//! exists for the CLI and for integration tests.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::classify::RiskLevel;
use crate::domain::deal::{Deal, DealId, DealType};
use crate::domain::stakeholder::Stakeholder;
use crate::errors::DomainError;
use crate::org::{BuyingRole, OrgChart, OrgMember};
use crate::classify::{Engagement, Influence, Sentiment};
use crate::sentiment::SellerProfile;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("static fixture date")
}

pub fn deal_by_id(deals: &[Deal], id: DealId) -> Result<&Deal, DomainError> {
    deals.iter().find(|deal| deal.id == id).ok_or(DomainError::UnknownDeal(id))
}

pub fn sample_deals() -> Vec<Deal> {
    vec![
        Deal {
            id: DealId(1),
            company: "TechCorp Solutions".to_string(),
            deal_type: DealType::Renewal,
            value: Decimal::from(250_000),
            stage: "Negotiation".to_string(),
            progress: 75,
            owner: "Sarah Johnson".to_string(),
            next_step: "Contract review meeting".to_string(),
            next_step_date: date(2025, 1, 15),
            blockers: vec![
                "Budget approval pending".to_string(),
                "Legal review required".to_string(),
            ],
            stakeholder_count: 4,
            last_activity: "2 days ago".to_string(),
            risk_level: RiskLevel::Medium,
            close_date: date(2025, 1, 30),
            probability: 85,
            stakeholder_details: vec![
                Stakeholder::new("Alex Brown", "VP Procurement", "2025-01-08", 80),
                Stakeholder::new("Nina Patel", "Legal Counsel", "2025-01-06", 60),
                Stakeholder::new("Tom Lee", "Finance Manager", "2025-01-09", 70),
                Stakeholder::new("Emma Davis", "Procurement Analyst", "2025-01-07", 35),
            ],
        },
        Deal {
            id: DealId(2),
            company: "Global Dynamics Inc".to_string(),
            deal_type: DealType::NewBusiness,
            value: Decimal::from(180_000),
            stage: "Proposal".to_string(),
            progress: 60,
            owner: "Michael Chen".to_string(),
            next_step: "Present final proposal".to_string(),
            next_step_date: date(2025, 1, 12),
            blockers: vec!["Competitor evaluation".to_string()],
            stakeholder_count: 3,
            last_activity: "1 day ago".to_string(),
            risk_level: RiskLevel::High,
            close_date: date(2025, 1, 25),
            probability: 65,
            stakeholder_details: vec![
                Stakeholder::new("Laura Smith", "CTO", "2025-01-05", 50),
                Stakeholder::new("Peter Wu", "Engineering Lead", "2025-01-07", 45),
            ],
        },
        Deal {
            id: DealId(3),
            company: "Innovation Labs".to_string(),
            deal_type: DealType::Expansion,
            value: Decimal::from(420_000),
            stage: "Discovery".to_string(),
            progress: 40,
            owner: "Emily Rodriguez".to_string(),
            next_step: "Technical deep dive".to_string(),
            next_step_date: date(2025, 1, 18),
            blockers: vec![],
            stakeholder_count: 6,
            last_activity: "5 hours ago".to_string(),
            risk_level: RiskLevel::Low,
            close_date: date(2025, 2, 15),
            probability: 70,
            stakeholder_details: vec![
                Stakeholder::new("Mark Allen", "Product Owner", "2025-01-09", 40),
                Stakeholder::new("Jenny Kim", "Operations Manager", "2025-01-10", 35),
                Stakeholder::new("Carlos Diaz", "IT Director", "2025-01-08", 50),
            ],
        },
        Deal {
            id: DealId(4),
            company: "Enterprise Systems".to_string(),
            deal_type: DealType::CrossSell,
            value: Decimal::from(680_000),
            stage: "Qualified".to_string(),
            progress: 25,
            owner: "David Kim".to_string(),
            next_step: "Requirements gathering".to_string(),
            next_step_date: date(2025, 1, 20),
            blockers: vec!["Key stakeholder unavailable".to_string()],
            stakeholder_count: 5,
            last_activity: "3 days ago".to_string(),
            risk_level: RiskLevel::High,
            close_date: date(2025, 3, 1),
            probability: 45,
            stakeholder_details: vec![
                Stakeholder::new("Priya Singh", "Head of Ops", "2025-01-03", 30),
                Stakeholder::new("Ethan Clark", "CFO", "2023-12-29", 20),
                Stakeholder::new("Sophie Martin", "Project Lead", "2025-01-02", 25),
            ],
        },
        Deal {
            id: DealId(5),
            company: "FinServe Group".to_string(),
            deal_type: DealType::NewBusiness,
            value: Decimal::from(310_000),
            stage: "Proposal".to_string(),
            progress: 55,
            owner: "Olivia Park".to_string(),
            next_step: "Budget alignment call".to_string(),
            next_step_date: date(2025, 1, 14),
            blockers: vec!["Awaiting CFO feedback".to_string()],
            stakeholder_count: 4,
            last_activity: "8 hours ago".to_string(),
            risk_level: RiskLevel::Medium,
            close_date: date(2025, 2, 10),
            probability: 62,
            stakeholder_details: vec![
                Stakeholder::new("Jason Moore", "CFO", "2025-01-07", 55),
                Stakeholder::new("Angela Ruiz", "Compliance Lead", "2025-01-06", 50),
            ],
        },
        Deal {
            id: DealId(6),
            company: "DataWorks Co.".to_string(),
            deal_type: DealType::Expansion,
            value: Decimal::from(220_000),
            stage: "Negotiation".to_string(),
            progress: 80,
            owner: "Noah Lee".to_string(),
            next_step: "Finalize terms".to_string(),
            next_step_date: date(2025, 1, 17),
            blockers: vec![],
            stakeholder_count: 5,
            last_activity: "1 day ago".to_string(),
            risk_level: RiskLevel::Low,
            close_date: date(2025, 1, 28),
            probability: 88,
            stakeholder_details: vec![
                Stakeholder::new("Grace Huang", "VP Engineering", "2025-01-09", 85),
                Stakeholder::new("Robert King", "Procurement Lead", "2025-01-08", 70),
                Stakeholder::new("Mia Lopez", "Finance Analyst", "2025-01-09", 75),
            ],
        },
    ]
}

#[allow(clippy::too_many_arguments)]
fn member(
    id: u32,
    name: &str,
    role: &str,
    level: u8,
    influence: Influence,
    engagement: Engagement,
    sentiment: Sentiment,
    buying_role: BuyingRole,
    last_contact: &str,
    meetings: u32,
    interactions: u32,
    notes: &str,
    reporting_to: Option<u32>,
    children: Vec<u32>,
) -> OrgMember {
    OrgMember {
        id,
        name: name.to_string(),
        role: role.to_string(),
        company: "TechCorp Solutions".to_string(),
        level,
        influence,
        engagement,
        sentiment,
        buying_role,
        last_contact: last_contact.to_string(),
        meetings,
        interactions,
        notes: notes.to_string(),
        reporting_to,
        children,
    }
}

pub fn sample_org_chart() -> OrgChart {
    OrgChart::new(vec![
        member(
            1,
            "Sarah Mitchell",
            "CEO",
            1,
            Influence::DecisionMaker,
            Engagement::Medium,
            Sentiment::Positive,
            BuyingRole::ExecutiveSponsor,
            "2025-11-01",
            5,
            12,
            "Final approver, cost-conscious",
            None,
            vec![2, 3],
        ),
        member(
            2,
            "Jennifer Smith",
            "CTO",
            2,
            Influence::DecisionMaker,
            Engagement::High,
            Sentiment::Positive,
            BuyingRole::TechnicalBuyer,
            "2025-10-29",
            7,
            18,
            "Technical evaluation lead",
            Some(1),
            vec![4, 5],
        ),
        member(
            3,
            "Robert Johnson",
            "CFO",
            2,
            Influence::DecisionMaker,
            Engagement::Medium,
            Sentiment::Neutral,
            BuyingRole::FinancialBuyer,
            "2025-10-25",
            3,
            9,
            "Budget approval required",
            Some(1),
            vec![],
        ),
        member(
            4,
            "Maria Garcia",
            "VP Engineering",
            3,
            Influence::Champion,
            Engagement::High,
            Sentiment::Positive,
            BuyingRole::Champion,
            "2025-11-10",
            6,
            14,
            "Strong advocate for solution",
            Some(2),
            vec![6],
        ),
        member(
            5,
            "David Lee",
            "IT Director",
            3,
            Influence::Blocker,
            Engagement::Low,
            Sentiment::Neutral,
            BuyingRole::TechnicalBuyer,
            "2025-10-20",
            2,
            7,
            "Security concerns, needs convincing",
            Some(2),
            vec![],
        ),
        member(
            6,
            "Alex Chen",
            "Senior Engineer",
            4,
            Influence::Influencer,
            Engagement::High,
            Sentiment::Neutral,
            BuyingRole::EndUser,
            "2025-11-11",
            4,
            11,
            "Day-to-day user, positive feedback",
            Some(4),
            vec![],
        ),
    ])
}

pub fn sample_sellers() -> Vec<SellerProfile> {
    vec![
        SellerProfile::new("Sarah Johnson", "Account Executive"),
        SellerProfile::new("Michael Chen", "Sales Manager"),
        SellerProfile::new("Noah Lee", "Sales Development Rep"),
    ]
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use crate::aggregate::PortfolioSummary;
    use crate::domain::deal::DealId;
    use crate::errors::DomainError;

    use super::{deal_by_id, sample_deals, sample_org_chart, sample_sellers};

    #[test]
    fn deal_book_totals() {
        let deals = sample_deals();
        let summary = PortfolioSummary::from_deals(&deals);

        assert_eq!(summary.active_deals, 6);
        assert_eq!(summary.at_risk, 2);
        // mean(75, 60, 40, 25, 55, 80) = 55.83 rounds to 56
        assert_eq!(summary.avg_progress, 56);
        assert_eq!(summary.total_value, Decimal::from(2_060_000));
    }

    #[test]
    fn lookup_by_id() {
        let deals = sample_deals();
        assert_eq!(deal_by_id(&deals, DealId(3)).expect("deal 3").company, "Innovation Labs");
        assert_eq!(deal_by_id(&deals, DealId(99)), Err(DomainError::UnknownDeal(DealId(99))));
    }

    #[test]
    fn org_chart_and_sellers_sizes() {
        assert_eq!(sample_org_chart().members().len(), 6);
        assert_eq!(sample_sellers().len(), 3);
    }
}
