//! Synthesized contact-activity feed for a deal, derived from its
//! stakeholder records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::classify::{parse_contact_date, ContactMethod};
use crate::domain::deal::Deal;

const METHOD_CYCLE: [ContactMethod; 4] =
    [ContactMethod::Email, ContactMethod::Phone, ContactMethod::VideoCall, ContactMethod::Meeting];

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityRecord {
    pub contact: String,
    pub method: ContactMethod,
    pub date: String,
    pub duration_minutes: u32,
}

/// One activity per stakeholder: method cycles through the contact methods
/// by index, duration alternates 45/30 minutes, date is the stakeholder's
/// last contact. Sorted most recent first; the stable sort keeps the
/// original relative order on equal dates and sinks unparseable dates to
/// the end.
pub fn build_activities(deal: &Deal) -> Vec<ActivityRecord> {
    let mut keyed: Vec<(Option<NaiveDate>, ActivityRecord)> = deal
        .stakeholder_details
        .iter()
        .enumerate()
        .map(|(index, stakeholder)| {
            let record = ActivityRecord {
                contact: stakeholder.name.clone(),
                method: METHOD_CYCLE[index % METHOD_CYCLE.len()],
                date: stakeholder.last_contact.clone(),
                duration_minutes: if index % 2 == 0 { 45 } else { 30 },
            };
            (parse_contact_date(&stakeholder.last_contact), record)
        })
        .collect();

    keyed.sort_by(|(left, _), (right, _)| right.cmp(left));
    keyed.into_iter().map(|(_, record)| record).collect()
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatestActivity {
    pub summary: String,
    pub date: String,
}

/// Head of the activity feed, or the deal's own last-activity fields when
/// no stakeholder details exist.
pub fn latest_activity(deal: &Deal) -> LatestActivity {
    match build_activities(deal).into_iter().next() {
        Some(first) => LatestActivity {
            summary: format!("{} with {}", first.method.label(), first.contact),
            date: first.date,
        },
        None => LatestActivity {
            summary: deal.last_activity.clone(),
            date: deal.next_step_date.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    use crate::classify::{ContactMethod, RiskLevel};
    use crate::domain::deal::{Deal, DealId, DealType};
    use crate::domain::stakeholder::Stakeholder;

    use super::{build_activities, latest_activity};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
    }

    fn deal_with(stakeholders: Vec<Stakeholder>) -> Deal {
        Deal {
            id: DealId(1),
            company: "Acme Corp".to_string(),
            deal_type: DealType::Renewal,
            value: Decimal::from(50_000),
            stage: "Proposal".to_string(),
            progress: 50,
            owner: "Sam Reed".to_string(),
            next_step: "Demo".to_string(),
            next_step_date: date(2025, 1, 15),
            blockers: vec![],
            stakeholder_count: stakeholders.len() as u32,
            last_activity: "2 days ago".to_string(),
            risk_level: RiskLevel::Low,
            close_date: date(2025, 2, 1),
            probability: 70,
            stakeholder_details: stakeholders,
        }
    }

    #[test]
    fn sorts_descending_by_contact_date() {
        let deal = deal_with(vec![
            Stakeholder::new("A", "Engineer", "2025-01-08", 50),
            Stakeholder::new("B", "Analyst", "2025-01-10", 50),
            Stakeholder::new("C", "Manager", "2025-01-06", 50),
        ]);

        let records = build_activities(&deal);
        let dates: Vec<&str> = records.iter().map(|record| record.date.as_str()).collect();
        assert_eq!(dates, vec!["2025-01-10", "2025-01-08", "2025-01-06"]);
    }

    #[test]
    fn method_cycles_and_duration_alternates_by_original_index() {
        let deal = deal_with(vec![
            Stakeholder::new("A", "Engineer", "2025-01-01", 50),
            Stakeholder::new("B", "Analyst", "2025-01-01", 50),
            Stakeholder::new("C", "Manager", "2025-01-01", 50),
            Stakeholder::new("D", "Counsel", "2025-01-01", 50),
            Stakeholder::new("E", "Lead", "2025-01-01", 50),
        ]);

        let feed = build_activities(&deal);
        // Equal dates: stable sort preserves input order.
        let methods: Vec<ContactMethod> = feed.iter().map(|record| record.method).collect();
        assert_eq!(
            methods,
            vec![
                ContactMethod::Email,
                ContactMethod::Phone,
                ContactMethod::VideoCall,
                ContactMethod::Meeting,
                ContactMethod::Email,
            ]
        );
        let durations: Vec<u32> = feed.iter().map(|record| record.duration_minutes).collect();
        assert_eq!(durations, vec![45, 30, 45, 30, 45]);
    }

    #[test]
    fn unparseable_dates_sort_last() {
        let deal = deal_with(vec![
            Stakeholder::new("A", "Engineer", "garbage", 50),
            Stakeholder::new("B", "Analyst", "2025-01-10", 50),
        ]);

        let feed = build_activities(&deal);
        assert_eq!(feed[0].contact, "B");
        assert_eq!(feed[1].contact, "A");
    }

    #[test]
    fn latest_activity_summarizes_feed_head() {
        let deal = deal_with(vec![
            Stakeholder::new("Alex Brown", "VP Procurement", "2025-01-08", 80),
            Stakeholder::new("Nina Patel", "Legal Counsel", "2025-01-06", 60),
        ]);

        let latest = latest_activity(&deal);
        assert_eq!(latest.summary, "Email with Alex Brown");
        assert_eq!(latest.date, "2025-01-08");
    }

    #[test]
    fn latest_activity_falls_back_to_deal_fields() {
        let deal = deal_with(vec![]);
        let latest = latest_activity(&deal);
        assert_eq!(latest.summary, "2 days ago");
        assert_eq!(latest.date, "2025-01-15");
    }
}
