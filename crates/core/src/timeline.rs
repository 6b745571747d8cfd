//! Fixed buyer-journey and sales-process pipelines plus the stage-completion
//! arithmetic behind the deal timeline view.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineStage {
    pub key: String,
    pub label: String,
    pub date: String,
    pub expected_days: u32,
    pub actual_days: u32,
    pub value: u8,
}

fn stage(key: &str, label: &str, date: &str, expected: u32, actual: u32, value: u8) -> PipelineStage {
    PipelineStage {
        key: key.to_string(),
        label: label.to_string(),
        date: date.to_string(),
        expected_days: expected,
        actual_days: actual,
        value,
    }
}

pub const BUYER_STAGE_COUNT: usize = 5;
pub const SALES_STAGE_COUNT: usize = 6;

const SALES_STAGE_LABELS: [&str; SALES_STAGE_COUNT] = [
    "Prospecting",
    "Qualification",
    "Solution",
    "Proposal",
    "Negotiation",
    "No Decision / Won/Lost",
];

/// Five-stage buyer journey with the expected vs actual durations shown on
/// the connectors between nodes.
pub fn buyer_journey() -> Vec<PipelineStage> {
    vec![
        stage("now", "Now", "11/5/21", 48, 42, 6),
        stage("evaluate", "Evaluate", "28/6/21", 32, 30, 5),
        stage("explore", "Explore", "30/7/21", 28, 28, 2),
        stage("decision", "Decision", "27/8/21", 24, 24, 3),
        stage("solutions", "Solutions", "20/9/21", 24, 24, 4),
    ]
}

/// Six-stage sales process. The last node merges the "No Decision" and
/// "Won/Lost" terminals into one.
pub fn sales_process() -> Vec<PipelineStage> {
    vec![
        stage("prospecting", "Prospecting", "11/5/21", 48, 40, 10),
        stage("qualification", "Qualification", "28/6/21", 32, 31, 30),
        stage("solution", "Solution", "30/7/21", 28, 25, 50),
        stage("proposal", "Proposal", "27/8/21", 24, 24, 65),
        stage("negotiation", "Negotiation", "20/9/21", 11, 11, 85),
        stage("no-decision-won-lost", "No Decision / Won/Lost", "1/10/21", 0, 0, 95),
    ]
}

/// Stages completed for a given overall progress: round-half-up of
/// `progress/100 * stage_count`, clamped to the pipeline length.
pub fn completed_stage_count(progress: u8, stage_count: usize) -> usize {
    let raw = (f64::from(progress) / 100.0 * stage_count as f64).round() as usize;
    raw.min(stage_count)
}

pub fn buyer_journey_completion(progress: u8) -> usize {
    completed_stage_count(progress, BUYER_STAGE_COUNT)
}

/// Buyer stage `index` (0-based) is completed iff it falls strictly below
/// the completion count.
pub fn is_buyer_stage_completed(index: usize, progress: u8) -> bool {
    index < buyer_journey_completion(progress)
}

/// Index of the deal's named stage within the fixed sales sequence. Unknown
/// labels complete nothing; any label naming a terminal outcome ("no
/// decision" or "won/lost", case-insensitive) forces the merged last node.
pub fn sales_process_completion(stage_label: &str) -> Option<usize> {
    let lowered = stage_label.to_ascii_lowercase();
    if lowered.contains("no decision") || lowered.contains("won/lost") {
        return Some(SALES_STAGE_COUNT - 1);
    }
    SALES_STAGE_LABELS.iter().position(|label| *label == stage_label)
}

/// Sales stage `index` is completed iff it sits at or before the current
/// stage index.
pub fn is_sales_stage_completed(index: usize, stage_label: &str) -> bool {
    sales_process_completion(stage_label).is_some_and(|current| index <= current)
}

pub fn total_expected_days(stages: &[PipelineStage]) -> u32 {
    stages.iter().map(|stage| stage.expected_days).sum()
}

pub fn buyer_time_invested_days() -> u32 {
    total_expected_days(&buyer_journey())
}

/// Carried from the legacy display: the sales-process total is halved and
/// relabeled as hours.
pub fn sales_time_invested_hours() -> f64 {
    f64::from(total_expected_days(&sales_process())) * 0.5
}
