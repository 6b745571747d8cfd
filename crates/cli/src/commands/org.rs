use chrono::NaiveDate;
use dealscope_core::fixtures::sample_org_chart;
use serde_json::json;

use crate::commands::CommandResult;

pub fn run(today: NaiveDate) -> CommandResult {
    let chart = sample_org_chart();
    let analysis = chart.analyze(today);

    let roots: Vec<&str> = chart.roots().iter().map(|member| member.name.as_str()).collect();
    let reachout: Vec<&str> = chart
        .members()
        .iter()
        .filter(|member| member.needs_reachout(today))
        .map(|member| member.name.as_str())
        .collect();

    CommandResult::success(
        "org",
        json!({
            "members": chart.members().len(),
            "roots": roots,
            "max_level": chart.max_level(),
            "analysis": analysis,
            "reachout": reachout,
        }),
    )
}
