use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use uuid::Uuid;

use crate::common::DomainResult;
use crate::domains::path_planning::aggregate::types::{Cell, Path, PlanSet, Scenario};

pub const NO_PATH: &str = "No path found";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// Scenario summary followed by one line per robot, in robot order.
pub fn render_text(scenario: &Scenario, plans: &PlanSet) -> String {
    let mut out = String::new();
    let positions: Vec<String> = scenario.robots.iter().map(|r| r.start.to_string()).collect();

    // Writing to a String cannot fail.
    let _ = writeln!(out, "Room Dimensions: {} {}", scenario.rows(), scenario.cols());
    let _ = writeln!(out, "Number of robots: {}", scenario.robots.len());
    let _ = writeln!(out, "Robot positions: [{}]", positions.join(", "));
    let _ = writeln!(out, "Rendezvous/Meeting point: {}", scenario.rendezvous);
    let _ = writeln!(out);
    for plan in plans {
        let _ = writeln!(out, "{}: {}", plan.label, render_path(&plan.path));
    }
    out
}

pub fn render_path(path: &Path) -> String {
    if path.is_empty() {
        NO_PATH.to_string()
    } else {
        path.to_string()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RobotReport {
    pub label: String,
    pub start: Cell,
    pub reachable: bool,
    pub steps: usize,
    pub path: Path,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanReport {
    pub run_id: Uuid,
    pub rows: usize,
    pub cols: usize,
    pub rendezvous: Cell,
    pub robots: Vec<RobotReport>,
}

impl PlanReport {
    pub fn new(scenario: &Scenario, plans: &PlanSet) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            rows: scenario.rows(),
            cols: scenario.cols(),
            rendezvous: scenario.rendezvous,
            robots: plans
                .iter()
                .map(|p| RobotReport {
                    label: p.label.clone(),
                    start: p.start,
                    reachable: p.is_reachable(),
                    steps: p.path.steps(),
                    path: p.path.clone(),
                })
                .collect(),
        }
    }
}

pub fn render_json(scenario: &Scenario, plans: &PlanSet) -> DomainResult<String> {
    Ok(serde_json::to_string_pretty(&PlanReport::new(scenario, plans))?)
}

pub fn render(format: ReportFormat, scenario: &Scenario, plans: &PlanSet) -> DomainResult<String> {
    match format {
        ReportFormat::Text => Ok(render_text(scenario, plans)),
        ReportFormat::Json => render_json(scenario, plans),
    }
}
